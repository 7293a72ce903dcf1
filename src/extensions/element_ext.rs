use scraper::ElementRef;

pub trait ElementText {
    /// Concatenates the trimmed text nodes below this element, skipping blank ones.
    fn joined_text(&self, separator: &str) -> String;

    fn stripped_text(&self) -> String {
        self.joined_text("")
    }
}

impl ElementText for ElementRef<'_> {
    fn joined_text(&self, separator: &str) -> String {
        self.text().map(str::trim).filter(|s| !s.is_empty()).collect::<Vec<_>>().join(separator)
    }
}

pub trait Closest<'a> {
    /// Nearest ancestor element with the given tag name.
    fn closest(&self, tag: &str) -> Option<ElementRef<'a>>;
}

impl<'a> Closest<'a> for ElementRef<'a> {
    fn closest(&self, tag: &str) -> Option<ElementRef<'a>> {
        self.ancestors().filter_map(ElementRef::wrap).find(|element| element.value().name() == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use scraper::{Html, Selector};

    fn first<'a>(html: &'a Html, css: &str) -> ElementRef<'a> {
        let selector = Selector::parse(css).unwrap();
        html.select(&selector).next().unwrap()
    }

    #[rstest]
    #[case("<p> Infusion <b> Pump </b>\n</p>", "", "InfusionPump")]
    #[case("<p> Infusion <b> Pump </b>\n</p>", " ", "Infusion Pump")]
    #[case("<p>  </p>", " ", "")]
    fn joined_text_trims_and_skips_blank_nodes(#[case] fragment: &str, #[case] separator: &str, #[case] expected: &str) {
        let html = Html::parse_fragment(fragment);

        assert_eq!(first(&html, "p").joined_text(separator), expected);
    }

    #[test]
    fn closest_finds_the_enclosing_row() {
        let html = Html::parse_document("<table><tr id='row'><td><span><a href='#'>x</a></span></td></tr></table>");

        let row = first(&html, "a").closest("tr");

        assert_eq!(row.and_then(|r| r.value().attr("id")), Some("row"));
    }

    #[test]
    fn closest_returns_none_outside_a_row() {
        let html = Html::parse_document("<div><a href='#'>x</a></div>");

        assert!(first(&html, "a").closest("tr").is_none());
    }
}
