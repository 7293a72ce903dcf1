use crate::extensions::element_ext::ElementText;
use scraper::{Html, Selector};

/// Every TPLC page carries this phrase in its title banner, so it never names a device.
const PAGE_TITLE_PHRASE: &str = "total product life cycle";

pub const UNKNOWN_DEVICE: &str = "Unknown Device";

/// Resolves the device name of a detail page.
///
/// Tries a labeled table row first, then bold text, then the first `h1`/`h2`/`h3`, then `fallback`, and finally
/// [`UNKNOWN_DEVICE`].
pub fn resolve_device_name(document: &Html, fallback: Option<&str>) -> String {
    name_from_table(document)
        .or_else(|| name_from_bold_text(document))
        .or_else(|| name_from_headings(document))
        .or_else(|| fallback.map(str::to_string))
        .unwrap_or_else(|| UNKNOWN_DEVICE.to_string())
}

/// Looks for rows like `| Device Name | Injector And Syringe, Angiographic |`.
pub fn name_from_table(document: &Html) -> Option<String> {
    let rows = Selector::parse("tr").ok()?;
    let cell_selector = Selector::parse("th, td").ok()?;

    document.select(&rows).find_map(|row| {
        let cells = row.select(&cell_selector).collect::<Vec<_>>();
        cells.windows(2).find_map(|pair| {
            let label = pair[0].joined_text(" ").to_lowercase();
            if !(label.contains("device name") || label == "device") {
                return None;
            }
            let name = pair[1].joined_text(" ");
            (name.chars().count() > 2).then_some(name)
        })
    })
}

pub fn name_from_bold_text(document: &Html) -> Option<String> {
    let bold = Selector::parse("b, strong").ok()?;

    document.select(&bold).map(|element| element.stripped_text()).find(|text| {
        let length = text.chars().count();
        length > 3 && length < 200 && !mentions_page_title(text)
    })
}

pub fn name_from_headings(document: &Html) -> Option<String> {
    ["h1", "h2", "h3"].iter().find_map(|tag| {
        let selector = Selector::parse(tag).ok()?;
        let heading = document.select(&selector).next()?;
        let text = heading.stripped_text();
        (!text.is_empty() && !mentions_page_title(&text)).then_some(text)
    })
}

fn mentions_page_title(text: &str) -> bool {
    text.to_lowercase().contains(PAGE_TITLE_PHRASE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn table_row_wins_over_bold_text() {
        let document = Html::parse_document(
            r#"<b>Bold Device Name</b>
               <table><tr><td>Device Name</td><td>Injector And Syringe, Angiographic</td></tr></table>"#,
        );

        assert_eq!(resolve_device_name(&document, Some("Fallback")), "Injector And Syringe, Angiographic");
    }

    #[rstest]
    #[case("<tr><th>Device</th><td>Catheter, Balloon</td></tr>", Some("Catheter, Balloon"))]
    #[case("<tr><td> Device Name: </td><td>Stent, Coronary</td></tr>", Some("Stent, Coronary"))]
    #[case("<tr><td>Device Class</td><td>2</td></tr>", None)]
    #[case("<tr><td>Device Name</td></tr>", None)]
    #[case("<tr><td>Device Name</td><td>AB</td></tr><tr><td>Device</td><td>Pump</td></tr>", Some("Pump"))]
    fn name_from_table_reads_the_cell_after_the_label(#[case] rows: &str, #[case] expected: Option<&str>) {
        let document = Html::parse_document(&format!("<table>{rows}</table>"));

        assert_eq!(name_from_table(&document).as_deref(), expected);
    }

    #[rstest]
    #[case("<b>TPLC - Total Product Life Cycle</b><strong>Pump, Infusion</strong>", Some("Pump, Infusion"))]
    #[case("<b>abc</b><b>Long enough</b>", Some("Long enough"))]
    #[case("<b>   </b>", None)]
    fn name_from_bold_text_skips_short_and_title_text(#[case] body: &str, #[case] expected: Option<&str>) {
        let document = Html::parse_document(body);

        assert_eq!(name_from_bold_text(&document).as_deref(), expected);
    }

    #[test]
    fn name_from_bold_text_rejects_overlong_text() {
        let document = Html::parse_document(&format!("<b>{}</b>", "x".repeat(200)));

        assert_eq!(name_from_bold_text(&document), None);
    }

    #[rstest]
    #[case("<h1>Total Product Life Cycle</h1><h2>Pump, Infusion</h2>", Some("Pump, Infusion"))]
    #[case("<h3>Only Three</h3><h1>Only One</h1>", Some("Only One"))]
    #[case("<h1>TPLC Total Product Life Cycle</h1><h2>Total Product Life Cycle</h2>", None)]
    fn name_from_headings_checks_h1_then_h2_then_h3(#[case] body: &str, #[case] expected: Option<&str>) {
        let document = Html::parse_document(body);

        assert_eq!(name_from_headings(&document).as_deref(), expected);
    }

    #[rstest]
    #[case(Some("Pump, Infusion"), "Pump, Infusion")]
    #[case(None, UNKNOWN_DEVICE)]
    fn resolve_device_name_falls_back_when_nothing_matches(#[case] fallback: Option<&str>, #[case] expected: &str) {
        let document = Html::parse_document("<p>nothing here</p>");

        assert_eq!(resolve_device_name(&document, fallback), expected);
    }
}
