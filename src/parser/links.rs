use crate::domain::SearchResultLink;
use crate::extensions::element_ext::ElementText;
use crate::extensions::url_ext::QueryParams;
use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::trace;
use url::Url;

/// Script serving both the TPLC search form and the device detail pages.
pub const DETAIL_SCRIPT: &str = "tplc.cfm";

/// Finds the device detail links on a search results page.
///
/// An anchor qualifies when its resolved path ends with [`DETAIL_SCRIPT`] and it carries an `id` query parameter, both
/// compared case-insensitively. The first anchor for a given URL wins.
pub fn extract_device_links(html: &str, base_url: &Url) -> Vec<SearchResultLink> {
    let document = Html::parse_document(html);
    let Ok(anchors) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    document
        .select(&anchors)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            let url = base_url.join(href).ok()?;
            if !url.path().to_lowercase().ends_with(DETAIL_SCRIPT) || !url.has_query_param_ignore_case("id") {
                trace!(href, "Skipping anchor, not a device link");
                return None;
            }

            let name = anchor.stripped_text();
            if name.is_empty() {
                return None;
            }
            Some(SearchResultLink { url, name })
        })
        .filter(|link| seen.insert(link.url.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn base() -> Url {
        Url::parse("https://www.accessdata.fda.gov/scripts/cdrh/cfdocs/cfTPLC/tplc.cfm").unwrap()
    }

    fn link(url: &str, name: &str) -> SearchResultLink {
        SearchResultLink {
            url: Url::parse(url).unwrap(),
            name: name.to_string(),
        }
    }

    #[test]
    fn extract_device_links_returns_qualifying_links_in_order() {
        let html = include_str!("../../tests/resources/search_results.html");

        let links = extract_device_links(html, &base());

        assert_eq!(
            links,
            vec![
                link("https://www.accessdata.fda.gov/scripts/cdrh/cfdocs/cfTPLC/tplc.cfm?id=101", "Pump, Infusion"),
                link("https://www.accessdata.fda.gov/scripts/cdrh/cfdocs/cfTPLC/tplc.cfm?id=202&min_report_year=2020", "Pump, Infusion, Insulin"),
                link("https://www.accessdata.fda.gov/scripts/cdrh/cfdocs/cfTPLC/TPLC.CFM?ID=303", "Pump, Breast, Powered"),
            ]
        );
    }

    #[test]
    fn extract_device_links_deduplicates_by_resolved_url() {
        let html = r#"
            <a href="tplc.cfm?id=5">First name</a>
            <a href="/scripts/cdrh/cfdocs/cfTPLC/tplc.cfm?id=5">Second name</a>
            <a href="../cfTPLC/tplc.cfm?id=5">Third name</a>
        "#;

        let links = extract_device_links(html, &base());

        assert_eq!(links, vec![link("https://www.accessdata.fda.gov/scripts/cdrh/cfdocs/cfTPLC/tplc.cfm?id=5", "First name")]);
    }

    #[test]
    fn extract_device_links_rejects_look_alike_anchors() {
        let html = r#"
            <a href="tplc.cfm?start_search=26">Next page</a>
            <a href="tplc.cfm?id=">Blank id</a>
            <a href="tplc.cfm.bak?id=3">Backup</a>
            <a href="other.cfm?id=3">Other script</a>
            <a href="tplc.cfm?pid=3">Other key</a>
            <a>No href</a>
        "#;

        assert!(extract_device_links(html, &base()).is_empty());
    }

    #[test]
    fn extract_device_links_skips_anchors_without_text() {
        let html = r#"<a href="tplc.cfm?id=8"> <img src="x.png"> </a><a href="tplc.cfm?id=9">Named</a>"#;

        let links = extract_device_links(html, &base());

        assert_eq!(links, vec![link("https://www.accessdata.fda.gov/scripts/cdrh/cfdocs/cfTPLC/tplc.cfm?id=9", "Named")]);
    }

    #[test]
    fn extract_device_links_handles_empty_input() {
        assert!(extract_device_links("", &base()).is_empty());
    }
}
