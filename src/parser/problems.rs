use crate::domain::{ProblemCategory, ProblemItem};
use crate::extensions::element_ext::{Closest, ElementText};
use crate::extensions::url_ext::QueryParams;
use crate::parser::count::parse_count;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Path fragment of the MAUDE adverse event database that problem links point into.
const CASE_DATABASE_MARKER: &str = "cfmaude";

/// Collects the problems of one category from a device detail page.
///
/// Problems are anchors into MAUDE tagged with the category's query key. Their count comes from the surrounding
/// table row. A problem name is only listed once, the first anchor wins.
pub fn collect_problems(document: &Html, page_url: &Url, category: ProblemCategory) -> Vec<ProblemItem> {
    let Ok(anchors) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    document
        .select(&anchors)
        .filter_map(|anchor| problem_item(anchor, page_url, category))
        .filter(|item| seen.insert(item.name.clone()))
        .collect()
}

fn problem_item(anchor: ElementRef, page_url: &Url, category: ProblemCategory) -> Option<ProblemItem> {
    let href = anchor.value().attr("href")?;
    if !href.to_lowercase().contains(CASE_DATABASE_MARKER) {
        return None;
    }

    let deep_link = page_url.join(href).ok()?;
    if !deep_link.has_query_param(category.marker()) {
        return None;
    }

    let name = anchor.stripped_text();
    if name.is_empty() {
        return None;
    }

    Some(ProblemItem {
        name,
        count: row_count(anchor),
        deep_link: Some(deep_link.to_string()),
    })
}

/// Count from the anchor's table row: the second or third cell if either holds digits, otherwise the whole row.
fn row_count(anchor: ElementRef) -> Option<u64> {
    let row = anchor.closest("tr")?;
    let cells = Selector::parse("td, th").ok()?;

    row.select(&cells)
        .skip(1)
        .take(2)
        .find_map(|cell| parse_count(&cell.stripped_text()))
        .or_else(|| parse_count(&row.joined_text(" ")))
}
