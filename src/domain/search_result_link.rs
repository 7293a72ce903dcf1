use url::Url;

/// A device row found on a TPLC search results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultLink {
    pub url: Url,
    pub name: String,
}
