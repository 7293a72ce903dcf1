use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemItem {
    pub name: String,
    pub count: Option<u64>,
    /// Link into the MAUDE case search for this problem.
    pub deep_link: Option<String>,
}
