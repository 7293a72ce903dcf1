use crate::domain::ProblemItem;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceResult {
    pub device_name: String,
    pub device_url: String,
    pub device_problems: Vec<ProblemItem>,
    pub patient_problems: Vec<ProblemItem>,
}
