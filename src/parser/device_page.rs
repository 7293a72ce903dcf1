use crate::domain::{DeviceResult, ProblemCategory};
use crate::parser::device_name::resolve_device_name;
use crate::parser::problems::collect_problems;
use scraper::Html;
use tracing::{debug, instrument};
use url::Url;

/// Parses a TPLC device detail page. Missing markup degrades to empty lists and a fallback name, it never fails.
#[instrument(skip_all, fields(url = %url))]
pub fn parse_device_page(html: &str, url: &Url, fallback_name: Option<&str>) -> DeviceResult {
    let document = Html::parse_document(html);

    let device_name = resolve_device_name(&document, fallback_name);
    let device_problems = collect_problems(&document, url, ProblemCategory::Device);
    let patient_problems = collect_problems(&document, url, ProblemCategory::Patient);
    debug!(
        device_name = %device_name,
        "Parsed {} device problems and {} patient problems",
        device_problems.len(),
        patient_problems.len()
    );

    DeviceResult {
        device_name,
        device_url: url.to_string(),
        device_problems,
        patient_problems,
    }
}
