mod device_result;
mod problem_category;
mod problem_item;
pub mod scrape_query;
mod search_result_link;

pub use device_result::DeviceResult;
pub use problem_category::ProblemCategory;
pub use problem_item::ProblemItem;
pub use scrape_query::{QueryError, ScrapeQuery};
pub use search_result_link::SearchResultLink;
