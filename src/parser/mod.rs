mod count;
mod device_name;
mod device_page;
mod links;
mod problems;

pub use device_page::parse_device_page;
pub use links::extract_device_links;
