mod client;
mod devices;
mod pipeline;
mod search;
mod strategy;

pub use pipeline::scrape;
