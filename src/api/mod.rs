mod health;
mod routes;
mod scrape;
mod types;

pub use routes::create_router;
