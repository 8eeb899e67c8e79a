// src/scrape/mod.rs
mod scrape;
pub mod segment;

pub use scrape::acquire_export;
pub use scrape::can_extract;
pub use scrape::extract;
pub use scrape::scrape;
