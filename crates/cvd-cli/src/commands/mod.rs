pub mod historical;
pub mod scrape;
