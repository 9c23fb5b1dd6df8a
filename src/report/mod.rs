pub mod filter;
pub mod freshness;

pub use filter::filter_by_repos;
pub use freshness::{classify, Freshness, DEFAULT_STALE_AFTER_DAYS};
