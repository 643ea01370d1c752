pub mod fetcher;
pub mod quotes;
pub mod rates;
pub mod report;
pub mod symbols;
