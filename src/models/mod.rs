pub mod currencies;
pub mod quotes;
pub mod search;
