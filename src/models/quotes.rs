use serde::{Deserialize, Serialize};

/// Snapshot returned by the quote endpoint. Prices are in USD at source.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "c")]
    pub current: f64,
    #[serde(rename = "h")]
    pub high: f64,
    #[serde(rename = "l")]
    pub low: f64,
    #[serde(rename = "o")]
    pub open: f64,
    #[serde(rename = "pc")]
    pub previous_close: f64,
}

impl Quote {
    /// Applies `f` to every price field.
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Quote {
        Quote {
            current: f(self.current),
            high: f(self.high),
            low: f(self.low),
            open: f(self.open),
            previous_close: f(self.previous_close),
        }
    }

    /// Rows in display order, paired with their report labels.
    pub fn rows(&self) -> [(&'static str, f64); 5] {
        [
            ("Current Price", self.current),
            ("High Price of the Day", self.high),
            ("Low Price of the Day", self.low),
            ("Open Price of the Day", self.open),
            ("Previous Close Price", self.previous_close),
        ]
    }
}
