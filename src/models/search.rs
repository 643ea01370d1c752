use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub symbol: String,
    #[serde(default)]
    pub description: String,
}

/// Envelope of the symbol search endpoint. `count` and the other item
/// fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub result: Vec<SearchResult>,
}

impl SearchResponse {
    pub fn into_first(self) -> Option<SearchResult> {
        self.result.into_iter().next()
    }
}
