use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

const CONTENT_SNIPPET_LEN: usize = 200;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("HTTP {status} from {endpoint}")]
    Status { status: u16, endpoint: String },

    #[error("Response parsing error: {0}, content: {1}")]
    Decode(String, String),
}

/// GET a URL and hand back the decoded JSON body. The pipeline only talks
/// to the network through this trait.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn get_json(&self, url: &Url) -> Result<Value, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(HttpFetcher { client })
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn get_json(&self, url: &Url) -> Result<Value, FetchError> {
        let endpoint = endpoint_of(url);

        debug!("GET {}", endpoint);

        // without_url() keeps the query-string token out of error messages
        let res = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.without_url().to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                endpoint,
            });
        }

        let body = res
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.without_url().to_string()))?;

        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string(), snippet(&body)))
    }
}

/// Decodes a fetched body into a fixed-shape record.
pub fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, FetchError> {
    T::deserialize(value).map_err(|e| FetchError::Decode(e.to_string(), snippet(&value.to_string())))
}

/// Appends percent-encoded query parameters to an endpoint.
pub fn with_query(base: &Url, params: &[(&str, &str)]) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().extend_pairs(params);
    url
}

/// Scheme, host and path only.
pub fn endpoint_of(url: &Url) -> String {
    let mut endpoint = url.clone();
    endpoint.set_query(None);
    endpoint.to_string()
}

fn snippet(content: &str) -> String {
    content.chars().take(CONTENT_SNIPPET_LEN).collect()
}
