use log::{debug, info};
use thiserror::Error;

use super::fetcher::{decode, endpoint_of, with_query, FetchError, JsonFetcher};
use crate::config::settings::Settings;
use crate::models::search::{SearchResponse, SearchResult};

#[derive(Debug, Error)]
pub enum SymbolError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("no results found for company: {0}")]
    NoResults(String),
}

/// Looks the company up by free text and takes the first hit as-is. No
/// ranking is applied, so the first entry wins even when a later one is a
/// closer match.
pub async fn resolve_symbol<F>(
    fetcher: &F,
    settings: &Settings,
    company: &str,
) -> Result<SearchResult, SymbolError>
where
    F: JsonFetcher + ?Sized,
{
    let url = with_query(
        &settings.search_url,
        &[("q", company), ("token", settings.api_key.as_str())],
    );

    debug!("symbol search for {:?} at {}", company, endpoint_of(&url));

    let body = fetcher.get_json(&url).await?;
    let response: SearchResponse = decode(&body)?;
    let total = response.result.len();

    let found = response
        .into_first()
        .ok_or_else(|| SymbolError::NoResults(company.to_string()))?;

    info!(
        "resolved {:?} to {} ({}), {} candidate(s)",
        company, found.symbol, found.description, total
    );

    Ok(found)
}
