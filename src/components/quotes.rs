use log::debug;

use super::fetcher::{decode, endpoint_of, with_query, FetchError, JsonFetcher};
use crate::config::settings::Settings;
use crate::models::quotes::Quote;

/// Fields come back verbatim. Unknown symbols usually yield an all-zero
/// quote, which is passed through untouched.
pub async fn fetch_quote<F>(fetcher: &F, settings: &Settings, symbol: &str) -> Result<Quote, FetchError>
where
    F: JsonFetcher + ?Sized,
{
    let url = with_query(
        &settings.quote_url,
        &[("symbol", symbol), ("token", settings.api_key.as_str())],
    );

    debug!("quote for {} at {}", symbol, endpoint_of(&url));

    let body = fetcher.get_json(&url).await?;
    let quote: Quote = decode(&body)?;

    debug!("{} quote: {:?}", symbol, quote);

    Ok(quote)
}
