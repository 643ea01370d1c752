use std::io::Write;

use log::debug;

use crate::components::fetcher::JsonFetcher;
use crate::components::quotes::fetch_quote;
use crate::components::rates::{convert_quote, fetch_rates};
use crate::components::report::render_report;
use crate::components::symbols::resolve_symbol;
use crate::config::endpoints::BASE_CURRENCY;
use crate::config::settings::Settings;
use crate::error::AppError;

pub const USAGE: &str = "Please provide a company name and currency.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub company: String,
    pub currency: String,
}

impl QuoteRequest {
    /// `None` when either part is blank. The currency code is upper-cased.
    pub fn new(company: &str, currency: &str) -> Option<Self> {
        let company = company.trim();
        let currency = currency.trim();

        if company.is_empty() || currency.is_empty() {
            return None;
        }

        Some(QuoteRequest {
            company: company.to_string(),
            currency: currency.to_ascii_uppercase(),
        })
    }
}

/// resolve -> quote -> rates -> convert -> print. The first failing stage
/// aborts everything after it.
pub async fn run<F, W>(
    fetcher: &F,
    settings: &Settings,
    request: &QuoteRequest,
    out: &mut W,
) -> Result<(), AppError>
where
    F: JsonFetcher + ?Sized,
    W: Write,
{
    let found = resolve_symbol(fetcher, settings, &request.company).await?;

    let quote = fetch_quote(fetcher, settings, &found.symbol)
        .await
        .map_err(AppError::Quote)?;

    let rates = fetch_rates(fetcher, settings)
        .await
        .map_err(AppError::Rates)?;

    let converted = convert_quote(&quote, &rates, &request.currency);

    if converted.fallback {
        writeln!(
            out,
            "Currency {} not found. Using {} instead.",
            request.currency, BASE_CURRENCY
        )?;
    }

    debug!("rendering {} in {}", found.symbol, converted.currency);

    write!(
        out,
        "{}",
        render_report(&found.symbol, &converted.quote, &converted.currency)
    )?;

    Ok(())
}
