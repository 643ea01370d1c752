use std::path::PathBuf;

use clap::Parser;
use stock_quote::QuoteRequest;

/// Resolve a company name to its ticker and print today's quote in the
/// requested currency.
///
/// Prices come from Finnhub in USD and are converted with the current
/// USD exchange-rate table. An unknown currency code falls back to USD.
#[derive(Parser, Debug, Clone)]
#[command(name = "stock-quote", version, about)]
pub(crate) struct Args {
    /// Company name to search for, e.g. "Apple"
    pub(crate) company: Option<String>,

    /// Currency code for the report, e.g. EUR
    pub(crate) currency: Option<String>,

    /// Read settings from this file instead of ./.env
    #[arg(long)]
    pub(crate) env_file: Option<PathBuf>,

    /// Debug logging (RUST_LOG still takes precedence)
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl Args {
    /// `None` means the usage message should be printed instead.
    pub(crate) fn request(&self) -> Option<QuoteRequest> {
        match (&self.company, &self.currency) {
            (Some(company), Some(currency)) => QuoteRequest::new(company, currency),
            _ => None,
        }
    }
}
