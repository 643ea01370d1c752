use std::fmt;

use thiserror::Error;

use crate::components::fetcher::FetchError;
use crate::components::symbols::SymbolError;
use crate::config::settings::ConfigError;

/// Network-dependent steps of the pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Symbol,
    Quote,
    Rates,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Symbol => "symbol",
            Stage::Quote => "quote",
            Stage::Rates => "rates",
        };

        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error fetching stock symbol: {0}")]
    Symbol(#[from] SymbolError),

    #[error("Error fetching stock quote: {0}")]
    Quote(#[source] FetchError),

    #[error("Error fetching exchange rates: {0}")]
    Rates(#[source] FetchError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[source] FetchError),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    pub fn stage(&self) -> Option<Stage> {
        match self {
            AppError::Symbol(_) => Some(Stage::Symbol),
            AppError::Quote(_) => Some(Stage::Quote),
            AppError::Rates(_) => Some(Stage::Rates),
            AppError::Config(_) | AppError::Client(_) | AppError::Output(_) => None,
        }
    }
}
