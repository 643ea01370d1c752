//! Look up a company's ticker symbol, fetch its current quote and print the
//! prices converted into a requested currency.
//!
//! The work is a fixed pipeline of three HTTP stages followed by a pure
//! conversion and rendering step:
//!
//! - [`components::symbols`] resolves a company name via the search endpoint
//! - [`components::quotes`] fetches current/high/low/open/previous-close
//! - [`components::rates`] loads USD-relative exchange rates and converts
//! - [`components::report`] formats the result table
//!
//! All network access goes through [`components::fetcher::JsonFetcher`], so
//! the endpoints can be swapped for canned responses.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod models;

pub use crate::app::{run, QuoteRequest, USAGE};
pub use crate::error::{AppError, Stage};
