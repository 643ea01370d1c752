pub const FINNHUB_SEARCH_URL: &str = "https://finnhub.io/api/v1/search";
pub const FINNHUB_QUOTE_URL: &str = "https://finnhub.io/api/v1/quote";
pub const EXCHANGE_RATES_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const BASE_CURRENCY: &str = "USD";

pub const API_KEY_VAR: &str = "FINNHUB_API_KEY";
pub const SEARCH_URL_VAR: &str = "FINNHUB_SEARCH_URL";
pub const QUOTE_URL_VAR: &str = "FINNHUB_QUOTE_URL";
pub const RATES_URL_VAR: &str = "EXCHANGE_RATES_URL";
pub const TIMEOUT_VAR: &str = "HTTP_TIMEOUT_SECS";
