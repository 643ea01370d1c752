use log::{debug, warn};

use super::fetcher::{decode, endpoint_of, FetchError, JsonFetcher};
use crate::config::endpoints::BASE_CURRENCY;
use crate::config::settings::Settings;
use crate::models::currencies::ExchangeRates;
use crate::models::quotes::Quote;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Converted {
    pub value: f64,
    /// Set when the table has no entry for the currency and `value` is
    /// still in USD.
    pub fallback: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedQuote {
    pub quote: Quote,
    /// Currency the prices are actually expressed in.
    pub currency: String,
    pub fallback: bool,
}

/// The rates endpoint is public; the access token is never sent there.
pub async fn fetch_rates<F>(fetcher: &F, settings: &Settings) -> Result<ExchangeRates, FetchError>
where
    F: JsonFetcher + ?Sized,
{
    debug!("exchange rates at {}", endpoint_of(&settings.rates_url));

    let body = fetcher.get_json(&settings.rates_url).await?;
    let rates: ExchangeRates = decode(&body)?;

    debug!(
        "loaded {} rates (base: {})",
        rates.len(),
        rates.base.as_deref().unwrap_or(BASE_CURRENCY)
    );

    Ok(rates)
}

pub fn convert_currency(value: f64, rates: &ExchangeRates, currency: &str) -> Converted {
    match rates.rate(currency) {
        Some(rate) => Converted {
            value: value * rate,
            fallback: false,
        },
        None => Converted {
            value,
            fallback: true,
        },
    }
}

/// Converts all five prices. A currency missing from the table keeps the
/// USD prices and labels them as such.
pub fn convert_quote(quote: &Quote, rates: &ExchangeRates, currency: &str) -> ConvertedQuote {
    let converted = quote.map(|usd| convert_currency(usd, rates, currency).value);

    if rates.rate(currency).is_none() {
        warn!("currency {} is missing from the rate table, keeping {}", currency, BASE_CURRENCY);

        return ConvertedQuote {
            quote: converted,
            currency: BASE_CURRENCY.to_string(),
            fallback: true,
        };
    }

    ConvertedQuote {
        quote: converted,
        currency: currency.to_string(),
        fallback: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::fetcher::stub::StubFetcher;
    use serde_json::json;

    fn table() -> ExchangeRates {
        vec![
            ("USD".to_string(), 1.0),
            ("EUR".to_string(), 0.92),
            ("JPY".to_string(), 157.2),
        ]
        .into_iter()
        .collect()
    }

    fn sample_quote() -> Quote {
        Quote {
            current: 150.25,
            high: 152.0,
            low: 149.0,
            open: 151.0,
            previous_close: 150.0,
        }
    }

    #[test]
    fn test_convert_present_currency() {
        let rates = table();

        for price in [0.0, 1.0, 150.25, 9_999.99] {
            let eur = convert_currency(price, &rates, "EUR");
            assert_eq!(eur.value, price * 0.92);
            assert!(!eur.fallback);

            let jpy = convert_currency(price, &rates, "JPY");
            assert_eq!(jpy.value, price * 157.2);
        }
    }

    #[test]
    fn test_convert_usd_is_identity() {
        let rates = table();

        for price in [0.01, 150.25, 42_000.5] {
            let usd = convert_currency(price, &rates, "USD");
            assert_eq!(usd.value, price);
            assert!(!usd.fallback);
        }
    }

    #[test]
    fn test_convert_missing_currency_falls_back() {
        let rates = table();

        let res = convert_currency(150.25, &rates, "ZZZ");

        assert_eq!(res.value, 150.25);
        assert!(res.fallback);
    }

    #[test]
    fn test_convert_quote_eur() {
        let converted = convert_quote(&sample_quote(), &table(), "EUR");

        assert_eq!(converted.currency, "EUR");
        assert!(!converted.fallback);
        assert_eq!(converted.quote.current, 150.25 * 0.92);
        assert_eq!(converted.quote.previous_close, 150.0 * 0.92);
    }

    #[test]
    fn test_convert_quote_missing_keeps_usd() {
        let converted = convert_quote(&sample_quote(), &table(), "ZZZ");

        assert_eq!(converted.currency, "USD");
        assert!(converted.fallback);
        assert_eq!(converted.quote, sample_quote());
    }

    #[tokio::test]
    async fn test_fetch_rates_without_token() {
        let settings = Settings::from_lookup(|key| match key {
            "FINNHUB_API_KEY" => Some("test-key".to_string()),
            "EXCHANGE_RATES_URL" => Some("http://stub.local/v4/latest/USD".to_string()),
            _ => None,
        })
        .unwrap();
        let fetcher = StubFetcher::new().with(
            "/v4/latest/USD",
            json!({ "base": "USD", "date": "2024-06-01", "rates": { "USD": 1, "EUR": 0.92 } }),
        );

        let rates = fetch_rates(&fetcher, &settings).await.unwrap();

        assert_eq!(rates.rate("EUR"), Some(0.92));
        assert_eq!(fetcher.requests()[0].query(), None);
    }

    #[tokio::test]
    async fn test_fetch_rates_bad_shape() {
        let settings = Settings::from_lookup(|key| match key {
            "FINNHUB_API_KEY" => Some("test-key".to_string()),
            "EXCHANGE_RATES_URL" => Some("http://stub.local/rates".to_string()),
            _ => None,
        })
        .unwrap();
        let fetcher = StubFetcher::new().with("/rates", json!({ "rates": { "EUR": "0.92" } }));

        let res = fetch_rates(&fetcher, &settings).await;

        assert!(matches!(res, Err(FetchError::Decode(_, _))));
    }
}
