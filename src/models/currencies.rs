use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// USD-relative multipliers keyed by three-letter currency code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates {
    #[serde(default)]
    pub base: Option<String>,
    pub rates: HashMap<String, f64>,
}

impl ExchangeRates {
    pub fn rate(&self, currency: &str) -> Option<f64> {
        self.rates.get(currency).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl FromIterator<(String, f64)> for ExchangeRates {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        ExchangeRates {
            base: None,
            rates: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_exchangerate_api_payload() {
        let mock = json!({
            "provider": "https://www.exchangerate-api.com",
            "base": "USD",
            "date": "2024-06-01",
            "time_last_updated": 1717200001,
            "rates": {
                "USD": 1,
                "EUR": 0.921,
                "JPY": 157.2,
                "GBP": 0.785
            }
        });

        let rates: ExchangeRates = serde_json::from_value(mock).unwrap();

        assert_eq!(rates.base.as_deref(), Some("USD"));
        assert_eq!(rates.len(), 4);
        assert_eq!(rates.rate("USD"), Some(1.0));
        assert_eq!(rates.rate("EUR"), Some(0.921));
        assert_eq!(rates.rate("eur"), None);
        assert_eq!(rates.rate("ZZZ"), None);
    }

    #[test]
    fn rates_without_base_still_decode() {
        let rates: ExchangeRates = serde_json::from_value(json!({ "rates": { "EUR": 0.92 } })).unwrap();
        assert_eq!(rates.base, None);
        assert_eq!(rates.rate("EUR"), Some(0.92));
    }

    #[test]
    fn rates_key_is_required() {
        let res = serde_json::from_value::<ExchangeRates>(json!({ "result": "error" }));
        assert!(res.is_err());
    }
}
