//! Kraken public REST API client.
//!
//! One `GET /0/public/Ticker?pair=<code>` per quote. Kraken addresses pairs by
//! concatenated exchange codes (`XXBTZUSD` for BTC/USD) and reports failures
//! in-band: the response envelope carries an `error` array next to the
//! `result` payload, so HTTP status alone is not enough to tell success from
//! an unknown pair.
use std::collections::HashMap;
use std::time::Duration;

use chrono::Local;
use log::debug;
use reqwest::blocking::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::asset::AssetPair;
use crate::error::QuoteError;
use crate::exchange::Exchange;
use crate::quote::Quote;
use crate::result::Result;

/// Public ticker endpoint.
const TICKER_URL: &str = "https://api.kraken.com/0/public/Ticker";

/// Upper bound on a single ticker request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Marker Kraken includes in its error strings for pairs it does not list.
const UNKNOWN_PAIR_ERROR: &str = "Unknown asset pair";

/// Client for Kraken's public ticker API.
pub struct Kraken {
    http: Client,
    ticker_url: String,
}

/// Top-level ticker response envelope.
#[derive(Debug, Deserialize)]
struct TickerResponse {
    #[serde(default)]
    error: Vec<String>,
    result: Option<HashMap<String, TickerEntry>>,
}

/// Price fields for a single pair.
///
/// Kraken encodes prices as strings inside arrays: `a`, `b` and `c` carry the
/// price at index 0, while `l` and `h` carry today's value at index 0 and the
/// 24-hour value at index 1. Remaining envelope fields are ignored.
#[derive(Debug, Deserialize)]
struct TickerEntry {
    a: Vec<String>,
    b: Vec<String>,
    c: Vec<String>,
    l: Vec<String>,
    h: Vec<String>,
}

impl Kraken {
    /// Creates a client against the public Kraken API.
    pub fn new() -> Result<Self> {
        Self::with_ticker_url(TICKER_URL)
    }

    /// Creates a client against an alternative ticker endpoint.
    pub fn with_ticker_url(ticker_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| QuoteError::Network(e.to_string()))?;

        Ok(Kraken {
            http,
            ticker_url: ticker_url.to_string(),
        })
    }

    /// Pair code in Kraken's notation, e.g. `XXBTZUSD` for BTC/USD.
    pub fn pair_code(pair: &AssetPair) -> String {
        format!("{}{}", pair.base.kraken_code(), pair.quote.kraken_code())
    }
}

impl Exchange for Kraken {
    fn name(&self) -> &'static str {
        "Kraken"
    }

    fn homepage(&self) -> &'static str {
        "https://www.kraken.com/"
    }

    fn fetch_quote(&self, pair: &AssetPair) -> Result<Quote> {
        let code = Self::pair_code(pair);
        debug!("GET {}?pair={}", self.ticker_url, code);

        let response = self
            .http
            .get(&self.ticker_url)
            .query(&[("pair", code.as_str())])
            .send()
            .map_err(|e| QuoteError::Network(e.to_string()))?;

        let body: TickerResponse = response.json().map_err(|e| {
            if e.is_decode() {
                malformed(self.name(), e.to_string())
            } else {
                QuoteError::Network(e.to_string())
            }
        })?;

        parse_ticker(self.name(), pair, &code, body)
    }
}

/// Maps a decoded ticker response onto a [`Quote`] for `pair`.
fn parse_ticker(
    exchange: &str,
    pair: &AssetPair,
    code: &str,
    body: TickerResponse,
) -> Result<Quote> {
    if !body.error.is_empty() {
        if body.error.iter().any(|e| e.contains(UNKNOWN_PAIR_ERROR)) {
            return Err(QuoteError::UnsupportedPair {
                exchange: exchange.to_string(),
                pair: pair.to_string(),
            });
        }
        return Err(QuoteError::Api {
            exchange: exchange.to_string(),
            message: body.error.join("; "),
        });
    }

    let mut result = body
        .result
        .ok_or_else(|| malformed(exchange, "missing result field"))?;

    // Kraken may answer under the canonical pair name rather than the
    // requested one; fall back to the single entry in that case.
    let entry = match result.remove(code) {
        Some(entry) => entry,
        None => single_entry(result)
            .ok_or_else(|| malformed(exchange, format!("no ticker entry for {code}")))?,
    };

    Ok(Quote {
        ask: price_at(exchange, "a", &entry.a, 0)?,
        bid: price_at(exchange, "b", &entry.b, 0)?,
        last: price_at(exchange, "c", &entry.c, 0)?,
        today_low: price_at(exchange, "l", &entry.l, 0)?,
        today_high: price_at(exchange, "h", &entry.h, 0)?,
        last_24h_low: price_at(exchange, "l", &entry.l, 1)?,
        last_24h_high: price_at(exchange, "h", &entry.h, 1)?,
        timestamp: Local::now().naive_local(),
    })
}

/// Returns the sole entry of `map`, or `None` when the count is not one.
fn single_entry(map: HashMap<String, TickerEntry>) -> Option<TickerEntry> {
    if map.len() == 1 {
        map.into_values().next()
    } else {
        None
    }
}

/// Extracts and parses the decimal at `index` of a price array.
fn price_at(exchange: &str, field: &str, values: &[String], index: usize) -> Result<Decimal> {
    let raw = values
        .get(index)
        .ok_or_else(|| malformed(exchange, format!("field {field} has no index {index}")))?;

    raw.parse::<Decimal>()
        .map_err(|_| malformed(exchange, format!("field {field}[{index}] is not a number: {raw}")))
}

fn malformed(exchange: &str, reason: impl Into<String>) -> QuoteError {
    QuoteError::MalformedResponse {
        exchange: exchange.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::Asset;

    fn btc_usd() -> AssetPair {
        AssetPair::new(Asset::BTC, Asset::USD)
    }

    fn decode(json: &str) -> TickerResponse {
        serde_json::from_str(json).unwrap()
    }

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    const BTC_USD_BODY: &str = r#"{
        "error": [],
        "result": {
            "XXBTZUSD": {
                "a": ["5607.50", "1", "1.000"],
                "b": ["5606.30", "2", "2.000"],
                "c": ["5604.90", "0.01000000"],
                "v": ["1200.5", "4200.9"],
                "p": ["5600.1", "5590.2"],
                "t": [7000, 21000],
                "l": ["5550.00", "5462.10"],
                "h": ["5708.10", "5731.28"],
                "o": "5591.00"
            }
        }
    }"#;

    #[test]
    fn pair_codes_use_kraken_notation() {
        assert_eq!(Kraken::pair_code(&btc_usd()), "XXBTZUSD");
        assert_eq!(
            Kraken::pair_code(&AssetPair::new(Asset::ETH, Asset::EUR)),
            "XETHZEUR"
        );
        assert_eq!(
            Kraken::pair_code(&AssetPair::new(Asset::BCH, Asset::USD)),
            "BCHZUSD"
        );
    }

    #[test]
    fn ticker_body_maps_onto_quote() {
        let quote =
            parse_ticker("Kraken", &btc_usd(), "XXBTZUSD", decode(BTC_USD_BODY)).unwrap();

        assert_eq!(quote.ask, dec("5607.50"));
        assert_eq!(quote.bid, dec("5606.30"));
        assert_eq!(quote.last, dec("5604.90"));
        assert_eq!(quote.today_low, dec("5550.00"));
        assert_eq!(quote.today_high, dec("5708.10"));
        assert_eq!(quote.last_24h_low, dec("5462.10"));
        assert_eq!(quote.last_24h_high, dec("5731.28"));
    }

    #[test]
    fn canonical_result_key_is_accepted() {
        // Requested with the short code, answered with the canonical one.
        let quote = parse_ticker("Kraken", &btc_usd(), "XBTUSD", decode(BTC_USD_BODY)).unwrap();
        assert_eq!(quote.last, dec("5604.90"));
    }

    #[test]
    fn unknown_pair_error_is_unsupported_pair() {
        let body = decode(r#"{"error": ["EQuery:Unknown asset pair"]}"#);
        let err = parse_ticker("Kraken", &btc_usd(), "XXBTZUSD", body).unwrap_err();

        match err {
            QuoteError::UnsupportedPair { exchange, pair } => {
                assert_eq!(exchange, "Kraken");
                assert_eq!(pair, "BTC/USD");
            }
            other => panic!("expected UnsupportedPair, got {other:?}"),
        }
    }

    #[test]
    fn other_exchange_errors_are_surfaced() {
        let body = decode(r#"{"error": ["EAPI:Rate limit exceeded"]}"#);
        let err = parse_ticker("Kraken", &btc_usd(), "XXBTZUSD", body).unwrap_err();

        assert!(matches!(err, QuoteError::Api { .. }));
        assert!(err.to_string().contains("Rate limit exceeded"));
    }

    #[test]
    fn missing_result_is_malformed() {
        let body = decode(r#"{"error": []}"#);
        let err = parse_ticker("Kraken", &btc_usd(), "XXBTZUSD", body).unwrap_err();
        assert!(matches!(err, QuoteError::MalformedResponse { .. }));
    }

    #[test]
    fn non_numeric_price_is_malformed() {
        let body = decode(
            r#"{
                "error": [],
                "result": {
                    "XXBTZUSD": {
                        "a": ["not-a-price", "1", "1.000"],
                        "b": ["5606.30", "2", "2.000"],
                        "c": ["5604.90", "0.1"],
                        "l": ["5550.00", "5462.10"],
                        "h": ["5708.10", "5731.28"]
                    }
                }
            }"#,
        );
        let err = parse_ticker("Kraken", &btc_usd(), "XXBTZUSD", body).unwrap_err();

        assert!(matches!(err, QuoteError::MalformedResponse { .. }));
        assert!(err.to_string().contains("not-a-price"));
    }

    #[test]
    fn truncated_range_array_is_malformed() {
        let body = decode(
            r#"{
                "error": [],
                "result": {
                    "XXBTZUSD": {
                        "a": ["5607.50", "1", "1.000"],
                        "b": ["5606.30", "2", "2.000"],
                        "c": ["5604.90", "0.1"],
                        "l": ["5550.00"],
                        "h": ["5708.10", "5731.28"]
                    }
                }
            }"#,
        );
        let err = parse_ticker("Kraken", &btc_usd(), "XXBTZUSD", body).unwrap_err();
        assert!(matches!(err, QuoteError::MalformedResponse { .. }));
    }

    #[test]
    fn refused_connection_is_a_network_error() {
        // Nothing listens on the discard port of loopback.
        let kraken = Kraken::with_ticker_url("http://127.0.0.1:9/0/public/Ticker").unwrap();
        let err = kraken.fetch_quote(&btc_usd()).unwrap_err();
        assert!(matches!(err, QuoteError::Network(_)));
    }
}
