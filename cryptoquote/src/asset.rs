//! Supported assets, their exchange codes and value formatting.
//!
//! The registry is a closed set of crypto and fiat currencies known at compile
//! time. It is read-only for the process lifetime: callers resolve identifiers
//! into [`Asset`] values and look up per-asset data, nothing is ever mutated.

use std::fmt;

use rust_decimal::Decimal;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::QuoteError;
use crate::result::Result;

/// Whether an asset is a cryptocurrency or a fiat currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Cryptocurrency, e.g. BTC.
    Crypto,
    /// Fiat currency, e.g. USD.
    Fiat,
}

/// Set of supported assets.
///
/// Variants are declared in listing order: cryptocurrencies first, then fiat
/// currencies, each alphabetically. Parsing via `FromStr` accepts the short
/// code or any exchange-specific alternative name (e.g. `XXBT` for BTC),
/// case-insensitively.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Asset {
    BCH,
    #[strum(to_string = "BTC", serialize = "XXBT")]
    BTC,
    DASH,
    #[strum(to_string = "DOGE", serialize = "XXDG")]
    DOGE,
    EOS,
    #[strum(to_string = "ETH", serialize = "XETH")]
    ETH,
    GNO,
    #[strum(to_string = "EUR", serialize = "ZEUR")]
    EUR,
    #[strum(to_string = "GBP", serialize = "ZGBP")]
    GBP,
    #[strum(to_string = "JPY", serialize = "ZJPY")]
    JPY,
    #[strum(to_string = "USD", serialize = "ZUSD")]
    USD,
}

impl Asset {
    /// Resolves an identifier into an asset.
    ///
    /// Accepts the short code or an alternative exchange name, in any case.
    pub fn resolve(identifier: &str) -> Result<Self> {
        identifier
            .trim()
            .parse()
            .map_err(|_| QuoteError::UnknownAsset(identifier.trim().to_string()))
    }

    /// All supported assets in declaration order.
    pub fn all() -> impl Iterator<Item = Asset> {
        Asset::iter()
    }

    /// Human-readable asset name.
    pub fn name(&self) -> &'static str {
        match self {
            Asset::BCH => "Bitcoin Cash",
            Asset::BTC => "Bitcoin",
            Asset::DASH => "Dash",
            Asset::DOGE => "Dogecoin",
            Asset::EOS => "EOS",
            Asset::ETH => "Ether",
            Asset::GNO => "Gnosis",
            Asset::EUR => "Euro",
            Asset::GBP => "British pound",
            Asset::JPY => "Japanese yen",
            Asset::USD => "United States dollar",
        }
    }

    /// Asset category.
    pub fn kind(&self) -> AssetKind {
        match self {
            Asset::BCH
            | Asset::BTC
            | Asset::DASH
            | Asset::DOGE
            | Asset::EOS
            | Asset::ETH
            | Asset::GNO => AssetKind::Crypto,
            Asset::EUR | Asset::GBP | Asset::JPY | Asset::USD => AssetKind::Fiat,
        }
    }

    /// Currency symbol used when formatting values, e.g. `$` or `Ð`.
    ///
    /// Assets without a dedicated symbol use their short code.
    pub fn symbol(&self) -> &'static str {
        match self {
            Asset::DOGE => "Ð",
            Asset::EUR => "€",
            Asset::GBP => "£",
            Asset::JPY => "¥",
            Asset::USD => "$",
            Asset::BCH => "BCH",
            Asset::BTC => "BTC",
            Asset::DASH => "DASH",
            Asset::EOS => "EOS",
            Asset::ETH => "ETH",
            Asset::GNO => "GNO",
        }
    }

    /// Alternative names under which exchanges list this asset.
    pub fn alt_names(&self) -> &'static [&'static str] {
        match self {
            Asset::BTC => &["XXBT"],
            Asset::DOGE => &["XXDG"],
            Asset::ETH => &["XETH"],
            Asset::EUR => &["ZEUR"],
            Asset::GBP => &["ZGBP"],
            Asset::JPY => &["ZJPY"],
            Asset::USD => &["ZUSD"],
            _ => &[],
        }
    }

    /// Code used by the Kraken API for this asset.
    pub fn kraken_code(&self) -> &'static str {
        match self {
            Asset::BCH => "BCH",
            Asset::BTC => "XXBT",
            Asset::DASH => "DASH",
            Asset::DOGE => "XXDG",
            Asset::EOS => "EOS",
            Asset::ETH => "XETH",
            Asset::GNO => "GNO",
            Asset::EUR => "ZEUR",
            Asset::GBP => "ZGBP",
            Asset::JPY => "ZJPY",
            Asset::USD => "ZUSD",
        }
    }

    /// Renders a price in this asset's conventions.
    ///
    /// Fiat values get the symbol directly followed by the amount with two
    /// decimal places (`$5607.50`); crypto values get the symbol, a space and
    /// the amount with trailing zeros stripped (`BTC 0.5`).
    pub fn format_value(&self, value: Decimal) -> String {
        match self.kind() {
            AssetKind::Fiat => format!("{}{:.2}", self.symbol(), value),
            AssetKind::Crypto => format!("{} {}", self.symbol(), value.normalize()),
        }
    }
}

/// Ordered pair (base, quote) identifying what is being priced.
///
/// Constructed per command invocation. Both assets must resolve in the
/// registry; whether an exchange actually lists the pair is validated by the
/// exchange client when a quote is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetPair {
    /// Asset being priced.
    pub base: Asset,
    /// Asset the price is denominated in.
    pub quote: Asset,
}

impl AssetPair {
    /// Creates a pair from already-resolved assets.
    pub fn new(base: Asset, quote: Asset) -> Self {
        AssetPair { base, quote }
    }

    /// Resolves two identifiers into a pair.
    pub fn resolve(base: &str, quote: &str) -> Result<Self> {
        Ok(AssetPair {
            base: Asset::resolve(base)?,
            quote: Asset::resolve(quote)?,
        })
    }
}

impl fmt::Display for AssetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_short_codes_case_insensitively() {
        assert_eq!(Asset::resolve("BTC").unwrap(), Asset::BTC);
        assert_eq!(Asset::resolve("btc").unwrap(), Asset::BTC);
        assert_eq!(Asset::resolve("Usd").unwrap(), Asset::USD);
    }

    #[test]
    fn resolves_exchange_alt_names() {
        assert_eq!(Asset::resolve("XXBT").unwrap(), Asset::BTC);
        assert_eq!(Asset::resolve("xxdg").unwrap(), Asset::DOGE);
        assert_eq!(Asset::resolve("ZUSD").unwrap(), Asset::USD);
        assert_eq!(Asset::resolve("zeur").unwrap(), Asset::EUR);
    }

    #[test]
    fn unknown_identifier_is_reported() {
        let err = Asset::resolve("XMR").unwrap_err();
        assert!(matches!(err, QuoteError::UnknownAsset(_)));
        assert!(err.to_string().contains("XMR"));
    }

    #[test]
    fn listing_order_is_stable() {
        let order: Vec<Asset> = Asset::all().collect();
        assert_eq!(
            order,
            vec![
                Asset::BCH,
                Asset::BTC,
                Asset::DASH,
                Asset::DOGE,
                Asset::EOS,
                Asset::ETH,
                Asset::GNO,
                Asset::EUR,
                Asset::GBP,
                Asset::JPY,
                Asset::USD,
            ]
        );
        assert_eq!(Asset::all().collect::<Vec<_>>(), order);
    }

    #[test]
    fn fiat_values_have_two_decimal_places() {
        let value = "5607.5".parse().unwrap();
        assert_eq!(Asset::USD.format_value(value), "$5607.50");
        assert_eq!(Asset::EUR.format_value(value), "€5607.50");
    }

    #[test]
    fn crypto_values_keep_symbol_spaced() {
        let value = "0.07140".parse().unwrap();
        assert_eq!(Asset::BTC.format_value(value), "BTC 0.0714");
        let value = "12.5".parse().unwrap();
        assert_eq!(Asset::DOGE.format_value(value), "Ð 12.5");
    }

    #[test]
    fn pair_resolution_and_display() {
        let pair = AssetPair::resolve("btc", "usd").unwrap();
        assert_eq!(pair.base, Asset::BTC);
        assert_eq!(pair.quote, Asset::USD);
        assert_eq!(pair.to_string(), "BTC/USD");

        assert!(AssetPair::resolve("BTC", "XRP").is_err());
    }
}
