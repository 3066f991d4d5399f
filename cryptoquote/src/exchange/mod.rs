//! Exchange capability trait and registry.
//!
//! An [`Exchange`] turns an [`AssetPair`] into a [`Quote`] with one public API
//! call. Concrete implementations live in submodules (currently `kraken`); the
//! [`ExchangeRegistry`] keeps them in registration order and resolves them by
//! name at dispatch time, so adding an exchange never changes callers.
pub mod kraken;

use crate::asset::AssetPair;
use crate::error::QuoteError;
use crate::quote::Quote;
use crate::result::Result;

pub use kraken::Kraken;

/// A trading venue exposing a public price-query API.
pub trait Exchange {
    /// Display name, e.g. `Kraken`.
    fn name(&self) -> &'static str;

    /// Homepage URL shown by `list exchanges`.
    fn homepage(&self) -> &'static str;

    /// Fetches a fresh quote for `pair` with one outbound API call.
    ///
    /// Fails with `UnsupportedPair` when the exchange does not list the pair,
    /// `Network` when the request cannot complete, and `MalformedResponse`
    /// when the body does not carry the expected fields.
    fn fetch_quote(&self, pair: &AssetPair) -> Result<Quote>;
}

/// Registration-ordered set of exchanges, resolved by name.
pub struct ExchangeRegistry {
    exchanges: Vec<Box<dyn Exchange>>,
}

impl ExchangeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        ExchangeRegistry {
            exchanges: Vec::new(),
        }
    }

    /// Registry with the built-in exchanges registered.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        registry.register(Box::new(Kraken::new()?));
        Ok(registry)
    }

    /// Appends an exchange; listing order follows registration order.
    pub fn register(&mut self, exchange: Box<dyn Exchange>) {
        self.exchanges.push(exchange);
    }

    /// Finds an exchange by case-insensitive name.
    pub fn resolve(&self, name: &str) -> Result<&dyn Exchange> {
        self.iter()
            .find(|exchange| exchange.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| QuoteError::UnknownExchange(name.trim().to_string()))
    }

    /// Iterates exchanges in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Exchange> {
        self.exchanges.iter().map(|exchange| exchange.as_ref())
    }
}

impl Default for ExchangeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
