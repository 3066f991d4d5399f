//!
//! Cryptocurrency quotes fetched from exchange HTTP APIs.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `asset` — supported assets, their exchange codes and value formatting.
//! - `quote` — the price snapshot an exchange reports for an asset pair.
//! - `exchange` — the exchange capability trait, registry and Kraken client.
//! - `format` — fixed-layout text rendering of quotes and listings.
#![warn(missing_docs)]
pub mod asset;
pub mod error;
pub mod exchange;
pub mod format;
pub mod quote;
pub mod result;

pub use error::QuoteError;
pub use quote::Quote;
pub use result::Result;
