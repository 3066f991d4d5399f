//! Error types shared between the library and the command-line front end.
//!
//! The `QuoteError` enum unifies the failure cases for asset lookup, exchange
//! selection, HTTP transport and response decoding, allowing crates to
//! propagate a single error type. Every variant renders as a single
//! user-facing line.
use thiserror::Error;

/// Unified error type for quote retrieval.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The asset identifier is not present in the registry.
    #[error("unknown asset: {0}")]
    UnknownAsset(String),

    /// The exchange name is not present in the registry.
    #[error("unknown exchange: {0}")]
    UnknownExchange(String),

    /// The exchange does not list the requested asset pair.
    #[error("{exchange} does not support the pair {pair}")]
    UnsupportedPair {
        /// Exchange display name.
        exchange: String,
        /// Pair in `BASE/QUOTE` form.
        pair: String,
    },

    /// The HTTP request could not complete (timeout, DNS failure, refused
    /// connection).
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be parsed into the expected fields.
    #[error("malformed response from {exchange}: {reason}")]
    MalformedResponse {
        /// Exchange display name.
        exchange: String,
        /// What was wrong with the body.
        reason: String,
    },

    /// The exchange answered the request with an error of its own.
    #[error("{exchange} returned an error: {message}")]
    Api {
        /// Exchange display name.
        exchange: String,
        /// Error string reported by the exchange.
        message: String,
    },
}
