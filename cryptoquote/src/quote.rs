//! Price snapshot an exchange reports for an asset pair.
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Immutable snapshot of the prices an exchange reports for an asset pair.
///
/// Created by an exchange client from a single API response and dropped when
/// the command that requested it completes; quotes are never cached or
/// persisted. Numeric fields are non-negative as reported; `ask >= bid` is
/// expected but not enforced here, the exchange is the source of truth.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Lowest price a seller currently accepts.
    pub ask: Decimal,
    /// Highest price a buyer currently offers.
    pub bid: Decimal,
    /// Price of the last completed trade.
    pub last: Decimal,
    /// Lowest traded price since the exchange's daily rollover.
    pub today_low: Decimal,
    /// Highest traded price since the exchange's daily rollover.
    pub today_high: Decimal,
    /// Lowest traded price over the last 24 hours.
    pub last_24h_low: Decimal,
    /// Highest traded price over the last 24 hours.
    pub last_24h_high: Decimal,
    /// Local wall-clock time the quote was taken.
    pub timestamp: NaiveDateTime,
}
