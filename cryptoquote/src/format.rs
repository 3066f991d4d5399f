//! Fixed-layout text rendering of quotes and registry listings.
//!
//! Everything in this module is a pure function from already-fetched data to a
//! `String`; printing and error handling stay with the caller.
use crate::asset::{Asset, AssetKind, AssetPair};
use crate::exchange::ExchangeRegistry;
use crate::quote::Quote;

/// Timestamp layout used in the quote header, e.g. `16/10/17 10:41:56`.
const TIMESTAMP_FORMAT: &str = "%d/%m/%y %H:%M:%S";

/// Renders `quote` as the fixed six-line block printed by `price`.
///
/// Prices are rendered in the quote asset's conventions and the header names
/// the exchange the quote came from:
///
/// ```text
/// BTC price on Kraken as of 16/10/17 10:41:56:
///     Ask: $5607.50
///     Bid: $5606.30
///     Last: $5604.90
///     Today low: $5550.00 (last 24h: $5462.10)
///     Today high: $5708.10 (last 24h: $5731.28)
/// ```
pub fn format_quote(quote: &Quote, pair: &AssetPair, exchange_name: &str) -> String {
    let value = |v| pair.quote.format_value(v);

    format!(
        "{base} price on {exchange} as of {time}:\n\
         \tAsk: {ask}\n\
         \tBid: {bid}\n\
         \tLast: {last}\n\
         \tToday low: {today_low} (last 24h: {low_24h})\n\
         \tToday high: {today_high} (last 24h: {high_24h})",
        base = pair.base,
        exchange = exchange_name,
        time = quote.timestamp.format(TIMESTAMP_FORMAT),
        ask = value(quote.ask),
        bid = value(quote.bid),
        last = value(quote.last),
        today_low = value(quote.today_low),
        low_24h = value(quote.last_24h_low),
        today_high = value(quote.today_high),
        high_24h = value(quote.last_24h_high),
    )
}

/// Renders the `list exchanges` output: a header plus one tab-indented
/// `<name> (<homepage>)` line per exchange in registration order.
pub fn render_exchanges(registry: &ExchangeRegistry) -> String {
    let mut out = String::from("Supported exchanges:");
    for exchange in registry.iter() {
        out.push_str(&format!("\n\t{} ({})", exchange.name(), exchange.homepage()));
    }
    out
}

/// Renders the `list assets` output: a cryptocurrency section and a fiat
/// section, one tab-indented line per asset with its alternative exchange
/// names in parentheses.
pub fn render_assets() -> String {
    let mut out = String::from("Supported cryptocurrency assets:");
    for asset in Asset::all().filter(|a| a.kind() == AssetKind::Crypto) {
        push_asset_line(&mut out, asset);
    }

    out.push_str("\nSupported fiat currency assets:");
    for asset in Asset::all().filter(|a| a.kind() == AssetKind::Fiat) {
        push_asset_line(&mut out, asset);
    }
    out
}

fn push_asset_line(out: &mut String, asset: Asset) {
    out.push_str(&format!("\n\t{asset}"));
    if !asset.alt_names().is_empty() {
        out.push_str(&format!(" ({})", asset.alt_names().join(", ")));
    }
}
