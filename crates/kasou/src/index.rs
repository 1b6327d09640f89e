use lazy_static::lazy_static;
use std::collections::BTreeMap as Map;

/// The ticker selected when the dashboard first loads.
pub const DEFAULT_TICKER: &str = "BTC-USD";

lazy_static! {
    /// Statically defined crypto pairs offered by the dashboard dropdown.
    ///
    /// This is currently maintained manually.
    pub static ref PAIRS: Map<&'static str, &'static str> = Map::from([
        ("ADA-USD", "Cardano USD"),
        ("BTC-USD", "Bitcoin USD"),
        ("DOGE-USD", "Dogecoin USD"),
        ("DOT-USD", "Polkadot USD"),
        ("ETH-USD", "Ethereum USD"),
        ("SOL-USD", "Solana USD"),
        ("XRP-USD", "XRP USD"),
    ]);
}
