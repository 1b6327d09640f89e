const INTERVAL: &str = "1d";
const RANGE: &str = "max";

/// Chart URL for the full daily history of a ticker. Corporate-action events
/// come back in the payload but are never extracted.
pub fn price_url(ticker: &str) -> String {
    let tckr = ticker.to_uppercase();
    format!(
        "https://query1.finance.yahoo.com/v8/finance/chart/{tckr}?symbol={tckr}&interval={INTERVAL}&range={RANGE}&events=div|split|capitalGains",
    )
}
