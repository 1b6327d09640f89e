use thiserror::Error;

/// Failure modes of a chart refresh.
///
/// An empty filtered range is not one of them; empty series render as empty
/// charts.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to reach the market data provider")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("ticker {0:?} is not recognised by the provider")]
    InvalidTicker(String),

    #[error("failed to parse the provider response")]
    ParseError(#[from] serde_json::Error),
}
