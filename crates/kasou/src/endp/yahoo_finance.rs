use crate::error::Error;
use crate::series::PricePoint;
use crate::www;
use chrono::{DateTime, NaiveDate};
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};

/// Fetch the full daily price history of a single ticker.
///
/// Every call is a fresh full-history request; there is no cache between
/// interactions.
pub async fn fetch(client: &Client, ticker: &str) -> Result<Vec<PricePoint>, Error> {
    let url = www::price_url(ticker);
    log::debug!("[{ticker}] fetching price history from Yahoo Finance");

    let body = client
        .get(&url)
        .send()
        .await
        .map_err(|e| {
            log::error!("[{ticker}] price fetching error: {e}\nURL: {url}");
            e
        })?
        .bytes()
        .await
        .map_err(|e| {
            log::error!("[{ticker}] byte transformation error: {e}\nURL: {url}");
            e
        })?;

    let de = match serde_json::from_slice::<PriceHistory>(&body) {
        Ok(data) => data,
        Err(e) => {
            log::error!("[{ticker}] deserialization error: {e}\nURL: {url}");
            return Err(e.into());
        }
    };

    extract(de, ticker)
}

/// Reshape the provider's parallel arrays into dated rows.
///
/// Rows where the provider emits nulls are dropped; gaps stay absent rather
/// than zero-filled. Corporate-action fields never leave this boundary.
pub fn extract(history: PriceHistory, ticker: &str) -> Result<Vec<PricePoint>, Error> {
    let data = match history.chart.result {
        Some(data) => data,
        None => {
            log::warn!("[{ticker}] contained no \"chart.result\" object");
            return Err(Error::InvalidTicker(ticker.to_string()));
        }
    };

    let base = match data.first() {
        Some(base) => base,
        None => return Err(Error::InvalidTicker(ticker.to_string())),
    };
    let quote = match base.indicators.quote.first() {
        Some(quote) => quote,
        None => return Err(Error::InvalidTicker(ticker.to_string())),
    };

    let points = base
        .dates
        .iter()
        .zip(quote.open.iter())
        .zip(quote.high.iter())
        .zip(quote.low.iter())
        .zip(quote.close.iter())
        .zip(quote.volume.iter())
        .filter_map(|(((((date, open), high), low), close), volume)| {
            Some(PricePoint {
                date: *date,
                open: (*open)?,
                high: (*high)?,
                low: (*low)?,
                close: (*close)?,
                volume: (*volume)?,
            })
        })
        .collect::<Vec<_>>();

    log::debug!("[{ticker}] extracted {} price rows", points.len());
    Ok(points)
}

// `price` schema
#[derive(Deserialize, Serialize, Debug)]
pub struct PriceHistory {
    pub chart: PriceResponse,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct PriceResponse {
    pub result: Option<Vec<PriceCategories>>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct PriceCategories {
    #[serde(rename = "timestamp", deserialize_with = "de_timestamps")]
    pub dates: Vec<NaiveDate>,
    pub indicators: Indicators,
}

fn de_timestamps<'de, D>(deserializer: D) -> Result<Vec<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let timestamps: Vec<i64> = Deserialize::deserialize(deserializer)?;
    timestamps
        .into_iter()
        .map(|timestamp| {
            DateTime::from_timestamp(timestamp, 0)
                .map(|datetime| datetime.date_naive())
                .ok_or_else(|| serde::de::Error::custom("timestamp out of range"))
        })
        .collect()
}

#[derive(Deserialize, Serialize, Debug)]
pub struct Indicators {
    pub quote: Vec<Quote>,
}

// The quote arrays are null-padded on days the provider has no data for.
#[derive(Deserialize, Serialize, Debug)]
pub struct Quote {
    pub open: Vec<Option<f64>>,
    pub high: Vec<Option<f64>>,
    pub low: Vec<Option<f64>>,
    pub close: Vec<Option<f64>>,
    pub volume: Vec<Option<i64>>,
}
