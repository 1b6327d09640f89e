use crate::index::PAIRS;
use crate::series::SeriesSpan;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Static description of the dashboard page: header, filter menu, and the
/// two chart placeholders. Built once at startup from the seed series and
/// served to the page as-is.
#[derive(Deserialize, Serialize, Debug, Clone, utoipa::ToSchema)]
pub struct DashboardLayout {
    pub header: Header,
    pub menu: Menu,
    pub charts: Vec<ChartSlot>,
}

#[derive(Deserialize, Serialize, Debug, Clone, utoipa::ToSchema)]
pub struct Header {
    pub emoji: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, utoipa::ToSchema)]
pub struct Menu {
    pub tickers: Vec<TickerOption>,
    pub default_ticker: String,
    pub date_range: DatePicker,
}

#[derive(Deserialize, Serialize, Debug, Clone, utoipa::ToSchema)]
pub struct TickerOption {
    pub value: String,
    pub label: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, utoipa::ToSchema)]
pub struct DatePicker {
    pub min_date_allowed: NaiveDate,
    pub max_date_allowed: NaiveDate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Deserialize, Serialize, Debug, Clone, utoipa::ToSchema)]
pub struct ChartSlot {
    pub id: String,
}

impl DashboardLayout {
    /// Build the page description from the startup seed. Picker bounds and
    /// the initial window both default to the seed series' full span.
    pub fn seed(default_ticker: &str, span: SeriesSpan) -> Self {
        Self {
            header: Header {
                emoji: "📡".to_string(),
                title: "YFINANCE API: CRYPTO DATA".to_string(),
                description: "visualising cryptocurrency data provided by yahoo.".to_string(),
            },
            menu: Menu {
                tickers: PAIRS
                    .iter()
                    .map(|(value, label)| TickerOption {
                        value: value.to_string(),
                        label: label.to_string(),
                    })
                    .collect(),
                default_ticker: default_ticker.to_string(),
                date_range: DatePicker {
                    min_date_allowed: span.min,
                    max_date_allowed: span.max,
                    start_date: span.min,
                    end_date: span.max,
                },
            },
            charts: vec![
                ChartSlot {
                    id: "price-chart".to_string(),
                },
                ChartSlot {
                    id: "volume-chart".to_string(),
                },
            ],
        }
    }
}
