use crate::endp::yahoo_finance;
use crate::error::Error;
use crate::series::{self, DateRange, Dedup, PricePoint, SeriesSpan};
use serde::{Deserialize, Serialize};

const PRICE_COLOR: &str = "#17B897";
const VOLUME_COLOR: &str = "#E12D39";

// dark theme shared by both charts
const CHART_BG: &str = "#1e2130";
const FONT_COLOR: &str = "#d8d8d8";
const FONT_FAMILY: &str = "Lato, sans-serif";

/// Declarative x/y figure: one trace plus display metadata, decoupled from
/// any rendering engine (the bundled page hands it to Plotly as-is).
#[derive(Deserialize, Serialize, Debug, Clone, utoipa::ToSchema)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: ChartLayout,
}

#[derive(Deserialize, Serialize, Debug, Clone, utoipa::ToSchema)]
pub struct Trace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub trace_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, utoipa::ToSchema)]
pub struct ChartLayout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub colorway: Vec<String>,
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
    pub font: Font,
}

#[derive(Deserialize, Serialize, Debug, Clone, utoipa::ToSchema)]
pub struct Title {
    pub text: String,
    pub x: f64,
    pub xanchor: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, utoipa::ToSchema)]
pub struct Axis {
    pub fixedrange: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickprefix: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, utoipa::ToSchema)]
pub struct Font {
    pub color: String,
    pub family: String,
}

fn dark_layout(title: String, color: &str, tickprefix: Option<&str>) -> ChartLayout {
    ChartLayout {
        title: Title {
            text: title,
            x: 0.05,
            xanchor: "left".to_string(),
        },
        xaxis: Axis {
            fixedrange: true,
            tickprefix: None,
        },
        yaxis: Axis {
            fixedrange: true,
            tickprefix: tickprefix.map(str::to_string),
        },
        colorway: vec![color.to_string()],
        paper_bgcolor: CHART_BG.to_string(),
        plot_bgcolor: CHART_BG.to_string(),
        font: Font {
            color: FONT_COLOR.to_string(),
            family: FONT_FAMILY.to_string(),
        },
    }
}

/// Closing-price line: x = date, y = close.
pub fn price_chart(points: &[PricePoint], ticker: &str) -> ChartSpec {
    ChartSpec {
        data: vec![Trace {
            x: points.iter().map(|point| point.date.to_string()).collect(),
            y: points.iter().map(|point| point.close).collect(),
            trace_type: "lines".to_string(),
            hovertemplate: Some("$%{y:.2f}<extra></extra>".to_string()),
        }],
        layout: dark_layout(format!("{ticker} Closing Price"), PRICE_COLOR, Some("$")),
    }
}

/// Daily-volume line: x = date, y = volume.
pub fn volume_chart(points: &[PricePoint], ticker: &str) -> ChartSpec {
    ChartSpec {
        data: vec![Trace {
            x: points.iter().map(|point| point.date.to_string()).collect(),
            y: points.iter().map(|point| point.volume as f64).collect(),
            trace_type: "lines".to_string(),
            hovertemplate: None,
        }],
        layout: dark_layout(format!("{ticker} Daily Volume"), VOLUME_COLOR, None),
    }
}

/// Both chart specifications of one dashboard refresh. They always travel
/// together so the page can replace both placeholders atomically.
#[derive(Deserialize, Serialize, Debug, Clone, utoipa::ToSchema)]
pub struct ChartUpdate {
    pub price_chart: ChartSpec,
    pub volume_chart: ChartSpec,
    /// Full (unfiltered) span of the fetched series; the menu uses it to
    /// refresh the picker bounds when the ticker changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<SeriesSpan>,
}

/// Pure tail of the reactive update: normalize, filter, and build both specs.
/// No network, no state; everything the page renders derives from `points`.
pub fn render_update(
    points: Vec<PricePoint>,
    ticker: &str,
    range: DateRange,
    dedup: Dedup,
) -> ChartUpdate {
    let sorted = series::normalize(points, dedup);
    let span = series::span(&sorted);
    let filtered = series::filter_range(sorted, range);
    ChartUpdate {
        price_chart: price_chart(&filtered, ticker),
        volume_chart: volume_chart(&filtered, ticker),
        span,
    }
}

/// Reactive filter/render: one fresh full-history fetch, then the pure tail.
pub async fn update(
    client: &reqwest::Client,
    ticker: &str,
    range: DateRange,
    dedup: Dedup,
) -> Result<ChartUpdate, Error> {
    let points = yahoo_finance::fetch(client, ticker).await?;
    Ok(render_update(points, ticker, range, dedup))
}
