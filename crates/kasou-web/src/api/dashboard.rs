use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use chrono::NaiveDate;
use kasou::chart::{self, ChartUpdate};
use kasou::error::Error;
use kasou::layout::DashboardLayout;
use kasou::series::{DateRange, Dedup};
use serde::Deserialize;

////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The single-page dashboard, embedded at compile time.
#[get("/")]
pub async fn page() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../../public/index.html"))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Static description of the dashboard page
///
/// ```json
/// {
///     "header": { "emoji": "📡", "title": "...", "description": "..." },
///     "menu": {
///         "tickers": [{ "value": "BTC-USD", "label": "Bitcoin USD" }],
///         "default_ticker": "BTC-USD",
///         "date_range": { "min_date_allowed": "2014-09-17", "...": "..." }
///     },
///     "charts": [{ "id": "price-chart" }, { "id": "volume-chart" }]
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/layout",
    responses(
        (
            status = 200, description = "Header, filter controls, and chart placeholders, with picker bounds seeded from the startup fetch",
            body = DashboardLayout, content_type = "application/json"
        )
    )
)]
#[get("/api/layout")]
pub async fn layout(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&state.layout)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ChartsQuery {
    /// Ticker symbol; defaults to the seeded dashboard ticker.
    ticker: Option<String>,
    /// Inclusive lower bound, `YYYY-MM-DD`.
    start_date: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    end_date: Option<String>,
}

/// Price and volume chart specs for one (ticker, date window) selection.
/// Both specs travel in one response so the page updates both cards
/// atomically; an empty window yields empty x/y arrays, not an error.
#[utoipa::path(
    get,
    path = "/api/charts",
    params(ChartsQuery),
    responses(
        (
            status = 200, description = "Closing-price and daily-volume chart specs, plus the full span of the fetched series",
            body = ChartUpdate, content_type = "application/json"
        ),
        (status = 400, description = "Malformed date bound"),
        (status = 404, description = "Ticker not recognised by the provider"),
        (status = 502, description = "Provider unreachable or returned an unreadable payload"),
    )
)]
#[get("/api/charts")]
pub async fn charts(query: web::Query<ChartsQuery>, state: web::Data<AppState>) -> impl Responder {
    let ticker = query
        .ticker
        .clone()
        .unwrap_or_else(|| state.layout.menu.default_ticker.clone());

    let range = match parse_range(&query) {
        Ok(range) => range,
        Err(e) => {
            log::warn!("[{ticker}] rejected date bound: {e}");
            return HttpResponse::BadRequest().body(format!("malformed date bound: {e}"));
        }
    };

    match chart::update(&state.client, &ticker, range, Dedup::Keep).await {
        Ok(update) => HttpResponse::Ok().json(update),
        Err(e @ Error::InvalidTicker(_)) => {
            log::warn!("{e}");
            HttpResponse::NotFound().body(e.to_string())
        }
        Err(e) => {
            log::error!("[{ticker}] chart update failed: {e}");
            HttpResponse::BadGateway().body("failed to reach the market data provider")
        }
    }
}

fn parse_range(query: &ChartsQuery) -> Result<DateRange, chrono::ParseError> {
    let parse = |bound: &Option<String>| -> Result<Option<NaiveDate>, chrono::ParseError> {
        bound
            .as_deref()
            .map(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d"))
            .transpose()
    };
    Ok(DateRange::new(
        parse(&query.start_date)?,
        parse(&query.end_date)?,
    ))
}
