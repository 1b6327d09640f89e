use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of OHLCV history for a single ticker.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

/// First and last dates of a series; seeds the date picker and refreshes its
/// bounds when the ticker changes.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, utoipa::ToSchema)]
pub struct SeriesSpan {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

/// Inclusive date window selected in the dashboard menu.
///
/// A missing bound disables filtering altogether; there is no partial
/// filtering on one bound.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }
}

/// What to do with duplicate dates, should the provider ever emit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dedup {
    /// Pass duplicates through unchanged.
    Keep,
    /// Keep the first row per date.
    First,
}

/// Stable ascending sort by date, with the caller's duplicate policy applied.
pub fn normalize(mut points: Vec<PricePoint>, dedup: Dedup) -> Vec<PricePoint> {
    points.sort_by_key(|point| point.date);
    if dedup == Dedup::First {
        points.dedup_by_key(|point| point.date);
    }
    points
}

/// Keep the rows with `start <= date <= end`, both bounds inclusive,
/// preserving relative order. If either bound is absent the series passes
/// through untouched. An inverted range yields an empty series, not an error.
pub fn filter_range(points: Vec<PricePoint>, range: DateRange) -> Vec<PricePoint> {
    match (range.start, range.end) {
        (Some(start), Some(end)) => points
            .into_iter()
            .filter(|point| start <= point.date && point.date <= end)
            .collect(),
        _ => points,
    }
}

/// Span of a date-sorted series; `None` when it holds no rows.
pub fn span(points: &[PricePoint]) -> Option<SeriesSpan> {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => Some(SeriesSpan {
            min: first.date,
            max: last.date,
        }),
        _ => None,
    }
}
