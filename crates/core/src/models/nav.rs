use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A single NAV observation: the fund's per-unit price on a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavPoint {
    /// Net asset value in currency units (always > 0)
    pub nav: f64,

    /// Valuation date (daily granularity)
    #[serde(rename = "nav_date")]
    pub date: NaiveDate,
}

impl NavPoint {
    pub fn new(nav: f64, date: NaiveDate) -> Self {
        Self { nav, date }
    }
}

/// A NAV record as it arrives from the data layer, before validation.
///
/// `nav_date` is either a plain ISO date (`2026-02-06`) or a full
/// timestamp (`2026-02-06T00:00:00.000Z`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNavPoint {
    pub nav: f64,
    pub nav_date: String,
}

impl RawNavPoint {
    pub fn new(nav: f64, nav_date: impl Into<String>) -> Self {
        Self {
            nav,
            nav_date: nav_date.into(),
        }
    }
}

/// The full NAV history of a scheme, validated once when accepted.
///
/// Expected to be ascending by date. The core never re-sorts it; an
/// out-of-order series is accepted but logged, and period filtering is
/// only meaningful for sorted input.
///
/// Serializes as the plain list of points. Deserializing goes through
/// `from_raw`, so serde input is validated like any other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<NavPoint>", try_from = "Vec<RawNavPoint>")]
pub struct NavSeries {
    points: Vec<NavPoint>,
}

impl NavSeries {
    /// Accept already-typed points. Rejects non-finite or non-positive NAVs.
    pub fn new(points: Vec<NavPoint>) -> Result<Self, CoreError> {
        for (index, point) in points.iter().enumerate() {
            validate_nav(index, point.nav)?;
        }
        let series = Self { points };
        series.warn_if_unsorted();
        Ok(series)
    }

    /// Accept raw records, parsing every date. The first bad record aborts.
    pub fn from_raw(records: &[RawNavPoint]) -> Result<Self, CoreError> {
        let mut points = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            validate_nav(index, record.nav)?;
            let date = parse_nav_date(index, &record.nav_date)?;
            points.push(NavPoint::new(record.nav, date));
        }
        let series = Self { points };
        series.warn_if_unsorted();
        Ok(series)
    }

    /// Parse a JSON array of `{ "nav": .., "nav_date": ".." }` records.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let records: Vec<RawNavPoint> = serde_json::from_str(json)?;
        Self::from_raw(&records)
    }

    pub fn points(&self) -> &[NavPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&NavPoint> {
        self.points.first()
    }

    /// The newest point, which anchors every lookback period.
    pub fn last(&self) -> Option<&NavPoint> {
        self.points.last()
    }

    /// True when dates never decrease (equal neighbouring dates allowed).
    pub fn is_sorted(&self) -> bool {
        self.points.windows(2).all(|w| w[0].date <= w[1].date)
    }

    fn warn_if_unsorted(&self) {
        if !self.is_sorted() {
            tracing::warn!(
                points = self.points.len(),
                "NAV series is not ascending by date; period filtering assumes sorted input"
            );
        }
    }
}

impl TryFrom<Vec<RawNavPoint>> for NavSeries {
    type Error = CoreError;

    fn try_from(records: Vec<RawNavPoint>) -> Result<Self, Self::Error> {
        Self::from_raw(&records)
    }
}

impl From<NavSeries> for Vec<NavPoint> {
    fn from(series: NavSeries) -> Self {
        series.points
    }
}

impl AsRef<[NavPoint]> for NavSeries {
    fn as_ref(&self) -> &[NavPoint] {
        &self.points
    }
}

fn validate_nav(index: usize, nav: f64) -> Result<(), CoreError> {
    if nav.is_finite() && nav > 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidNav { index, value: nav })
    }
}

/// Parse a NAV date string into a calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (reduced to their UTC date)
/// and zone-less `YYYY-MM-DDTHH:MM:SS[.fff]` timestamps.
pub fn parse_nav_date(index: usize, value: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.with_timezone(&Utc).date_naive());
    }
    match NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(timestamp) => Ok(timestamp.date()),
        Err(e) => Err(CoreError::InvalidDate {
            index,
            value: value.to_string(),
            reason: e.to_string(),
        }),
    }
}
