use std::borrow::Cow;

use chrono::{Datelike, Days, NaiveDate};

use crate::models::nav::NavPoint;
use crate::models::period::Period;

/// Slices the NAV history to a lookback window and measures the return
/// over it.
///
/// Pure business logic: no I/O, no wall clock. "Today" is always the
/// date of the newest point, so results are reproducible.
pub struct PeriodService;

impl PeriodService {
    pub fn new() -> Self {
        Self
    }

    /// Earliest date kept by `period` when the newest point is `reference`.
    ///
    /// The month count is subtracted keeping the day of month. A day that
    /// does not exist in the target month rolls forward into the next one
    /// (31 Mar − 1M = 3 Mar, or 2 Mar in a leap year; 29 Feb − 1Y = 1 Mar).
    ///
    /// `None` means no cutoff: either `Max`, or a lookback reaching before
    /// the representable calendar.
    pub fn cutoff_date(&self, reference: NaiveDate, period: Period) -> Option<NaiveDate> {
        let months = i32::try_from(period.lookback_months()?).ok()?;
        let target = reference.year() * 12 + reference.month0() as i32 - months;
        let first_of_month =
            NaiveDate::from_ymd_opt(target.div_euclid(12), target.rem_euclid(12) as u32 + 1, 1)?;
        first_of_month.checked_add_days(Days::new(u64::from(reference.day0())))
    }

    /// Keep the points that fall inside `period`, in series order.
    ///
    /// `Max` borrows the input untouched; every other period allocates.
    /// The newest point is assumed to be last (ascending input).
    pub fn filter<'a>(&self, series: &'a [NavPoint], period: Period) -> Cow<'a, [NavPoint]> {
        let Some(reference) = series.last().map(|p| p.date) else {
            return Cow::Borrowed(series);
        };

        match self.cutoff_date(reference, period) {
            Some(cutoff) => {
                let kept: Vec<NavPoint> =
                    series.iter().filter(|p| p.date >= cutoff).copied().collect();
                tracing::trace!(%period, %cutoff, kept = kept.len(), total = series.len(), "filtered NAV series");
                Cow::Owned(kept)
            }
            None => Cow::Borrowed(series),
        }
    }

    /// Signed percentage change from the first to the last point.
    /// Fewer than two points → 0.
    pub fn return_pct(&self, filtered: &[NavPoint]) -> f64 {
        match (filtered.first(), filtered.last()) {
            (Some(first), Some(last)) if filtered.len() >= 2 => {
                (last.nav - first.nav) / first.nav * 100.0
            }
            _ => 0.0,
        }
    }
}

impl Default for PeriodService {
    fn default() -> Self {
        Self::new()
    }
}
