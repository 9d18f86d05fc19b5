//! Display strings for the graph header, axis labels and tooltip.

use chrono::NaiveDate;

/// `6 Feb'26`
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-d %b'%y").to_string()
}

/// `₹34.00`
pub fn format_nav(value: f64) -> String {
    format!("₹{value:.2}")
}

/// `+20.00%` / `-16.67%`. Zero is shown as a gain.
pub fn format_return_pct(pct: f64) -> String {
    let sign = if pct >= 0.0 { "+" } else { "" };
    format!("{sign}{pct:.2}%")
}
