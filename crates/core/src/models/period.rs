use chrono::Months;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Lookback window applied to the NAV series before charting.
///
/// Durations are calendar-based and measured back from the newest point
/// in the series, never from the wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "3Y")]
    ThreeYears,
    #[serde(rename = "5Y")]
    FiveYears,
    /// The whole series, unfiltered
    #[default]
    #[serde(rename = "MAX")]
    Max,
}

impl Period {
    /// All periods in chip order, shortest first.
    pub const ALL: [Period; 7] = [
        Period::OneMonth,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::OneYear,
        Period::ThreeYears,
        Period::FiveYears,
        Period::Max,
    ];

    /// Calendar duration of the window, or `None` for `Max`.
    pub fn lookback(&self) -> Option<Months> {
        self.lookback_months().map(Months::new)
    }

    /// Length of the window in whole months, or `None` for `Max`.
    pub fn lookback_months(&self) -> Option<u32> {
        match self {
            Period::OneMonth => Some(1),
            Period::ThreeMonths => Some(3),
            Period::SixMonths => Some(6),
            Period::OneYear => Some(12),
            Period::ThreeYears => Some(36),
            Period::FiveYears => Some(60),
            Period::Max => None,
        }
    }

    /// Chip label ("1M" … "MAX").
    pub fn label(&self) -> &'static str {
        match self {
            Period::OneMonth => "1M",
            Period::ThreeMonths => "3M",
            Period::SixMonths => "6M",
            Period::OneYear => "1Y",
            Period::ThreeYears => "3Y",
            Period::FiveYears => "5Y",
            Period::Max => "MAX",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Period {
    type Err = CoreError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Period::ALL
            .into_iter()
            .find(|p| p.label() == upper)
            .ok_or_else(|| CoreError::UnknownPeriod(s.to_string()))
    }
}
