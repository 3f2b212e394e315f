//! Date range filter values and their resolution into concrete intervals.

use std::{fmt::Display, str::FromStr};

use chrono::{Days, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Named ranges that are resolved relative to "today" (or the organism's earliest date).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedDateRange {
    AllTimes,
    Last2Weeks,
    LastMonth,
    Last2Months,
    Last3Months,
    Last6Months,
}

impl NamedDateRange {
    pub const ALL: [NamedDateRange; 6] = [
        NamedDateRange::AllTimes,
        NamedDateRange::Last2Weeks,
        NamedDateRange::LastMonth,
        NamedDateRange::Last2Months,
        NamedDateRange::Last3Months,
        NamedDateRange::Last6Months,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            NamedDateRange::AllTimes => "allTimes",
            NamedDateRange::Last2Weeks => "last2Weeks",
            NamedDateRange::LastMonth => "lastMonth",
            NamedDateRange::Last2Months => "last2Months",
            NamedDateRange::Last3Months => "last3Months",
            NamedDateRange::Last6Months => "last6Months",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NamedDateRange::AllTimes => "All times",
            NamedDateRange::Last2Weeks => "Last 2 weeks",
            NamedDateRange::LastMonth => "Last month",
            NamedDateRange::Last2Months => "Last 2 months",
            NamedDateRange::Last3Months => "Last 3 months",
            NamedDateRange::Last6Months => "Last 6 months",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|named| named.token() == token)
    }
}

/// A closed interval of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConcreteDateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateRange {
    Named(NamedDateRange),
    Concrete(ConcreteDateRange),
}

impl From<NamedDateRange> for DateRange {
    fn from(value: NamedDateRange) -> Self {
        DateRange::Named(value)
    }
}

impl From<ConcreteDateRange> for DateRange {
    fn from(value: ConcreteDateRange) -> Self {
        DateRange::Concrete(value)
    }
}

impl DateRange {
    pub fn concrete(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange::Concrete(ConcreteDateRange { from, to })
    }

    /// Resolves the range into a `{from, to}` pair. `allTimes` starts at `earliest`.
    pub fn to_concrete(&self, earliest: NaiveDate, today: NaiveDate) -> ConcreteDateRange {
        let named = match self {
            DateRange::Concrete(range) => return *range,
            DateRange::Named(named) => named,
        };
        let from = match named {
            NamedDateRange::AllTimes => Some(earliest),
            NamedDateRange::Last2Weeks => today.checked_sub_days(Days::new(14)),
            NamedDateRange::LastMonth => today.checked_sub_months(Months::new(1)),
            NamedDateRange::Last2Months => today.checked_sub_months(Months::new(2)),
            NamedDateRange::Last3Months => today.checked_sub_months(Months::new(3)),
            NamedDateRange::Last6Months => today.checked_sub_months(Months::new(6)),
        };
        ConcreteDateRange {
            from: from.unwrap_or(earliest),
            to: today,
        }
    }

    pub fn to_concrete_today(&self, earliest: NaiveDate) -> ConcreteDateRange {
        self.to_concrete(earliest, Local::now().date_naive())
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateRange::Named(named) => write!(f, "{}", named.token()),
            DateRange::Concrete(range) => write!(
                f,
                "{}--{}",
                range.from.format(DATE_FORMAT),
                range.to.format(DATE_FORMAT)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeParseError(pub String);

impl Display for DateRangeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Not a date range: {}", self.0)
    }
}

impl FromStr for DateRange {
    type Err = DateRangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains("--") {
            let parts = s.split("--").collect::<Vec<_>>();
            if let [from, to] = parts.as_slice() {
                let from = NaiveDate::parse_from_str(from, DATE_FORMAT);
                let to = NaiveDate::parse_from_str(to, DATE_FORMAT);
                if let (Ok(from), Ok(to)) = (from, to) {
                    return Ok(DateRange::concrete(from, to));
                }
            }
            return Err(DateRangeParseError(s.to_string()));
        }
        NamedDateRange::from_token(s)
            .map(DateRange::Named)
            .ok_or_else(|| DateRangeParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn all_times_starts_at_earliest_date() {
        let range = DateRange::Named(NamedDateRange::AllTimes);
        let resolved = range.to_concrete(date("2020-01-06"), date("2026-10-17"));
        assert_eq!(
            resolved,
            ConcreteDateRange { from: date("2020-01-06"), to: date("2026-10-17") }
        );
    }

    #[test]
    fn all_times_ends_today() {
        let range = DateRange::Named(NamedDateRange::AllTimes);
        let resolved = range.to_concrete_today(date("2020-01-06"));
        assert_eq!(resolved.from, date("2020-01-06"));
        assert_eq!(resolved.to, Local::now().date_naive());
    }

    #[test]
    fn concrete_range_is_returned_unchanged() {
        let range = DateRange::concrete(date("2021-01-01"), date("2021-06-01"));
        let resolved = range.to_concrete(date("1900-01-01"), date("2026-10-17"));
        assert_eq!(resolved, ConcreteDateRange { from: date("2021-01-01"), to: date("2021-06-01") });
    }

    #[test]
    fn relative_ranges_count_back_from_today() {
        let today = date("2024-08-31");
        let earliest = date("2020-01-06");
        let from = |named| DateRange::Named(named).to_concrete(earliest, today).from;
        assert_eq!(from(NamedDateRange::Last2Weeks), date("2024-08-17"));
        assert_eq!(from(NamedDateRange::LastMonth), date("2024-07-31"));
        assert_eq!(from(NamedDateRange::Last2Months), date("2024-06-30"));
        assert_eq!(from(NamedDateRange::Last3Months), date("2024-05-31"));
        assert_eq!(from(NamedDateRange::Last6Months), date("2024-02-29"));
    }

    #[test]
    fn parses_named_and_concrete_forms() {
        assert_eq!("last6Months".parse(), Ok(DateRange::Named(NamedDateRange::Last6Months)));
        assert_eq!(
            "2021-01-01--2021-06-01".parse(),
            Ok(DateRange::concrete(date("2021-01-01"), date("2021-06-01")))
        );
    }

    #[test]
    fn rejects_malformed_values() {
        assert!("lastYear".parse::<DateRange>().is_err());
        assert!("2021-01-01--".parse::<DateRange>().is_err());
        assert!("2021-01-01--2021-02-01--2021-03-01".parse::<DateRange>().is_err());
        assert!("2021-13-01--2021-06-01".parse::<DateRange>().is_err());
    }

    #[test]
    fn renders_wire_format() {
        assert_eq!(DateRange::Named(NamedDateRange::AllTimes).to_string(), "allTimes");
        assert_eq!(
            DateRange::concrete(date("2021-01-01"), date("2021-06-01")).to_string(),
            "2021-01-01--2021-06-01"
        );
    }
}
