//! Date type for historical odds lookups.

use crate::error::{Result, ScraplError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar day written as `YYMMDD` (years 2000-2099).
///
/// Historical odds are requested as a snapshot at midday UTC of that day.
///
/// ```rust
/// use scrapl::OddsDate;
///
/// let date: OddsDate = "240817".parse().unwrap();
/// assert_eq!(date.to_api_timestamp(), "2024-08-17T12:00:00Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OddsDate(NaiveDate);

impl OddsDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| ScraplError::InvalidDate {
                value: format!("{year:04}-{month:02}-{day:02}"),
            })
            .and_then(Self::from_naive)
    }

    /// Wrap a date, rejecting years outside the two-digit range.
    pub fn from_naive(date: NaiveDate) -> Result<Self> {
        if !(2000..=2099).contains(&date.year()) {
            return Err(ScraplError::InvalidDate {
                value: date.to_string(),
            });
        }
        Ok(Self(date))
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// ISO-8601 timestamp the odds-history endpoint expects.
    pub fn to_api_timestamp(&self) -> String {
        self.0.format("%Y-%m-%dT12:00:00Z").to_string()
    }
}

impl fmt::Display for OddsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%y%m%d"))
    }
}

impl FromStr for OddsDate {
    type Err = ScraplError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ScraplError::InvalidDate {
            value: s.to_string(),
        };
        // chrono accepts single-digit fields, so pin the shape first.
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        // `%y` would put 69-99 in the 1900s; these are always 20YY.
        let date = NaiveDate::parse_from_str(&format!("20{s}"), "%Y%m%d").map_err(|_| invalid())?;
        Self::from_naive(date)
    }
}

impl Serialize for OddsDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OddsDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
