use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),
    #[error("Invalid month (expected YYYY-MM): {0}")]
    InvalidMonth(String),
}

/// A day on the calendar. Time-of-day and offsets are discarded at parse time,
/// so two timestamps on the same year/month/day compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive date-times.
    /// For RFC 3339 input the day written in the string wins over the offset.
    pub fn parse(input: &str) -> Result<Self, DateParseError> {
        let raw = input.trim();

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(Self(date));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(Self(dt.naive_local().date()));
        }
        NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|dt| Self(dt.date()))
            .ok_or_else(|| DateParseError::InvalidDate(input.to_string()))
    }

    pub fn today_in(tz: Tz) -> Self {
        Self(Utc::now().with_timezone(&tz).date_naive())
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

    /// Every day from `self` through `end`, both included. Empty when `end < self`.
    pub fn days_through(self, end: CalendarDate) -> impl Iterator<Item = CalendarDate> + Clone {
        self.0
            .iter_days()
            .take_while(move |d| *d <= end.0)
            .map(Self)
    }

    /// Signed day count from `self` to `other`.
    pub fn days_until(&self, other: CalendarDate) -> i64 {
        (other.0 - self.0).num_days()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for CalendarDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A calendar month. Stored as its first day so every value is a valid date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    pub fn of(date: CalendarDate) -> Self {
        // Day 1 of an existing date's month always exists.
        Self(date.0.with_day(1).unwrap_or(date.0))
    }

    pub fn parse(input: &str) -> Result<Self, DateParseError> {
        let raw = input.trim();
        let (year, month) = raw
            .split_once('-')
            .ok_or_else(|| DateParseError::InvalidMonth(input.to_string()))?;

        let year: i32 = year.parse().map_err(|_| DateParseError::InvalidMonth(input.to_string()))?;
        let month: u32 = month.parse().map_err(|_| DateParseError::InvalidMonth(input.to_string()))?;

        Self::new(year, month).ok_or_else(|| DateParseError::InvalidMonth(input.to_string()))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> CalendarDate {
        CalendarDate(self.0)
    }

    pub fn last_day(&self) -> CalendarDate {
        let last = self.0
            .iter_days()
            .take_while(|d| d.month() == self.0.month())
            .last()
            .unwrap_or(self.0);
        CalendarDate(last)
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Column of the 1st in a Sunday-first week grid (Sunday = 0).
    pub fn first_weekday_offset(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// `None` only when the result falls outside the representable date range.
    pub fn checked_add_months(&self, delta: i32) -> Option<Self> {
        let months = Months::new(delta.unsigned_abs());
        if delta >= 0 {
            self.0.checked_add_months(months).map(Self)
        } else {
            self.0.checked_sub_months(months).map(Self)
        }
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

impl FromStr for YearMonth {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    #[test]
    fn test_time_of_day_is_discarded() {
        let late = date("2024-09-05T23:59:00");
        let midnight = date("2024-09-05T00:00:00");
        assert_eq!(late, midnight);
        assert_eq!(late, date("2024-09-05"));
        assert_eq!(date("2024-09-05T23:59:00.000Z"), late);
        assert_eq!(date("2024-09-05 08:30:00"), late);
        assert_eq!(late.to_string(), "2024-09-05");
    }

    #[test]
    fn test_offset_keeps_written_day() {
        assert_eq!(date("2024-09-05T23:30:00-05:00"), date("2024-09-05"));
        assert_eq!(date("2024-09-05T00:15:00+09:00"), date("2024-09-05"));
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(CalendarDate::parse("").is_err());
        assert!(CalendarDate::parse("not-a-date").is_err());
        assert!(CalendarDate::parse("2024-02-30").is_err());
        assert!(CalendarDate::parse("05/09/2024").is_err());
    }

    #[test]
    fn test_days_through_is_inclusive() {
        let days: Vec<_> = date("2024-09-02").days_through(date("2024-09-05")).collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days[0], date("2024-09-02"));
        assert_eq!(days[3], date("2024-09-05"));

        assert_eq!(date("2024-09-05").days_through(date("2024-09-02")).count(), 0);
        assert_eq!(date("2024-09-05").days_through(date("2024-09-05")).count(), 1);
    }

    #[test]
    fn test_days_until() {
        assert_eq!(date("2024-02-27").days_until(date("2024-03-01")), 3);
        assert_eq!(date("2024-03-01").days_until(date("2024-02-27")), -3);
    }

    #[test]
    fn test_month_arithmetic_carries_years() {
        let jan = YearMonth::new(2024, 1).unwrap();
        assert_eq!(jan.checked_add_months(-1), YearMonth::new(2023, 12));
        assert_eq!(jan.checked_add_months(11), YearMonth::new(2024, 12));
        assert_eq!(jan.checked_add_months(12), YearMonth::new(2025, 1));
        assert_eq!(jan.checked_add_months(-25), YearMonth::new(2021, 12));
        assert_eq!(jan.checked_add_months(0), Some(jan));
    }

    #[test]
    fn test_month_shape() {
        let feb_leap = YearMonth::new(2024, 2).unwrap();
        assert_eq!(feb_leap.days_in_month(), 29);
        assert_eq!(feb_leap.last_day(), date("2024-02-29"));
        assert_eq!(YearMonth::new(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(2023, 12).unwrap().days_in_month(), 31);

        // 1 Nov 2023 was a Wednesday, 1 Sep 2024 a Sunday.
        assert_eq!(YearMonth::new(2023, 11).unwrap().first_weekday_offset(), 3);
        assert_eq!(YearMonth::new(2024, 9).unwrap().first_weekday_offset(), 0);
    }

    #[test]
    fn test_month_parse_and_display() {
        let month = YearMonth::parse("2024-09").unwrap();
        assert_eq!(month.to_string(), "2024-09");
        assert_eq!(YearMonth::of(date("2024-09-17")), month);
        assert!(month.contains(date("2024-09-30")));
        assert!(!month.contains(date("2024-10-01")));
        assert!(YearMonth::parse("2024-13").is_err());
        assert!(YearMonth::parse("202409").is_err());
    }

    #[test]
    fn test_serde_uses_iso_strings() {
        let json = serde_json::to_string(&date("2024-09-05")).unwrap();
        assert_eq!(json, "\"2024-09-05\"");
        let back: CalendarDate = serde_json::from_str("\"2024-09-05T23:59:00\"").unwrap();
        assert_eq!(back, date("2024-09-05"));
        assert!(serde_json::from_str::<CalendarDate>("\"nope\"").is_err());
    }
}
