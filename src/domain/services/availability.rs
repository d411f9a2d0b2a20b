use crate::domain::models::calendar_date::{CalendarDate, YearMonth};
use crate::domain::models::reservation::{Reservation, STATUS_SUCCESS};
use std::collections::BTreeSet;

/// Why a confirmed reservation contributed nothing to the blocked set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    UnparseableDate { field: &'static str, value: String },
    InvertedRange { start: CalendarDate, end: CalendarDate },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataQualityWarning {
    pub reservation_id: String,
    pub kind: WarningKind,
}

impl DataQualityWarning {
    pub fn message(&self) -> String {
        match &self.kind {
            WarningKind::UnparseableDate { field, value } => {
                format!("{} is not a calendar date: {:?}", field, value)
            }
            WarningKind::InvertedRange { start, end } => {
                format!("start_date {} is after end_date {}", start, end)
            }
        }
    }
}

/// Days a resource cannot be booked on, plus the reservations that had to be skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedDates {
    dates: BTreeSet<CalendarDate>,
    warnings: Vec<DataQualityWarning>,
}

impl BlockedDates {
    pub fn from_dates<I: IntoIterator<Item = CalendarDate>>(dates: I) -> Self {
        Self {
            dates: dates.into_iter().collect(),
            warnings: Vec::new(),
        }
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.dates.iter().copied()
    }

    pub fn in_month(&self, month: YearMonth) -> impl Iterator<Item = CalendarDate> + '_ {
        self.dates.range(month.first_day()..=month.last_day()).copied()
    }

    pub fn warnings(&self) -> &[DataQualityWarning] {
        &self.warnings
    }
}

pub fn compute_blocked_dates(reservations: &[Reservation]) -> BlockedDates {
    compute_blocked_dates_with_status(reservations, STATUS_SUCCESS)
}

/// Expands every reservation whose status matches `confirmed_status` exactly into
/// the days it occupies, start and end both included. Reservations with dates
/// that do not parse, or that end before they start, are skipped and reported.
pub fn compute_blocked_dates_with_status(reservations: &[Reservation], confirmed_status: &str) -> BlockedDates {
    let mut blocked = BlockedDates::default();

    for reservation in reservations.iter().filter(|r| r.status == confirmed_status) {
        let start = match CalendarDate::parse(&reservation.start_date) {
            Ok(date) => date,
            Err(_) => {
                blocked.warnings.push(unparseable(reservation, "start_date", &reservation.start_date));
                continue;
            }
        };
        let end = match CalendarDate::parse(&reservation.end_date) {
            Ok(date) => date,
            Err(_) => {
                blocked.warnings.push(unparseable(reservation, "end_date", &reservation.end_date));
                continue;
            }
        };

        if start > end {
            blocked.warnings.push(DataQualityWarning {
                reservation_id: reservation.id.clone(),
                kind: WarningKind::InvertedRange { start, end },
            });
            continue;
        }

        blocked.dates.extend(start.days_through(end));
    }

    blocked
}

/// First day of `candidate` already blocked by another confirmed reservation in
/// `reservations`. A candidate whose own dates do not parse occupies nothing.
pub fn first_booked_day(
    reservations: &[Reservation],
    candidate: &Reservation,
    confirmed_status: &str,
) -> Option<CalendarDate> {
    let start = CalendarDate::parse(&candidate.start_date).ok()?;
    let end = CalendarDate::parse(&candidate.end_date).ok()?;

    let others: Vec<Reservation> = reservations
        .iter()
        .filter(|r| r.id != candidate.id)
        .cloned()
        .collect();
    let blocked = compute_blocked_dates_with_status(&others, confirmed_status);
    start.days_through(end).find(|d| blocked.contains(*d))
}

fn unparseable(reservation: &Reservation, field: &'static str, value: &str) -> DataQualityWarning {
    DataQualityWarning {
        reservation_id: reservation.id.clone(),
        kind: WarningKind::UnparseableDate { field, value: value.to_string() },
    }
}
