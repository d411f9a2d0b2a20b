use crate::domain::models::calendar_date::{CalendarDate, YearMonth};
use crate::domain::services::availability::BlockedDates;
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabledReason {
    BeforeMinimum,
    Booked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Disabled(DisabledReason),
    Endpoint,
    InRange,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Padding before the 1st so it lands in its weekday column.
    Placeholder,
    Day {
        day: u32,
        date: CalendarDate,
        state: CellState,
    },
}

impl Cell {
    pub fn date(&self) -> Option<CalendarDate> {
        match self {
            Cell::Placeholder => None,
            Cell::Day { date, .. } => Some(*date),
        }
    }

    pub fn state(&self) -> Option<CellState> {
        match self {
            Cell::Placeholder => None,
            Cell::Day { state, .. } => Some(*state),
        }
    }

    /// Whether the presentation layer may forward a click on this cell.
    pub fn is_selectable(&self) -> bool {
        matches!(self, Cell::Day { state, .. } if !matches!(state, CellState::Disabled(_)))
    }
}

/// Cells for one month, produced on demand. Cloning restarts from the first cell.
#[derive(Debug, Clone)]
pub struct MonthGrid<'a> {
    month: YearMonth,
    offset: u32,
    days: u32,
    position: u32,
    min_selectable: CalendarDate,
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
    blocked: &'a BlockedDates,
}

pub fn render_grid<'a>(
    month: YearMonth,
    min_selectable: CalendarDate,
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
    blocked: &'a BlockedDates,
) -> MonthGrid<'a> {
    MonthGrid {
        month,
        offset: month.first_weekday_offset(),
        days: month.days_in_month(),
        position: 0,
        min_selectable,
        start,
        end,
        blocked,
    }
}

impl MonthGrid<'_> {
    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn leading_placeholders(&self) -> u32 {
        self.offset
    }

    fn state_of(&self, date: CalendarDate) -> CellState {
        if date < self.min_selectable {
            return CellState::Disabled(DisabledReason::BeforeMinimum);
        }
        if self.blocked.contains(date) {
            return CellState::Disabled(DisabledReason::Booked);
        }
        if self.start == Some(date) || self.end == Some(date) {
            return CellState::Endpoint;
        }
        if let (Some(a), Some(b)) = (self.start, self.end) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            if lo < date && date < hi {
                return CellState::InRange;
            }
        }
        CellState::Default
    }
}

impl Iterator for MonthGrid<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let total = self.offset + self.days;
        if self.position >= total {
            return None;
        }
        let index = self.position;
        self.position += 1;

        if index < self.offset {
            return Some(Cell::Placeholder);
        }

        let day = index - self.offset + 1;
        let date = CalendarDate::from_ymd(self.month.year(), self.month.month(), day)?;
        Some(Cell::Day {
            day,
            date,
            state: self.state_of(date),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.offset + self.days).saturating_sub(self.position) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MonthGrid<'_> {}

impl FusedIterator for MonthGrid<'_> {}
