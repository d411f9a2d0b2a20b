use crate::domain::models::calendar_date::{CalendarDate, YearMonth};
use crate::domain::services::availability::BlockedDates;
use crate::domain::services::month_grid::{render_grid, MonthGrid};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionPhase {
    Empty,
    StartOnly,
    Complete,
}

/// Selection held by one range picker: which month is shown, the earliest day
/// that may be picked, and the endpoints chosen so far.
///
/// Either no endpoint is set, only `start_date` is set, or
/// `start_date <= end_date`. Deserialized input is reordered to satisfy this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SelectionSnapshot")]
pub struct RangeSelectionState {
    visible_month: YearMonth,
    min_selectable: CalendarDate,
    start_date: Option<CalendarDate>,
    end_date: Option<CalendarDate>,
}

#[derive(Deserialize)]
struct SelectionSnapshot {
    visible_month: YearMonth,
    min_selectable: CalendarDate,
    #[serde(default)]
    start_date: Option<CalendarDate>,
    #[serde(default)]
    end_date: Option<CalendarDate>,
}

impl From<SelectionSnapshot> for RangeSelectionState {
    fn from(raw: SelectionSnapshot) -> Self {
        let (start_date, end_date) = match (raw.start_date, raw.end_date) {
            (None, Some(end)) => (Some(end), None),
            (Some(start), Some(end)) if end < start => (Some(end), Some(start)),
            other => other,
        };
        Self {
            visible_month: raw.visible_month,
            min_selectable: raw.min_selectable,
            start_date,
            end_date,
        }
    }
}

impl RangeSelectionState {
    pub fn new(visible_month: YearMonth, min_selectable: CalendarDate) -> Self {
        Self {
            visible_month,
            min_selectable,
            start_date: None,
            end_date: None,
        }
    }

    /// Empty selection showing the month of `min_selectable`.
    pub fn starting_at(min_selectable: CalendarDate) -> Self {
        Self::new(YearMonth::of(min_selectable), min_selectable)
    }

    pub fn visible_month(&self) -> YearMonth {
        self.visible_month
    }

    pub fn min_selectable(&self) -> CalendarDate {
        self.min_selectable
    }

    pub fn start_date(&self) -> Option<CalendarDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<CalendarDate> {
        self.end_date
    }

    pub fn phase(&self) -> SelectionPhase {
        match (self.start_date, self.end_date) {
            (None, _) => SelectionPhase::Empty,
            (Some(_), None) => SelectionPhase::StartOnly,
            (Some(_), Some(_)) => SelectionPhase::Complete,
        }
    }

    /// The chosen range once both endpoints are set.
    pub fn selected_range(&self) -> Option<(CalendarDate, CalendarDate)> {
        self.start_date.zip(self.end_date)
    }

    /// Applies a click on `date`. Returns `false` and leaves the state alone when
    /// `date` is before the minimum selectable day.
    ///
    /// An earlier click while only the start is set moves the start; a click on
    /// or after it completes the range. A click on a complete range starts over.
    pub fn pick(&mut self, date: CalendarDate) -> bool {
        if date < self.min_selectable {
            return false;
        }

        match (self.start_date, self.end_date) {
            (Some(start), None) if date >= start => {
                self.end_date = Some(date);
            }
            _ => {
                self.start_date = Some(date);
                self.end_date = None;
            }
        }
        true
    }

    /// Moves the visible month by `delta` months. The selection is untouched.
    pub fn navigate_month(&mut self, delta: i32) {
        if let Some(month) = self.visible_month.checked_add_months(delta) {
            self.visible_month = month;
        }
    }

    pub fn reset(&mut self) {
        self.start_date = None;
        self.end_date = None;
    }

    pub fn grid<'a>(&self, blocked: &'a BlockedDates) -> MonthGrid<'a> {
        render_grid(self.visible_month, self.min_selectable, self.start_date, self.end_date, blocked)
    }
}

/// A selection paired with the blocked days of the resource being booked.
/// Clicks are dispatched through here so booked days never reach `pick`.
#[derive(Debug, Clone)]
pub struct RangePicker {
    state: RangeSelectionState,
    blocked: BlockedDates,
}

impl RangePicker {
    pub fn new(state: RangeSelectionState, blocked: BlockedDates) -> Self {
        Self { state, blocked }
    }

    pub fn state(&self) -> &RangeSelectionState {
        &self.state
    }

    pub fn blocked(&self) -> &BlockedDates {
        &self.blocked
    }

    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        date < self.state.min_selectable || self.blocked.contains(date)
    }

    pub fn dispatch_pick(&mut self, date: CalendarDate) -> bool {
        if self.blocked.contains(date) {
            return false;
        }
        self.state.pick(date)
    }

    pub fn navigate_month(&mut self, delta: i32) {
        self.state.navigate_month(delta);
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Swaps in a freshly built set, e.g. once reservations have loaded.
    pub fn replace_blocked(&mut self, blocked: BlockedDates) {
        self.blocked = blocked;
    }

    pub fn grid(&self) -> MonthGrid<'_> {
        self.state.grid(&self.blocked)
    }
}
