use serde::Serialize;
use crate::domain::models::calendar_date::{CalendarDate, YearMonth};
use crate::domain::services::availability::BlockedDates;
use crate::domain::services::month_grid::{Cell, CellState, DisabledReason, MonthGrid};
use crate::domain::services::range_picker::{RangeSelectionState, SelectionPhase};

#[derive(Serialize)]
pub struct SkippedReservation {
    pub reservation_id: String,
    pub reason: String,
}

#[derive(Serialize)]
pub struct BlockedDatesResponse {
    pub resource_id: String,
    pub month: Option<YearMonth>,
    pub dates: Vec<CalendarDate>,
    pub skipped_reservations: Vec<SkippedReservation>,
}

impl BlockedDatesResponse {
    pub fn new(resource_id: String, month: Option<YearMonth>, blocked: &BlockedDates) -> Self {
        let dates = match month {
            Some(m) => blocked.in_month(m).collect(),
            None => blocked.iter().collect(),
        };
        let skipped_reservations = blocked.warnings().iter()
            .map(|w| SkippedReservation {
                reservation_id: w.reservation_id.clone(),
                reason: w.message(),
            })
            .collect();

        Self { resource_id, month, dates, skipped_reservations }
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct CellResponse {
    pub day: Option<u32>,
    pub date: Option<CalendarDate>,
    pub state: &'static str,
    pub selectable: bool,
}

impl From<Cell> for CellResponse {
    fn from(cell: Cell) -> Self {
        let selectable = cell.is_selectable();
        match cell {
            Cell::Placeholder => Self { day: None, date: None, state: "placeholder", selectable },
            Cell::Day { day, date, state } => Self {
                day: Some(day),
                date: Some(date),
                state: match state {
                    CellState::Disabled(DisabledReason::BeforeMinimum) => "disabled",
                    CellState::Disabled(DisabledReason::Booked) => "booked",
                    CellState::Endpoint => "endpoint",
                    CellState::InRange => "in_range",
                    CellState::Default => "default",
                },
                selectable,
            },
        }
    }
}

#[derive(Serialize)]
pub struct CalendarResponse {
    pub resource_id: String,
    pub month: YearMonth,
    pub leading_placeholders: u32,
    pub cells: Vec<CellResponse>,
}

impl CalendarResponse {
    pub fn new(resource_id: String, grid: MonthGrid<'_>) -> Self {
        Self {
            resource_id,
            month: grid.month(),
            leading_placeholders: grid.leading_placeholders(),
            cells: grid.map(CellResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct SelectedRange {
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub nights: i64,
}

#[derive(Serialize)]
pub struct PickerResponse {
    pub state: RangeSelectionState,
    pub phase: SelectionPhase,
    pub changed: bool,
    pub selected_range: Option<SelectedRange>,
    pub calendar: CalendarResponse,
}

impl PickerResponse {
    pub fn new(resource_id: String, state: RangeSelectionState, changed: bool, blocked: &BlockedDates) -> Self {
        let selected_range = state.selected_range().map(|(start_date, end_date)| SelectedRange {
            start_date,
            end_date,
            nights: start_date.days_until(end_date),
        });
        let calendar = CalendarResponse::new(resource_id, state.grid(blocked));

        Self {
            phase: state.phase(),
            state,
            changed,
            selected_range,
            calendar,
        }
    }
}
