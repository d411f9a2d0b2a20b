use crate::domain::models::calendar_date::CalendarDate;
use crate::domain::services::range_picker::RangeSelectionState;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateResourceRequest {
    pub kind: String,
    pub name: String,
}

#[derive(Deserialize)]
pub struct CreateReservationRequest {
    pub guest_name: String,
    pub start_date: String,
    pub end_date: String,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateReservationStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct PickRequest {
    pub state: RangeSelectionState,
    pub date: CalendarDate,
}

#[derive(Deserialize)]
pub struct NavigateRequest {
    pub state: RangeSelectionState,
    pub delta: i32,
}
