use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use crate::domain::models::calendar_date::CalendarDate;

pub const STATUS_SUCCESS: &str = "Success";
pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_CANCELLED: &str = "Cancelled";
pub const STATUS_FAILED: &str = "Failed";

pub const KNOWN_STATUSES: [&str; 4] = [STATUS_SUCCESS, STATUS_PENDING, STATUS_CANCELLED, STATUS_FAILED];

/// A booking of a room or tour. Dates are kept as the raw strings the
/// reservation source delivered; they are parsed when blocked dates are built.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Reservation {
    pub id: String,
    pub resource_id: String,
    pub guest_name: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewReservationParams {
    pub resource_id: String,
    pub guest_name: String,
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub status: Option<String>,
}

impl Reservation {
    pub fn new(params: NewReservationParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            resource_id: params.resource_id,
            guest_name: params.guest_name,
            start_date: params.start_date.to_string(),
            end_date: params.end_date.to_string(),
            status: params.status.unwrap_or_else(|| STATUS_PENDING.to_string()),
            created_at: Utc::now(),
        }
    }
}
