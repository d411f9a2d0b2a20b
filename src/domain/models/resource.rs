use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const KIND_ROOM: &str = "ROOM";
pub const KIND_TOUR: &str = "TOUR";

/// Something a guest can reserve for a range of days: a hotel room or a tour.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Resource {
    pub id: String,
    pub kind: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Resource {
    pub fn new(kind: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            name,
            created_at: Utc::now(),
        }
    }

    pub fn is_valid_kind(kind: &str) -> bool {
        matches!(kind, KIND_ROOM | KIND_TOUR)
    }
}
