use std::env;
use chrono_tz::Tz;
use crate::domain::models::reservation::STATUS_SUCCESS;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub confirmed_status: String, // Case-sensitive
    pub timezone: Tz, // IANA name, e.g. Europe/Berlin
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://booking-calendar.db?mode=rwc".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            confirmed_status: env::var("CONFIRMED_STATUS").unwrap_or_else(|_| STATUS_SUCCESS.to_string()),
            timezone: env::var("CALENDAR_TIMEZONE")
                .ok()
                .and_then(|tz| tz.parse().ok())
                .unwrap_or(chrono_tz::UTC),
        }
    }
}
