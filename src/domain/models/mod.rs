pub mod calendar_date;
pub mod reservation;
pub mod resource;
