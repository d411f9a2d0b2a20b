pub mod calendar;
pub mod health;
pub mod picker;
pub mod reservation;
pub mod resource;
