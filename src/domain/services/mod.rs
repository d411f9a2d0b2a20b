pub mod availability;
pub mod availability_service;
pub mod month_grid;
pub mod range_picker;
