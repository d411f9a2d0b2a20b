use crate::domain::models::{reservation::Reservation, resource::Resource};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait ResourceRepository: Send + Sync {
    async fn create(&self, resource: &Resource) -> Result<Resource, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Resource>, AppError>;
    async fn list(&self) -> Result<Vec<Resource>, AppError>;
}

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn create(&self, reservation: &Reservation) -> Result<Reservation, AppError>;
    /// Inserts `reservation` unless another `confirmed_status` reservation of the
    /// same resource holds one of its days. Check and insert are atomic.
    async fn create_confirmed(&self, reservation: &Reservation, confirmed_status: &str) -> Result<Reservation, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, AppError>;
    async fn list_by_resource(&self, resource_id: &str) -> Result<Vec<Reservation>, AppError>;
    async fn update_status(&self, id: &str, status: &str) -> Result<Reservation, AppError>;
    /// Moves a reservation to `confirmed_status` under the same atomic overlap check.
    async fn confirm(&self, id: &str, confirmed_status: &str) -> Result<Reservation, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
