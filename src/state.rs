use std::sync::Arc;
use crate::domain::ports::{ReservationRepository, ResourceRepository};
use crate::domain::services::availability_service::AvailabilityService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub resource_repo: Arc<dyn ResourceRepository>,
    pub reservation_repo: Arc<dyn ReservationRepository>,
    pub availability_service: Arc<AvailabilityService>,
}

impl AppState {
    pub fn new(
        config: Config,
        resource_repo: Arc<dyn ResourceRepository>,
        reservation_repo: Arc<dyn ReservationRepository>,
    ) -> Self {
        let availability_service = Arc::new(AvailabilityService::new(
            reservation_repo.clone(),
            config.confirmed_status.clone(),
        ));
        Self {
            config,
            resource_repo,
            reservation_repo,
            availability_service,
        }
    }
}
