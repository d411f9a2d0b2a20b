use std::sync::Arc;
use crate::domain::ports::ReservationRepository;
use crate::domain::services::availability::{compute_blocked_dates_with_status, BlockedDates};
use crate::error::AppError;
use tracing::{debug, error, warn};

pub struct AvailabilityService {
    repo: Arc<dyn ReservationRepository>,
    confirmed_status: String,
}

impl AvailabilityService {
    pub fn new(repo: Arc<dyn ReservationRepository>, confirmed_status: String) -> Self {
        Self { repo, confirmed_status }
    }

    pub async fn blocked_dates(&self, resource_id: &str) -> Result<BlockedDates, AppError> {
        let reservations = self.repo.list_by_resource(resource_id).await?;
        let blocked = compute_blocked_dates_with_status(&reservations, &self.confirmed_status);

        for warning in blocked.warnings() {
            warn!(
                resource_id = %resource_id,
                reservation_id = %warning.reservation_id,
                "Reservation skipped while blocking dates: {}", warning.message()
            );
        }
        debug!(
            "Blocked {} days for resource {} from {} reservations",
            blocked.len(), resource_id, reservations.len()
        );

        Ok(blocked)
    }

    /// Same as `blocked_dates`, but a failed lookup is treated as "nothing booked"
    /// so the picker stays usable. The booking itself is still checked on submit.
    pub async fn blocked_dates_or_empty(&self, resource_id: &str) -> BlockedDates {
        match self.blocked_dates(resource_id).await {
            Ok(blocked) => blocked,
            Err(e) => {
                error!("Failed to load reservations for {}: {:?}", resource_id, e);
                BlockedDates::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::calendar_date::CalendarDate;
    use crate::domain::models::reservation::Reservation;
    use async_trait::async_trait;
    use chrono::Utc;

    struct FixedRepo(Vec<Reservation>);

    #[async_trait]
    impl ReservationRepository for FixedRepo {
        async fn create(&self, reservation: &Reservation) -> Result<Reservation, AppError> {
            Ok(reservation.clone())
        }
        async fn create_confirmed(&self, reservation: &Reservation, _confirmed_status: &str) -> Result<Reservation, AppError> {
            Ok(reservation.clone())
        }
        async fn find_by_id(&self, _id: &str) -> Result<Option<Reservation>, AppError> {
            Ok(None)
        }
        async fn list_by_resource(&self, resource_id: &str) -> Result<Vec<Reservation>, AppError> {
            Ok(self.0.iter().filter(|r| r.resource_id == resource_id).cloned().collect())
        }
        async fn update_status(&self, _id: &str, _status: &str) -> Result<Reservation, AppError> {
            Err(AppError::Internal)
        }
        async fn confirm(&self, _id: &str, _confirmed_status: &str) -> Result<Reservation, AppError> {
            Err(AppError::Internal)
        }
        async fn delete(&self, _id: &str) -> Result<(), AppError> {
            Ok(())
        }
    }

    struct BrokenRepo;

    #[async_trait]
    impl ReservationRepository for BrokenRepo {
        async fn create(&self, _reservation: &Reservation) -> Result<Reservation, AppError> {
            Err(AppError::Internal)
        }
        async fn create_confirmed(&self, _reservation: &Reservation, _confirmed_status: &str) -> Result<Reservation, AppError> {
            Err(AppError::Internal)
        }
        async fn find_by_id(&self, _id: &str) -> Result<Option<Reservation>, AppError> {
            Err(AppError::Internal)
        }
        async fn list_by_resource(&self, _resource_id: &str) -> Result<Vec<Reservation>, AppError> {
            Err(AppError::InternalWithMsg("connection reset".into()))
        }
        async fn update_status(&self, _id: &str, _status: &str) -> Result<Reservation, AppError> {
            Err(AppError::Internal)
        }
        async fn confirm(&self, _id: &str, _confirmed_status: &str) -> Result<Reservation, AppError> {
            Err(AppError::Internal)
        }
        async fn delete(&self, _id: &str) -> Result<(), AppError> {
            Err(AppError::Internal)
        }
    }

    fn row(resource_id: &str, start: &str, end: &str, status: &str) -> Reservation {
        Reservation {
            id: format!("{}-{}", resource_id, start),
            resource_id: resource_id.to_string(),
            guest_name: "Guest".to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            status: status.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_blocked_dates_for_one_resource() {
        let repo = Arc::new(FixedRepo(vec![
            row("room-1", "2024-09-02", "2024-09-03", "Success"),
            row("room-2", "2024-09-10", "2024-09-12", "Success"),
        ]));
        let service = AvailabilityService::new(repo, "Success".into());

        let blocked = service.blocked_dates("room-1").await.unwrap();
        assert_eq!(blocked.len(), 2);
        assert!(!blocked.contains(CalendarDate::parse("2024-09-10").unwrap()));
    }

    #[tokio::test]
    async fn test_configured_status_is_used() {
        let repo = Arc::new(FixedRepo(vec![row("room-1", "2024-09-02", "2024-09-03", "Success")]));
        let service = AvailabilityService::new(repo, "Paid".into());
        assert!(service.blocked_dates("room-1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_lookup_degrades_to_nothing_blocked() {
        let service = AvailabilityService::new(Arc::new(BrokenRepo), "Success".into());
        assert!(service.blocked_dates("room-1").await.is_err());
        assert!(service.blocked_dates_or_empty("room-1").await.is_empty());
    }
}
