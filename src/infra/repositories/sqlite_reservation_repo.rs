use crate::domain::{models::reservation::Reservation, ports::ReservationRepository};
use crate::domain::services::availability::first_booked_day;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};

pub struct SqliteReservationRepo {
    pool: SqlitePool,
}

impl SqliteReservationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

async fn insert(conn: &mut SqliteConnection, reservation: &Reservation) -> Result<Reservation, AppError> {
    sqlx::query_as::<_, Reservation>(
        "INSERT INTO reservations (id, resource_id, guest_name, start_date, end_date, status, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)
         RETURNING *"
    )
        .bind(&reservation.id).bind(&reservation.resource_id).bind(&reservation.guest_name)
        .bind(&reservation.start_date).bind(&reservation.end_date).bind(&reservation.status)
        .bind(reservation.created_at)
        .fetch_one(conn).await.map_err(AppError::Database)
}

async fn list_for_resource(conn: &mut SqliteConnection, resource_id: &str) -> Result<Vec<Reservation>, AppError> {
    sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE resource_id = ? ORDER BY start_date ASC").bind(resource_id).fetch_all(conn).await.map_err(AppError::Database)
}

#[async_trait]
impl ReservationRepository for SqliteReservationRepo {
    async fn create(&self, reservation: &Reservation) -> Result<Reservation, AppError> {
        let mut conn = self.pool.acquire().await.map_err(AppError::Database)?;
        insert(&mut conn, reservation).await
    }
    async fn create_confirmed(&self, reservation: &Reservation, confirmed_status: &str) -> Result<Reservation, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        // Write before reading: concurrent checks then queue on the database lock instead of sharing a snapshot.
        sqlx::query("UPDATE resources SET name = name WHERE id = ?").bind(&reservation.resource_id).execute(&mut *tx).await.map_err(AppError::Database)?;

        let existing = list_for_resource(&mut tx, &reservation.resource_id).await?;
        if let Some(taken) = first_booked_day(&existing, reservation, confirmed_status) {
            return Err(AppError::Conflict(format!("{} is already booked", taken)));
        }

        let created = insert(&mut tx, reservation).await?;
        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_resource(&self, resource_id: &str) -> Result<Vec<Reservation>, AppError> {
        let mut conn = self.pool.acquire().await.map_err(AppError::Database)?;
        list_for_resource(&mut conn, resource_id).await
    }
    async fn update_status(&self, id: &str, status: &str) -> Result<Reservation, AppError> {
        sqlx::query_as::<_, Reservation>("UPDATE reservations SET status = ? WHERE id = ? RETURNING *")
            .bind(status).bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Reservation not found".into()))
    }
    async fn confirm(&self, id: &str, confirmed_status: &str) -> Result<Reservation, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        // Same lock-first rule as `create_confirmed`.
        let current = sqlx::query_as::<_, Reservation>("UPDATE reservations SET status = status WHERE id = ? RETURNING *")
            .bind(id)
            .fetch_optional(&mut *tx).await.map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Reservation not found".into()))?;

        let existing = list_for_resource(&mut tx, &current.resource_id).await?;
        if let Some(taken) = first_booked_day(&existing, &current, confirmed_status) {
            return Err(AppError::Conflict(format!("{} is already booked", taken)));
        }

        let confirmed = sqlx::query_as::<_, Reservation>("UPDATE reservations SET status = ? WHERE id = ? RETURNING *")
            .bind(confirmed_status).bind(id)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;
        tx.commit().await.map_err(AppError::Database)?;
        Ok(confirmed)
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = ?").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Reservation not found".into())); }
        Ok(())
    }
}
