use booking_calendar::{
    api::router::create_router,
    state::AppState,
    config::Config,
    infra::factory::run_sqlite_migrations,
    infra::repositories::{
        sqlite_reservation_repo::SqliteReservationRepo,
        sqlite_resource_repo::SqliteResourceRepo,
    },
};
use sqlx::{sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions}, Pool, Sqlite};
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, header},
    Router,
};
use std::str::FromStr;
use tower::ServiceExt;
use serde_json::Value;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        run_sqlite_migrations(&pool).await;

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            confirmed_status: "Success".to_string(),
            timezone: chrono_tz::UTC,
        };

        let state = Arc::new(AppState::new(
            config,
            Arc::new(SqliteResourceRepo::new(pool.clone())),
            Arc::new(SqliteReservationRepo::new(pool.clone())),
        ));

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn get(&self, uri: &str) -> (u16, Value) {
        let response = self.router.clone().oneshot(
            Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
        ).await.unwrap();
        let status = response.status().as_u16();
        (status, parse_body(response).await)
    }

    pub async fn send(&self, method: &str, uri: &str, payload: Value) -> (u16, Value) {
        let response = self.router.clone().oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();
        let status = response.status().as_u16();
        (status, parse_body(response).await)
    }

    pub async fn create_resource(&self, kind: &str, name: &str) -> String {
        let (status, body) = self.send("POST", "/api/v1/resources", serde_json::json!({
            "kind": kind,
            "name": name
        })).await;
        assert_eq!(status, 201, "resource creation failed: {}", body);
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn reserve(&self, resource_id: &str, start: &str, end: &str, status: &str) -> Value {
        let (code, body) = self.send(
            "POST",
            &format!("/api/v1/resources/{}/reservations", resource_id),
            serde_json::json!({
                "guest_name": "Test Guest",
                "start_date": start,
                "end_date": end,
                "status": status
            }),
        ).await;
        assert_eq!(code, 201, "reservation failed: {}", body);
        body
    }

    /// Writes a row directly, bypassing API validation, like data from an older client.
    pub async fn insert_raw_reservation(&self, resource_id: &str, start: &str, end: &str, status: &str) -> String {
        let id = Uuid::new_v4().to_string();
        sqlx::query("INSERT INTO reservations (id, resource_id, guest_name, start_date, end_date, status, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)")
            .bind(&id).bind(resource_id).bind("Legacy Guest").bind(start).bind(end).bind(status).bind(chrono::Utc::now())
            .execute(&self.pool).await.unwrap();
        id
    }
}

pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
