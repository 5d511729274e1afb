use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tracing::error;

use crate::links::DEFAULT_UPSTREAM_BASE;
use crate::loader::RecordStore;
use crate::notify::InterestNotifier;

#[derive(Clone)]
pub struct AppState {
    pub records: RecordStore,
    pub notifier: InterestNotifier,
    events: InterestEventLog,
}

impl AppState {
    pub async fn new() -> Result<Self> {
        let data_dir = std::env::var("PREVIEW_DATA_DIR").unwrap_or_else(|_| "data".to_string());
        let upstream_base = std::env::var("UPSTREAM_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE.to_string());
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://previews.db".to_string());

        let events = InterestEventLog::initialize(&database_url).await?;

        Ok(Self {
            records: RecordStore::new(data_dir),
            notifier: InterestNotifier::new(upstream_base),
            events,
        })
    }

    /// Best-effort: a failed write is logged and dropped, never surfaced to
    /// the visitor.
    pub async fn record_interest(&self, prospect_id: &str, outcome: &str) {
        if let Err(err) = self.events.record(prospect_id, outcome).await {
            error!(?err, prospect_id = %prospect_id, outcome = %outcome, "failed to store interest event");
        }
    }
}

/// Local log of interest clicks, one row per submission outcome.
#[derive(Clone)]
struct InterestEventLog {
    pool: SqlitePool,
}

impl InterestEventLog {
    async fn initialize(database_url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .with_context(|| format!("failed to connect to database at {database_url}"))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS interest_events (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                prospect_id TEXT NOT NULL,
                outcome TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .context("failed to initialize interest_events table")?;

        Ok(Self { pool })
    }

    async fn record(&self, prospect_id: &str, outcome: &str) -> sqlx::Result<()> {
        sqlx::query(
            "INSERT INTO interest_events (prospect_id, outcome, created_at) VALUES (?1, ?2, ?3)",
        )
        .bind(prospect_id)
        .bind(outcome)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map(|_| ())
    }
}
