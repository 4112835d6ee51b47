//! Application state for baedal-api

use std::path::PathBuf;
use std::time::Duration;

use chrono::FixedOffset;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state, cloned into every handler
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool. Checkouts are scoped per query, so the
    /// connection is returned on every exit path.
    pub pool: PgPool,
    /// Root directory for photo assets
    pub photo_dir: PathBuf,
    /// Reference timezone for the open/closed window check
    pub tz: FixedOffset,
}

impl AppState {
    /// Create a new AppState
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect(&config.database_url)
            .await?;
        tracing::info!("Database pool ready");

        let tz = FixedOffset::east_opt(config.utc_offset_hours * 3600)
            .ok_or("invalid UTC offset")?;

        Ok(Self {
            pool,
            photo_dir: config.photo_dir.clone(),
            tz,
        })
    }

    /// Current wall-clock time in the reference timezone.
    pub fn local_now(&self) -> chrono::NaiveDateTime {
        chrono::Utc::now().with_timezone(&self.tz).naive_local()
    }
}
