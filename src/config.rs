//! Server configuration

use std::path::PathBuf;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration, collected from the environment at process start
/// and passed by reference into [`crate::state::AppState::new`].
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Root directory for photo assets
    pub photo_dir: PathBuf,
    /// Reference timezone as a fixed UTC offset in hours.
    /// Opening hours are interpreted as wall-clock times in this offset.
    pub utc_offset_hours: i32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let utc_offset_hours: i32 = std::env::var("UTC_OFFSET_HOURS")
            .ok()
            .map(|v| v.parse())
            .transpose()
            .map_err(|_| "UTC_OFFSET_HOURS must be an integer")?
            .unwrap_or(9);
        if !(-23..=23).contains(&utc_offset_hours) {
            return Err("UTC_OFFSET_HOURS must be between -23 and 23".into());
        }

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            photo_dir: std::env::var("PHOTO_DIR")
                .unwrap_or_else(|_| "photo".into())
                .into(),
            utc_offset_hours,
        })
    }
}
