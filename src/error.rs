use crate::config::ConfigError;
use crate::datasource::SnapshotError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}
