//! Error kinds raised while loading the dataset and exporting cards.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("dataset request failed with HTTP status {0}")]
    Status(u16),
    #[error("dataset request failed: {0}")]
    Network(String),
    #[error("dataset is not a JSON array of university records: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("browser window or document is not available")]
    NoWindow,
    #[error("card element `{0}` not found")]
    CardNotFound(String),
    #[error("failed to rasterize card: {0}")]
    Rasterize(String),
    #[error("failed to start download: {0}")]
    Download(String),
}
