#[derive(Debug, thiserror::Error)]
pub enum SalesError {
    #[error("Failed to fetch seed data: {0}")]
    UpstreamFetch(String),

    #[error("Failed to insert seed data: {0}")]
    StoreWrite(#[source] duckdb::Error),

    #[error("Query failed: {0}")]
    StoreQuery(#[from] duckdb::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for SalesError {
    fn from(e: reqwest::Error) -> Self {
        SalesError::UpstreamFetch(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SalesError>;
