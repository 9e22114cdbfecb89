use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// GET /initialize-database
///
/// Download the seed feed and append it to the store. Calling it again
/// appends another copy.
pub async fn initialize_database(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let inserted = state.stats.initialize().await.map_err(|e| {
        tracing::error!("Error initializing database: {}", e);
        AppError::from(e)
    })?;

    Ok(Json(json!({
        "success": true,
        "message": "Database initialized successfully",
        "insertedCount": inserted,
    })))
}
