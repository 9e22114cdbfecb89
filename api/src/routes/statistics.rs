use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use sales_stats::MonthlyStatistics;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::routes::required_month;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}

pub(crate) fn envelope(stats: MonthlyStatistics) -> Value {
    json!({
        "success": true,
        "totalSaleAmount": stats.total_sale_amount,
        "totalSoldItems": stats.total_sold_count,
        "totalNotSoldItems": stats.total_unsold_count,
    })
}

/// GET /statistics?month=3
pub async fn get_statistics(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Value>, AppError> {
    let month = required_month(query.month.as_deref())?;

    let stats = state
        .stats
        .run(move |s| s.statistics().for_month(month))
        .await
        .map_err(|e| {
            tracing::error!("Error fetching statistics: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(envelope(stats)))
}
