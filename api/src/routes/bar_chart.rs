use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use sales_stats::BarChartBucket;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::routes::required_month;
use crate::routes::statistics::MonthQuery;
use crate::state::AppState;

pub(crate) fn envelope(buckets: Vec<BarChartBucket>) -> Value {
    json!({ "success": true, "barChartData": buckets })
}

/// GET /bar-chart-data?month=3
///
/// Ten price buckets in ascending order, including empty ones.
pub async fn get_bar_chart_data(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Value>, AppError> {
    let month = required_month(query.month.as_deref())?;

    let buckets = state
        .stats
        .run(move |s| s.bar_chart().for_month(month))
        .await
        .map_err(|e| {
            tracing::error!("Error fetching bar chart data: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(envelope(buckets)))
}
