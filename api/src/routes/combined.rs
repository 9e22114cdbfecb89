use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use sales_stats::queries::ListTransactionsParams;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::routes::statistics::MonthQuery;
use crate::routes::{bar_chart, required_month, statistics, transactions};
use crate::state::AppState;

/// GET /combined-data?month=3
///
/// The transactions (default paging, no search), statistics and bar-chart
/// envelopes for one month, each computed independently. If any of the three
/// fails the whole request fails with 500 and the first error; no partial
/// result is returned.
pub async fn get_combined_data(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Value>, AppError> {
    let month = required_month(query.month.as_deref())?;

    let (page, stats, buckets) = tokio::try_join!(
        state
            .stats
            .run(move |s| s.transactions().list(&ListTransactionsParams::for_month(month))),
        state.stats.run(move |s| s.statistics().for_month(month)),
        state.stats.run(move |s| s.bar_chart().for_month(month)),
    )
    .map_err(|e| {
        tracing::error!("Error fetching combined data: {}", e);
        AppError::gateway(e.to_string())
    })?;

    Ok(Json(json!({
        "success": true,
        "combinedData": {
            "transactions": transactions::envelope(page),
            "statistics": statistics::envelope(stats),
            "barChartData": bar_chart::envelope(buckets),
        }
    })))
}
