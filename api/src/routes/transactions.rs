use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use sales_stats::config::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use sales_stats::queries::ListTransactionsParams;
use sales_stats::{Month, TransactionPage};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub search_title: Option<String>,
    pub month: Option<String>,
}

impl TransactionsQuery {
    /// Unparseable or non-positive paging falls back to the defaults. A
    /// missing month is kept as `None`, which lists nothing.
    pub fn into_params(self) -> ListTransactionsParams {
        ListTransactionsParams {
            page: positive_or(self.page.as_deref(), DEFAULT_PAGE),
            per_page: positive_or(self.per_page.as_deref(), DEFAULT_PER_PAGE),
            month: self.month.as_deref().and_then(Month::parse),
            search_title: self.search_title.filter(|s| !s.is_empty()),
        }
    }
}

fn positive_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

pub(crate) fn envelope(page: TransactionPage) -> Value {
    json!({
        "success": true,
        "transactions": page.records,
        "totalRecords": page.total_matching,
        "page": page.page,
        "perPage": page.per_page,
    })
}

/// GET /transactions?page=1&perPage=10&searchTitle=shirt&month=3
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TransactionsQuery>,
) -> Result<Json<Value>, AppError> {
    let params = query.into_params();
    let page = state
        .stats
        .run(move |s| s.transactions().list(&params))
        .await
        .map_err(|e| {
            tracing::error!("Error fetching transactions: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(envelope(page)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, per_page: Option<&str>) -> TransactionsQuery {
        TransactionsQuery {
            page: page.map(str::to_string),
            per_page: per_page.map(str::to_string),
            search_title: None,
            month: None,
        }
    }

    #[test]
    fn paging_defaults_when_absent_or_invalid() {
        for (page, per_page) in [(None, None), (Some("0"), Some("-5")), (Some("abc"), Some(""))] {
            let params = query(page, per_page).into_params();
            assert_eq!(params.page, 1);
            assert_eq!(params.per_page, 10);
        }
    }

    #[test]
    fn explicit_paging_is_kept() {
        let params = query(Some("3"), Some("25")).into_params();
        assert_eq!(params.page, 3);
        assert_eq!(params.per_page, 25);
    }
}
