//! Paginated transaction listing with month and title filters.

use crate::config::{DEFAULT_PAGE, DEFAULT_PER_PAGE, TRANSACTIONS_TABLE};
use crate::connection::SalesStore;
use crate::error::Result;
use crate::models::{Month, SaleRecord, TransactionPage};
use crate::sql_builder::SqlBuilder;

use super::filter_month;

/// Columns returned for each listed record. The sale date is rendered as an
/// ISO-8601 UTC string with millisecond precision.
const LISTING_COLUMNS: &[&str] = &[
    "id",
    "title",
    "price",
    "description",
    "category",
    "image",
    "sold",
    "strftime(dateOfSale, '%Y-%m-%dT%H:%M:%S.%gZ') AS dateOfSale",
];

/// Parameters for [`TransactionQuery::list`].
#[derive(Debug, Clone)]
pub struct ListTransactionsParams {
    pub page: usize,
    pub per_page: usize,
    pub month: Option<Month>,
    pub search_title: Option<String>,
}

impl Default for ListTransactionsParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            month: None,
            search_title: None,
        }
    }
}

impl ListTransactionsParams {
    /// Default paging for the given month, no title search.
    pub fn for_month(month: Option<Month>) -> Self {
        Self {
            month,
            ..Default::default()
        }
    }
}

/// Query interface over the `transactions` table.
pub struct TransactionQuery<'a> {
    store: &'a SalesStore,
}

impl<'a> TransactionQuery<'a> {
    pub fn new(store: &'a SalesStore) -> Self {
        Self { store }
    }

    /// List one page of transactions matching the month and title filters.
    ///
    /// Rows come back in insertion order, so repeated calls with no
    /// intervening writes see the same pages. `page` and `per_page` below 1
    /// are clamped to 1. A page past the last match is empty, however large
    /// `page` and `per_page` are.
    pub fn list(&self, params: &ListTransactionsParams) -> Result<TransactionPage> {
        let page = params.page.max(1);
        let per_page = params.per_page.max(1);

        let total_matching = self.count(params.month, params.search_title.as_deref())?;
        let total = usize::try_from(total_matching).unwrap_or(0);

        let records = match (page - 1).checked_mul(per_page) {
            Some(offset) if offset < total => {
                let mut qb = self.filtered(params.month, params.search_title.as_deref());
                qb.select(LISTING_COLUMNS)
                    .order_by(&["rowid ASC"])
                    .limit(per_page.min(total - offset))
                    .offset(offset);

                let (sql, sql_params) = qb.build();
                self.store.execute_into::<SaleRecord>(&sql, &sql_params)?
            }
            _ => Vec::new(),
        };

        Ok(TransactionPage {
            records,
            total_matching,
            page,
            per_page,
        })
    }

    /// Count transactions matching the filters, without paging.
    pub fn count(&self, month: Option<Month>, search_title: Option<&str>) -> Result<i64> {
        let mut qb = self.filtered(month, search_title);
        qb.select(&["COUNT(*) AS cnt"]);
        let (sql, params) = qb.build();
        self.store.execute_count(&sql, &params)
    }

    fn filtered(&self, month: Option<Month>, search_title: Option<&str>) -> SqlBuilder {
        let mut qb = SqlBuilder::new(TRANSACTIONS_TABLE);
        if let Some(title) = search_title.filter(|t| !t.is_empty()) {
            qb.where_contains("title", title);
        }
        filter_month(&mut qb, month);
        qb
    }
}
