//! Monthly sale totals.

use crate::config::TRANSACTIONS_TABLE;
use crate::connection::SalesStore;
use crate::error::Result;
use crate::models::{Month, MonthlyStatistics};
use crate::sql_builder::SqlBuilder;

use super::filter_month;

pub struct StatisticsQuery<'a> {
    store: &'a SalesStore,
}

impl<'a> StatisticsQuery<'a> {
    pub fn new(store: &'a SalesStore) -> Self {
        Self { store }
    }

    /// Sum of sold prices plus sold and unsold counts for one month.
    ///
    /// Each figure is its own aggregate query over the same month predicate.
    pub fn for_month(&self, month: Option<Month>) -> Result<MonthlyStatistics> {
        let total_sale_amount = self.total_sale_amount(month)?;
        let total_sold_count = self.count_by_sold(month, true)?;
        let total_unsold_count = self.count_by_sold(month, false)?;

        Ok(MonthlyStatistics {
            total_sale_amount,
            total_sold_count,
            total_unsold_count,
        })
    }

    /// Sum of `price` over sold records; 0 when nothing sold.
    pub fn total_sale_amount(&self, month: Option<Month>) -> Result<f64> {
        let mut qb = SqlBuilder::new(TRANSACTIONS_TABLE);
        qb.select(&["COALESCE(SUM(price), 0) AS total_amount"])
            .where_eq("sold", "true");
        filter_month(&mut qb, month);

        let (sql, params) = qb.build();
        Ok(self
            .store
            .execute_scalar(&sql, &params)?
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0))
    }

    pub fn count_by_sold(&self, month: Option<Month>, sold: bool) -> Result<i64> {
        let mut qb = SqlBuilder::new(TRANSACTIONS_TABLE);
        qb.select(&["COUNT(*) AS cnt"])
            .where_eq("sold", &sold.to_string());
        filter_month(&mut qb, month);

        let (sql, params) = qb.build();
        self.store.execute_count(&sql, &params)
    }
}
