//! Monthly price histogram over the fixed [`PRICE_RANGES`].

use crate::config::TRANSACTIONS_TABLE;
use crate::connection::SalesStore;
use crate::error::Result;
use crate::models::{BarChartBucket, Month, PriceRange, PRICE_RANGES};
use crate::sql_builder::SqlBuilder;

use super::filter_month;

pub struct BarChartQuery<'a> {
    store: &'a SalesStore,
}

impl<'a> BarChartQuery<'a> {
    pub fn new(store: &'a SalesStore) -> Self {
        Self { store }
    }

    /// One bucket per price range, ascending, zero counts included.
    pub fn for_month(&self, month: Option<Month>) -> Result<Vec<BarChartBucket>> {
        PRICE_RANGES
            .iter()
            .map(|range| -> Result<BarChartBucket> {
                Ok(BarChartBucket {
                    range: *range,
                    count: self.count_in_range(month, range)?,
                })
            })
            .collect()
    }

    pub fn count_in_range(&self, month: Option<Month>, range: &PriceRange) -> Result<i64> {
        let mut qb = SqlBuilder::new(TRANSACTIONS_TABLE);
        qb.select(&["COUNT(*) AS cnt"]);
        filter_month(&mut qb, month);
        qb.where_gte("price", &range.min.to_string());
        if !range.is_open() {
            qb.where_lt("price", &range.max.to_string());
        }

        let (sql, params) = qb.build();
        self.store.execute_count(&sql, &params)
    }
}
