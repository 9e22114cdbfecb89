//! Query modules for the sales store.
//!
//! Each module provides a query struct that borrows from a
//! [`SalesStore`](crate::connection::SalesStore) and exposes methods returning
//! `Result<T>` with typed report payloads. All month-scoped queries share the
//! predicate built by [`filter_month`].

pub mod bar_chart;
pub mod statistics;
pub mod transactions;

pub use bar_chart::BarChartQuery;
pub use statistics::StatisticsQuery;
pub use transactions::{ListTransactionsParams, TransactionQuery};

use crate::models::Month;
use crate::sql_builder::SqlBuilder;

/// Restrict a query to sales dated in `month`, irrespective of year.
///
/// A missing month matches no rows, and so does a NULL sale date.
pub(crate) fn filter_month(qb: &mut SqlBuilder, month: Option<Month>) {
    match month {
        Some(m) => {
            qb.where_clause("month(dateOfSale) = ?", &[&m.to_string()]);
        }
        None => {
            qb.where_false();
        }
    }
}
