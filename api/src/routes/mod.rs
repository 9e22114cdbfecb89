pub mod bar_chart;
pub mod combined;
pub mod health;
pub mod seed;
pub mod statistics;
pub mod transactions;

use sales_stats::Month;

use crate::error::AppError;

/// Resolve the `month` query parameter for endpoints that require it.
///
/// An absent or empty value is a 400. A present value that is not a month
/// 1–12 is accepted and simply matches no records.
pub(crate) fn required_month(month: Option<&str>) -> Result<Option<Month>, AppError> {
    match month {
        None | Some("") => Err(AppError::missing_month()),
        Some(raw) => Ok(Month::parse(raw)),
    }
}
