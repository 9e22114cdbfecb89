use serde::{Deserialize, Serialize};

use super::price_range::PriceRange;
use super::sale::SaleRecord;

// ---------------------------------------------------------------------------
// TransactionPage — One window of a filtered listing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub records: Vec<SaleRecord>,
    /// Matches across all pages, ignoring the page window.
    pub total_matching: i64,
    pub page: usize,
    pub per_page: usize,
}

// ---------------------------------------------------------------------------
// MonthlyStatistics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStatistics {
    pub total_sale_amount: f64,
    pub total_sold_count: i64,
    pub total_unsold_count: i64,
}

// ---------------------------------------------------------------------------
// BarChartBucket
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartBucket {
    pub range: PriceRange,
    pub count: i64,
}
