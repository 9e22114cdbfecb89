use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SaleRecord — One product sale as stored from the seed feed
// ---------------------------------------------------------------------------

/// Fields are optional because feed records are stored without validation.
/// `date_of_sale` is an ISO-8601 UTC string, or `None` when the feed value
/// could not be parsed as a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub sold: Option<bool>,
    pub date_of_sale: Option<String>,
}
