use std::time::Duration;

/// Seed feed holding the full array of product-sale records.
pub const SEED_URL: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

/// DuckDB path that opens a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// Name of the single table holding every sale record.
pub const TRANSACTIONS_TABLE: &str = "transactions";

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 10;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Column list and types for the transactions table, in feed field order.
///
/// `dateOfSale` is read from the feed as text and converted on insert, so a
/// malformed date becomes NULL instead of rejecting the batch.
pub fn transaction_columns() -> [(&'static str, &'static str); 8] {
    [
        ("id", "BIGINT"),
        ("title", "VARCHAR"),
        ("price", "DOUBLE"),
        ("description", "VARCHAR"),
        ("category", "VARCHAR"),
        ("image", "VARCHAR"),
        ("sold", "BOOLEAN"),
        ("dateOfSale", "VARCHAR"),
    ]
}
