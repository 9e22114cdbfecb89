//! Shared test fixtures for the sales-stats integration tests.
//!
//! `setup_sample_store()` builds an isolated in-memory store holding a small,
//! hand-checked set of sale records loaded through the same NDJSON path the
//! seed loader uses.

#![allow(dead_code)]

use sales_stats::{seed, SalesStore};
use serde_json::{json, Value};

/// Seven records spread over March, July and November, plus one with an
/// unparseable sale date.
///
/// March figures: 4 records, 3 sold (22.3 + 50.0 + 950.0), 1 unsold (329.85).
pub fn sample_records() -> Vec<Value> {
    vec![
        record(1, "Fjallraven Foldsack Backpack", 329.85, false, "2021-03-15T10:00:00Z"),
        record(2, "Mens Casual Premium Slim Fit T-Shirt", 22.3, true, "2022-03-20T10:00:00Z"),
        record(3, "Mens Cotton Jacket", 615.89, true, "2021-07-15T10:00:00+05:30"),
        record(4, "Solid Gold Petite Micropave Bracelet", 50.0, true, "2021-03-01T00:00:00Z"),
        record(5, "WD 2TB Elements Portable Hard Drive", 64.0, false, "2022-11-05T12:00:00Z"),
        record(6, "Silver Ring 100% Sterling", 950.0, true, "2021-03-31T23:59:59Z"),
        record(7, "Mystery Shirt", 10.0, true, "sometime last spring"),
    ]
}

pub fn setup_sample_store() -> SalesStore {
    store_with(&sample_records())
}

/// `n` March records with ids 1..=n, alternating sold flags.
pub fn bulk_march_records(n: i64) -> Vec<Value> {
    (1..=n)
        .map(|i| {
            record(
                i,
                &format!("Bulk item {i}"),
                (i * 75) as f64,
                i % 2 == 0,
                &format!("2021-03-{:02}T08:00:00Z", (i % 28) + 1),
            )
        })
        .collect()
}

pub fn store_with(records: &[Value]) -> SalesStore {
    let store = SalesStore::open_in_memory().unwrap();
    seed::load_records(&store, records).unwrap();
    store
}

pub fn record(id: i64, title: &str, price: f64, sold: bool, date_of_sale: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "price": price,
        "description": format!("Description of {title}"),
        "category": "misc",
        "image": format!("https://example.com/images/{id}.jpg"),
        "sold": sold,
        "dateOfSale": date_of_sale,
    })
}
