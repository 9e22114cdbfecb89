//! Seed feed download and bulk load.
//!
//! Fetches the JSON array of sale records from the seed URL and appends every
//! element to the store. Nothing is deduplicated: each successful call adds a
//! full copy of the feed.

use crate::connection::SalesStore;
use crate::error::{Result, SalesError};
use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use serde_json::Value;
use std::io::{BufWriter, Write};
use std::time::Duration;
use tempfile::NamedTempFile;

/// Downloads the seed feed and loads it into a [`SalesStore`].
#[derive(Debug, Clone)]
pub struct SeedLoader {
    /// Feed URL returning a JSON array of sale records.
    pub url: String,
    timeout: Duration,
}

impl SeedLoader {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    /// Build a blocking HTTP client for one download.
    ///
    /// The client is created and dropped on the calling thread, which must
    /// not be an async runtime worker.
    fn client(&self) -> Result<Client> {
        Ok(Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?)
    }

    /// Fetch the feed and return its records.
    ///
    /// Fails with [`SalesError::UpstreamFetch`] when the request fails, the
    /// status is not a success, or the body is not a JSON array.
    pub fn fetch(&self) -> Result<Vec<Value>> {
        tracing::info!(url = %self.url, "Fetching seed data");

        let resp = self.client()?.get(&self.url).send()?.error_for_status()?;
        let body: Value = resp.json()?;

        match body {
            Value::Array(records) => Ok(records),
            other => Err(SalesError::UpstreamFetch(format!(
                "expected a JSON array of records, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Fetch the feed and insert every record. Returns the inserted count.
    pub fn initialize(&self, store: &SalesStore) -> Result<usize> {
        let records = self.fetch()?;
        let inserted = load_records(store, &records)?;
        tracing::info!(inserted, "Seed data loaded");
        Ok(inserted)
    }
}

/// Insert already-fetched records field-for-field in one batch.
///
/// Records are staged as newline-delimited JSON in a temp file and read by
/// DuckDB in a single INSERT, so the batch lands completely or not at all.
/// Offset sale dates are shifted to UTC on the way in.
pub fn load_records(store: &SalesStore, records: &[Value]) -> Result<usize> {
    if records.is_empty() {
        return Ok(0);
    }

    let file = NamedTempFile::new()?;
    {
        let mut writer = BufWriter::new(file.as_file());
        for record in records {
            match utc_sale_date(record) {
                Some(date) => {
                    let mut record = record.clone();
                    record["dateOfSale"] = Value::String(date);
                    serde_json::to_writer(&mut writer, &record)?;
                }
                None => serde_json::to_writer(&mut writer, record)?,
            }
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
    }

    // The temp file is removed on drop, after DuckDB has copied the rows
    store.insert_ndjson(file.path())
}

/// `dateOfSale` as a naive UTC timestamp, when it is an RFC 3339 string.
///
/// Anything else is left for the store's cast, which turns it into NULL.
fn utc_sale_date(record: &Value) -> Option<String> {
    let raw = record.get("dateOfSale")?.as_str()?;
    let parsed = DateTime::parse_from_rfc3339(raw.trim()).ok()?;
    Some(
        parsed
            .with_timezone(&Utc)
            .format("%Y-%m-%dT%H:%M:%S%.f")
            .to_string(),
    )
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn load_records_inserts_every_element() {
        let store = SalesStore::open_in_memory().unwrap();
        let records = vec![
            json!({"id": 1, "title": "Backpack", "price": 109.95, "description": "d",
                   "category": "bags", "image": "http://x/1.jpg", "sold": false,
                   "dateOfSale": "2021-11-27T20:29:54+05:30"}),
            json!({"id": 2, "title": "Shirt", "price": 22.3, "description": "d",
                   "category": "men's clothing", "image": "http://x/2.jpg", "sold": true,
                   "dateOfSale": "2021-10-27T20:29:54+05:30"}),
        ];

        assert_eq!(load_records(&store, &records).unwrap(), 2);
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn loading_twice_duplicates_rows() {
        let store = SalesStore::open_in_memory().unwrap();
        let records = vec![json!({"id": 7, "title": "Lamp", "price": 5.0, "sold": true,
                                  "dateOfSale": "2022-03-01T00:00:00Z"})];

        load_records(&store, &records).unwrap();
        load_records(&store, &records).unwrap();
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn empty_feed_inserts_nothing() {
        let store = SalesStore::open_in_memory().unwrap();
        assert_eq!(load_records(&store, &[]).unwrap(), 0);
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn mistyped_field_rejects_whole_batch() {
        let store = SalesStore::open_in_memory().unwrap();
        let records = vec![
            json!({"id": 1, "title": "Ok", "price": 10.0, "sold": true,
                   "dateOfSale": "2022-03-01T00:00:00Z"}),
            json!({"id": 2, "title": "Bad", "price": "not a number", "sold": true,
                   "dateOfSale": "2022-03-01T00:00:00Z"}),
        ];

        let err = load_records(&store, &records).unwrap_err();
        assert!(matches!(err, SalesError::StoreWrite(_)));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn offset_dates_are_shifted_to_utc() {
        let record = json!({"dateOfSale": "2021-04-01T02:00:00+05:30"});
        assert_eq!(utc_sale_date(&record).as_deref(), Some("2021-03-31T20:30:00"));

        let zulu = json!({"dateOfSale": "2022-03-01T00:00:00.250Z"});
        assert_eq!(utc_sale_date(&zulu).as_deref(), Some("2022-03-01T00:00:00.250"));
    }

    #[test]
    fn unparseable_or_missing_dates_are_left_alone() {
        assert_eq!(utc_sale_date(&json!({"dateOfSale": "not a date"})), None);
        assert_eq!(utc_sale_date(&json!({"dateOfSale": 20210401})), None);
        assert_eq!(utc_sale_date(&json!({"title": "no date"})), None);
    }

    #[test]
    fn offset_date_near_month_start_lands_in_previous_month() {
        let store = SalesStore::open_in_memory().unwrap();
        let records = vec![json!({"id": 1, "title": "Kettle", "price": 30.0, "sold": true,
                                  "dateOfSale": "2021-04-01T02:00:00+05:30"})];
        load_records(&store, &records).unwrap();

        let month = store
            .execute_scalar("SELECT month(dateOfSale) FROM transactions", &[])
            .unwrap();
        assert_eq!(month, Some(serde_json::json!(3)));
    }

    #[test]
    fn fetch_from_unreachable_host_is_upstream_error() {
        let loader = SeedLoader::new("http://127.0.0.1:9/seed.json", Duration::from_secs(2));
        let err = loader.fetch().unwrap_err();
        assert!(matches!(err, SalesError::UpstreamFetch(_)));
    }
}
