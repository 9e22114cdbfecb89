//! DuckDB connection wrapper holding the transactions table.
//!
//! Owns the single store handle for the process. Rows come back as
//! `serde_json::Value` maps and can be deserialized straight into models.

use crate::config::{self, TRANSACTIONS_TABLE};
use crate::error::{Result, SalesError};
use duckdb::{types::ValueRef, Connection as DuckDbConnection};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;

/// Wraps a DuckDB connection with the `transactions` table created on open.
pub struct SalesStore {
    conn: DuckDbConnection,
}

impl SalesStore {
    /// Open the database at `path`, or a private in-memory database when
    /// `path` is `":memory:"`.
    pub fn open(path: &str) -> Result<Self> {
        let conn = if path == config::IN_MEMORY {
            DuckDbConnection::open_in_memory()?
        } else {
            DuckDbConnection::open(path)?
        };
        let store = Self { conn };
        store.ensure_schema()?;
        tracing::debug!(path, "Opened sales store");
        Ok(store)
    }

    /// Open a fresh in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        Self::open(config::IN_MEMORY)
    }

    fn ensure_schema(&self) -> Result<()> {
        self.conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {} (\
               id BIGINT, \
               title VARCHAR, \
               price DOUBLE, \
               description VARCHAR, \
               category VARCHAR, \
               image VARCHAR, \
               sold BOOLEAN, \
               dateOfSale TIMESTAMP\
             )",
            TRANSACTIONS_TABLE
        ))?;
        Ok(())
    }

    /// Execute SQL and return results as a `Vec` of `HashMap`s.
    ///
    /// Each row is represented as a `HashMap<String, serde_json::Value>`.
    pub fn execute(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        let mut stmt = self.conn.prepare(sql)?;

        let param_values: Vec<&dyn duckdb::ToSql> = params
            .iter()
            .map(|p| p as &dyn duckdb::ToSql)
            .collect();

        let mut rows_result = stmt.query(param_values.as_slice())?;

        // Column metadata is only available once the query has run
        let (column_names, column_count) = {
            let executed = rows_result
                .as_ref()
                .ok_or_else(|| SalesError::Internal("query returned no statement".into()))?;
            let names: Vec<String> = executed
                .column_names()
                .into_iter()
                .map(|s| s.to_string())
                .collect();
            (names, executed.column_count())
        };

        let mut out: Vec<HashMap<String, serde_json::Value>> = Vec::new();

        while let Some(row) = rows_result.next()? {
            let mut map = HashMap::with_capacity(column_count);
            for (i, col_name) in column_names.iter().enumerate() {
                map.insert(col_name.clone(), convert_value_ref(row.get_ref(i)?));
            }
            out.push(map);
        }

        Ok(out)
    }

    /// Execute SQL and deserialize each row into type `T`.
    pub fn execute_into<T: DeserializeOwned>(&self, sql: &str, params: &[String]) -> Result<Vec<T>> {
        let rows = self.execute(sql, params)?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            let value = serde_json::Value::Object(row.into_iter().collect());
            results.push(serde_json::from_value(value)?);
        }
        Ok(results)
    }

    /// Execute SQL and return the first column of the first row.
    ///
    /// Returns `None` if the result set is empty.
    pub fn execute_scalar(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Option<serde_json::Value>> {
        let mut stmt = self.conn.prepare(sql)?;
        let param_values: Vec<&dyn duckdb::ToSql> = params
            .iter()
            .map(|p| p as &dyn duckdb::ToSql)
            .collect();

        let mut rows = stmt.query(param_values.as_slice())?;

        if let Some(row) = rows.next()? {
            Ok(Some(convert_value_ref(row.get_ref(0)?)))
        } else {
            Ok(None)
        }
    }

    /// Execute a count query and return its single integer result (0 when empty).
    pub fn execute_count(&self, sql: &str, params: &[String]) -> Result<i64> {
        Ok(self
            .execute_scalar(sql, params)?
            .and_then(|v| v.as_i64())
            .unwrap_or(0))
    }

    /// Append every record of a newline-delimited JSON file to the
    /// transactions table in a single statement.
    ///
    /// The insert is all-or-nothing: a value that does not fit its column
    /// type fails the whole batch with [`SalesError::StoreWrite`]. Sale dates
    /// are taken as UTC wall time with any offset suffix ignored, so callers
    /// normalize them first (see [`crate::seed::load_records`]). Unparseable
    /// sale dates are stored as NULL. Returns the number of inserted rows.
    pub fn insert_ndjson(&self, ndjson_path: &Path) -> Result<usize> {
        let path_fwd = ndjson_path.to_string_lossy().replace('\\', "/");
        let columns = config::transaction_columns()
            .iter()
            .map(|(name, ty)| format!("'{}': '{}'", name, ty))
            .collect::<Vec<_>>()
            .join(", ");

        let sql = format!(
            "INSERT INTO {table} (id, title, price, description, category, image, sold, dateOfSale) \
             SELECT id, title, price, description, category, image, sold, \
                    TRY_CAST(dateOfSale AS TIMESTAMP) \
             FROM read_json('{path}', format = 'newline_delimited', columns = {{{columns}}})",
            table = TRANSACTIONS_TABLE,
            path = path_fwd,
            columns = columns,
        );

        let inserted = self.conn.execute(&sql, []).map_err(SalesError::StoreWrite)?;
        Ok(inserted)
    }

    /// Total number of stored records.
    pub fn count(&self) -> Result<i64> {
        self.execute_count(&format!("SELECT COUNT(*) FROM {}", TRANSACTIONS_TABLE), &[])
    }

    /// Access the underlying DuckDB connection for advanced usage.
    pub fn raw(&self) -> &DuckDbConnection {
        &self.conn
    }
}

/// Convert a DuckDB `ValueRef` to a `serde_json::Value`.
fn convert_value_ref(val: ValueRef<'_>) -> serde_json::Value {
    match val {
        ValueRef::Null => serde_json::Value::Null,
        ValueRef::Boolean(b) => serde_json::Value::Bool(b),
        ValueRef::TinyInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::SmallInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::Int(n) => serde_json::Value::Number(n.into()),
        ValueRef::BigInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::UBigInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::HugeInt(n) => match i64::try_from(n) {
            Ok(i) => serde_json::Value::Number(i.into()),
            Err(_) => serde_json::Value::String(n.to_string()),
        },
        ValueRef::Float(f) => serde_json::Number::from_f64(f as f64)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Double(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Text(bytes) => serde_json::Value::String(String::from_utf8_lossy(bytes).to_string()),
        // Timestamps are formatted to text in SQL before they reach here
        _ => serde_json::Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_creates_empty_transactions_table() {
        let store = SalesStore::open_in_memory().unwrap();
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn execute_scalar_on_empty_result_is_none() {
        let store = SalesStore::open_in_memory().unwrap();
        let value = store
            .execute_scalar("SELECT id FROM transactions", &[])
            .unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn file_backed_store_persists_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.duckdb");
        let path = path.to_str().unwrap();
        {
            let store = SalesStore::open(path).unwrap();
            assert_eq!(store.count().unwrap(), 0);
        }
        let reopened = SalesStore::open(path).unwrap();
        assert_eq!(reopened.count().unwrap(), 0);
    }
}
