//! Async wrapper around [`SalesStats`] for use in Tokio.
//!
//! Runs every store operation on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//!
//! # Example
//!
//! ```no_run
//! use sales_stats::{AsyncSalesStats, Month};
//!
//! #[tokio::main]
//! async fn main() {
//!     let stats = AsyncSalesStats::builder().build().await.unwrap();
//!     let totals = stats
//!         .run(|s| s.statistics().for_month(Month::new(3)))
//!         .await
//!         .unwrap();
//! }
//! ```

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::error::{Result, SalesError};
use crate::{config, SalesStats, SalesStore};

/// Builder for [`AsyncSalesStats`].
pub struct AsyncSalesStatsBuilder {
    database: String,
    seed_url: String,
    timeout: Duration,
}

impl Default for AsyncSalesStatsBuilder {
    fn default() -> Self {
        Self {
            database: config::IN_MEMORY.to_string(),
            seed_url: config::SEED_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl AsyncSalesStatsBuilder {
    pub fn database(mut self, path: impl Into<String>) -> Self {
        self.database = path.into();
        self
    }

    pub fn seed_url(mut self, url: impl Into<String>) -> Self {
        self.seed_url = url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Open the store on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncSalesStats> {
        tokio::task::spawn_blocking(move || {
            let stats = SalesStats::builder()
                .database(self.database)
                .seed_url(self.seed_url)
                .timeout(self.timeout)
                .build()?;
            Ok(AsyncSalesStats::from_sync(stats))
        })
        .await
        .map_err(|e| SalesError::Internal(format!("Task join error: {e}")))?
    }
}

/// Async handle to a shared [`SalesStats`].
///
/// Cloning is cheap; every clone talks to the same store. The DuckDB
/// connection is not `Sync`, so the inner [`SalesStats`] sits behind a
/// [`Mutex`] and operations are serialized.
#[derive(Clone)]
pub struct AsyncSalesStats {
    inner: Arc<Mutex<SalesStats>>,
}

impl AsyncSalesStats {
    pub fn builder() -> AsyncSalesStatsBuilder {
        AsyncSalesStatsBuilder::default()
    }

    pub fn from_sync(stats: SalesStats) -> Self {
        Self {
            inner: Arc::new(Mutex::new(stats)),
        }
    }

    /// Wrap an already-open store.
    pub fn from_store(store: SalesStore) -> Self {
        Self::from_sync(SalesStats::from_store(store))
    }

    /// Run a sync operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&SalesStats) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let stats = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            // Poisoning is ignored: every store write is a single statement
            let guard = stats.lock().unwrap_or_else(PoisonError::into_inner);
            f(&guard)
        })
        .await
        .map_err(|e| SalesError::Internal(format!("Task join error: {e}")))?
    }

    /// Download and load the seed feed.
    ///
    /// The download runs without holding the store lock, so queries keep
    /// being served while the feed is in flight. Only the bulk insert
    /// takes the lock.
    pub async fn initialize(&self) -> Result<usize> {
        let loader = self.run(|s| Ok(s.seed_loader().clone())).await?;
        let records = tokio::task::spawn_blocking(move || loader.fetch())
            .await
            .map_err(|e| SalesError::Internal(format!("Task join error: {e}")))??;

        let inserted = self.run(move |s| s.load_records(&records)).await?;
        tracing::info!(inserted, "Seed data loaded");
        Ok(inserted)
    }

    pub async fn count(&self) -> Result<i64> {
        self.run(|s| s.count()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Month;
    use serde_json::json;

    #[tokio::test]
    async fn run_dispatches_to_shared_store() {
        let stats = AsyncSalesStats::from_store(SalesStore::open_in_memory().unwrap());
        let records = vec![json!({"id": 1, "title": "Mug", "price": 12.0, "sold": true,
                                  "dateOfSale": "2022-03-10T08:00:00Z"})];

        let inserted = stats.run(move |s| s.load_records(&records)).await.unwrap();
        assert_eq!(inserted, 1);

        let other = stats.clone();
        assert_eq!(other.count().await.unwrap(), 1);

        let totals = other
            .run(|s| s.statistics().for_month(Month::new(3)))
            .await
            .unwrap();
        assert_eq!(totals.total_sold_count, 1);
    }

    #[tokio::test]
    async fn store_stays_usable_after_a_panicking_operation() {
        let stats = AsyncSalesStats::from_store(SalesStore::open_in_memory().unwrap());

        let err = stats
            .run(|_| -> Result<()> { panic!("operation blew up") })
            .await
            .unwrap_err();
        assert!(matches!(err, SalesError::Internal(_)));

        assert_eq!(stats.count().await.unwrap(), 0);
    }
}
