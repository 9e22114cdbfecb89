//! Product-sale statistics over a DuckDB-backed record store.
//!
//! Seeds a single `transactions` table from a remote JSON feed and answers
//! month-scoped questions about it: paginated listings with title search,
//! sale totals, and a fixed-bucket price histogram.
//!
//! # Quick start
//!
//! ```no_run
//! use sales_stats::{Month, SalesStats};
//! use sales_stats::queries::ListTransactionsParams;
//!
//! let stats = SalesStats::builder().build().unwrap();
//! stats.initialize().unwrap();
//!
//! let march = Month::new(3);
//! let totals = stats.statistics().for_month(march).unwrap();
//! let page = stats
//!     .transactions()
//!     .list(&ListTransactionsParams::for_month(march))
//!     .unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod queries;
pub mod seed;
pub mod sql_builder;

#[cfg(feature = "async")]
pub use async_client::AsyncSalesStats;
pub use connection::SalesStore;
pub use error::{Result, SalesError};
pub use models::{
    BarChartBucket, Month, MonthlyStatistics, PriceRange, SaleRecord, TransactionPage, PRICE_RANGES,
};
pub use seed::SeedLoader;
pub use sql_builder::SqlBuilder;

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// SalesStatsBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`SalesStats`] instance.
///
/// Use [`SalesStats::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](SalesStatsBuilder::build).
pub struct SalesStatsBuilder {
    database: String,
    seed_url: String,
    timeout: Duration,
}

impl Default for SalesStatsBuilder {
    fn default() -> Self {
        Self {
            database: config::IN_MEMORY.to_string(),
            seed_url: config::SEED_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl SalesStatsBuilder {
    /// Set the DuckDB database path. Defaults to `":memory:"`.
    pub fn database(mut self, path: impl Into<String>) -> Self {
        self.database = path.into();
        self
    }

    /// Set the seed feed URL.
    pub fn seed_url(mut self, url: impl Into<String>) -> Self {
        self.seed_url = url.into();
        self
    }

    /// Set the HTTP request timeout for the seed download.
    ///
    /// Defaults to 120 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Open the store and prepare the seed loader.
    ///
    /// Does not fetch anything; call [`SalesStats::initialize`] to seed.
    pub fn build(self) -> Result<SalesStats> {
        let store = SalesStore::open(&self.database)?;
        Ok(SalesStats {
            store,
            seed: SeedLoader::new(self.seed_url, self.timeout),
        })
    }
}

// ---------------------------------------------------------------------------
// SalesStats
// ---------------------------------------------------------------------------

/// Main entry point: owns the [`SalesStore`] and the [`SeedLoader`] and hands
/// out lightweight borrowing query wrappers.
pub struct SalesStats {
    store: SalesStore,
    seed: SeedLoader,
}

impl SalesStats {
    pub fn builder() -> SalesStatsBuilder {
        SalesStatsBuilder::default()
    }

    /// Wrap an already-open store, e.g. an isolated in-memory one in tests.
    pub fn from_store(store: SalesStore) -> Self {
        Self {
            store,
            seed: SeedLoader::new(config::SEED_URL, config::DEFAULT_TIMEOUT),
        }
    }

    pub fn transactions(&self) -> queries::TransactionQuery<'_> {
        queries::TransactionQuery::new(&self.store)
    }

    pub fn statistics(&self) -> queries::StatisticsQuery<'_> {
        queries::StatisticsQuery::new(&self.store)
    }

    pub fn bar_chart(&self) -> queries::BarChartQuery<'_> {
        queries::BarChartQuery::new(&self.store)
    }

    /// Download the seed feed and append every record to the store.
    ///
    /// Returns the number of inserted records. Not idempotent: each call
    /// appends another copy of the feed.
    pub fn initialize(&self) -> Result<usize> {
        self.seed.initialize(&self.store)
    }

    /// Append already-fetched feed records to the store.
    pub fn load_records(&self, records: &[serde_json::Value]) -> Result<usize> {
        seed::load_records(&self.store, records)
    }

    /// Total number of stored records.
    pub fn count(&self) -> Result<i64> {
        self.store.count()
    }

    pub fn store(&self) -> &SalesStore {
        &self.store
    }

    /// The loader used by [`SalesStats::initialize`].
    pub fn seed_loader(&self) -> &SeedLoader {
        &self.seed
    }
}

impl fmt::Display for SalesStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SalesStats(seed_url={})", self.seed.url)
    }
}
