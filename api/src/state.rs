/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Async handle to the sales store. Dispatches blocking DuckDB work to a
    /// thread pool internally.
    pub stats: sales_stats::AsyncSalesStats,
}
