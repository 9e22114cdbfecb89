//! HTTP surface for the sales statistics store.
//!
//! [`app`] builds the router so tests can drive it with `tower::ServiceExt`
//! against an isolated store; `main` wires it to settings and a listener.

pub mod error;
pub mod routes;
pub mod settings;
pub mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

pub use settings::Settings;
pub use state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route("/initialize-database", get(routes::seed::initialize_database))
        .route("/transactions", get(routes::transactions::list_transactions))
        .route("/statistics", get(routes::statistics::get_statistics))
        .route("/bar-chart-data", get(routes::bar_chart::get_bar_chart_data))
        .route("/combined-data", get(routes::combined::get_combined_data))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
