use std::sync::Arc;

use sales_stats::AsyncSalesStats;
use sales_stats_api::{app, AppState, Settings};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&settings.log_level))
        .init();

    info!(database = %settings.database_url, "Opening sales store");
    let stats = match AsyncSalesStats::builder()
        .database(settings.database_url.clone())
        .seed_url(settings.seed_url.clone())
        .timeout(settings.seed_timeout())
        .build()
        .await
    {
        Ok(stats) => stats,
        Err(e) => {
            error!("Failed to open sales store: {}", e);
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState { stats });

    let addr = settings.addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    info!("Server is running on http://{}", addr);

    let server = axum::serve(listener, app(state)).with_graceful_shutdown(async {
        let _ = tokio::signal::ctrl_c().await;
        info!("Graceful shutdown initiated");
    });

    if let Err(e) = server.await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
