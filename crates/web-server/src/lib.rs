use axum::{
    routing::{get, post},
    Router,
};
use configuration::settings::Config;
use market_data::{InMemoryMarketData, MarketData};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;
pub mod render;
pub mod session;
pub mod view;

use session::SessionStore;

/// The shared application state that all handlers can access.
pub struct AppState {
    pub config: Config,
    pub market: Arc<dyn MarketData>,
    pub sessions: SessionStore,
}

/// The main function to configure and run the web server.
///
/// Binds to the address from `config.server` and serves the dashboard page
/// plus the JSON API over the seeded market-data provider.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    // Note: Tracing is initialized by the binary, so we don't initialize it again here.
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    let market: Arc<dyn MarketData> = Arc::new(InMemoryMarketData::new());
    let app_state = Arc::new(AppState {
        config,
        market,
        sessions: SessionStore::new(),
    });

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    // --- DEFINE THE APPLICATION ROUTES ---
    let app = Router::new()
        .route("/", get(handlers::dashboard))
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/top-assets", get(handlers::get_top_assets))
        .route("/api/market-trends", get(handlers::get_market_trends))
        .route("/api/quote", get(handlers::get_quote))
        .route(
            "/api/session",
            post(handlers::create_session).delete(handlers::delete_session),
        )
        .with_state(app_state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http());

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
