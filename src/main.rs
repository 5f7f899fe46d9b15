use axum::{http::Method, response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod config;
mod errors;
mod handlers;
mod models;
mod queries;
mod routes;
mod services;
mod state;

use axum::extract::State;
use config::{AppwriteConfig, TtsConfig};
use services::appwrite::AppwriteClient;
use services::tts_service::TtsService;
use state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let app_state = initialize_app_state();
    let app = build_router(app_state);
    start_server(app).await;
}

fn initialize_app_state() -> AppState {
    let tts_service = match TtsService::new(TtsConfig::from_env()) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            tracing::error!("❌ Failed to build TTS client: {}", e);
            panic!("Failed to build TTS client: {}", e);
        }
    };

    let mut app_state = AppState::new(tts_service);

    // Missing store configuration is not fatal: the server still answers, and
    // every store-backed endpoint reports the configuration error instead.
    match AppwriteConfig::from_env() {
        Ok(config) => match AppwriteClient::new(config) {
            Ok(client) => {
                tracing::info!("✅ Appwrite client configured");
                app_state = app_state.with_appwrite(Arc::new(client));
            }
            Err(e) => {
                tracing::error!("❌ Failed to build Appwrite client: {}", e);
                tracing::warn!("News and football endpoints will be disabled");
            }
        },
        Err(e) => {
            tracing::error!("❌ Incomplete Appwrite configuration: {}", e);
            tracing::warn!("News and football endpoints will be disabled");
        }
    }

    app_state
}

fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .nest("/api/news", routes::news::routes())
        .nest("/api/football", routes::football::routes())
        .nest("/api/tts", routes::tts::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

async fn start_server(app: Router) {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = SocketAddr::from(([0, 0, 0, 0], port.parse().unwrap_or(3000)));

    tracing::info!("🚀 Server starting on {}", addr);

    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Server error: {}", e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    }
}

async fn root_handler() -> &'static str {
    "📰 Khabar News & Football API"
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "appwrite": state.appwrite.is_some(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
