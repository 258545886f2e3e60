use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use interface_monitor::api;
use interface_monitor::domain::source::LogSource;
use interface_monitor::infrastructure::synthetic_source::SyntheticLogSource;
use interface_monitor::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "interface_monitor=info,tower_http=warn".into()),
        )
        .init();

    let record_count = std::env::var("RECORD_COUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(100_000);

    let source = SyntheticLogSource::new(record_count);
    let records = match source.fetch_all() {
        Ok(records) => records,
        Err(e) => {
            error!("log source unavailable: {}", e);
            return;
        }
    };
    info!("loaded {} execution records", records.len());

    let app_state = AppState::new(records);
    let app = api::router(app_state).layer(cors_layer());

    let port = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app).await.expect("server error");
}

fn cors_layer() -> CorsLayer {
    // Read allowed origins from env
    let allowed_origins = std::env::var("ALLOWED_ORIGINS")
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<String>>();

    if allowed_origins.is_empty() {
        warn!("ALLOWED_ORIGINS not set. Defaulting to permissive CORS.");
        CorsLayer::permissive()
    } else {
        use axum::http::HeaderValue;
        use axum::http::Method;

        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .map(|s| s.parse::<HeaderValue>().unwrap())
            .collect();

        info!("Configuring CORS for origins: {:?}", allowed_origins);

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers(tower_http::cors::Any)
    }
}
