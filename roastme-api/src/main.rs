mod pages;
mod routes;

use roastme_app::{AppConfig, AppContext};
use tower_http::compression::CompressionLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let app_context = match AppContext::from_config(&config) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("Failed to initialize roast provider: {}", e);
            std::process::exit(1);
        }
    };

    let app = routes::router(app_context)
        .layer(CompressionLayer::new())
        .layer(routes::cors_layer(&config.cors_origins));

    let addr = config.bind_addr();
    tracing::info!("RoastMe AI backend listening on http://{}", addr);
    tracing::info!("Model: {} (timeout {:?})", config.groq_model, config.groq_timeout);
    tracing::info!("CORS origins: {}", config.cors_origins.join(", "));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server error");
}
