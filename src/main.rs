mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    tracing::info!(
        faq_endpoint = %config.site.faq_endpoint,
        page_size = config.site.page_size,
        contact_endpoint = %config.site.contact_endpoint,
        "page configuration loaded"
    );

    let app = routes::app(config.site.clone()).expect("leptos configuration");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "contacto listening");
    axum::serve(listener, app).await.expect("server failed");
}
