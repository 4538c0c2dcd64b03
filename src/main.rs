mod config;
mod routes;

use leptos::prelude::get_configuration;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Ok(path) = dotenvy::dotenv() {
        tracing::info!(path = %path.display(), "loaded .env");
    }

    let config = config::ServerConfig::from_env().expect("server configuration");
    let leptos_options = get_configuration(None).expect("leptos configuration").leptos_options;

    tracing::info!(project = config.supabase.project_ref().unwrap_or("-"), "supabase configured");

    let app = routes::app(leptos_options, config.supabase);
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "samved listening");
    axum::serve(listener, app).await.expect("server failed");
}
