use axum::{response::Redirect, routing::get, Router};
use homepage_editor_api::{create_api_routes, create_legacy_routes, AppState};
use std::net::SocketAddr;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

pub async fn start_web_server(
    bind_addr: SocketAddr,
    state: AppState,
    static_dir: Option<String>,
) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        editor_url = format!("http://{}", bind_addr),
        api_url = format!("http://{}/api", bind_addr),
        "Starting web server"
    );

    let app = create_app(state, static_dir);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Web server started successfully");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn create_app(state: AppState, static_dir: Option<String>) -> Router {
    let router = Router::new()
        .nest("/api", create_api_routes(state.clone()))
        .merge(create_legacy_routes(state));

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router.route("/", get(|| async { Redirect::temporary("/api/document") })),
    };

    router.layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
