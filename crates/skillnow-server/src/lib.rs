//! # skillnow-server
//!
//! HTTP surface of SkillNow: axum routes over [`SkillNowService`], a CORS
//! layer for the frontend origin, and the process bootstrap used by the
//! `skillnow` binary.

pub mod cors;
pub mod error;
pub mod routes;
pub mod state;

use anyhow::Context;
use axum::Router;
use axum::routing::{delete, get, post};
use skillnow_config::SkillNowConfig;
use skillnow_store::{CsvStore, SkillNowService};
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub use error::ApiError;
pub use state::AppState;

/// Assemble the full router with tracing and CORS layers applied.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(routes::health::index))
        .route("/api/health", get(routes::health::health))
        .route("/api/users", get(routes::users::list_users))
        .route(
            "/api/users/:id",
            get(routes::users::get_user).put(routes::users::update_user),
        )
        .route(
            "/api/users/:id/assignments",
            get(routes::assignments::list_user_assignments),
        )
        .route("/api/register", post(routes::users::register))
        .route(
            "/api/projects",
            get(routes::projects::list_projects).post(routes::projects::create_project),
        )
        .route(
            "/api/projects/:id",
            get(routes::projects::get_project)
                .put(routes::projects::update_project)
                .delete(routes::projects::delete_project),
        )
        .route(
            "/api/projects/:id/assignments",
            get(routes::assignments::list_project_assignments)
                .post(routes::assignments::create_assignment),
        )
        .route(
            "/api/projects/:id/assignments/:assignment_id",
            delete(routes::assignments::delete_assignment),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Create missing tables, bind, and serve until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the data directory cannot be prepared, the
/// configured address is invalid or cannot be bound, or the server fails.
pub async fn serve(config: SkillNowConfig) -> anyhow::Result<()> {
    let store = CsvStore::new(&config.storage.data_dir);
    store
        .ensure_tables()
        .with_context(|| format!("failed to prepare {}", config.storage.data_dir.display()))?;

    let cors = cors::cors_layer(&config.cors)?;
    let app = router(AppState::new(SkillNowService::new(store)), cors);

    let address = config.server.socket_addr()?;
    info!(%address, "binding");
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(
        %address,
        data_dir = %config.storage.data_dir.display(),
        "SkillNow API running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
