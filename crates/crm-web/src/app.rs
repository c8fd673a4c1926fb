//! Router construction and the HTTP server loop.
//!
//! Handlers are read-only. Each request re-reads the spreadsheet on the
//! blocking pool and renders the result; load failures show up as empty
//! pages, never as HTTP errors.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use crm_data::dashboard::{load_customer_list, load_dashboard, CustomerListData, DashboardData};
use crm_data::loader::CustomerLoader;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::views;

// ── Configuration ─────────────────────────────────────────────────────────────

/// Everything the router needs, fixed at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Spreadsheet read on every request.
    pub data_file: PathBuf,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

struct AppState {
    loader: CustomerLoader,
}

type SharedState = Arc<AppState>;

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router.
///
/// Routes:
/// - `GET /` overview
/// - `GET /customer-dashboard[?code=…]` single-customer dashboard
/// - `GET /customers`, `GET /customers_list` customer list with statistics
/// - `GET /static/…` files from [`AppConfig::static_dir`]
pub fn build_router(config: AppConfig) -> Router {
    let state: SharedState = Arc::new(AppState {
        loader: CustomerLoader::new(config.data_file),
    });

    Router::new()
        .route("/", get(overview))
        .route("/customer-dashboard", get(customer_dashboard))
        .route("/customers", get(customers_list))
        .route("/customers_list", get(customers_list))
        .nest_service("/static", ServeDir::new(config.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(config: AppConfig, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Ctrl+C received; shutting down");
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// First `code` value of the query string. Repeated keys are tolerated.
fn first_code(params: Vec<(String, String)>) -> Option<String> {
    params
        .into_iter()
        .find(|(key, _)| key == "code")
        .map(|(_, value)| value)
}

async fn overview() -> Html<String> {
    Html(views::render_overview())
}

async fn customer_dashboard(
    State(state): State<SharedState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Html<String> {
    let loader = state.loader.clone();
    let code = first_code(params);
    let data = tokio::task::spawn_blocking(move || load_dashboard(&loader, code.as_deref()))
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, "dashboard load task failed");
            DashboardData::empty()
        });

    Html(views::render_dashboard(&data))
}

async fn customers_list(State(state): State<SharedState>) -> Html<String> {
    let loader = state.loader.clone();
    let data = tokio::task::spawn_blocking(move || load_customer_list(&loader))
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, "customer list load task failed");
            CustomerListData::default()
        });

    Html(views::render_customer_list(&data))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
