//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The ECOPS pages are plain static files. Gated pages pull the guard from
//! `/pkg`, and every redirect the guard issues lands on
//! `/ECOPS_webpage/index0.html`, which this router must serve.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;

/// Landing page; also the guard's redirect target.
pub const LANDING_PAGE: &str = "/ECOPS_webpage/index0.html";

/// Static site + guard bundle + health probe.
pub fn app(config: &HostConfig) -> Router {
    let site = ServeDir::new(&config.site_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/", get(redirect_root_to_landing))
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn redirect_root_to_landing() -> Redirect {
    Redirect::temporary(LANDING_PAGE)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
