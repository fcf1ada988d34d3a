//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The whole UI is a single Leptos app rendered server-side and hydrated in
//! the browser. This module mounts its routes, the compiled `/pkg` assets,
//! and a liveness probe under one Axum router.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Debug, thiserror::Error)]
#[error("leptos configuration: {0}")]
pub struct LeptosConfigError(String);

/// Directory holding the hydrate bundle (WASM, JS, CSS).
pub(crate) fn pkg_dir(site_root: &Path, site_pkg_dir: &str) -> PathBuf {
    site_root.join(site_pkg_dir)
}

/// Leptos SSR routes, static assets, and `/healthz`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn app() -> Result<Router, LeptosConfigError> {
    let conf = get_configuration(None).map_err(|e| LeptosConfigError(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(maxhealth_client::app::App);
    tracing::debug!(count = routes.len(), "leptos routes generated");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || maxhealth_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let assets = pkg_dir(Path::new(leptos_options.site_root.as_ref()), leptos_options.site_pkg_dir.as_ref());

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(assets))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

pub(crate) async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
