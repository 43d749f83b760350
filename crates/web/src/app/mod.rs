//! HTTP application wiring (Axum router + service wiring).
//!
//! The folder is structured like:
//! - `services.rs`: the shared registry and its process-wide lock
//! - `routes/`: HTTP routes + handlers (one file per page area)
//! - `forms.rs`: form bodies and their defaulting rules
//! - `pages.rs`: server-rendered HTML

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

pub mod forms;
pub mod pages;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    let services = Arc::new(services::AppServices::new());

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
}
