//! Router for all warehouse pages and form endpoints.

use axum::{
    routing::{get, post},
    Router,
};

pub mod system;
pub mod warehouses;

pub fn router() -> Router {
    Router::new()
        .route("/", get(warehouses::index))
        .route(
            "/warehouse/create",
            get(warehouses::create_form).post(warehouses::create),
        )
        .route("/warehouse/:id", get(warehouses::show))
        .route(
            "/warehouse/:id/edit",
            get(warehouses::edit_form).post(warehouses::edit),
        )
        .route("/warehouse/:id/delete", post(warehouses::delete))
        .route("/warehouse/:id/add", post(warehouses::add_stock))
        .route("/warehouse/:id/remove", post(warehouses::remove_stock))
}
