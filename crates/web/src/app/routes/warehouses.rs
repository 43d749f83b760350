use std::sync::Arc;

use axum::extract::{Extension, Form, Path};
use axum::response::{Html, IntoResponse, Redirect, Response};
use stockyard_warehouse::{DomainError, WarehouseId};

use crate::app::forms::{CreateWarehouseForm, EditWarehouseForm, StockAmountForm};
use crate::app::pages;
use crate::app::services::AppServices;

pub async fn index(Extension(services): Extension<Arc<AppServices>>) -> Html<String> {
    pages::index(&services.list_warehouses())
}

pub async fn create_form() -> Html<String> {
    pages::create(None)
}

pub async fn create(
    Extension(services): Extension<Arc<AppServices>>,
    Form(form): Form<CreateWarehouseForm>,
) -> Response {
    match services.create_warehouse(form.name(), form.capacity(), form.initial_level()) {
        Ok(_) => Redirect::to("/").into_response(),
        Err(DomainError::Validation(reason)) => pages::create(Some(&reason)).into_response(),
        Err(DomainError::NotFound) => Redirect::to("/").into_response(),
    }
}

pub async fn show(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<WarehouseId>,
) -> Response {
    match services.get_warehouse(id) {
        Some(warehouse) => pages::show(id, &warehouse).into_response(),
        None => Redirect::to("/").into_response(),
    }
}

pub async fn edit_form(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<WarehouseId>,
) -> Response {
    match services.get_warehouse(id) {
        Some(warehouse) => pages::edit(id, &warehouse, None).into_response(),
        None => Redirect::to("/").into_response(),
    }
}

pub async fn edit(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<WarehouseId>,
    Form(form): Form<EditWarehouseForm>,
) -> Response {
    match services.update_warehouse(id, form.name(), form.capacity()) {
        Ok(()) => Redirect::to(&format!("/warehouse/{id}")).into_response(),
        Err(DomainError::Validation(reason)) => {
            // Re-render the form with the stored values, like the edit page itself.
            match services.get_warehouse(id) {
                Some(warehouse) => pages::edit(id, &warehouse, Some(&reason)).into_response(),
                None => Redirect::to("/").into_response(),
            }
        }
        Err(DomainError::NotFound) => Redirect::to("/").into_response(),
    }
}

pub async fn delete(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<WarehouseId>,
) -> Redirect {
    services.delete_warehouse(id);
    Redirect::to("/")
}

pub async fn add_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<WarehouseId>,
    Form(form): Form<StockAmountForm>,
) -> Redirect {
    match services.add_stock(id, form.amount()) {
        Ok(()) => Redirect::to(&format!("/warehouse/{id}")),
        Err(_) => Redirect::to("/"),
    }
}

pub async fn remove_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<WarehouseId>,
    Form(form): Form<StockAmountForm>,
) -> Redirect {
    match services.remove_stock(id, form.amount()) {
        Ok(_) => Redirect::to(&format!("/warehouse/{id}")),
        Err(_) => Redirect::to("/"),
    }
}
