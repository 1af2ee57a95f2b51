pub mod clients;
pub mod dashboard;
pub mod deals;
pub mod form;
pub mod health;
pub mod users;

use axum::{routing::get, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/health", get(health::health))
        .route("/Users", get(users::list))
        .route("/Users/Create", get(users::create_form).post(users::create))
        .route("/Users/Edit/:id", get(users::edit_form).post(users::edit))
        .route(
            "/Users/Delete/:id",
            get(users::delete_confirm).post(users::delete),
        )
        .route("/Clients", get(clients::list))
        .route(
            "/Clients/Create",
            get(clients::create_form).post(clients::create),
        )
        .route(
            "/Clients/Edit/:id",
            get(clients::edit_form).post(clients::edit),
        )
        .route(
            "/Clients/Delete/:id",
            get(clients::delete_confirm).post(clients::delete),
        )
        .route("/Deals", get(deals::list))
        .route("/Deals/Create", get(deals::create_form).post(deals::create))
        .route("/Deals/Edit/:id", get(deals::edit_form).post(deals::edit))
        .route(
            "/Deals/Delete/:id",
            get(deals::delete_confirm).post(deals::delete),
        )
}
