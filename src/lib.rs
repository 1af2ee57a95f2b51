pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    client_service::ClientService, dashboard_service::DashboardService,
    deal_service::DealService, lookup_service::LookupService, user_service::UserService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub user_service: UserService,
    pub client_service: ClientService,
    pub deal_service: DealService,
    pub lookup_service: LookupService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let user_service = UserService::new(pool.clone());
        let client_service = ClientService::new(pool.clone());
        let deal_service = DealService::new(pool.clone());
        let lookup_service = LookupService::new(pool.clone());
        let dashboard_service = DashboardService::new(pool.clone());

        Self {
            pool,
            user_service,
            client_service,
            deal_service,
            lookup_service,
            dashboard_service,
        }
    }
}

/// Full application router with request tracing.
pub fn app(state: AppState) -> axum::Router {
    routes::router()
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
