use axum::{extract::State, response::Json};

use crate::{dto::dashboard_dto::DashboardStats, error::Result, AppState};

#[axum::debug_handler]
pub async fn index(State(state): State<AppState>) -> Result<Json<DashboardStats>> {
    let stats = state.dashboard_service.stats().await?;
    Ok(Json(stats))
}
