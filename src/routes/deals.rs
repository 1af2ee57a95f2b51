use axum::{
    extract::{Path, State},
    response::{Json, Response},
    Form,
};

use crate::{
    dto::{
        deal_dto::DealForm,
        view_dto::{DeleteView, FormView, ListView, Lookups},
    },
    error::{Error, Result},
    models::deal::Deal,
    routes::form::{ensure_same_id, finish_delete, redirect_to, rejected, submit, Outcome},
    AppState,
};

pub const LIST_PATH: &str = "/Deals";

/// Deals pick a client and, optionally, a responsible manager.
async fn lookups(state: &AppState) -> Result<Lookups> {
    let (clients, users) = tokio::try_join!(
        state.lookup_service.clients_for_dropdown(),
        state.lookup_service.users_for_dropdown(),
    )?;

    Ok(Lookups {
        users: Some(users),
        clients: Some(clients),
    })
}

#[axum::debug_handler]
pub async fn list(State(state): State<AppState>) -> Result<Json<ListView<Deal>>> {
    let items = state.deal_service.list_all().await?;
    Ok(Json(ListView { items }))
}

#[axum::debug_handler]
pub async fn create_form(State(state): State<AppState>) -> Result<Json<FormView<DealForm>>> {
    Ok(Json(FormView::new(DealForm::default(), lookups(&state).await?)))
}

#[axum::debug_handler]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<DealForm>,
) -> Result<Response> {
    match submit(form.to_draft(), |draft| state.deal_service.insert(draft)).await? {
        Outcome::Written(_) => Ok(redirect_to(LIST_PATH)),
        Outcome::Rejected(errors) => {
            let lookups = lookups(&state).await?;
            Ok(rejected(FormView::new(form, lookups).with_errors(errors)))
        }
    }
}

#[axum::debug_handler]
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FormView<DealForm>>> {
    let deal = state
        .deal_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("Deal", id))?;

    Ok(Json(FormView::new(DealForm::from(&deal), lookups(&state).await?)))
}

#[axum::debug_handler]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<DealForm>,
) -> Result<Response> {
    ensure_same_id("Deal", id, &form.id)?;
    tracing::info!(
        deal_id = id,
        client_id = %form.client_id,
        amount = %form.amount,
        stage = %form.stage,
        "Updating deal"
    );

    match submit(form.to_draft(), |draft| state.deal_service.update(id, draft)).await? {
        Outcome::Written(deal) => {
            tracing::info!(deal_id = deal.id, "Deal saved");
            Ok(redirect_to(LIST_PATH))
        }
        Outcome::Rejected(errors) => {
            let lookups = lookups(&state).await?;
            Ok(rejected(FormView::new(form, lookups).with_errors(errors)))
        }
    }
}

#[axum::debug_handler]
pub async fn delete_confirm(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteView<Deal>>> {
    let item = state
        .deal_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("Deal", id))?;

    Ok(Json(DeleteView { item, error: None }))
}

#[axum::debug_handler]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response> {
    let result = state.deal_service.delete_by_id(id).await;
    finish_delete(result, LIST_PATH, state.deal_service.get_by_id(id)).await
}
