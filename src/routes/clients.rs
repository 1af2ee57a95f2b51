use axum::{
    extract::{Path, State},
    response::{Json, Response},
    Form,
};

use crate::{
    dto::{
        client_dto::ClientForm,
        view_dto::{DeleteView, FormView, ListView, Lookups},
    },
    error::{Error, Result},
    models::client::Client,
    routes::form::{ensure_same_id, finish_delete, redirect_to, rejected, submit, Outcome},
    AppState,
};

pub const LIST_PATH: &str = "/Clients";

/// Clients offer a choice of responsible manager.
async fn lookups(state: &AppState) -> Result<Lookups> {
    Ok(Lookups {
        users: Some(state.lookup_service.users_for_dropdown().await?),
        clients: None,
    })
}

#[axum::debug_handler]
pub async fn list(State(state): State<AppState>) -> Result<Json<ListView<Client>>> {
    let items = state.client_service.list_all().await?;
    Ok(Json(ListView { items }))
}

#[axum::debug_handler]
pub async fn create_form(State(state): State<AppState>) -> Result<Json<FormView<ClientForm>>> {
    Ok(Json(FormView::new(ClientForm::default(), lookups(&state).await?)))
}

#[axum::debug_handler]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ClientForm>,
) -> Result<Response> {
    match submit(form.to_draft(), |draft| state.client_service.insert(draft)).await? {
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
) -> Result<Json<FormView<ClientForm>>> {
    let client = state
        .client_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("Client", id))?;

    Ok(Json(FormView::new(ClientForm::from(&client), lookups(&state).await?)))
}

#[axum::debug_handler]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ClientForm>,
) -> Result<Response> {
    ensure_same_id("Client", id, &form.id)?;
    tracing::info!(client_id = id, inn = %form.inn, "Updating client");

    match submit(form.to_draft(), |draft| state.client_service.update(id, draft)).await? {
        Outcome::Written(_) => Ok(redirect_to(LIST_PATH)),
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
) -> Result<Json<DeleteView<Client>>> {
    let item = state
        .client_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("Client", id))?;

    Ok(Json(DeleteView { item, error: None }))
}

#[axum::debug_handler]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response> {
    let result = state.client_service.delete_by_id(id).await;
    finish_delete(result, LIST_PATH, state.client_service.get_by_id(id)).await
}
