use axum::{
    extract::{Path, State},
    response::{Json, Response},
    Form,
};

use crate::{
    dto::{
        user_dto::UserForm,
        view_dto::{DeleteView, FormView, ListView, Lookups},
    },
    error::{Error, Result},
    models::user::User,
    routes::form::{ensure_same_id, finish_delete, redirect_to, rejected, submit, Outcome},
    AppState,
};

pub const LIST_PATH: &str = "/Users";

#[axum::debug_handler]
pub async fn list(State(state): State<AppState>) -> Result<Json<ListView<User>>> {
    let items = state.user_service.list_all().await?;
    Ok(Json(ListView { items }))
}

#[axum::debug_handler]
pub async fn create_form() -> Json<FormView<UserForm>> {
    Json(FormView::new(UserForm::default(), Lookups::default()))
}

#[axum::debug_handler]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> Result<Response> {
    match submit(form.to_draft(), |draft| state.user_service.insert(draft)).await? {
        Outcome::Written(_) => Ok(redirect_to(LIST_PATH)),
        Outcome::Rejected(errors) => {
            Ok(rejected(FormView::new(form, Lookups::default()).with_errors(errors)))
        }
    }
}

#[axum::debug_handler]
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FormView<UserForm>>> {
    let user = state
        .user_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("User", id))?;

    Ok(Json(FormView::new(UserForm::from(&user), Lookups::default())))
}

#[axum::debug_handler]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<UserForm>,
) -> Result<Response> {
    ensure_same_id("User", id, &form.id)?;
    tracing::info!(user_id = id, "Updating user");

    match submit(form.to_draft(), |draft| state.user_service.update(id, draft)).await? {
        Outcome::Written(_) => Ok(redirect_to(LIST_PATH)),
        Outcome::Rejected(errors) => {
            Ok(rejected(FormView::new(form, Lookups::default()).with_errors(errors)))
        }
    }
}

#[axum::debug_handler]
pub async fn delete_confirm(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteView<User>>> {
    let item = state
        .user_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("User", id))?;

    Ok(Json(DeleteView { item, error: None }))
}

#[axum::debug_handler]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response> {
    let result = state.user_service.delete_by_id(id).await;
    finish_delete(result, LIST_PATH, state.user_service.get_by_id(id)).await
}
