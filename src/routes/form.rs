//! Shared control flow for form submissions.
//!
//! A create or edit submission either ends in a redirect to the entity list or
//! in the form being re-rendered with its violations. Handlers only branch on
//! the [`Outcome`] produced here and never see raw store errors.

use std::future::Future;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
};
use serde::Serialize;

use crate::dto::view_dto::{DeleteView, FormView};
use crate::error::{Error, Result};
use crate::utils::validation::FieldViolation;

#[derive(Debug)]
pub enum Outcome<T> {
    Written(T),
    Rejected(Vec<FieldViolation>),
}

/// Splits recoverable failures (validation, duplicate, write) from terminal ones.
pub fn settle<T>(result: Result<T>) -> Result<Outcome<T>> {
    match result {
        Ok(value) => Ok(Outcome::Written(value)),
        Err(Error::Validation(violations)) => Ok(Outcome::Rejected(violations)),
        Err(Error::Duplicate { field, message }) => {
            Ok(Outcome::Rejected(vec![FieldViolation::new(field, message)]))
        }
        Err(Error::Write(message)) => Ok(Outcome::Rejected(vec![FieldViolation::form(message)])),
        Err(other) => Err(other),
    }
}

/// Runs `write` only when the form converted into a draft.
pub async fn submit<D, T, W, Fut>(
    draft: std::result::Result<D, Vec<FieldViolation>>,
    write: W,
) -> Result<Outcome<T>>
where
    W: FnOnce(D) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let result = match draft {
        Ok(draft) => write(draft).await,
        Err(violations) => Err(Error::Validation(violations)),
    };
    settle(result)
}

/// The submitted id must name the record addressed by the path.
pub fn ensure_same_id(entity: &str, path_id: i64, body_id: &str) -> Result<()> {
    match body_id.trim().parse::<i64>() {
        Ok(id) if id == path_id => Ok(()),
        _ => {
            tracing::warn!(entity, path_id, body_id, "Edit submission id mismatch");
            Err(Error::not_found(entity, path_id))
        }
    }
}

pub fn redirect_to(path: &'static str) -> Response {
    Redirect::to(path).into_response()
}

pub fn rejected<F: Serialize>(view: FormView<F>) -> Response {
    tracing::warn!(errors = ?view.errors, "Form submission rejected");
    (StatusCode::UNPROCESSABLE_ENTITY, Json(view)).into_response()
}

/// Redirects after a delete unless the store refused it, in which case the
/// confirmation is shown again with the reason.
pub async fn finish_delete<T, Fut>(
    result: Result<bool>,
    list_path: &'static str,
    reload: Fut,
) -> Result<Response>
where
    T: Serialize,
    Fut: Future<Output = Result<Option<T>>>,
{
    match result {
        Ok(removed) => {
            tracing::info!(list_path, removed, "Delete submitted");
            Ok(redirect_to(list_path))
        }
        Err(Error::Write(message)) => match reload.await? {
            Some(item) => Ok((
                StatusCode::CONFLICT,
                Json(DeleteView {
                    item,
                    error: Some(message),
                }),
            )
                .into_response()),
            None => Ok(redirect_to(list_path)),
        },
        Err(other) => Err(other),
    }
}
