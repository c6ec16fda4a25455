//! HTTP handlers for `/todos`.
//!
//! Each handler makes at most one repository call and maps its outcome to a
//! status code: `None`/`false` from the repository becomes 404, anything the
//! request itself got wrong becomes 400.

use axum::{
    body::Bytes,
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::model::{NewTodo, Todo, TodoId, TodoPatch};
use crate::SharedRepository;

pub fn routes() -> Router<SharedRepository> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
}

async fn list_todos(State(repo): State<SharedRepository>) -> Json<Vec<Todo>> {
    Json(repo.get_all())
}

async fn get_todo(
    State(repo): State<SharedRepository>,
    path: Result<Path<TodoId>, PathRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = path?;
    repo.find_by_id(id).map(Json).ok_or(ApiError::NotFound(id))
}

async fn create_todo(
    State(repo): State<SharedRepository>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(value) = payload?;
    let input: NewTodo = decode_object(value)?;
    let todo = repo.save(input);
    tracing::info!(id = todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(repo): State<SharedRepository>,
    path: Result<Path<TodoId>, PathRejection>,
    body: Bytes,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = path?;
    let patch = parse_patch(&body)?;
    let todo = repo.update(id, patch).ok_or(ApiError::NotFound(id))?;
    tracing::info!(id, completed = todo.completed, "todo updated");
    Ok(Json(todo))
}

async fn delete_todo(
    State(repo): State<SharedRepository>,
    path: Result<Path<TodoId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    if !repo.delete_by_id(id) {
        return Err(ApiError::NotFound(id));
    }
    tracing::info!(id, "todo deleted");
    Ok(StatusCode::OK)
}

/// Decode a PATCH body. The body is read raw rather than through `Json` so
/// that a missing content type or an empty body is reported as 400 before the
/// id is looked up.
fn parse_patch(body: &[u8]) -> Result<TodoPatch, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::BadRequest("request body is empty".to_string()));
    }
    let patch: TodoPatch = decode_object(serde_json::from_slice(body)?)?;
    if patch.is_empty() {
        return Err(ApiError::BadRequest(
            "update must set `title` or `completed`".to_string(),
        ));
    }
    Ok(patch)
}

/// Decode a payload that must be a JSON object. serde's derived structs also
/// accept a positional array, which is not a valid todo body.
fn decode_object<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    if !value.is_object() {
        return Err(ApiError::BadRequest(
            "todo payload must be a JSON object".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}
