//! In-memory todo REST API.
//!
//! # Overview
//! `GET/POST /todos` and `GET/PATCH/DELETE /todos/{id}` over a process-local
//! repository. Ids are integers assigned by the repository.
//!
//! # Design
//! - `repository` owns the data behind the `TodoRepository` trait.
//! - `controller` maps verbs and paths onto repository calls and decides the
//!   status code; `error` renders the failures.
//! - `app()` wires a fresh in-memory repository; `app_with()` accepts any
//!   repository, which is how the controller is tested against stubs.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod repository;
pub mod telemetry;

pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use model::{NewTodo, Todo, TodoId, TodoPatch};
pub use repository::{InMemoryTodoRepository, TodoRepository};

/// Repository handle shared by every handler.
pub type SharedRepository = Arc<dyn TodoRepository>;

/// Router over an empty in-memory repository.
pub fn app() -> Router {
    app_with(Arc::new(InMemoryTodoRepository::new()))
}

pub fn app_with(repo: SharedRepository) -> Router {
    controller::routes()
        .layer(TraceLayer::new_for_http())
        .with_state(repo)
}

pub async fn run(listener: TcpListener, repo: SharedRepository) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(repo)).await
}
