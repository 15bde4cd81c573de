use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::error::TaskdError;
use crate::model::{Task, TaskMap, validate_new_task};
use crate::server::{ApiError, AppState};

const INDEX_HTML: &str = include_str!("index.html");

pub async fn root_redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/tasks")])
}

/// Static list view; the page itself fetches `/api/tasks`.
pub async fn tasks_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn list_tasks(State(state): State<Arc<AppState>>) -> Json<TaskMap> {
    Json(state.store.load())
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateTaskRequest {
    pub name: String,
    pub author: String,
}

pub async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (name, author) =
        validate_new_task(&body.name, &body.author).map_err(|e| state.api_error(e))?;

    let _guard = state.write_guard.lock().await;
    let mut tasks = state.store.load();
    if tasks.contains_key(&name) {
        return Err(state.api_error(TaskdError::DuplicateTask(name)));
    }

    tasks.insert(name.clone(), Task::new(author));
    state.store.save(&tasks).map_err(|e| state.api_error(e))?;

    info!(name = %name, "task created");
    Ok((StatusCode::CREATED, Json(json!({ "message": "Task created" }))))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTaskRequest {
    pub author: Option<String>,
}

pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(body): Json<UpdateTaskRequest>,
) -> Result<Json<Value>, ApiError> {
    let _guard = state.write_guard.lock().await;
    let mut tasks = state.store.load();

    let task = tasks
        .get_mut(&name)
        .ok_or_else(|| state.api_error(TaskdError::TaskNotFound(name.clone())))?;

    // Only the author is mutable; name and date_create never change here.
    if let Some(author) = body.author {
        task.author = author;
    }

    state.store.save(&tasks).map_err(|e| state.api_error(e))?;

    info!(name = %name, "task updated");
    Ok(Json(json!({ "message": "Task updated" })))
}

pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let _guard = state.write_guard.lock().await;
    let mut tasks = state.store.load();

    if tasks.shift_remove(&name).is_none() {
        return Err(state.api_error(TaskdError::TaskNotFound(name)));
    }

    state.store.save(&tasks).map_err(|e| state.api_error(e))?;

    info!(name = %name, "task deleted");
    Ok(Json(json!({ "message": "Task deleted" })))
}
