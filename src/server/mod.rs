// HTTP surface over the task store.
//
// Endpoints:
//   GET    /            -> redirect to /tasks
//   GET    /health
//   GET    /tasks       (HTML list view)
//   POST   /tasks
//   GET    /api/tasks
//   PUT    /tasks/{name}
//   DELETE /tasks/{name}

pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::error::{Result, TaskdError};
use crate::store::Store;

pub struct AppState {
    pub store: Arc<dyn Store>,
    /// Serializes load-mutate-save cycles so two concurrent writes cannot
    /// lose each other's changes. Reads go unguarded.
    pub write_guard: Mutex<()>,
    /// When set, 500 responses carry the underlying error message.
    pub debug: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, debug: bool) -> Self {
        Self {
            store,
            write_guard: Mutex::new(()),
            debug,
        }
    }

    /// Map a domain error onto an HTTP response, logging storage failures.
    pub fn api_error(&self, err: TaskdError) -> ApiError {
        match &err {
            TaskdError::InvalidInput | TaskdError::FieldTooLong | TaskdError::DuplicateTask(_) => {
                debug!(code = err.code(), "request rejected");
                ApiError::new(StatusCode::BAD_REQUEST, err.to_string())
            }
            TaskdError::TaskNotFound(name) => {
                debug!(code = err.code(), name = %name, "task not found");
                ApiError::new(StatusCode::NOT_FOUND, err.to_string())
            }
            TaskdError::Io(_) | TaskdError::Json(_) => {
                error!(code = err.code(), error = %err, "storage failure");
                let message = if self.debug {
                    err.to_string()
                } else {
                    "Internal server error".to_string()
                };
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }
}

/// An error body in the shape clients expect: `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::tasks::root_redirect))
        .route("/health", get(routes::health::health))
        .route(
            "/tasks",
            get(routes::tasks::tasks_page).post(routes::tasks::create_task),
        )
        .route("/api/tasks", get(routes::tasks::list_tasks))
        .route(
            "/tasks/{name}",
            axum::routing::put(routes::tasks::update_task).delete(routes::tasks::delete_task),
        )
        .with_state(state)
}

pub async fn serve(state: Arc<AppState>, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let router = build_router(state);

    info!("taskd listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
