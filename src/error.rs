use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskdError {
    #[error("Invalid or missing task name or author")]
    InvalidInput,

    #[error("Name or author too long")]
    FieldTooLong,

    #[error("Duplicate task name")]
    DuplicateTask(String),

    #[error("Task not found")]
    TaskNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TaskdError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::FieldTooLong => "field_too_long",
            Self::DuplicateTask(_) => "duplicate_task",
            Self::TaskNotFound(_) => "task_not_found",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, TaskdError>;
