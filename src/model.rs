use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskdError};

/// Maximum allowed length (in characters) for a task name or author.
pub const MAX_FIELD_LEN: usize = 100;

/// A single named task. The name itself is the map key, not a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub author: String,
    /// Set once at creation, never modified afterwards.
    pub date_create: NaiveDate,
}

/// The full store: name -> task, insertion order preserved through
/// serialization so listings come back in the order tasks were created.
pub type TaskMap = IndexMap<String, Task>;

impl Task {
    /// Build a task dated with the server's local calendar date.
    pub fn new(author: String) -> Self {
        Self {
            author,
            date_create: Local::now().date_naive(),
        }
    }
}

/// Strict create-request validation: trim both fields, reject empty or
/// over-long values, and return the trimmed strings that get stored.
pub fn validate_new_task(name: &str, author: &str) -> Result<(String, String)> {
    let name = name.trim();
    let author = author.trim();

    if name.is_empty() || author.is_empty() {
        return Err(TaskdError::InvalidInput);
    }
    if name.chars().count() > MAX_FIELD_LEN || author.chars().count() > MAX_FIELD_LEN {
        return Err(TaskdError::FieldTooLong);
    }

    Ok((name.to_string(), author.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_round_trips_json() {
        let task = Task {
            author: "Alice".into(),
            date_create: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
        };

        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"author":"Alice","date_create":"2026-08-30"}"#);

        let parsed: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(task, parsed);
    }

    #[test]
    fn map_preserves_insertion_order() {
        let mut tasks = TaskMap::new();
        tasks.insert("zebra".into(), Task::new("a".into()));
        tasks.insert("apple".into(), Task::new("b".into()));

        let json = serde_json::to_string(&tasks).unwrap();
        let parsed: TaskMap = serde_json::from_str(&json).unwrap();
        let names: Vec<&str> = parsed.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zebra", "apple"]);
    }

    #[test]
    fn validate_trims_both_fields() {
        let (name, author) = validate_new_task("  Write report ", " Alice  ").unwrap();
        assert_eq!(name, "Write report");
        assert_eq!(author, "Alice");
    }

    #[test]
    fn validate_rejects_whitespace_only() {
        assert!(matches!(
            validate_new_task("   ", "Alice"),
            Err(TaskdError::InvalidInput)
        ));
        assert!(matches!(
            validate_new_task("Task", ""),
            Err(TaskdError::InvalidInput)
        ));
    }

    #[test]
    fn validate_rejects_over_long_fields() {
        let long = "x".repeat(MAX_FIELD_LEN + 1);
        assert!(matches!(
            validate_new_task(&long, "Alice"),
            Err(TaskdError::FieldTooLong)
        ));
        assert!(matches!(
            validate_new_task("Task", &long),
            Err(TaskdError::FieldTooLong)
        ));
    }

    #[test]
    fn validate_accepts_exactly_max_len() {
        let max = "x".repeat(MAX_FIELD_LEN);
        assert!(validate_new_task(&max, &max).is_ok());
    }
}
