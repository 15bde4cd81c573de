use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::model::TaskMap;
use crate::store::Store;

/// File-backed store: one JSON object holding every task, rewritten in full
/// on each save.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for FileStore {
    fn load(&self) -> TaskMap {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "task file absent, starting empty");
                return TaskMap::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "task file unreadable, treating as empty");
                return TaskMap::new();
            }
        };

        match serde_json::from_str(&data) {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "task file corrupt, treating as empty");
                TaskMap::new()
            }
        }
    }

    fn save(&self, tasks: &TaskMap) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn sample_task() -> Task {
        Task {
            author: "Alice".into(),
            date_create: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("tasks.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("tasks.json"));

        let mut tasks = TaskMap::new();
        tasks.insert("Write report".into(), sample_task());
        store.save(&tasks).unwrap();

        let loaded = store.load();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "{not valid json").unwrap();

        let store = FileStore::new(&path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn saved_file_is_pretty_printed() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("tasks.json"));

        let mut tasks = TaskMap::new();
        tasks.insert("Write report".into(), sample_task());
        store.save(&tasks).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\n  "));
    }

    #[test]
    fn save_preserves_insertion_order_on_disk() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("tasks.json"));

        let mut tasks = TaskMap::new();
        tasks.insert("second task".into(), sample_task());
        tasks.insert("a first task".into(), sample_task());
        store.save(&tasks).unwrap();

        let names: Vec<String> = store.load().keys().cloned().collect();
        assert_eq!(names, vec!["second task", "a first task"]);
    }
}
