use std::sync::RwLock;

use crate::error::Result;
use crate::model::TaskMap;
use crate::store::Store;

/// In-memory store, used as a test double for the file-backed store.
#[derive(Default)]
pub struct MemoryStore {
    tasks: RwLock<TaskMap>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: TaskMap) -> Self {
        Self {
            tasks: RwLock::new(tasks),
        }
    }
}

impl Store for MemoryStore {
    fn load(&self) -> TaskMap {
        self.tasks.read().expect("store lock poisoned").clone()
    }

    fn save(&self, tasks: &TaskMap) -> Result<()> {
        *self.tasks.write().expect("store lock poisoned") = tasks.clone();
        Ok(())
    }
}
