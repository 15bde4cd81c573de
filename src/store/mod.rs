pub mod files;
pub mod memory;

use crate::error::Result;
use crate::model::TaskMap;

/// Narrow load/save interface over the persisted task map.
///
/// The whole map is loaded before every operation and written back in full
/// after every mutation. The server holds an implementation behind shared
/// state, so tests can substitute [`memory::MemoryStore`] for the file-backed
/// store.
pub trait Store: Send + Sync {
    /// Read the full task map. A missing or unreadable backing file yields an
    /// empty map, never an error; the cause is logged instead.
    fn load(&self) -> TaskMap;

    /// Replace the persisted map wholesale.
    fn save(&self, tasks: &TaskMap) -> Result<()>;
}
