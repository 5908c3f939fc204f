// Shared helpers

pub mod constants;
pub mod file;
pub mod storage;

pub use constants::*;
pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage};
