// Adapters layer: concrete implementations of the domain ports (storage backends, console surfaces).

pub mod console;
pub mod storage;

pub use console::{ConsoleAlerts, LoggingNavigator};
pub use storage::{FileStore, MemoryStore};
