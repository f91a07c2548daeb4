//! Local persistence for pokedex: a small key-value store abstraction and the
//! search history kept on top of it.

mod error;
mod history;
mod store;

pub use error::StorageError;
pub use history::SearchHistory;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
