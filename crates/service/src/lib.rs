//! Service layer for pokedex
//!
//! Owns the catalog session (accumulated list, active view, pagination
//! cursor), search debouncing, detail lookup and route resolution.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod catalog;
pub mod debounce;
mod detail;
mod error;
mod route;
mod search;

#[cfg(test)]
mod test_support;

pub use catalog::{CatalogSession, CatalogSnapshot, LoadOutcome, LoadStatus, SearchOutcome};
pub use debounce::{Debouncer, spawn_debounced};
pub use detail::DetailService;
pub use error::ServiceError;
pub use route::Route;
pub use search::submit_search;
