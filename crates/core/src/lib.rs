//! Core types and rules for pokedex
//!
//! This crate contains domain types and input rules shared across all other crates.

pub mod constants;
pub mod display;
pub mod env_config;
mod error;
mod page;
mod pokemon;
mod sanitize;

pub use error::*;
pub use page::*;
pub use pokemon::*;
pub use sanitize::*;
