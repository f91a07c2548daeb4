//! PokeAPI client: list pages, detail lookups and the two fan-out compositions
//! (list with details, search by name).

mod client;
pub mod error;
mod source;


pub use client::{PokeClient, truncate};
pub use error::ClientError;
pub use source::PokemonSource;
