use pokedex_client::PokemonSource;
use pokedex_core::{Record, sanitize_name};

use crate::ServiceError;

/// Loads the record behind a detail route.
pub struct DetailService<S> {
    source: S,
}

impl<S: PokemonSource> DetailService<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Record for `name`. A name with nothing usable left after sanitization
    /// is rejected before any request is made.
    pub async fn load(&self, name: &str) -> Result<Record, ServiceError> {
        let sanitized = sanitize_name(name);
        if sanitized.is_empty() {
            return Err(ServiceError::ValidationRejected(format!("unusable name {name:?}")));
        }
        match self.source.by_name(&sanitized).await? {
            Some(record) if record.is_displayable() => Ok(record),
            _ => {
                tracing::info!(name = %sanitized, "record not found");
                Err(ServiceError::NotFound(sanitized))
            },
        }
    }
}
