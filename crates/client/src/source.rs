use async_trait::async_trait;
use pokedex_core::Record;

use crate::client::PokeClient;
use crate::error::ClientError;

/// Catalog operations the session and detail layers depend on.
#[async_trait]
pub trait PokemonSource: Send + Sync {
    /// One page of fully resolved records, in page order. All-or-nothing.
    async fn list_with_details(&self, limit: i64, offset: i64)
    -> Result<Vec<Record>, ClientError>;

    /// Records whose name contains `term`, at most 20. All-or-nothing.
    async fn search(&self, term: &str) -> Result<Vec<Record>, ClientError>;

    /// Single record by name; `Ok(None)` when there is none.
    async fn by_name(&self, name: &str) -> Result<Option<Record>, ClientError>;
}

#[async_trait]
impl PokemonSource for PokeClient {
    async fn list_with_details(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Record>, ClientError> {
        self.fetch_list_with_details(limit, offset).await
    }

    async fn search(&self, term: &str) -> Result<Vec<Record>, ClientError> {
        self.search_by_name(term).await
    }

    async fn by_name(&self, name: &str) -> Result<Option<Record>, ClientError> {
        self.fetch_by_name(name).await
    }
}
