//! Explicit search submission (enter key / history pick).

use pokedex_client::PokemonSource;
use pokedex_core::sanitize_search_term;
use pokedex_storage::{KeyValueStore, SearchHistory};

use crate::ServiceError;
use crate::catalog::{CatalogSession, SearchOutcome};

/// Normalizes the submitted term, records it in the history and runs the
/// search. Debounced keystrokes go straight to [`CatalogSession::search`]
/// instead and never touch the history.
pub async fn submit_search<S, K>(
    session: &CatalogSession<S>,
    history: &mut SearchHistory<K>,
    raw: &str,
) -> Result<SearchOutcome, ServiceError>
where
    S: PokemonSource,
    K: KeyValueStore,
{
    let term = sanitize_search_term(&raw.trim().to_lowercase());
    if term.is_empty() {
        return Err(ServiceError::ValidationRejected(format!("empty search term {raw:?}")));
    }
    history.add(&term)?;
    Ok(session.search(&term).await)
}
