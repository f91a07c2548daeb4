use anyhow::{Result, bail};
use pokedex_service::{CatalogSession, SearchOutcome, submit_search};
use pokedex_storage::SearchHistory;

use crate::Settings;
use crate::commands::catalog::print_view;

pub(crate) async fn run(settings: &Settings, term: &str, json: bool) -> Result<()> {
    let session = CatalogSession::new(settings.client()?);
    let mut history = SearchHistory::load(settings.store()?);

    match submit_search(&session, &mut history, term).await? {
        SearchOutcome::Rejected(reason) => bail!("search rejected: {reason}"),
        SearchOutcome::Failed => bail!(session.error().unwrap_or_default()),
        outcome => tracing::debug!(?outcome, "search finished"),
    }
    print_view(&session, json)
}
