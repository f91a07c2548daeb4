use anyhow::{Result, bail};
use pokedex_client::PokemonSource;
use pokedex_service::{CatalogSession, LoadOutcome};

use crate::Settings;
use crate::render;

pub(crate) async fn run(settings: &Settings, pages: u32, json: bool) -> Result<()> {
    let session = CatalogSession::new(settings.client()?);
    load_pages(&session, pages).await?;
    print_view(&session, json)
}

/// Reloads, then loads more until `pages` pages are in (at least one).
pub(crate) async fn load_pages<S: PokemonSource>(
    session: &CatalogSession<S>,
    pages: u32,
) -> Result<()> {
    if session.reload().await == LoadOutcome::Failed {
        bail!(session.error().unwrap_or_default());
    }
    for _ in 1..pages {
        if session.load_more().await == LoadOutcome::Failed {
            bail!(session.error().unwrap_or_default());
        }
    }
    Ok(())
}

pub(crate) fn print_view<S: PokemonSource>(session: &CatalogSession<S>, json: bool) -> Result<()> {
    if json {
        return render::print_json(&session.snapshot());
    }
    println!("{}", render::record_table(&session.records()));
    Ok(())
}
