use anyhow::Result;
use pokedex_storage::SearchHistory;

use crate::Settings;
use crate::render;

pub(crate) fn run(settings: &Settings, json: bool) -> Result<()> {
    let history = SearchHistory::load(settings.store()?);
    if json {
        return render::print_json(&history.entries());
    }
    if history.entries().is_empty() {
        println!("No recent searches.");
    }
    for term in history.entries() {
        println!("{term}");
    }
    Ok(())
}
