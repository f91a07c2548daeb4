use std::time::Duration;

use anyhow::Result;
use pokedex_core::constants::SEARCH_DEBOUNCE_MS;
use pokedex_service::{CatalogSession, LoadOutcome, SearchOutcome, spawn_debounced};
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::Settings;
use crate::render;

/// Interactive search. Each stdin line is the current content of the search
/// box; terms reach the catalog after 300 ms without a new line.
pub(crate) async fn run(settings: &Settings, json: bool) -> Result<()> {
    let session = CatalogSession::new(settings.client()?);
    if session.reload().await == LoadOutcome::Failed {
        eprintln!("{}", session.error().unwrap_or_default());
    } else if !json {
        println!("{} Pokémon loaded. Type to search, Ctrl-D to quit.", session.accumulated_len());
    }

    let (input_tx, input_rx) = mpsc::channel::<String>(64);
    let (term_tx, mut term_rx) = mpsc::channel::<String>(8);
    let debouncer = spawn_debounced(Duration::from_millis(SEARCH_DEBOUNCE_MS), input_rx, term_tx);

    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if input_tx.send(line).await.is_err() {
                        break;
                    }
                },
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read stdin");
                    break;
                },
            }
        }
    });

    while let Some(term) = term_rx.recv().await {
        let outcome = session.search(&term).await;
        if json {
            render::print_json(&json!({ "term": term, "view": session.snapshot() }))?;
            continue;
        }
        match outcome {
            SearchOutcome::Restored => {
                println!("{}", render::record_table(&session.records()));
            },
            SearchOutcome::Rejected(reason) => println!("Search rejected: {reason}"),
            SearchOutcome::Applied(_) => {
                println!("Results for \"{term}\":");
                println!("{}", render::record_table(&session.records()));
            },
            SearchOutcome::Failed => println!("{}", session.error().unwrap_or_default()),
            SearchOutcome::Superseded => {},
        }
    }

    reader.await?;
    debouncer.await?;
    Ok(())
}
