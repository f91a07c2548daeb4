//! Catalog session: incremental loading, active view and search results.

use std::sync::{Mutex, MutexGuard, PoisonError};

use pokedex_client::PokemonSource;
use pokedex_core::constants::CATALOG_PAGE_SIZE;
use pokedex_core::{CoreError, Record, check_search_term, retain_displayable};
use serde::Serialize;

const RELOAD_FAILED: &str = "Failed to load Pokémon. Try again.";
const LOAD_MORE_FAILED: &str = "Failed to load more Pokémon. Try again.";
const SEARCH_FAILED: &str = "Failed to search Pokémon. Try again.";

/// Load state of the accumulated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    Idle,
    Loading,
    LoadingMore,
    Loaded,
    Failed,
}

/// Result of a reload or load-more call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Page fetched; number of displayable records it contributed.
    Loaded(usize),
    /// Fetch failed; the session carries the error message.
    Failed,
    /// A load was already in flight, nothing was issued.
    Skipped,
    /// A reload started meanwhile; the response was discarded.
    Superseded,
}

/// Result of a search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty term: the unfiltered list is shown again.
    Restored,
    /// Term failed the validity check; the view is unchanged.
    Rejected(CoreError),
    /// Results are now the active view.
    Applied(usize),
    /// Search failed; the active view is empty and an error is set.
    Failed,
    /// A newer request was issued before this one returned.
    Superseded,
}

#[derive(Debug, Clone, PartialEq)]
enum ActiveView {
    Accumulated,
    Filtered(Vec<Record>),
}

#[derive(Debug)]
struct SessionState {
    status: LoadStatus,
    accumulated: Vec<Record>,
    view: ActiveView,
    cursor: u32,
    error: Option<String>,
    /// Last ticket handed out; only its holder may replace the active view.
    /// Load failures are gated by `list_epoch` alone so they always surface.
    latest_ticket: u64,
    /// Bumped by every reload; older load-more responses are dropped.
    list_epoch: u64,
}

impl SessionState {
    fn issue_ticket(&mut self) -> u64 {
        self.latest_ticket = self.latest_ticket.wrapping_add(1);
        self.latest_ticket
    }

    fn is_latest(&self, ticket: u64) -> bool {
        self.latest_ticket == ticket
    }
}

/// Point-in-time copy of what the session shows.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSnapshot {
    pub status: LoadStatus,
    pub cursor: u32,
    pub loaded: usize,
    pub filtered: bool,
    pub error: Option<String>,
    pub records: Vec<Record>,
}

/// One catalog list session over a [`PokemonSource`].
///
/// Methods take `&self`; the state lock is never held across an await, so
/// overlapping calls from one task interleave and are reconciled by tickets.
pub struct CatalogSession<S> {
    source: S,
    state: Mutex<SessionState>,
}

impl<S: PokemonSource> CatalogSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Mutex::new(SessionState {
                status: LoadStatus::Idle,
                accumulated: Vec::new(),
                view: ActiveView::Accumulated,
                cursor: 0,
                error: None,
                latest_ticket: 0,
                list_epoch: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clears everything and loads the first page.
    pub async fn reload(&self) -> LoadOutcome {
        let (ticket, epoch) = {
            let mut state = self.lock();
            state.cursor = 0;
            state.accumulated.clear();
            state.view = ActiveView::Accumulated;
            state.status = LoadStatus::Loading;
            state.error = None;
            state.list_epoch = state.list_epoch.wrapping_add(1);
            (state.issue_ticket(), state.list_epoch)
        };

        let result = self.source.list_with_details(CATALOG_PAGE_SIZE.into(), 0).await;

        let mut state = self.lock();
        if state.list_epoch != epoch {
            tracing::debug!("discarding reload response superseded by a newer reload");
            return LoadOutcome::Superseded;
        }
        match result {
            Ok(records) => {
                let records = retain_displayable(records);
                let added = records.len();
                state.accumulated = records;
                state.cursor = CATALOG_PAGE_SIZE;
                state.status = LoadStatus::Loaded;
                if state.is_latest(ticket) {
                    state.view = ActiveView::Accumulated;
                }
                tracing::info!(loaded = added, "catalog loaded");
                LoadOutcome::Loaded(added)
            },
            Err(e) => {
                tracing::warn!(error = %e, "catalog reload failed");
                state.status = LoadStatus::Failed;
                state.error = Some(RELOAD_FAILED.to_owned());
                LoadOutcome::Failed
            },
        }
    }

    /// Appends the next page. No-op while a load is already in flight.
    pub async fn load_more(&self) -> LoadOutcome {
        let (ticket, epoch, offset) = {
            let mut state = self.lock();
            if matches!(state.status, LoadStatus::Loading | LoadStatus::LoadingMore) {
                return LoadOutcome::Skipped;
            }
            state.status = LoadStatus::LoadingMore;
            state.error = None;
            (state.issue_ticket(), state.list_epoch, state.cursor)
        };

        let result = self.source.list_with_details(CATALOG_PAGE_SIZE.into(), offset.into()).await;

        let mut state = self.lock();
        if state.list_epoch != epoch {
            tracing::debug!(offset, "discarding load-more response from before a reload");
            return LoadOutcome::Superseded;
        }
        match result {
            Ok(records) => {
                let records = retain_displayable(records);
                let added = records.len();
                state.accumulated.extend(records);
                state.cursor = state.cursor.saturating_add(CATALOG_PAGE_SIZE);
                state.status = LoadStatus::Loaded;
                if state.is_latest(ticket) {
                    state.view = ActiveView::Accumulated;
                }
                tracing::info!(offset, added, total = state.accumulated.len(), "loaded more");
                LoadOutcome::Loaded(added)
            },
            Err(e) => {
                tracing::warn!(offset, error = %e, "load more failed");
                state.status = LoadStatus::Failed;
                state.error = Some(LOAD_MORE_FAILED.to_owned());
                LoadOutcome::Failed
            },
        }
    }

    /// Filters the view by `term`. An empty term restores the full list.
    pub async fn search(&self, term: &str) -> SearchOutcome {
        if term.is_empty() {
            let mut state = self.lock();
            state.issue_ticket();
            state.view = ActiveView::Accumulated;
            state.error = None;
            return SearchOutcome::Restored;
        }
        if let Err(reason) = check_search_term(term) {
            tracing::warn!(%reason, "rejected search term");
            return SearchOutcome::Rejected(reason);
        }

        let ticket = self.lock().issue_ticket();
        let result = self.source.search(term).await;

        let mut state = self.lock();
        if !state.is_latest(ticket) {
            tracing::debug!(term, "discarding stale search response");
            return SearchOutcome::Superseded;
        }
        match result {
            Ok(records) => {
                let records = retain_displayable(records);
                let found = records.len();
                state.view = ActiveView::Filtered(records);
                state.error = None;
                SearchOutcome::Applied(found)
            },
            Err(e) => {
                tracing::warn!(term, error = %e, "search failed");
                state.view = ActiveView::Filtered(Vec::new());
                state.error = Some(SEARCH_FAILED.to_owned());
                SearchOutcome::Failed
            },
        }
    }

    pub fn status(&self) -> LoadStatus {
        self.lock().status
    }

    /// Offset the next load-more will request.
    pub fn cursor(&self) -> u32 {
        self.lock().cursor
    }

    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    pub fn accumulated_len(&self) -> usize {
        self.lock().accumulated.len()
    }

    pub fn is_filtered(&self) -> bool {
        matches!(self.lock().view, ActiveView::Filtered(_))
    }

    /// Records currently presented to the user.
    pub fn records(&self) -> Vec<Record> {
        let state = self.lock();
        match &state.view {
            ActiveView::Accumulated => state.accumulated.clone(),
            ActiveView::Filtered(records) => records.clone(),
        }
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        let state = self.lock();
        let (filtered, records) = match &state.view {
            ActiveView::Accumulated => (false, state.accumulated.clone()),
            ActiveView::Filtered(records) => (true, records.clone()),
        };
        CatalogSnapshot {
            status: state.status,
            cursor: state.cursor,
            loaded: state.accumulated.len(),
            filtered,
            error: state.error.clone(),
            records,
        }
    }
}
