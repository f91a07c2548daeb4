//! Shared constants for pokedex.
//!
//! Centralizes the limits that the client, the catalog session and the
//! search history all agree on.

/// Upstream API base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// HTTP request timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// List page size used when the caller passes an out-of-range limit.
pub const DEFAULT_LIST_LIMIT: u32 = 20;

/// Largest list page the upstream will be asked for.
pub const MAX_LIST_LIMIT: u32 = 1000;

/// Largest list offset accepted before falling back to 0.
pub const MAX_LIST_OFFSET: u32 = 10_000;

/// Number of references scanned by a name search.
pub const SEARCH_SCAN_LIMIT: u32 = 1000;

/// Detail fetches issued per search (first matches in page order).
pub const MAX_SEARCH_MATCHES: usize = 20;

/// Records loaded by each reload / load-more step.
pub const CATALOG_PAGE_SIZE: u32 = 90;

/// Maximum length of a sanitized search term.
pub const MAX_SEARCH_TERM_LEN: usize = 30;

/// Maximum length of a sanitized name (and of a displayable record name).
pub const MAX_NAME_LEN: usize = 50;

/// Entries kept in the search history.
pub const SEARCH_HISTORY_CAPACITY: usize = 5;

/// Key under which the search history is stored.
pub const SEARCH_HISTORY_KEY: &str = "pokemonSearchHistory";

/// Quiet period before keystroke input triggers a search.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Upper bound used to scale base stats for display.
pub const MAX_BASE_STAT: u32 = 255;
