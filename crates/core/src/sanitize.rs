//! Input sanitization for names and search terms.
//!
//! Every caller-supplied string passes through here before it reaches a URL,
//! the search filter or the history store.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{MAX_NAME_LEN, MAX_SEARCH_TERM_LEN};
use crate::error::{CoreError, Result};

#[expect(clippy::unwrap_used, reason = "static regex pattern is compile-time validated")]
static ANGLE_BRACKETS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[<>]").unwrap());

#[expect(clippy::unwrap_used, reason = "static regex pattern is compile-time validated")]
static SCRIPT_SCHEME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)javascript:").unwrap());

/// `on<word>=` event-handler attributes (`onclick=`, `onerror=`...).
#[expect(clippy::unwrap_used, reason = "static regex pattern is compile-time validated")]
static EVENT_HANDLER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)on[A-Za-z0-9_]+=").unwrap());

#[expect(clippy::unwrap_used, reason = "static regex pattern is compile-time validated")]
static NAME_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]").unwrap());

/// Same as [`NAME_DISALLOWED`] but whitespace survives.
#[expect(clippy::unwrap_used, reason = "static regex pattern is compile-time validated")]
static TERM_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").unwrap());

#[expect(clippy::unwrap_used, reason = "static regex pattern is compile-time validated")]
static DANGEROUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[<>]|javascript:|on[A-Za-z0-9_]+=").unwrap());

fn strip_markup(input: &str) -> String {
    let no_angles = ANGLE_BRACKETS.replace_all(input, "");
    let no_scheme = SCRIPT_SCHEME.replace_all(&no_angles, "");
    EVENT_HANDLER.replace_all(&no_scheme, "").into_owned()
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s.get(..idx).unwrap_or(s),
        None => s,
    }
}

/// Sanitizes a catalog name for use as a URL path segment.
///
/// Result contains only `[A-Za-z0-9_-]`, at most 50 chars. May be empty.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    let stripped = strip_markup(name);
    let cleaned = NAME_DISALLOWED.replace_all(&stripped, "");
    truncate_chars(&cleaned, MAX_NAME_LEN).trim().to_owned()
}

/// Sanitizes a search term: like [`sanitize_name`] but keeps whitespace and
/// caps at 30 chars. Case is preserved; see [`normalize_search_term`].
#[must_use]
pub fn sanitize_search_term(term: &str) -> String {
    let stripped = strip_markup(term);
    let cleaned = TERM_DISALLOWED.replace_all(&stripped, "");
    truncate_chars(&cleaned, MAX_SEARCH_TERM_LEN).trim().to_owned()
}

/// Sanitized, lower-cased term used for substring matching. `None` when
/// nothing survives sanitization.
#[must_use]
pub fn normalize_search_term(term: &str) -> Option<String> {
    let term = sanitize_search_term(term).to_lowercase();
    let term = term.trim();
    if term.is_empty() { None } else { Some(term.to_owned()) }
}

/// Sanitizes free text for display (keeps punctuation, drops markup, caps at 50).
#[must_use]
pub fn sanitize_display_text(text: &str) -> String {
    truncate_chars(&strip_markup(text), MAX_NAME_LEN).to_owned()
}

/// Lightweight check applied to a search term before it is dispatched.
///
/// # Errors
/// Returns [`CoreError`] naming why the term was rejected.
pub fn check_search_term(term: &str) -> Result<()> {
    if term.is_empty() {
        return Err(CoreError::Empty);
    }
    if let Some(m) = DANGEROUS.find(term) {
        return Err(CoreError::UnsafeInput(m.as_str().to_owned()));
    }
    let len = term.chars().count();
    if len > MAX_SEARCH_TERM_LEN {
        return Err(CoreError::TooLong { len, max: MAX_SEARCH_TERM_LEN });
    }
    Ok(())
}

#[cfg(test)]
#[path = "sanitize_tests.rs"]
mod tests;
