use std::time::Duration;

use futures_util::future::try_join_all;
use pokedex_core::constants::{
    DEFAULT_HTTP_TIMEOUT_SECS, MAX_SEARCH_MATCHES, SEARCH_SCAN_LIMIT,
};
use pokedex_core::{ListPage, PageRequest, Record, Reference, normalize_search_term, sanitize_name};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// Client for the upstream catalog API.
///
/// No caching: identical calls always go back to the network.
pub struct PokeClient {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
}

impl std::fmt::Debug for PokeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokeClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl PokeClient {
    /// Creates a client for the given base URL with the default timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS))
    }

    /// Creates a client with an explicit request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches one page of references. Out-of-range `limit`/`offset` fall back
    /// to 20/0.
    ///
    /// # Errors
    /// Returns an error if the request fails, the status is not a success or
    /// the body is not a list page.
    pub async fn fetch_list(&self, limit: i64, offset: i64) -> Result<ListPage, ClientError> {
        self.fetch_page(PageRequest::new(limit, offset)).await
    }

    /// Fetches one page for an already validated request.
    ///
    /// # Errors
    /// Same as [`Self::fetch_list`].
    pub async fn fetch_page(&self, page: PageRequest) -> Result<ListPage, ClientError> {
        let url = format!("{}/pokemon?limit={}&offset={}", self.base_url, page.limit, page.offset);
        let list: ListPage = self.get_json(&url).await?;
        tracing::debug!(
            limit = page.limit,
            offset = page.offset,
            returned = list.results.len(),
            "fetched list page"
        );
        Ok(list)
    }

    /// Fetches a record by its absolute URL. Anything that is not an absolute
    /// `http`/`https` URL yields `Ok(None)` without touching the network.
    ///
    /// # Errors
    /// Returns an error if the request fails, the status is not a success or
    /// the body is not JSON. A JSON body of the wrong shape is passed through
    /// as a non-displayable record.
    pub async fn fetch_by_url(&self, url: &str) -> Result<Option<Record>, ClientError> {
        if !is_valid_url(url) {
            tracing::debug!(url, "skipping invalid detail url");
            return Ok(None);
        }
        self.get_record(url).await.map(Some)
    }

    /// Fetches a record by name. The name is sanitized first; an empty result
    /// or an upstream 404 yields `Ok(None)`.
    ///
    /// # Errors
    /// Returns an error on transport failure, any other non-success status or
    /// an undecodable body.
    pub async fn fetch_by_name(&self, name: &str) -> Result<Option<Record>, ClientError> {
        let name = sanitize_name(name);
        if name.is_empty() {
            return Ok(None);
        }
        let url = format!("{}/pokemon/{}", self.base_url, name);
        match self.get_record(&url).await {
            Ok(record) => Ok(Some(record)),
            Err(ClientError::HttpStatus { code, .. }) if code == StatusCode::NOT_FOUND.as_u16() => {
                tracing::debug!(name = %name, "no record upstream");
                Ok(None)
            },
            Err(e) => Err(e),
        }
    }

    /// Fetches a list page and then every referenced record concurrently.
    ///
    /// Output follows the page order. Any single failed detail fetch fails the
    /// whole call; no partial results are returned.
    ///
    /// # Errors
    /// Returns the first error from the list fetch or any detail fetch.
    pub async fn fetch_list_with_details(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Record>, ClientError> {
        let page = self.fetch_list(limit, offset).await?;
        self.fetch_details(&page.results).await
    }

    /// Searches the first 1000 references for names containing `term`
    /// (case-insensitive), then fetches the first 20 matches concurrently.
    ///
    /// A term that sanitizes to nothing returns an empty list without any
    /// network call.
    ///
    /// # Errors
    /// Returns the first error from the list fetch or any detail fetch.
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<Record>, ClientError> {
        let Some(term) = normalize_search_term(term) else {
            return Ok(Vec::new());
        };
        let page = self.fetch_page(PageRequest::new(SEARCH_SCAN_LIMIT.into(), 0)).await?;
        let matches = matching_references(&page.results, &term);
        tracing::debug!(term = %term, matches = matches.len(), "search matched references");
        if matches.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch_details(&matches).await
    }

    /// Fan-out/fan-in: all detail requests are in flight at once and the
    /// results are reassembled in reference order.
    async fn fetch_details(&self, references: &[Reference]) -> Result<Vec<Record>, ClientError> {
        let fetches = references.iter().map(|r| self.fetch_by_url(&r.url));
        let details = try_join_all(fetches).await?;
        let requested = details.len();
        let records: Vec<Record> = details.into_iter().flatten().collect();
        if records.len() < requested {
            tracing::warn!(
                skipped = requested.saturating_sub(records.len()),
                "references with invalid detail urls were skipped"
            );
        }
        Ok(records)
    }

    async fn get_record(&self, url: &str) -> Result<Record, ClientError> {
        let body: Value = self.get_json(url).await?;
        Ok(Record::from_json(body))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "upstream returned error status");
            return Err(ClientError::HttpStatus { code: status.as_u16(), url: url.to_owned() });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode {
            context: format!("{url} (body: {})", truncate(&body, 200)),
            source: e,
        })
    }
}

/// References whose name contains `term` (already lower-cased), first 20 in
/// page order.
fn matching_references(references: &[Reference], term: &str) -> Vec<Reference> {
    references
        .iter()
        .filter(|r| r.name.to_lowercase().contains(term))
        .take(MAX_SEARCH_MATCHES)
        .cloned()
        .collect()
}

fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(name: &str) -> Reference {
        Reference { name: name.to_owned(), url: format!("https://x/{name}") }
    }

    #[test]
    fn test_url_validation() {
        assert!(is_valid_url("https://pokeapi.co/api/v2/pokemon/1/"));
        assert!(is_valid_url("http://localhost:8080/pokemon/1"));
        assert!(!is_valid_url("ftp://x"));
        assert!(!is_valid_url("javascript:alert(1)"));
        assert!(!is_valid_url("/pokemon/1"));
        assert!(!is_valid_url(""));
    }

    #[test]
    fn test_matching_references_keeps_page_order_and_caps() {
        let refs = vec![reference("raichu"), reference("Pikachu"), reference("pikipek")];
        let names: Vec<String> =
            matching_references(&refs, "pik").into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["Pikachu", "pikipek"]);
        let names: Vec<String> =
            matching_references(&refs, "chu").into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["raichu", "Pikachu"]);

        let many: Vec<Reference> = (0..50).map(|i| reference(&format!("mon{i}"))).collect();
        let matched = matching_references(&many, "mon");
        assert_eq!(matched.len(), MAX_SEARCH_MATCHES);
        assert_eq!(matched[0].name, "mon0");
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("héllo", 2), "h");
        assert_eq!(truncate("hello", 3), "hel");
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let client = PokeClient::new("https://pokeapi.co/api/v2/").expect("client");
        assert_eq!(client.base_url(), "https://pokeapi.co/api/v2");
    }
}
