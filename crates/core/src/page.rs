//! Pagination parameters for list requests.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT, MAX_LIST_OFFSET};

/// A validated `limit`/`offset` pair, always inside the ranges the upstream accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u32,
}

impl PageRequest {
    /// Out-of-range values fall back to the defaults (limit 20, offset 0).
    #[must_use]
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit: validate_limit(limit), offset: validate_offset(offset) }
    }

    /// Builds a request from unparsed input. Non-numeric values fall back to
    /// the defaults exactly like out-of-range ones.
    #[must_use]
    pub fn from_raw(limit: &str, offset: &str) -> Self {
        let limit = limit.trim().parse::<i64>().map_or(DEFAULT_LIST_LIMIT, validate_limit);
        let offset = offset.trim().parse::<i64>().map_or(0, validate_offset);
        Self { limit, offset }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { limit: DEFAULT_LIST_LIMIT, offset: 0 }
    }
}

/// Clamps a list limit into `[1, 1000]`, returning 20 for anything outside.
#[must_use]
pub fn validate_limit(limit: i64) -> u32 {
    match u32::try_from(limit) {
        Ok(l) if (1..=MAX_LIST_LIMIT).contains(&l) => l,
        _ => DEFAULT_LIST_LIMIT,
    }
}

/// Clamps a list offset into `[0, 10000]`, returning 0 for anything outside.
#[must_use]
pub fn validate_offset(offset: i64) -> u32 {
    match u32::try_from(offset) {
        Ok(o) if o <= MAX_LIST_OFFSET => o,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_in_range_is_kept() {
        assert_eq!(validate_limit(1), 1);
        assert_eq!(validate_limit(90), 90);
        assert_eq!(validate_limit(1000), 1000);
    }

    #[test]
    fn test_limit_out_of_range_defaults() {
        for bad in [0, -1, 1001, i64::MIN, i64::MAX] {
            assert_eq!(validate_limit(bad), DEFAULT_LIST_LIMIT, "limit {bad}");
        }
    }

    #[test]
    fn test_offset_bounds() {
        assert_eq!(validate_offset(0), 0);
        assert_eq!(validate_offset(10_000), 10_000);
        assert_eq!(validate_offset(10_001), 0);
        assert_eq!(validate_offset(-5), 0);
    }

    #[test]
    fn test_from_raw_non_numeric_defaults() {
        assert_eq!(PageRequest::from_raw("abc", "xyz"), PageRequest { limit: 20, offset: 0 });
        assert_eq!(PageRequest::from_raw("", "1.5"), PageRequest { limit: 20, offset: 0 });
        assert_eq!(PageRequest::from_raw(" 50 ", "180"), PageRequest { limit: 50, offset: 180 });
    }
}
