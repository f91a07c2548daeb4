use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised by the core input rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("input is empty")]
    Empty,

    #[error("input contains a disallowed pattern: {0}")]
    UnsafeInput(String),

    #[error("input too long: {len} chars (max {max})")]
    TooLong { len: usize, max: usize },
}

pub type Result<T> = StdResult<T, CoreError>;
