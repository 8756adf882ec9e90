//! Error type for layout operations.

use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised while resolving or applying a layout request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A size token was neither a number nor a percentage.
    #[error("invalid size value: {0:?}")]
    InvalidSize(String),

    /// A position token was neither a number, a percentage, nor a known keyword.
    #[error("invalid position value: {0:?}")]
    InvalidPosition(String),

    /// The operation needs a focused window and there is none.
    #[error("no focused window")]
    NoFocusedWindow,

    /// Monitor index outside `[0, count)`.
    #[error("monitor {index} out of range (count {count})")]
    MonitorOutOfRange {
        /// Requested index.
        index: i32,
        /// Monitors present when the request was handled.
        count: i32,
    },
}

/// Result alias for layout operations.
pub type Result<T> = StdResult<T, Error>;
