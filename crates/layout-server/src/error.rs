//! Error types for the layout server and its client.

use std::{io::Error as IoError, result::Result as StdResult};

use thiserror::Error;

/// The main error type for layout-server operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Error in IPC communication
    #[error("IPC error: {0}")]
    Ipc(String),

    /// IO-related errors
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The server rejected a request with a typed service error
    #[error("{name}: {message}")]
    Service {
        /// Stable error code (see [`RpcErrorCode`]).
        name: String,
        /// Human-readable detail supplied by the server.
        message: String,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = StdResult<T, Error>;

impl From<layout_protocol::codec::Error> for Error {
    fn from(err: layout_protocol::codec::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Stable RPC error codes surfaced via MRPC `ServiceError.name`.
///
/// Use `to_string()` (Display) to produce the canonical code string.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcErrorCode {
    /// A `Shutdown` request was already accepted.
    #[error("ShuttingDown")]
    ShuttingDown,
    /// Fewer parameters than the method takes.
    #[error("MissingParams")]
    MissingParams,
    /// A parameter had the wrong msgpack type.
    #[error("InvalidType")]
    InvalidType,
    /// No method with that name.
    #[error("MethodNotFound")]
    MethodNotFound,
    /// A semantic size token could not be resolved.
    #[error("InvalidSize")]
    InvalidSize,
    /// A semantic position token could not be resolved.
    #[error("InvalidPosition")]
    InvalidPosition,
    /// A binary reply could not be encoded.
    #[error("Encoding")]
    Encoding,
}
