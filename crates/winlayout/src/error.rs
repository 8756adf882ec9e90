//! Error handling for the winlayout binary.

use std::{io, result};

use thiserror::Error;

/// Convenient result type for winlayout commands.
pub type Result<T> = result::Result<T, Error>;

/// Errors that end a winlayout invocation.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Errors surfaced by the layout server or its client.
    #[error("{0}")]
    Server(#[from] layout_server::Error),
    /// Configuration parsing or validation errors.
    #[error("{}", .0.pretty())]
    Config(#[from] config::Error),
    /// A local-only subcommand was routed to the server.
    #[error("`{0}` runs locally and is never sent to a server")]
    NotRemote(&'static str),
    /// Neither `--server` nor a subcommand was given.
    #[error("nothing to do: pass --server or a subcommand (see --help)")]
    NoCommand,
}
