//! MRPC server and client for the winlayout service.
//!
//! - `Server`: binds a Unix socket and serves layout requests against a
//!   [`layout_core::DisplayContext`].
//! - `Connection`: typed client for the same surface.
//! - `default_socket_path()`: the per-user socket derived from
//!   [`layout_protocol::ENDPOINT_NAME`].
//!
//! Failures that are part of normal operation (no focused window, a monitor
//! index out of range) are reported as `false`. Invalid semantic tokens come
//! back as service errors named `InvalidSize` or `InvalidPosition`.

use std::{env, path::PathBuf};

use layout_protocol::ENDPOINT_NAME;

mod error;
mod ipc;
mod server;

pub use error::{Error, Result, RpcErrorCode};
pub use ipc::Connection;
pub use server::Server;

/// Return the per-user runtime directory used for IPC socket files.
///
/// Preference order:
/// - `$XDG_RUNTIME_DIR/winlayout`
/// - `~/.cache/winlayout/run`
fn socket_runtime_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_RUNTIME_DIR")
        && !xdg.is_empty()
    {
        return PathBuf::from(xdg).join("winlayout");
    }
    let home = env::var("HOME").unwrap_or_else(|_| "/tmp".into());
    PathBuf::from(home).join(".cache/winlayout/run")
}

/// Default socket path for the well-known endpoint.
pub fn default_socket_path() -> String {
    socket_runtime_dir()
        .join(format!("{ENDPOINT_NAME}.sock"))
        .to_string_lossy()
        .to_string()
}
