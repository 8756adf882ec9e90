//! Configuration for the winlayout server.
//!
//! The file is RON. Every field is optional; an empty `()` yields a server on
//! the default socket serving a single-monitor simulated desktop.
//!
//! ```ron
//! (
//!     server: (min_extent: 50),
//!     desktop: (
//!         monitors: [(x: 0, y: 0, width: 1920, height: 1080)],
//!         windows: [(title: "editor", frame: (x: 100, y: 100, width: 800, height: 600))],
//!         focused: Some(0),
//!     ),
//! )
//! ```

use std::{
    env,
    path::{Path, PathBuf},
};

mod error;
mod loader;
mod types;

pub use error::{Error, excerpt_at};
pub use loader::{load_from_path, load_from_str, to_ron_string};
pub use types::{Config, DesktopConfig, MonitorSpec, ServerConfig, WindowSpec};

/// Determine the preferred user config path (`~/.config/winlayout/config.ron`).
pub fn default_config_path() -> PathBuf {
    let mut p = PathBuf::from(env::var_os("HOME").unwrap_or_default());
    p.push(".config");
    p.push("winlayout");
    p.push("config.ron");
    p
}

/// Resolve the effective config path using the default policy.
///
/// Policy:
/// 1) Use `explicit` when provided.
/// 2) Else use `~/.config/winlayout/config.ron` when it exists.
/// 3) Else `None`: run on built-in defaults.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let preferred = default_config_path();
    preferred.exists().then_some(preferred)
}

/// Load the config chosen by [`resolve_config_path`], or the defaults when no
/// file applies. An explicit path that cannot be read is an error.
pub fn load(explicit: Option<&Path>) -> Result<(Config, Option<PathBuf>), Error> {
    match resolve_config_path(explicit) {
        Some(path) => Ok((load_from_path(&path)?, Some(path))),
        None => Ok((Config::default(), None)),
    }
}
