//! Typed RPC definitions for the layout service.
//!
//! Method names are the public, stable surface of the service; they are
//! matched exactly on the wire.

use serde::{Deserialize, Serialize};

/// RPC request methods supported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMethod {
    /// Work area of the focused window's monitor.
    GetWorkArea,
    /// Resize the focused window in place.
    ResizeInWorkArea,
    /// Move the focused window to a work-area offset.
    MoveInWorkArea,
    /// Move and resize the focused window.
    MoveResizeInWorkArea,
    /// Send the focused window to another monitor.
    MoveToMonitor,
    /// Move and resize using semantic tokens.
    MoveResizeSemantic,
    /// Diagnostic server status.
    GetServerStatus,
    /// Request a server shutdown.
    Shutdown,
}

impl LayoutMethod {
    /// Every method, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::GetWorkArea,
        Self::ResizeInWorkArea,
        Self::MoveInWorkArea,
        Self::MoveResizeInWorkArea,
        Self::MoveToMonitor,
        Self::MoveResizeSemantic,
        Self::GetServerStatus,
        Self::Shutdown,
    ];

    /// Stable string name for the method when talking to MRPC.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetWorkArea => "GetWorkArea",
            Self::ResizeInWorkArea => "ResizeInWorkArea",
            Self::MoveInWorkArea => "MoveInWorkArea",
            Self::MoveResizeInWorkArea => "MoveResizeInWorkArea",
            Self::MoveToMonitor => "MoveToMonitor",
            Self::MoveResizeSemantic => "MoveResizeSemantic",
            Self::GetServerStatus => "GetServerStatus",
            Self::Shutdown => "Shutdown",
        }
    }

    /// Parse a method name received over MRPC.
    pub fn try_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }

    /// Number of positional parameters the method takes.
    pub fn arity(&self) -> usize {
        match self {
            Self::GetWorkArea | Self::GetServerStatus | Self::Shutdown => 0,
            Self::MoveToMonitor => 1,
            Self::ResizeInWorkArea | Self::MoveInWorkArea => 2,
            Self::MoveResizeInWorkArea | Self::MoveResizeSemantic => 4,
        }
    }
}

/// Lightweight server status snapshot for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerStatus {
    /// Well-known endpoint name the server answers for.
    pub endpoint: String,
    /// Socket path the server is bound to.
    pub socket: String,
    /// Clamp applied by the integer resize operations.
    pub min_extent: i32,
    /// Monitors reported by the display context at query time.
    pub monitors: i32,
    /// Identifier of the focused window, if any.
    pub focused: Option<u32>,
    /// Layout requests handled since start.
    pub requests: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for m in LayoutMethod::ALL {
            assert_eq!(LayoutMethod::try_from_str(m.as_str()), Some(m));
        }
        assert_eq!(LayoutMethod::try_from_str("getworkarea"), None);
        assert_eq!(LayoutMethod::try_from_str(""), None);
    }

    #[test]
    fn arity_matches_surface() {
        assert_eq!(LayoutMethod::GetWorkArea.arity(), 0);
        assert_eq!(LayoutMethod::MoveToMonitor.arity(), 1);
        assert_eq!(LayoutMethod::ResizeInWorkArea.arity(), 2);
        assert_eq!(LayoutMethod::MoveResizeSemantic.arity(), 4);
    }
}
