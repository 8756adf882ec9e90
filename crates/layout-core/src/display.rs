//! Window-manager collaborator interface.
//!
//! Everything the layout operations need from the host is reached through
//! [`DisplayContext`], passed in explicitly rather than read from globals, so
//! the operations run unchanged against a live binding or against
//! [`crate::sim::SimDesktop`].

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::geom::{FrameRect, Rect, WorkArea};

/// Opaque window identifier assigned by the collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowId(pub u32);

impl Display for WindowId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "win#{}", self.0)
    }
}

/// Optional capabilities of a window handle, fixed when the handle is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// The handle can leave a tiled/snapped state via [`WindowHandle::untile`].
    pub untile: bool,
}

/// Live view of the desktop session. Every call reads current state.
pub trait DisplayContext: Send + Sync {
    /// The window holding keyboard focus, if any.
    fn focused_window(&self) -> Option<Box<dyn WindowHandle>>;
    /// Work area of `monitor` on the active workspace.
    fn work_area(&self, monitor: i32) -> WorkArea;
    /// Number of monitors currently attached.
    fn monitor_count(&self) -> i32;
}

/// A single window as exposed by the collaborator.
pub trait WindowHandle: Send {
    /// Stable identifier of the underlying window.
    fn id(&self) -> WindowId;
    /// Index of the monitor the window is on.
    fn monitor(&self) -> i32;
    /// Current outer frame in absolute screen coordinates.
    fn frame_rect(&self) -> FrameRect;
    /// True when maximized on either axis.
    fn is_maximized(&self) -> bool;
    /// Clear maximization on both axes.
    fn unmaximize(&self);
    /// Capabilities captured when the handle was created.
    fn capabilities(&self) -> Capabilities;
    /// Leave a tiled state. Only called when [`Capabilities::untile`] is set.
    fn untile(&self) {}
    /// Set the outer frame in absolute screen coordinates.
    fn move_resize_frame(&self, rect: Rect);
    /// Hand the window to monitor `monitor`. The index is already range-checked.
    fn move_to_monitor(&self, monitor: i32);
}
