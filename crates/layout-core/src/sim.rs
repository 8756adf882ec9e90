//! In-memory desktop implementing [`DisplayContext`].
//!
//! Used by tests and by the server when no native binding is present. It keeps
//! the host quirk the apply protocol works around: frame changes on a
//! maximized or tiled window are recorded but ignored.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use crate::{
    display::{Capabilities, DisplayContext, WindowHandle, WindowId},
    geom::{FrameRect, Rect, WorkArea},
};

/// One simulated monitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimMonitor {
    /// Full monitor rectangle.
    pub geometry: Rect,
    /// Part of `geometry` left after panels and docks.
    pub work_area: WorkArea,
}

/// One simulated window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimWindow {
    /// Identifier handed out by [`SimDesktop::add_window`].
    pub id: WindowId,
    /// Label used in logs and config.
    pub title: String,
    /// Index of the monitor the window is on.
    pub monitor: i32,
    /// Restored (unmaximized) frame.
    pub frame: FrameRect,
    /// Maximized windows report the work area as their frame.
    pub maximized: bool,
    /// Tiled windows ignore frame changes until untiled.
    pub tiled: bool,
    /// Whether handles for this window expose the untile capability.
    pub untile: bool,
}

/// A collaborator call recorded by the simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    /// [`WindowHandle::unmaximize`].
    Unmaximize(WindowId),
    /// [`WindowHandle::untile`].
    Untile(WindowId),
    /// [`WindowHandle::move_resize_frame`] with the requested frame.
    MoveResizeFrame(WindowId, Rect),
    /// [`WindowHandle::move_to_monitor`] with the target index.
    MoveToMonitor(WindowId, i32),
}

impl Call {
    /// True for calls that ask the host to change a frame or monitor.
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::MoveResizeFrame(..) | Self::MoveToMonitor(..))
    }
}

#[derive(Default)]
struct State {
    monitors: Vec<SimMonitor>,
    windows: Vec<SimWindow>,
    focused: Option<WindowId>,
    calls: Vec<Call>,
    next_id: u32,
}

impl State {
    fn window_mut(&mut self, id: WindowId) -> Option<&mut SimWindow> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    fn record(&mut self, call: Call) {
        trace!("sim: {:?}", call);
        self.calls.push(call);
    }

    fn work_area(&self, monitor: i32) -> WorkArea {
        usize::try_from(monitor)
            .ok()
            .and_then(|i| self.monitors.get(i))
            .map(|m| m.work_area)
            .unwrap_or_default()
    }
}

/// Shared handle to a simulated desktop. Clones observe the same state.
#[derive(Clone, Default)]
pub struct SimDesktop {
    state: Arc<Mutex<State>>,
}

impl SimDesktop {
    /// An empty desktop: no monitors, no windows, nothing focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a monitor and return its index.
    pub fn add_monitor(&self, geometry: Rect, work_area: WorkArea) -> i32 {
        let mut st = self.state.lock();
        st.monitors.push(SimMonitor {
            geometry,
            work_area,
        });
        i32::try_from(st.monitors.len() - 1).unwrap_or(i32::MAX)
    }

    /// Add a normal, untile-capable window.
    pub fn add_window(&self, title: impl Into<String>, monitor: i32, frame: FrameRect) -> WindowId {
        let mut st = self.state.lock();
        st.next_id += 1;
        let id = WindowId(st.next_id);
        st.windows.push(SimWindow {
            id,
            title: title.into(),
            monitor,
            frame,
            maximized: false,
            tiled: false,
            untile: true,
        });
        id
    }

    /// Move keyboard focus; `None` leaves no window focused.
    pub fn focus(&self, id: Option<WindowId>) {
        self.state.lock().focused = id;
    }

    /// Set or clear the maximized state.
    pub fn set_maximized(&self, id: WindowId, v: bool) {
        if let Some(w) = self.state.lock().window_mut(id) {
            w.maximized = v;
        }
    }

    /// Set or clear the tiled state.
    pub fn set_tiled(&self, id: WindowId, v: bool) {
        if let Some(w) = self.state.lock().window_mut(id) {
            w.tiled = v;
        }
    }

    /// Takes effect for handles obtained after the call.
    pub fn set_untile_capable(&self, id: WindowId, v: bool) {
        if let Some(w) = self.state.lock().window_mut(id) {
            w.untile = v;
        }
    }

    /// Snapshot of one window.
    pub fn window(&self, id: WindowId) -> Option<SimWindow> {
        self.state.lock().windows.iter().find(|w| w.id == id).cloned()
    }

    /// Snapshot of every window, in creation order.
    pub fn windows(&self) -> Vec<SimWindow> {
        self.state.lock().windows.clone()
    }

    /// Snapshot of every monitor, by index.
    pub fn monitors(&self) -> Vec<SimMonitor> {
        self.state.lock().monitors.clone()
    }

    /// Every recorded collaborator call, oldest first.
    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    /// Recorded frame and monitor changes only.
    pub fn mutations(&self) -> Vec<Call> {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|c| c.is_mutation())
            .cloned()
            .collect()
    }
}

impl DisplayContext for SimDesktop {
    fn focused_window(&self) -> Option<Box<dyn WindowHandle>> {
        let st = self.state.lock();
        let id = st.focused?;
        let w = st.windows.iter().find(|w| w.id == id)?;
        Some(Box::new(SimHandle {
            id,
            caps: Capabilities { untile: w.untile },
            state: self.state.clone(),
        }))
    }

    fn work_area(&self, monitor: i32) -> WorkArea {
        self.state.lock().work_area(monitor)
    }

    fn monitor_count(&self) -> i32 {
        i32::try_from(self.state.lock().monitors.len()).unwrap_or(i32::MAX)
    }
}

/// Window handle backed by the shared simulation state.
struct SimHandle {
    id: WindowId,
    caps: Capabilities,
    state: Arc<Mutex<State>>,
}

impl SimHandle {
    fn with_window<T>(&self, f: impl FnOnce(&SimWindow, &State) -> T) -> Option<T> {
        let st = self.state.lock();
        st.windows.iter().find(|w| w.id == self.id).map(|w| f(w, &*st))
    }
}

impl WindowHandle for SimHandle {
    fn id(&self) -> WindowId {
        self.id
    }

    fn monitor(&self) -> i32 {
        self.with_window(|w, _| w.monitor).unwrap_or(0)
    }

    fn frame_rect(&self) -> FrameRect {
        self.with_window(|w, st| {
            if w.maximized {
                st.work_area(w.monitor)
            } else {
                w.frame
            }
        })
        .unwrap_or_default()
    }

    fn is_maximized(&self) -> bool {
        self.with_window(|w, _| w.maximized).unwrap_or(false)
    }

    fn unmaximize(&self) {
        let mut st = self.state.lock();
        st.record(Call::Unmaximize(self.id));
        if let Some(w) = st.window_mut(self.id) {
            w.maximized = false;
        }
    }

    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn untile(&self) {
        let mut st = self.state.lock();
        st.record(Call::Untile(self.id));
        if let Some(w) = st.window_mut(self.id) {
            w.tiled = false;
        }
    }

    fn move_resize_frame(&self, rect: Rect) {
        let mut st = self.state.lock();
        st.record(Call::MoveResizeFrame(self.id, rect));
        if let Some(w) = st.window_mut(self.id) {
            if w.maximized || w.tiled {
                trace!("sim: {} frame change ignored (maximized/tiled)", self.id);
                return;
            }
            w.frame = rect;
        }
    }

    fn move_to_monitor(&self, monitor: i32) {
        let mut st = self.state.lock();
        st.record(Call::MoveToMonitor(self.id, monitor));
        let Some(target) = usize::try_from(monitor)
            .ok()
            .and_then(|i| st.monitors.get(i))
            .map(|m| m.work_area)
        else {
            return;
        };
        let Some(current) = st.window_mut(self.id).map(|w| w.monitor) else {
            return;
        };
        let source = st.work_area(current);
        if let Some(w) = st.window_mut(self.id) {
            // Keep the offset from the work-area origin.
            let moved = Rect::new(
                target.x.saturating_add(w.frame.x.saturating_sub(source.x)),
                target.y.saturating_add(w.frame.y.saturating_sub(source.y)),
                w.frame.width,
                w.frame.height,
            );
            w.frame = moved.clamp_into(&target);
            w.monitor = monitor;
        }
    }
}
