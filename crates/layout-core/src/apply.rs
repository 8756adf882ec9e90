//! Two-phase application of a [`GeometryPlan`] to a window.
//!
//! Many window managers drop a combined move+resize, or ignore frame changes
//! entirely while a window is maximized or tiled. Application therefore:
//!
//! 1. clears maximized/tiled state,
//! 2. moves the window keeping its current size,
//! 3. resizes it at the new position.
//!
//! Steps 2 and 3 are separate frame calls and each is skipped when the plan
//! does not ask for it.

use tracing::debug;

use crate::{
    display::WindowHandle,
    geom::{FrameRect, Rect, WorkArea},
    plan::GeometryPlan,
};

/// Frame calls derived from a plan, in issue order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Steps {
    /// Move at the current size.
    pub moved: Option<Rect>,
    /// Resize at the (possibly new) position.
    pub resized: Option<Rect>,
}

/// Compute the absolute frame calls for `plan`.
///
/// Plan offsets are relative to the work-area origin; absent offsets keep the
/// current frame position.
pub fn steps(plan: &GeometryPlan, frame: &FrameRect, work_area: &WorkArea) -> Steps {
    let x = plan
        .x
        .map_or(frame.x, |dx| work_area.x.saturating_add(dx));
    let y = plan
        .y
        .map_or(frame.y, |dy| work_area.y.saturating_add(dy));

    let moved = plan
        .moves()
        .then(|| Rect::new(x, y, frame.width, frame.height));
    let resized = match (plan.width, plan.height) {
        (Some(w), Some(h)) => Some(Rect::new(x, y, w, h)),
        _ => None,
    };
    Steps { moved, resized }
}

/// Clear states that make frame changes a no-op.
pub fn unblock(win: &dyn WindowHandle) {
    if win.is_maximized() {
        debug!("apply: {} maximized -> unmaximize", win.id());
        win.unmaximize();
    }
    if win.capabilities().untile {
        win.untile();
    }
}

/// Apply `plan` to `win` within `work_area`.
///
/// The frame is read after unblocking, since leaving a maximized state
/// changes it.
pub fn apply(win: &dyn WindowHandle, plan: &GeometryPlan, work_area: &WorkArea) -> Steps {
    unblock(win);
    place(win, plan, work_area)
}

/// Issue the move and resize calls for `plan` against the current frame.
///
/// Callers must already have run [`unblock`].
pub fn place(win: &dyn WindowHandle, plan: &GeometryPlan, work_area: &WorkArea) -> Steps {
    let frame = win.frame_rect();
    let s = steps(plan, &frame, work_area);

    if let Some(r) = s.moved {
        debug!("apply: {} move -> {}", win.id(), r);
        win.move_resize_frame(r);
    }
    if let Some(r) = s.resized {
        debug!("apply: {} resize -> {}", win.id(), r);
        win.move_resize_frame(r);
    }
    s
}
