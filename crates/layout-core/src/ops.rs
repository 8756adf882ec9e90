//! The six remote-callable layout operations.

use std::sync::Arc;

use tracing::debug;

use crate::{
    Error, Result,
    apply::{apply, place, unblock},
    display::{DisplayContext, WindowHandle},
    geom::WorkArea,
    plan::{GeometryPlan, SemanticArgs, plan},
};

/// Smallest width/height accepted by the integer resize operations.
pub const MIN_EXTENT: i32 = 50;

/// The remote-callable layout operations, bound to one display context.
///
/// Operations are stateless: each call re-reads the focused window, its
/// monitor and the work area before acting.
#[derive(Clone)]
pub struct LayoutOps {
    /// Host collaborator.
    ctx: Arc<dyn DisplayContext>,
    /// Clamp for the integer resize operations.
    min_extent: i32,
}

impl LayoutOps {
    /// Bind the operations to `ctx` with the default [`MIN_EXTENT`].
    pub fn new(ctx: Arc<dyn DisplayContext>) -> Self {
        Self {
            ctx,
            min_extent: MIN_EXTENT,
        }
    }

    /// Override the clamp applied by the integer resize operations.
    pub fn with_min_extent(mut self, min_extent: i32) -> Self {
        self.min_extent = min_extent.max(1);
        self
    }

    /// Clamp currently applied by the integer resize operations.
    pub fn min_extent(&self) -> i32 {
        self.min_extent
    }

    /// The display context the operations act on.
    pub fn context(&self) -> &Arc<dyn DisplayContext> {
        &self.ctx
    }

    /// The focused window, or [`Error::NoFocusedWindow`].
    fn focused(&self) -> Result<Box<dyn WindowHandle>> {
        self.ctx.focused_window().ok_or(Error::NoFocusedWindow)
    }

    fn work_area_of(&self, win: &dyn WindowHandle) -> WorkArea {
        self.ctx.work_area(win.monitor())
    }

    /// Raise `v` to the minimum extent.
    fn clamp(&self, v: i32) -> i32 {
        v.max(self.min_extent)
    }

    /// Work area of the focused window's monitor; all zeros without focus.
    pub fn get_work_area(&self) -> WorkArea {
        match self.ctx.focused_window() {
            Some(win) => self.work_area_of(win.as_ref()),
            None => WorkArea::default(),
        }
    }

    /// Resize in place, clamping both extents to the minimum.
    pub fn resize_in_work_area(&self, width: i32, height: i32) -> Result<()> {
        let target = GeometryPlan::size(self.clamp(width), self.clamp(height));
        self.apply_focused(&target)
    }

    /// Move to an offset from the work-area origin, keeping the size.
    pub fn move_in_work_area(&self, x: i32, y: i32) -> Result<()> {
        self.apply_focused(&GeometryPlan::position(x, y))
    }

    /// Move and resize in one request; both extents are clamped.
    pub fn move_resize_in_work_area(&self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        let target = GeometryPlan::rect(x, y, self.clamp(width), self.clamp(height));
        self.apply_focused(&target)
    }

    /// Hand the focused window to monitor `monitor`.
    pub fn move_to_monitor(&self, monitor: i32) -> Result<()> {
        let win = self.focused()?;
        let count = self.ctx.monitor_count();
        if !(0..count).contains(&monitor) {
            return Err(Error::MonitorOutOfRange {
                index: monitor,
                count,
            });
        }
        debug!("move_to_monitor: {} -> {}", win.id(), monitor);
        win.move_to_monitor(monitor);
        Ok(())
    }

    /// Resolve four semantic tokens and apply the result.
    ///
    /// Token errors are returned before the window is touched. Once the
    /// tokens are known to be valid the window is unblocked and the plan is
    /// resolved again against the restored frame, so keyword positions use
    /// the size the window actually has when it moves.
    pub fn move_resize_semantic(&self, args: SemanticArgs<'_>) -> Result<GeometryPlan> {
        let win = self.focused()?;
        let wa = self.work_area_of(win.as_ref());
        plan(args, &wa, &win.frame_rect())?;

        unblock(win.as_ref());
        let target = plan(args, &wa, &win.frame_rect())?;
        place(win.as_ref(), &target, &wa);
        Ok(target)
    }

    fn apply_focused(&self, target: &GeometryPlan) -> Result<()> {
        let win = self.focused()?;
        let wa = self.work_area_of(win.as_ref());
        debug!("apply_focused: {} wa={} plan={}", win.id(), wa, target);
        apply(win.as_ref(), target, &wa);
        Ok(())
    }
}
