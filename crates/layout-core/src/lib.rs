//! Placement of the focused window within its monitor's work area.
//!
//! Requests arrive either as integer pixel offsets or as semantic tokens
//! (`"center"`, `"right"`, `"50%"`, numeric strings, `"null"`). The pipeline:
//!
//! - [`token`]: classify raw arguments into [`Token`]s.
//! - [`resolve`]: turn size and position tokens into pixels.
//! - [`plan`]: resolve sizes, then positions, into a [`GeometryPlan`].
//! - [`apply`]: clear maximized/tiled state, then move and resize as two
//!   separate frame calls.
//! - [`LayoutOps`]: the remote-callable operations over a [`DisplayContext`].
//!
//! The host window manager is reached only through [`DisplayContext`] and
//! [`WindowHandle`]; [`sim::SimDesktop`] is an in-memory implementation.

pub mod apply;
pub mod display;
mod error;
pub mod geom;
mod ops;
pub mod plan;
pub mod resolve;
pub mod sim;
pub mod token;

#[cfg(test)]
mod property_tests;

pub use display::{Capabilities, DisplayContext, WindowHandle, WindowId};
pub use error::{Error, Result};
pub use geom::{FrameRect, Rect, WorkArea};
pub use ops::{LayoutOps, MIN_EXTENT};
pub use plan::{GeometryPlan, SemanticArgs};
pub use token::{Raw, Token};
