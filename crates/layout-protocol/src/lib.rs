//! Shared wire vocabulary for the winlayout service.
//!
//! - [`rpc`]: method names and status payloads.
//! - [`codec`]: conversions between `mrpc::Value` and layout types.

pub mod codec;
pub mod rpc;

pub use rpc::{LayoutMethod, ServerStatus};

/// Well-known name the service answers for. Socket paths are derived from it.
pub const ENDPOINT_NAME: &str = "org.jidaikobo.shibata.ActiveWindowLayout";
