//! Turn four raw arguments into a concrete, possibly partial, target.

use std::fmt::{Display, Formatter, Result as FmtResult};

use tracing::debug;

use crate::{
    Result,
    geom::{Axis, FrameRect, WorkArea},
    resolve::{resolve_position, resolve_size},
    token::{Raw, Token, normalize},
};

/// Fully resolved target geometry. `None` leaves that component unchanged.
///
/// `x`/`y` are offsets from the work-area origin; `width`/`height` are
/// absolute pixel extents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeometryPlan {
    /// Horizontal offset from the work-area origin.
    pub x: Option<i32>,
    /// Vertical offset from the work-area origin.
    pub y: Option<i32>,
    /// Target width in pixels.
    pub width: Option<i32>,
    /// Target height in pixels.
    pub height: Option<i32>,
}

impl GeometryPlan {
    /// Move only.
    pub const fn position(x: i32, y: i32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: None,
            height: None,
        }
    }

    /// Resize only.
    pub const fn size(width: i32, height: i32) -> Self {
        Self {
            x: None,
            y: None,
            width: Some(width),
            height: Some(height),
        }
    }

    /// Move and resize.
    pub const fn rect(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
        }
    }

    /// True when the plan asks for any position change.
    pub fn moves(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }

    /// True when the plan carries both dimensions. A single dimension is not
    /// enough to issue a resize.
    pub fn resizes(&self) -> bool {
        self.width.is_some() && self.height.is_some()
    }
}

impl Display for GeometryPlan {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        fn part(v: Option<i32>) -> String {
            v.map_or_else(|| "-".to_string(), |n| n.to_string())
        }
        write!(
            f,
            "x={} y={} w={} h={}",
            part(self.x),
            part(self.y),
            part(self.width),
            part(self.height)
        )
    }
}

/// The four raw arguments of a semantic move/resize request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemanticArgs<'a> {
    /// Horizontal position token.
    pub x: Raw<'a>,
    /// Vertical position token.
    pub y: Raw<'a>,
    /// Width token.
    pub width: Raw<'a>,
    /// Height token.
    pub height: Raw<'a>,
}

impl<'a> SemanticArgs<'a> {
    /// Bundle four arguments, each a string, a number or [`Raw::Absent`].
    pub fn new(
        x: impl Into<Raw<'a>>,
        y: impl Into<Raw<'a>>,
        width: impl Into<Raw<'a>>,
        height: impl Into<Raw<'a>>,
    ) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            width: width.into(),
            height: height.into(),
        }
    }
}

/// Resolve a semantic request against `work_area`.
///
/// Sizes resolve before positions because keyword positions depend on the
/// final size. A position whose size was not requested falls back to the
/// window's current `frame` extent on that axis. Any invalid token aborts the
/// whole plan.
pub fn plan(args: SemanticArgs<'_>, work_area: &WorkArea, frame: &FrameRect) -> Result<GeometryPlan> {
    let x = normalize(args.x);
    let y = normalize(args.y);
    let w = normalize(args.width);
    let h = normalize(args.height);

    let width = size_on(&w, work_area, Axis::Horizontal)?;
    let height = size_on(&h, work_area, Axis::Vertical)?;
    let x = position_on(&x, work_area, width.unwrap_or(frame.width), Axis::Horizontal)?;
    let y = position_on(&y, work_area, height.unwrap_or(frame.height), Axis::Vertical)?;

    let out = GeometryPlan {
        x,
        y,
        width,
        height,
    };
    debug!("plan: wa={} frame={} -> {}", work_area, frame, out);
    Ok(out)
}

fn size_on(token: &Token, work_area: &WorkArea, axis: Axis) -> Result<Option<i32>> {
    if token.is_null() {
        return Ok(None);
    }
    resolve_size(token, work_area.extent(axis)).map(Some)
}

fn position_on(
    token: &Token,
    work_area: &WorkArea,
    window_size: i32,
    axis: Axis,
) -> Result<Option<i32>> {
    if token.is_null() {
        return Ok(None);
    }
    resolve_position(token, work_area.extent(axis), window_size).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, geom::Rect};

    const WA: WorkArea = Rect::new(0, 0, 1920, 1080);
    const FRAME: FrameRect = Rect::new(100, 100, 800, 600);

    #[test]
    fn halves_anchored_right_center() {
        let p = plan(SemanticArgs::new("right", "center", "50%", "50%"), &WA, &FRAME).unwrap();
        assert_eq!(p, GeometryPlan::rect(960, 270, 960, 540));
    }

    #[test]
    fn position_uses_resolved_size_not_current() {
        let p = plan(SemanticArgs::new("right", "null", "25%", "null"), &WA, &FRAME).unwrap();
        assert_eq!(p.width, Some(480));
        assert_eq!(p.x, Some(1920 - 480));
        assert_ne!(p.x, Some(1920 - FRAME.width));
        assert_eq!(p.height, None);
        assert_eq!(p.y, None);
    }

    #[test]
    fn position_falls_back_to_current_frame() {
        let p = plan(SemanticArgs::new("center", "bottom", "null", "null"), &WA, &FRAME).unwrap();
        assert_eq!(p, GeometryPlan::position(560, 480));
    }

    #[test]
    fn numbers_and_numeric_strings_mix() {
        let p = plan(SemanticArgs::new(10_i32, "20", 300.0_f64, "400"), &WA, &FRAME).unwrap();
        assert_eq!(p, GeometryPlan::rect(10, 20, 300, 400));
    }

    #[test]
    fn all_null_is_empty() {
        let p = plan(
            SemanticArgs::new(Raw::Absent, "null", None::<&str>, "null"),
            &WA,
            &FRAME,
        )
        .unwrap();
        assert_eq!(p, GeometryPlan::default());
        assert!(!p.moves());
        assert!(!p.resizes());
    }

    #[test]
    fn sizes_fail_before_positions() {
        // Both x and height are bad; height is resolved first.
        let err = plan(SemanticArgs::new("diagonal", "top", "50%", "huge"), &WA, &FRAME).unwrap_err();
        assert_eq!(err, Error::InvalidSize("huge".into()));
    }

    #[test]
    fn invalid_position_aborts() {
        let err = plan(SemanticArgs::new("diagonal", "top", "50%", "50%"), &WA, &FRAME).unwrap_err();
        assert_eq!(err, Error::InvalidPosition("diagonal".into()));
    }

    #[test]
    fn offset_work_area_keeps_relative_offsets() {
        let wa = Rect::new(1920, 32, 2560, 1408);
        let p = plan(SemanticArgs::new("left", "top", "100%", "50%"), &wa, &FRAME).unwrap();
        assert_eq!(p, GeometryPlan::rect(0, 0, 2560, 704));
    }

    #[test]
    fn plan_predicates() {
        assert!(GeometryPlan::position(1, 2).moves());
        assert!(!GeometryPlan::position(1, 2).resizes());
        let half = GeometryPlan {
            width: Some(10),
            ..GeometryPlan::default()
        };
        assert!(!half.resizes());
        assert_eq!(half.to_string(), "x=- y=- w=10 h=-");
    }
}
