//! Size and position vocabularies.
//!
//! Sizes understand absolute pixels and percentages of the work area.
//! Positions additionally understand the edge/center keywords and take the
//! window size the window is *about to have*, so callers must resolve the
//! size first.

use crate::{
    Error, Result,
    token::{Token, leading_int, parse_number},
};

/// Resolve a size token against the total work-area extent on that axis.
pub fn resolve_size(token: &Token, total: i32) -> Result<i32> {
    match token {
        Token::Number(n) => Ok(to_pixels(*n)),
        Token::Keyword(s) => {
            if s.ends_with('%') {
                return leading_int(s)
                    .map(|p| percent_of(total, p))
                    .ok_or_else(|| Error::InvalidSize(s.clone()));
            }
            parse_number(s)
                .map(to_pixels)
                .ok_or_else(|| Error::InvalidSize(s.clone()))
        }
        Token::Null => Err(Error::InvalidSize("null".into())),
    }
}

/// Resolve a position token to an offset from the work-area origin.
///
/// `window_size` is the final extent of the window on this axis.
pub fn resolve_position(token: &Token, total: i32, window_size: i32) -> Result<i32> {
    let s = match token {
        Token::Number(n) => return Ok(to_pixels(*n)),
        Token::Keyword(s) => s,
        Token::Null => return Err(Error::InvalidPosition("null".into())),
    };
    let free = i64::from(total) - i64::from(window_size);
    match s.as_str() {
        "left" | "top" => Ok(0),
        "center" | "middle" => Ok(saturate(free.div_euclid(2))),
        "right" | "bottom" => Ok(saturate(free.max(0))),
        _ if s.ends_with('%') => leading_int(s)
            .map(|p| percent_of_wide(free, p))
            .ok_or_else(|| Error::InvalidPosition(s.clone())),
        _ => parse_number(s)
            .map(to_pixels)
            .ok_or_else(|| Error::InvalidPosition(s.clone())),
    }
}

/// Whole pixels from a numeric token. Truncates toward zero; `as` saturates
/// at the i32 bounds.
fn to_pixels(n: f64) -> i32 {
    n.trunc() as i32
}

/// `floor(total * p / 100)`.
fn percent_of(total: i32, p: i64) -> i32 {
    percent_of_wide(i64::from(total), p)
}

fn percent_of_wide(span: i64, p: i64) -> i32 {
    let scaled = i128::from(span) * i128::from(p);
    let v = scaled.div_euclid(100);
    v.clamp(i128::from(i32::MIN), i128::from(i32::MAX)) as i32
}

fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
