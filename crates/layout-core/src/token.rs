//! Classification of raw call arguments.
//!
//! Remote callers pass each coordinate either as a number, a numeric string,
//! the literal `"null"`, a keyword such as `"center"`, or a percentage such as
//! `"50%"`. [`normalize`] folds all of these into a closed [`Token`] once, at
//! the boundary; the resolvers in [`crate::resolve`] decide what a keyword
//! means for a size or a position.

/// A call argument as it arrived, before classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Raw<'a> {
    /// The argument was omitted or explicitly nil.
    Absent,
    /// A numeric argument.
    Number(f64),
    /// A textual argument.
    Text(&'a str),
}

impl<'a> From<&'a str> for Raw<'a> {
    fn from(s: &'a str) -> Self {
        Raw::Text(s)
    }
}

impl<'a> From<&'a String> for Raw<'a> {
    fn from(s: &'a String) -> Self {
        Raw::Text(s.as_str())
    }
}

impl From<f64> for Raw<'_> {
    fn from(n: f64) -> Self {
        Raw::Number(n)
    }
}

impl From<i32> for Raw<'_> {
    fn from(n: i32) -> Self {
        Raw::Number(f64::from(n))
    }
}

impl<'a, T> From<Option<T>> for Raw<'a>
where
    T: Into<Raw<'a>>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Raw::Absent, Into::into)
    }
}

/// Normalized form of one call argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Leave this coordinate unchanged.
    Null,
    /// Absolute pixels.
    Number(f64),
    /// Anything else: positional keywords and percentages.
    Keyword(String),
}

impl Token {
    /// Normalize a single textual argument.
    pub fn parse(s: &str) -> Self {
        normalize(Raw::Text(s))
    }

    /// True for an absent or `"null"` argument.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<Raw<'_>> for Token {
    fn from(raw: Raw<'_>) -> Self {
        normalize(raw)
    }
}

/// Classify a raw argument. Never fails; unknown strings become keywords and
/// are rejected later by the resolver that consumes them.
pub fn normalize(raw: Raw<'_>) -> Token {
    match raw {
        Raw::Absent => Token::Null,
        Raw::Number(n) if n.is_finite() => Token::Number(n),
        Raw::Number(n) => Token::Keyword(n.to_string()),
        Raw::Text("null") => Token::Null,
        Raw::Text(s) => match parse_number(s) {
            Some(n) => Token::Number(n),
            None => Token::Keyword(s.to_string()),
        },
    }
}

/// Parse a plain numeric string, ignoring surrounding whitespace.
///
/// Empty strings and non-finite spellings (`inf`, `NaN`) are not numbers.
pub(crate) fn parse_number(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse the integer prefix of `s`: optional leading whitespace, an optional
/// sign, then one or more ASCII digits. Anything after the digits is ignored,
/// so `"50%"` yields 50 and `"12.5%"` yields 12.
pub(crate) fn leading_int(s: &str) -> Option<i64> {
    let t = s.trim_start();
    let (sign, rest) = match t.as_bytes().first() {
        Some(b'-') => (-1, &t[1..]),
        Some(b'+') => (1, &t[1..]),
        _ => (1, t),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    rest[..digits].parse::<i64>().ok().map(|v| sign * v)
}
