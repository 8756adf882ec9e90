//! Conversions between MRPC values and layout types.

use layout_core::{Raw, Rect};
use mrpc::Value;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Errors from encoding/decoding wire values.
#[derive(Debug, Error)]
pub enum Error {
    /// The value had the wrong shape.
    #[error("expected {expected}, got {got:?}")]
    InvalidValueType {
        /// What the decoder wanted.
        expected: &'static str,
        /// What arrived.
        got: Value,
    },
    /// An integer did not fit in 32 bits.
    #[error("integer out of range: {0}")]
    OutOfRange(i64),
    /// Deserialization via rmp_serde failed.
    #[error(transparent)]
    Decode(#[from] rmp_serde::decode::Error),
    /// Serialization via rmp_serde failed.
    #[error(transparent)]
    Encode(#[from] rmp_serde::encode::Error),
}

fn invalid(expected: &'static str, got: &Value) -> Error {
    Error::InvalidValueType {
        expected,
        got: got.clone(),
    }
}

/// Encode an integer argument.
pub fn enc_i32(v: i32) -> Value {
    Value::Integer(i64::from(v).into())
}

/// Decode an integer argument. Floats are truncated toward zero.
pub fn dec_i32(v: &Value) -> Result<i32, Error> {
    match v {
        Value::Integer(i) => {
            let n = i.as_i64().ok_or_else(|| invalid("i32", v))?;
            i32::try_from(n).map_err(|_| Error::OutOfRange(n))
        }
        Value::F64(f) if f.is_finite() => Ok(f.trunc() as i32),
        Value::F32(f) if f.is_finite() => Ok(f.trunc() as i32),
        other => Err(invalid("i32", other)),
    }
}

/// Encode a rectangle as `[x, y, width, height]`.
pub fn enc_rect(r: &Rect) -> Value {
    Value::Array(vec![
        enc_i32(r.x),
        enc_i32(r.y),
        enc_i32(r.width),
        enc_i32(r.height),
    ])
}

/// Decode a `[x, y, width, height]` array.
pub fn dec_rect(v: &Value) -> Result<Rect, Error> {
    match v {
        Value::Array(items) if items.len() == 4 => Ok(Rect::new(
            dec_i32(&items[0])?,
            dec_i32(&items[1])?,
            dec_i32(&items[2])?,
            dec_i32(&items[3])?,
        )),
        other => Err(invalid("[x, y, width, height]", other)),
    }
}

/// Decode one semantic token argument.
///
/// Strings, integers, floats and nil are accepted; anything else is a type
/// error.
pub fn dec_raw(v: &Value) -> Result<Raw<'_>, Error> {
    match v {
        Value::Nil => Ok(Raw::Absent),
        Value::String(s) => s.as_str().map(Raw::Text).ok_or_else(|| invalid("utf8 string", v)),
        Value::Integer(i) => i
            .as_i64()
            .map(|n| Raw::Number(n as f64))
            .ok_or_else(|| invalid("token", v)),
        Value::F64(f) => Ok(Raw::Number(*f)),
        Value::F32(f) => Ok(Raw::Number(f64::from(*f))),
        other => Err(invalid("token", other)),
    }
}

/// Encode one semantic token argument.
pub fn enc_raw(raw: Raw<'_>) -> Value {
    match raw {
        Raw::Absent => Value::Nil,
        Raw::Number(n) => Value::F64(n),
        Raw::Text(s) => Value::String(s.into()),
    }
}

/// Encode a serde payload as a msgpack binary value.
pub fn enc_binary<T: Serialize>(payload: &T) -> Result<Value, Error> {
    Ok(Value::Binary(rmp_serde::to_vec_named(payload)?))
}

/// Decode a msgpack binary value into a serde payload.
pub fn dec_binary<T: DeserializeOwned>(v: &Value) -> Result<T, Error> {
    match v {
        Value::Binary(bytes) => Ok(rmp_serde::from_slice(bytes)?),
        other => Err(invalid("binary msgpack", other)),
    }
}
