//! Typed parameter decoding for the MRPC transport.
//!
//! Decoders return ready-made `RpcError`s so the service can `?` straight out
//! of a request.

use layout_core::Raw;
use layout_protocol::{LayoutMethod, codec};
use mrpc::{RpcError, ServiceError, Value};

use crate::error::RpcErrorCode;

/// Construct a typed `RpcError::Service` with a stable `name` and structured fields.
pub fn typed_err(code: RpcErrorCode, fields: &[(&str, Value)]) -> RpcError {
    let map = fields
        .iter()
        .map(|(k, v)| (Value::String((*k).into()), v.clone()))
        .collect::<Vec<_>>();
    RpcError::Service(ServiceError {
        name: code.to_string(),
        value: Value::Map(map),
    })
}

/// Pull the `message` field out of a service error value, falling back to
/// the debug rendering of whatever was sent.
pub fn service_message(value: &Value) -> String {
    match value {
        Value::Map(entries) => entries
            .iter()
            .find(|(k, _)| k.as_str() == Some("message"))
            .and_then(|(_, v)| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{value:?}")),
        Value::String(s) => s.as_str().unwrap_or_default().to_string(),
        other => format!("{other:?}"),
    }
}

/// Fail with `MissingParams` unless `params` covers the method's arity.
pub fn check_arity(method: LayoutMethod, params: &[Value]) -> Result<(), RpcError> {
    if params.len() >= method.arity() {
        return Ok(());
    }
    Err(typed_err(
        RpcErrorCode::MissingParams,
        &[
            ("method", Value::String(method.as_str().into())),
            ("expected", Value::from(method.arity() as u64)),
            ("got", Value::from(params.len() as u64)),
            (
                "message",
                Value::String(
                    format!(
                        "{} takes {} params, got {}",
                        method.as_str(),
                        method.arity(),
                        params.len()
                    )
                    .into(),
                ),
            ),
        ],
    ))
}

fn invalid_type(method: LayoutMethod, index: usize, err: &codec::Error) -> RpcError {
    typed_err(
        RpcErrorCode::InvalidType,
        &[
            ("method", Value::String(method.as_str().into())),
            ("index", Value::from(index as u64)),
            ("message", Value::String(err.to_string().into())),
        ],
    )
}

/// Decode integer parameter `index`.
pub fn int_param(method: LayoutMethod, params: &[Value], index: usize) -> Result<i32, RpcError> {
    let v = params.get(index).unwrap_or(&Value::Nil);
    codec::dec_i32(v).map_err(|e| invalid_type(method, index, &e))
}

/// Decode semantic token parameter `index`. A missing trailing param reads as
/// absent.
pub fn token_param(
    method: LayoutMethod,
    params: &[Value],
    index: usize,
) -> Result<Raw<'_>, RpcError> {
    match params.get(index) {
        Some(v) => codec::dec_raw(v).map_err(|e| invalid_type(method, index, &e)),
        None => Ok(Raw::Absent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_of(err: RpcError) -> String {
        match err {
            RpcError::Service(se) => se.name,
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn arity_shortfall_is_missing_params() {
        let err = check_arity(LayoutMethod::ResizeInWorkArea, &[Value::from(1)]).unwrap_err();
        assert_eq!(code_of(err), RpcErrorCode::MissingParams.to_string());
        assert!(check_arity(LayoutMethod::GetWorkArea, &[]).is_ok());
    }

    #[test]
    fn int_param_rejects_strings() {
        let params = [Value::String("10".into())];
        let err = int_param(LayoutMethod::MoveToMonitor, &params, 0).unwrap_err();
        assert_eq!(code_of(err), RpcErrorCode::InvalidType.to_string());
        assert_eq!(
            int_param(LayoutMethod::MoveToMonitor, &[Value::from(2)], 0).unwrap(),
            2
        );
    }

    #[test]
    fn token_param_accepts_mixed_inputs() {
        let params = [
            Value::String("left".into()),
            Value::from(10),
            Value::Nil,
        ];
        let m = LayoutMethod::MoveResizeSemantic;
        assert_eq!(token_param(m, &params, 0).unwrap(), Raw::Text("left"));
        assert_eq!(token_param(m, &params, 1).unwrap(), Raw::Number(10.0));
        assert_eq!(token_param(m, &params, 2).unwrap(), Raw::Absent);
        assert_eq!(token_param(m, &params, 3).unwrap(), Raw::Absent);
        let err = token_param(m, &[Value::Boolean(true)], 0).unwrap_err();
        assert_eq!(code_of(err), RpcErrorCode::InvalidType.to_string());
    }

    #[test]
    fn message_field_is_extracted() {
        let RpcError::Service(se) = typed_err(
            RpcErrorCode::InvalidSize,
            &[("message", Value::String("bad".into()))],
        ) else {
            panic!("expected service error");
        };
        assert_eq!(service_message(&se.value), "bad");
        assert_eq!(service_message(&Value::String("plain".into())), "plain");
    }
}
