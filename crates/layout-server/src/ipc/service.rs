//! IPC service exposing the layout operations.
//!
//! # Locking Strategy
//!
//! - `LayoutOps` sits behind a single `parking_lot::Mutex`. Each request takes
//!   it for the duration of one operation, so mutations from concurrent
//!   clients never interleave.
//! - Operations are synchronous; the lock is never held across an `.await`.

use std::{
    result::Result as StdResult,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
};

use async_trait::async_trait;
use layout_core::{Error as LayoutError, LayoutOps, SemanticArgs};
use layout_protocol::{ENDPOINT_NAME, LayoutMethod, ServerStatus, codec};
use mrpc::{Connection as MrpcConnection, RpcError, RpcSender, Value};
use parking_lot::Mutex;
use tracing::{debug, info, trace, warn};

use super::rpc::{check_arity, int_param, token_param, typed_err};
use crate::error::RpcErrorCode;

/// IPC service that handles layout operations
#[derive(Clone)]
pub struct LayoutService {
    /// Operation layer; the lock serializes requests.
    ops: Arc<Mutex<LayoutOps>>,
    /// When set to true, the outer server loop should exit.
    shutdown: Arc<AtomicBool>,
    /// Layout requests handled since start.
    requests: Arc<AtomicU64>,
    socket_path: Arc<str>,
}

impl LayoutService {
    /// Wrap `ops` for serving on `socket_path`. `shutdown` is shared with the
    /// socket loop.
    pub fn new(ops: LayoutOps, socket_path: &str, shutdown: Arc<AtomicBool>) -> Self {
        Self {
            ops: Arc::new(Mutex::new(ops)),
            shutdown,
            requests: Arc::new(AtomicU64::new(0)),
            socket_path: Arc::from(socket_path),
        }
    }

    /// Expose the shutdown flag for coordinated server shutdown.
    pub(crate) fn shutdown_flag(&self) -> Arc<AtomicBool> {
        self.shutdown.clone()
    }

    /// Gather a lightweight server status snapshot for diagnostics.
    fn snapshot_status(&self) -> ServerStatus {
        let ops = self.ops.lock();
        let ctx = ops.context();
        ServerStatus {
            endpoint: ENDPOINT_NAME.to_string(),
            socket: self.socket_path.to_string(),
            min_extent: ops.min_extent(),
            monitors: ctx.monitor_count(),
            focused: ctx.focused_window().map(|w| w.id().0),
            requests: self.requests.load(Ordering::SeqCst),
        }
    }

    /// Map an operation result onto the wire: success is `true`, soft
    /// failures are `false`, token errors become typed service errors.
    fn outcome(method: LayoutMethod, res: layout_core::Result<()>) -> StdResult<Value, RpcError> {
        let err = match res {
            Ok(()) => return Ok(Value::Boolean(true)),
            Err(err) => err,
        };
        let (code, value) = match &err {
            LayoutError::InvalidSize(v) => (RpcErrorCode::InvalidSize, v),
            LayoutError::InvalidPosition(v) => (RpcErrorCode::InvalidPosition, v),
            LayoutError::NoFocusedWindow | LayoutError::MonitorOutOfRange { .. } => {
                warn!("{} failed: {}", method.as_str(), err);
                return Ok(Value::Boolean(false));
            }
        };
        warn!("{} rejected: {}", method.as_str(), err);
        Err(typed_err(
            code,
            &[
                ("value", Value::String(value.as_str().into())),
                ("message", Value::String(err.to_string().into())),
            ],
        ))
    }

    /// Run one decoded request against the operation layer.
    fn dispatch(&self, method: LayoutMethod, params: &[Value]) -> StdResult<Value, RpcError> {
        use LayoutMethod::*;

        match method {
            GetWorkArea => Ok(codec::enc_rect(&self.ops.lock().get_work_area())),
            ResizeInWorkArea => {
                let w = int_param(method, params, 0)?;
                let h = int_param(method, params, 1)?;
                Self::outcome(method, self.ops.lock().resize_in_work_area(w, h))
            }
            MoveInWorkArea => {
                let x = int_param(method, params, 0)?;
                let y = int_param(method, params, 1)?;
                Self::outcome(method, self.ops.lock().move_in_work_area(x, y))
            }
            MoveResizeInWorkArea => {
                let x = int_param(method, params, 0)?;
                let y = int_param(method, params, 1)?;
                let w = int_param(method, params, 2)?;
                let h = int_param(method, params, 3)?;
                Self::outcome(method, self.ops.lock().move_resize_in_work_area(x, y, w, h))
            }
            MoveToMonitor => {
                let index = int_param(method, params, 0)?;
                Self::outcome(method, self.ops.lock().move_to_monitor(index))
            }
            MoveResizeSemantic => {
                let args = SemanticArgs {
                    x: token_param(method, params, 0)?,
                    y: token_param(method, params, 1)?,
                    width: token_param(method, params, 2)?,
                    height: token_param(method, params, 3)?,
                };
                let res = self.ops.lock().move_resize_semantic(args);
                if let Ok(plan) = &res {
                    debug!("MoveResizeSemantic applied {}", plan);
                }
                Self::outcome(method, res.map(|_| ()))
            }
            GetServerStatus => codec::enc_binary(&self.snapshot_status()).map_err(|e| {
                typed_err(
                    RpcErrorCode::Encoding,
                    &[("message", Value::String(e.to_string().into()))],
                )
            }),
            Shutdown => {
                info!("Shutdown request received");
                // Idempotent
                self.shutdown.store(true, Ordering::SeqCst);
                Ok(Value::Boolean(true))
            }
        }
    }
}

#[async_trait]
impl MrpcConnection for LayoutService {
    async fn connected(&self, _client: RpcSender) -> StdResult<(), RpcError> {
        if self.shutdown.load(Ordering::SeqCst) {
            // Refuse new connections during shutdown
            return Err(typed_err(
                RpcErrorCode::ShuttingDown,
                &[("message", Value::String("Server is shutting down".into()))],
            ));
        }
        debug!("Client connected via MRPC");
        Ok(())
    }

    async fn handle_request(
        &self,
        _client: RpcSender,
        method: &str,
        params: Vec<Value>,
    ) -> StdResult<Value, RpcError> {
        debug!("Handling request: {} with {} params", method, params.len());

        let Some(m) = LayoutMethod::try_from_str(method) else {
            warn!("Unknown method: {}", method);
            return Err(typed_err(
                RpcErrorCode::MethodNotFound,
                &[
                    ("method", Value::String(method.into())),
                    (
                        "message",
                        Value::String(format!("unknown method {method:?}").into()),
                    ),
                ],
            ));
        };

        if self.shutdown.load(Ordering::SeqCst) && m != LayoutMethod::Shutdown {
            return Err(typed_err(
                RpcErrorCode::ShuttingDown,
                &[("message", Value::String("Server is shutting down".into()))],
            ));
        }

        check_arity(m, &params)?;
        if !matches!(m, LayoutMethod::GetServerStatus | LayoutMethod::Shutdown) {
            self.requests.fetch_add(1, Ordering::SeqCst);
        }
        self.dispatch(m, &params)
    }

    async fn handle_notification(
        &self,
        _client: RpcSender,
        method: &str,
        _params: Vec<Value>,
    ) -> StdResult<(), RpcError> {
        trace!("Received notification: {}", method);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use layout_core::{
        Rect,
        sim::{Call, SimDesktop},
    };

    use super::*;

    fn service() -> (SimDesktop, LayoutService) {
        let sim = SimDesktop::new();
        let m = sim.add_monitor(Rect::new(0, 0, 1920, 1080), Rect::new(0, 0, 1920, 1080));
        let id = sim.add_window("w", m, Rect::new(100, 100, 800, 600));
        sim.focus(Some(id));
        let ops = LayoutOps::new(Arc::new(sim.clone()));
        let svc = LayoutService::new(ops, "/tmp/test.sock", Arc::new(AtomicBool::new(false)));
        (sim, svc)
    }

    fn service_name(err: RpcError) -> String {
        match err {
            RpcError::Service(se) => se.name,
            other => panic!("unexpected error: {:?}", other),
        }
    }

    fn s(v: &str) -> Value {
        Value::String(v.into())
    }

    #[test]
    fn semantic_dispatch_moves_window() {
        let (sim, svc) = service();
        let params = [s("left"), s("top"), s("50%"), s("100%")];
        let out = svc
            .dispatch(LayoutMethod::MoveResizeSemantic, &params)
            .unwrap();
        assert_eq!(out, Value::Boolean(true));
        assert_eq!(sim.windows()[0].frame, Rect::new(0, 0, 960, 1080));
    }

    #[test]
    fn invalid_token_is_typed_error() {
        let (sim, svc) = service();
        let params = [s("left"), s("top"), s("huge"), s("50%")];
        let err = svc
            .dispatch(LayoutMethod::MoveResizeSemantic, &params)
            .unwrap_err();
        assert_eq!(service_name(err), "InvalidSize");

        let params = [s("diagonal"), s("top"), s("50%"), s("50%")];
        let err = svc
            .dispatch(LayoutMethod::MoveResizeSemantic, &params)
            .unwrap_err();
        assert_eq!(service_name(err), "InvalidPosition");
        assert!(sim.calls().is_empty());
    }

    #[test]
    fn soft_failures_are_false() {
        let (sim, svc) = service();
        let out = svc
            .dispatch(LayoutMethod::MoveToMonitor, &[Value::from(3)])
            .unwrap();
        assert_eq!(out, Value::Boolean(false));

        sim.focus(None);
        let out = svc
            .dispatch(LayoutMethod::ResizeInWorkArea, &[Value::from(1), Value::from(1)])
            .unwrap();
        assert_eq!(out, Value::Boolean(false));
        assert!(sim.mutations().is_empty());
    }

    #[test]
    fn work_area_encodes_rect() {
        let (_sim, svc) = service();
        let v = svc.dispatch(LayoutMethod::GetWorkArea, &[]).unwrap();
        assert_eq!(codec::dec_rect(&v).unwrap(), Rect::new(0, 0, 1920, 1080));
    }

    #[test]
    fn status_reports_state() {
        let (sim, svc) = service();
        svc.dispatch(LayoutMethod::ResizeInWorkArea, &[Value::from(10), Value::from(10)])
            .unwrap();
        assert_eq!(
            sim.mutations(),
            vec![Call::MoveResizeFrame(
                sim.windows()[0].id,
                Rect::new(100, 100, 50, 50)
            )]
        );
        let v = svc.dispatch(LayoutMethod::GetServerStatus, &[]).unwrap();
        let st: ServerStatus = codec::dec_binary(&v).unwrap();
        assert_eq!(st.endpoint, ENDPOINT_NAME);
        assert_eq!(st.socket, "/tmp/test.sock");
        assert_eq!(st.min_extent, 50);
        assert_eq!(st.monitors, 1);
        assert_eq!(st.focused, Some(sim.windows()[0].id.0));
    }

    #[test]
    fn shutdown_sets_flag() {
        let (_sim, svc) = service();
        let flag = svc.shutdown_flag();
        assert_eq!(
            svc.dispatch(LayoutMethod::Shutdown, &[]).unwrap(),
            Value::Boolean(true)
        );
        assert!(flag.load(Ordering::SeqCst));
    }
}
