//! MRPC connection implementation for layout clients

use std::result::Result as StdResult;

use async_trait::async_trait;
use layout_core::{Rect, SemanticArgs, WorkArea};
use layout_protocol::{LayoutMethod, ServerStatus, codec};
use mrpc::{Client as MrpcClient, Connection as MrpcConnection, RpcError, RpcSender, Value};
use serde::de::DeserializeOwned;
use tracing::{debug, error, trace};

use super::rpc::service_message;
use crate::{Error, Result};

/// Active IPC connection to a layout server.
pub struct Connection {
    /// Underlying MRPC client.
    client: MrpcClient<ClientHandler>,
}

impl Connection {
    /// Connect to the server and return a connection handle
    pub async fn connect_unix(socket_path: &str) -> Result<Self> {
        debug!("Connecting to MRPC server at: {}", socket_path);
        let client = MrpcClient::connect_unix(socket_path, ClientHandler)
            .await
            .map_err(|e| Error::Ipc(format!("Failed to connect: {}", e)))?;
        debug!("IPC client connected");
        Ok(Self { client })
    }

    async fn request(&mut self, method: LayoutMethod, params: &[Value]) -> Result<Value> {
        match self.client.send_request(method.as_str(), params).await {
            Ok(v) => Ok(v),
            Err(RpcError::Service(se)) => Err(Error::Service {
                message: service_message(&se.value),
                name: se.name,
            }),
            Err(e) => Err(Error::Ipc(format!(
                "{} request failed: {}",
                method.as_str(),
                e
            ))),
        }
    }

    async fn request_bool(&mut self, method: LayoutMethod, params: &[Value]) -> Result<bool> {
        match self.request(method, params).await? {
            Value::Boolean(b) => Ok(b),
            other => Err(Error::Ipc(format!(
                "Unexpected {} response: {:?}",
                method.as_str(),
                other
            ))),
        }
    }

    async fn request_binary<T: DeserializeOwned>(
        &mut self,
        method: LayoutMethod,
        params: &[Value],
    ) -> Result<T> {
        let v = self.request(method, params).await?;
        Ok(codec::dec_binary(&v)?)
    }

    /// Work area of the focused window's monitor (all zeros without focus).
    pub async fn get_work_area(&mut self) -> Result<WorkArea> {
        let v = self.request(LayoutMethod::GetWorkArea, &[]).await?;
        Ok(codec::dec_rect(&v)?)
    }

    /// Resize the focused window in place.
    pub async fn resize_in_work_area(&mut self, width: i32, height: i32) -> Result<bool> {
        let params = [codec::enc_i32(width), codec::enc_i32(height)];
        self.request_bool(LayoutMethod::ResizeInWorkArea, &params)
            .await
    }

    /// Move the focused window to a work-area offset.
    pub async fn move_in_work_area(&mut self, x: i32, y: i32) -> Result<bool> {
        let params = [codec::enc_i32(x), codec::enc_i32(y)];
        self.request_bool(LayoutMethod::MoveInWorkArea, &params).await
    }

    /// Move and resize the focused window.
    pub async fn move_resize_in_work_area(&mut self, target: Rect) -> Result<bool> {
        let params = [
            codec::enc_i32(target.x),
            codec::enc_i32(target.y),
            codec::enc_i32(target.width),
            codec::enc_i32(target.height),
        ];
        self.request_bool(LayoutMethod::MoveResizeInWorkArea, &params)
            .await
    }

    /// Send the focused window to monitor `index`.
    pub async fn move_to_monitor(&mut self, index: i32) -> Result<bool> {
        self.request_bool(LayoutMethod::MoveToMonitor, &[codec::enc_i32(index)])
            .await
    }

    /// Place the focused window using semantic tokens.
    pub async fn move_resize_semantic(&mut self, args: SemanticArgs<'_>) -> Result<bool> {
        let params = [
            codec::enc_raw(args.x),
            codec::enc_raw(args.y),
            codec::enc_raw(args.width),
            codec::enc_raw(args.height),
        ];
        self.request_bool(LayoutMethod::MoveResizeSemantic, &params)
            .await
    }

    /// Retrieve the current server status snapshot.
    pub async fn get_server_status(&mut self) -> Result<ServerStatus> {
        self.request_binary(LayoutMethod::GetServerStatus, &[])
            .await
    }

    /// Send shutdown request to server.
    pub async fn shutdown(&mut self) -> Result<()> {
        debug!("Sending shutdown request");
        match self.request_bool(LayoutMethod::Shutdown, &[]).await? {
            true => Ok(()),
            false => Err(Error::Ipc("Shutdown refused".into())),
        }
    }
}

/// Client-side connection handler. The server never calls back into clients.
#[derive(Clone)]
struct ClientHandler;

#[async_trait]
impl MrpcConnection for ClientHandler {
    async fn connected(&self, _client: RpcSender) -> StdResult<(), RpcError> {
        trace!("Client handler connected");
        Ok(())
    }

    async fn handle_request(
        &self,
        _client: RpcSender,
        method: &str,
        _params: Vec<Value>,
    ) -> StdResult<Value, RpcError> {
        error!("Unexpected request from server: {}", method);
        Err(RpcError::Service(mrpc::ServiceError {
            name: "not_implemented".into(),
            value: Value::String("Client doesn't handle requests".into()),
        }))
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
