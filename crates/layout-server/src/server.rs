//! Server builder and entry points.

use std::sync::{Arc, atomic::AtomicBool};

use layout_core::{DisplayContext, LayoutOps};
use tokio::runtime::Builder;
use tracing::info;

use crate::{Error, Result, default_socket_path, ipc::IPCServer};

/// A layout server bound to one display context.
pub struct Server {
    /// Path of the Unix socket to listen on.
    socket_path: String,
    /// Operation layer handed to the IPC service.
    ops: LayoutOps,
}

impl Server {
    /// Create a server for `ctx` on the default socket path.
    pub fn new(ctx: Arc<dyn DisplayContext>) -> Self {
        Self {
            socket_path: default_socket_path(),
            ops: LayoutOps::new(ctx),
        }
    }

    /// Set the socket path for IPC communication
    pub fn with_socket_path(mut self, path: impl Into<String>) -> Self {
        self.socket_path = path.into();
        self
    }

    /// Override the clamp applied by the integer resize operations.
    pub fn with_min_extent(mut self, min_extent: i32) -> Self {
        self.ops = self.ops.with_min_extent(min_extent);
        self
    }

    /// Run the server on a fresh current-thread runtime, blocking until it
    /// stops.
    pub fn run(self) -> Result<()> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::Ipc(format!("Failed to create tokio runtime: {}", e)))?;
        runtime.block_on(self.serve())
    }

    /// Serve on the caller's runtime until a `Shutdown` request or Ctrl-C.
    pub async fn serve(self) -> Result<()> {
        info!(
            "Starting layout server on socket: {} (min_extent={})",
            self.socket_path,
            self.ops.min_extent()
        );
        let shutdown = Arc::new(AtomicBool::new(false));
        IPCServer::new(&self.socket_path, self.ops, shutdown)
            .run()
            .await?;
        info!("Layout server stopped");
        Ok(())
    }
}
