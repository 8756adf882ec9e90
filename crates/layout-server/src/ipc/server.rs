//! IPC server implementation for the layout service

use std::{
    fs,
    io::ErrorKind,
    os::unix::fs::{FileTypeExt as _, MetadataExt as _, PermissionsExt as _},
    path::Path,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use layout_core::LayoutOps;
use mrpc::Server as MrpcServer;
use tokio::{select, signal, time::sleep};
use tracing::{debug, info, trace, warn};

use super::service::LayoutService;
use crate::{Error, Result};

/// IPC server
pub struct IPCServer {
    /// Path of the Unix socket to bind.
    socket_path: String,
    /// Service shared by every connection.
    service: LayoutService,
}

impl IPCServer {
    /// Create a new IPC server
    pub fn new(socket_path: impl Into<String>, ops: LayoutOps, shutdown: Arc<AtomicBool>) -> Self {
        let socket_path = socket_path.into();
        let service = LayoutService::new(ops, &socket_path, shutdown);
        Self {
            socket_path,
            service,
        }
    }

    /// Run the server until a `Shutdown` request or Ctrl-C.
    pub async fn run(self) -> Result<()> {
        trace!("Starting MRPC server on socket: {}", self.socket_path);

        // Ensure the parent directory exists with user-only permissions (0700).
        if let Some(parent) = Path::new(&self.socket_path).parent()
            && !parent.as_os_str().is_empty()
        {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("Failed to create socket dir {}: {}", parent.display(), e);
            }
            if let Ok(meta) = fs::metadata(parent) {
                let mut perms = meta.permissions();
                perms.set_mode(0o700);
                if let Err(e) = fs::set_permissions(parent, perms) {
                    debug!("Could not tighten socket dir permissions: {}", e);
                }
            }
        }

        // Only ever unlink a stale socket we own.
        validate_or_unlink_existing_socket(&self.socket_path)?;

        let service = self.service.clone();
        let server = MrpcServer::from_fn(move || service.clone());

        let server = server
            .unix(&self.socket_path)
            .await
            .map_err(|e| Error::Ipc(format!("Failed to bind to socket: {}", e)))?;

        info!("Listening on {}", self.socket_path);

        let shutdown = self.service.shutdown_flag();
        select! {
            res = server.run() => {
                res.map_err(|e| Error::Ipc(format!("Server error: {}", e)))?;
            }
            _ = async {
                while !shutdown.load(Ordering::SeqCst) {
                    sleep(Duration::from_millis(50)).await;
                }
            } => {
                debug!("Shutdown flag set; stopping MRPC server");
            }
            res = signal::ctrl_c() => {
                res?;
                info!("Interrupted; stopping MRPC server");
                shutdown.store(true, Ordering::SeqCst);
            }
        }

        Ok(())
    }
}

impl Drop for IPCServer {
    fn drop(&mut self) {
        // Best-effort cleanup: only unlink if it still points to a socket owned by us.
        if let Err(e) = validate_or_unlink_existing_socket(&self.socket_path) {
            debug!("Socket cleanup skipped: {}", e);
        }
    }
}

/// Validate that an existing path is a Unix domain socket owned by the current
/// user. If so, unlink it to make room for a new bind. If the path does not
/// exist, this is a no-op. If the path exists but is not a socket (or is not
/// owned by us), return an error and do not unlink.
fn validate_or_unlink_existing_socket(path: &str) -> Result<()> {
    match fs::symlink_metadata(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::Ipc(format!(
            "Failed to lstat existing path '{}': {}",
            path, e
        ))),
        Ok(meta) => {
            let ft = meta.file_type();
            if !ft.is_socket() {
                return Err(Error::Ipc(format!(
                    "Refusing to remove non-socket at '{}': {:?}",
                    path, ft
                )));
            }
            let uid = unsafe { libc::getuid() };
            if meta.uid() != uid {
                return Err(Error::Ipc(format!(
                    "Socket at '{}' not owned by current user (uid {} != {})",
                    path,
                    meta.uid(),
                    uid
                )));
            }
            fs::remove_file(path).map_err(|e| {
                Error::Ipc(format!(
                    "Failed to remove pre-existing socket '{}': {}",
                    path, e
                ))
            })
        }
    }
}
