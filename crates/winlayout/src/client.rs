//! Client subcommands: connect, send one request, report the result.

use layout_core::{Rect, SemanticArgs};
use layout_server::Connection;
use tokio::runtime::Builder;
use tracing::debug;

use crate::{
    cli::Command,
    error::{Error, Result},
};

/// Outcome of one client request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to print; the request succeeded.
    Text(String),
    /// A boolean operation result.
    Flag(bool),
}

impl Reply {
    /// Process exit code for this reply.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Text(_) | Self::Flag(true) => 0,
            Self::Flag(false) => 1,
        }
    }
}

/// Run `cmd` against the server at `socket` on a private runtime.
pub fn run(socket: &str, cmd: &Command) -> Result<Reply> {
    let runtime = Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(send(socket, cmd))
}

/// Send `cmd` to the server at `socket`.
pub async fn send(socket: &str, cmd: &Command) -> Result<Reply> {
    debug!("client: {:?} -> {}", cmd, socket);
    let mut conn = Connection::connect_unix(socket).await?;
    let reply = match cmd {
        Command::WorkArea => {
            let wa = conn.get_work_area().await?;
            Reply::Text(format!("{} {} {} {}", wa.x, wa.y, wa.width, wa.height))
        }
        Command::Resize { width, height } => {
            Reply::Flag(conn.resize_in_work_area(*width, *height).await?)
        }
        Command::Move { x, y } => Reply::Flag(conn.move_in_work_area(*x, *y).await?),
        Command::MoveResize {
            x,
            y,
            width,
            height,
        } => Reply::Flag(
            conn.move_resize_in_work_area(Rect::new(*x, *y, *width, *height))
                .await?,
        ),
        Command::Monitor { index } => Reply::Flag(conn.move_to_monitor(*index).await?),
        Command::Semantic {
            x,
            y,
            width,
            height,
        } => {
            let args = SemanticArgs::new(x, y, width, height);
            Reply::Flag(conn.move_resize_semantic(args).await?)
        }
        Command::Status => {
            let st = conn.get_server_status().await?;
            let focused = st
                .focused
                .map_or_else(|| "none".to_string(), |id| format!("win#{id}"));
            Reply::Text(format!(
                "endpoint: {}\nsocket: {}\nmin_extent: {}\nmonitors: {}\nfocused: {}\nrequests: {}",
                st.endpoint, st.socket, st.min_extent, st.monitors, focused, st.requests
            ))
        }
        Command::Shutdown => {
            conn.shutdown().await?;
            Reply::Text("server stopping".into())
        }
        Command::Check { .. } => return Err(Error::NotRemote("check")),
    };
    Ok(reply)
}
