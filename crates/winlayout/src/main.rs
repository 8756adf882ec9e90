//! Binary entrypoint for winlayout.
//!
//! `winlayout --server` serves the layout operations over a Unix socket;
//! every other invocation is a one-shot client or a local config check.
use std::{path::Path, process, sync::Arc};

use clap::Parser;
use layout_server::{Server, default_socket_path};
use tracing::{debug, error, info};

mod cli;
mod client;
mod error;

use crate::{
    cli::{Cli, Command},
    error::{Error, Result},
};

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log.spec());

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

/// Dispatch to server mode, a local check, or a client request. Returns the
/// process exit code.
fn run(cli: Cli) -> Result<i32> {
    if let Some(Command::Check { path, dump }) = &cli.command {
        let explicit = path.as_deref().or(cli.config.as_deref());
        return check(explicit, *dump);
    }

    if cli.server {
        serve(cli.config.as_deref(), cli.socket)?;
        return Ok(0);
    }

    let Some(cmd) = cli.command else {
        return Err(Error::NoCommand);
    };
    let socket = client_socket(cli.socket, cli.config.as_deref())?;
    let reply = client::run(&socket, &cmd)?;
    match &reply {
        client::Reply::Text(text) => println!("{text}"),
        client::Reply::Flag(ok) => println!("{ok}"),
    }
    Ok(reply.exit_code())
}

/// Load, validate and optionally dump the config.
fn check(explicit: Option<&Path>, dump: bool) -> Result<i32> {
    let (cfg, path) = config::load(explicit)?;
    if dump {
        println!("{}", config::to_ron_string(&cfg)?);
    } else {
        match path {
            Some(p) => println!("OK: {}", p.display()),
            None => println!("OK (no config file, using defaults)"),
        }
    }
    Ok(0)
}

/// Run the server on the configured simulated desktop.
fn serve(config_path: Option<&Path>, socket: Option<String>) -> Result<()> {
    let (cfg, path) = config::load(config_path)?;
    match &path {
        Some(p) => info!("Using config {}", p.display()),
        None => info!("No config file; using built-in desktop"),
    }
    let socket = socket
        .or_else(|| cfg.server.socket.clone())
        .unwrap_or_else(default_socket_path);
    debug!("Using socket path: {}", socket);

    let desktop = cfg.desktop.build();
    Server::new(Arc::new(desktop))
        .with_socket_path(socket)
        .with_min_extent(cfg.server.min_extent)
        .run()?;
    Ok(())
}

/// Socket a client should connect to: `--socket`, then the config file, then
/// the per-user default.
fn client_socket(explicit: Option<String>, config_path: Option<&Path>) -> Result<String> {
    if let Some(s) = explicit {
        return Ok(s);
    }
    let from_config = match config::resolve_config_path(config_path) {
        Some(p) => config::load_from_path(&p)?.server.socket,
        None => None,
    };
    Ok(from_config.unwrap_or_else(default_socket_path))
}
