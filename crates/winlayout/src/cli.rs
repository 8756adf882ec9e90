//! Command-line interface definitions for winlayout.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use logging::LogArgs;

/// Command-line interface for the `winlayout` binary.
#[derive(Parser, Debug)]
#[command(
    name = "winlayout",
    about = "Place the focused window within its monitor's work area",
    version
)]
pub struct Cli {
    /// Client subcommand to send to a running server.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Run as server
    #[arg(long)]
    pub server: bool,

    /// Socket path (server: bind here; client: connect here)
    #[arg(long, value_name = "PATH")]
    pub socket: Option<String>,

    /// Optional path to the config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging controls
    #[command(flatten)]
    pub log: LogArgs,
}

/// Top-level CLI subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the focused window's work area as `x y width height`.
    WorkArea,
    /// Resize the focused window in place.
    Resize {
        /// Width in pixels
        #[arg(allow_negative_numbers = true)]
        width: i32,
        /// Height in pixels
        #[arg(allow_negative_numbers = true)]
        height: i32,
    },
    /// Move the focused window to an offset within the work area.
    Move {
        /// Horizontal offset from the work-area origin
        #[arg(allow_negative_numbers = true)]
        x: i32,
        /// Vertical offset from the work-area origin
        #[arg(allow_negative_numbers = true)]
        y: i32,
    },
    /// Move and resize the focused window.
    MoveResize {
        /// Horizontal offset from the work-area origin
        #[arg(allow_negative_numbers = true)]
        x: i32,
        /// Vertical offset from the work-area origin
        #[arg(allow_negative_numbers = true)]
        y: i32,
        /// Width in pixels
        #[arg(allow_negative_numbers = true)]
        width: i32,
        /// Height in pixels
        #[arg(allow_negative_numbers = true)]
        height: i32,
    },
    /// Send the focused window to another monitor.
    Monitor {
        /// Zero-based monitor index
        #[arg(allow_negative_numbers = true)]
        index: i32,
    },
    /// Place the focused window with keywords or percentages,
    /// e.g. `semantic right center 50% 50%`. Use `null` to leave a component.
    Semantic {
        /// Horizontal position: left, center, right, a number or a percentage
        #[arg(allow_hyphen_values = true)]
        x: String,
        /// Vertical position: top, middle, bottom, a number or a percentage
        #[arg(allow_hyphen_values = true)]
        y: String,
        /// Width: a number or a percentage
        #[arg(allow_hyphen_values = true)]
        width: String,
        /// Height: a number or a percentage
        #[arg(allow_hyphen_values = true)]
        height: String,
    },
    /// Print the server status.
    Status,
    /// Ask the server to exit.
    Shutdown,
    /// Load and validate the configuration then exit.
    Check {
        /// Path to configuration file to check (defaults to ~/.config/winlayout/config.ron)
        path: Option<PathBuf>,

        /// Dump the parsed configuration as RON to stdout
        #[arg(long)]
        dump: bool,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_offsets_parse() {
        let cli = Cli::try_parse_from(["winlayout", "move", "-10", "20"]).unwrap();
        assert_eq!(cli.command, Some(Command::Move { x: -10, y: 20 }));
    }

    #[test]
    fn semantic_takes_four_tokens() {
        let cli = Cli::try_parse_from([
            "winlayout", "--socket", "/tmp/s", "semantic", "right", "center", "50%", "null",
        ])
        .unwrap();
        assert_eq!(cli.socket.as_deref(), Some("/tmp/s"));
        assert_eq!(
            cli.command,
            Some(Command::Semantic {
                x: "right".into(),
                y: "center".into(),
                width: "50%".into(),
                height: "null".into(),
            })
        );
        assert!(Cli::try_parse_from(["winlayout", "semantic", "left"]).is_err());
    }

    #[test]
    fn server_flags() {
        let cli = Cli::try_parse_from(["winlayout", "--server", "--debug"]).unwrap();
        assert!(cli.server);
        assert!(cli.log.debug);
        assert!(cli.command.is_none());
    }
}
