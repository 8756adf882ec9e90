//! Parse and load user configuration.

use std::{fs, path::Path};

use ron::ser::PrettyConfig;
use tracing::debug;

use crate::{Config, Error, error::excerpt_at};

/// Parse and validate a config from RON source. `path` is only used to label
/// errors.
pub fn load_from_str(source: &str, path: Option<&Path>) -> Result<Config, Error> {
    let cfg: Config = ron::from_str(source).map_err(|e| {
        let (line, col) = (e.span.start.line.max(1), e.span.start.col.max(1));
        Error::Parse {
            path: path.map(Path::to_path_buf),
            line,
            col,
            message: e.code.to_string(),
            excerpt: excerpt_at(source, line, col),
        }
    })?;
    cfg.validate().map_err(|message| Error::Validation {
        path: path.map(Path::to_path_buf),
        message,
    })?;
    Ok(cfg)
}

/// Load a validated `Config` from the RON file at `path`.
pub fn load_from_path(path: &Path) -> Result<Config, Error> {
    let source = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    debug!("loaded config source from {}", path.display());
    load_from_str(&source, Some(path)).map_err(|e| e.with_path(path))
}

/// Render a config back to pretty RON.
pub fn to_ron_string(cfg: &Config) -> Result<String, Error> {
    ron::ser::to_string_pretty(cfg, PrettyConfig::new()).map_err(|e| Error::Render {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use layout_core::Rect;

    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(load_from_str("()", None).unwrap(), Config::default());
    }

    #[test]
    fn full_file_parses() {
        let src = r#"(
            server: (socket: Some("/tmp/winlayout.sock"), min_extent: 80),
            desktop: (
                monitors: [
                    (x: 0, y: 0, width: 1920, height: 1080,
                     work_area: Some((x: 0, y: 32, width: 1920, height: 1048))),
                    (x: 1920, y: 0, width: 2560, height: 1440),
                ],
                windows: [
                    (title: "editor", monitor: 1,
                     frame: (x: 2000, y: 100, width: 800, height: 600),
                     maximized: true),
                ],
                focused: Some(0),
            ),
        )"#;
        let cfg = load_from_str(src, None).unwrap();
        assert_eq!(cfg.server.socket.as_deref(), Some("/tmp/winlayout.sock"));
        assert_eq!(cfg.server.min_extent, 80);
        assert_eq!(
            cfg.desktop.monitors[0].effective_work_area(),
            Rect::new(0, 32, 1920, 1048)
        );
        assert_eq!(
            cfg.desktop.monitors[1].effective_work_area(),
            Rect::new(1920, 0, 2560, 1440)
        );
        let w = &cfg.desktop.windows[0];
        assert!(w.maximized);
        assert!(!w.tiled);
        assert!(w.untile);
    }

    #[test]
    fn parse_error_has_location() {
        let src = "(\n  server: (\n    min_extent: \"big\",\n  ),\n)";
        match load_from_str(src, None).unwrap_err() {
            Error::Parse {
                line, excerpt, ..
            } => {
                assert_eq!(line, 3);
                assert!(excerpt.contains("min_extent"));
                assert!(excerpt.contains('^'));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_fields_rejected() {
        let err = load_from_str("(server: (port: 1))", None).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn validation_errors_surface() {
        let err = load_from_str("(server: (min_extent: 0))", None).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert!(err.pretty().contains("min_extent"));
    }

    #[test]
    fn dump_parses_back() {
        let cfg = Config::default();
        let text = to_ron_string(&cfg).unwrap();
        assert_eq!(load_from_str(&text, None).unwrap(), cfg);
    }

    #[test]
    fn missing_file_is_read_error() {
        let p = env::temp_dir().join(format!("winlayout-missing-{}.ron", process::id()));
        let err = load_from_path(&p).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert_eq!(err.path(), Some(p.as_path()));
    }
}
