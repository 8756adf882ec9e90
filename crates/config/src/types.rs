//! Configuration types and the desktop they describe.

use layout_core::{MIN_EXTENT, Rect, WindowId, sim::SimDesktop};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Server settings.
    pub server: ServerConfig,
    /// Desktop served when no native window manager is attached.
    pub desktop: DesktopConfig,
}

/// Server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket path; the per-user default is used when unset.
    pub socket: Option<String>,
    /// Clamp applied by the integer resize operations.
    pub min_extent: i32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            socket: None,
            min_extent: MIN_EXTENT,
        }
    }
}

/// One monitor: full geometry plus an optional work area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorSpec {
    /// Left edge of the monitor in the global screen space.
    pub x: i32,
    /// Top edge of the monitor in the global screen space.
    pub y: i32,
    /// Monitor width in pixels.
    pub width: i32,
    /// Monitor height in pixels.
    pub height: i32,
    /// Usable area; the full geometry when unset.
    #[serde(default)]
    pub work_area: Option<Rect>,
}

impl MonitorSpec {
    /// Full monitor rectangle.
    pub fn geometry(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// The configured work area, or the full geometry.
    pub fn effective_work_area(&self) -> Rect {
        self.work_area.unwrap_or_else(|| self.geometry())
    }
}

fn default_true() -> bool {
    true
}

/// One window on the simulated desktop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowSpec {
    /// Label shown in logs.
    #[serde(default)]
    pub title: String,
    /// Index into `DesktopConfig::monitors`.
    #[serde(default)]
    pub monitor: i32,
    /// Restored frame in absolute screen coordinates.
    pub frame: Rect,
    /// Start maximized.
    #[serde(default)]
    pub maximized: bool,
    /// Start tiled.
    #[serde(default)]
    pub tiled: bool,
    /// Whether the window manager can untile this window.
    #[serde(default = "default_true")]
    pub untile: bool,
}

/// Simulated desktop layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesktopConfig {
    /// Monitors, addressed by index.
    pub monitors: Vec<MonitorSpec>,
    /// Windows on the desktop; `focused` indexes into this list.
    pub windows: Vec<WindowSpec>,
    /// Index into `windows` of the focused window.
    pub focused: Option<usize>,
}

impl Default for DesktopConfig {
    /// A single 1920x1080 monitor with one focused window.
    fn default() -> Self {
        Self {
            monitors: vec![MonitorSpec {
                x: 0,
                y: 0,
                width: 1920,
                height: 1080,
                work_area: None,
            }],
            windows: vec![WindowSpec {
                title: "window".into(),
                monitor: 0,
                frame: Rect::new(100, 100, 800, 600),
                maximized: false,
                tiled: false,
                untile: true,
            }],
            focused: Some(0),
        }
    }
}

impl Config {
    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.min_extent < 1 {
            return Err(format!(
                "server.min_extent must be at least 1, got {}",
                self.server.min_extent
            ));
        }
        self.desktop.validate()
    }
}

impl DesktopConfig {
    fn validate(&self) -> Result<(), String> {
        for (i, m) in self.monitors.iter().enumerate() {
            if m.width < 0 || m.height < 0 {
                return Err(format!("monitors[{i}] has a negative extent"));
            }
            if let Some(wa) = m.work_area
                && (wa.width < 0 || wa.height < 0)
            {
                return Err(format!("monitors[{i}].work_area has a negative extent"));
            }
        }
        let count = self.monitors.len();
        for (i, w) in self.windows.iter().enumerate() {
            let in_range = usize::try_from(w.monitor).is_ok_and(|m| m < count);
            if !in_range {
                return Err(format!(
                    "windows[{i}] ({:?}) is on monitor {} but only {count} monitors are defined",
                    w.title, w.monitor
                ));
            }
        }
        if let Some(f) = self.focused
            && f >= self.windows.len()
        {
            return Err(format!(
                "focused window {f} does not exist ({} windows defined)",
                self.windows.len()
            ));
        }
        Ok(())
    }

    /// Materialize the described desktop.
    pub fn build(&self) -> SimDesktop {
        let sim = SimDesktop::new();
        for m in &self.monitors {
            sim.add_monitor(m.geometry(), m.effective_work_area());
        }
        let ids: Vec<WindowId> = self
            .windows
            .iter()
            .map(|w| {
                let id = sim.add_window(w.title.clone(), w.monitor, w.frame);
                sim.set_maximized(id, w.maximized);
                sim.set_tiled(id, w.tiled);
                sim.set_untile_capable(id, w.untile);
                id
            })
            .collect();
        let focused = self.focused.and_then(|i| ids.get(i).copied());
        sim.focus(focused);
        debug!(
            "desktop: {} monitors, {} windows, focused={:?}",
            self.monitors.len(),
            ids.len(),
            focused
        );
        sim
    }
}
