//! Keeping the pet's window on the desktop, behind ordinary windows.
//!
//! Each platform gets one [`DesktopPlacement`] implementation. The choice is
//! made once at startup by [`select_placement`]; the UI only talks to the
//! trait. Placement is best effort: failures are logged at debug level and
//! the pet keeps running wherever the window manager left it.

use eframe::egui::{self, ViewportBuilder, ViewportCommand, WindowLevel};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("Desktop placement is not supported on {platform}")]
    Unsupported { platform: &'static str },

    #[error("Window is minimized, placement skipped")]
    Minimized,
}

/// Platform-specific desktop-level window placement
pub trait DesktopPlacement {
    fn name(&self) -> &'static str;

    /// Adjust the initial viewport: borderless, transparent, behind other windows.
    fn configure(&self, viewport: ViewportBuilder) -> ViewportBuilder;

    /// Whether placement fades and must be pushed again from time to time
    fn needs_reassert(&self) -> bool;

    /// Push the window back to desktop level.
    fn reassert(&self, ctx: &egui::Context) -> Result<(), PlacementError>;
}

fn desktop_viewport(viewport: ViewportBuilder) -> ViewportBuilder {
    viewport
        .with_decorations(false)
        .with_transparent(true)
        .with_resizable(false)
        .with_window_level(WindowLevel::AlwaysOnBottom)
}

fn send_to_bottom(ctx: &egui::Context) -> Result<(), PlacementError> {
    if ctx.input(|i| i.viewport().minimized.unwrap_or(false)) {
        return Err(PlacementError::Minimized);
    }
    ctx.send_viewport_cmd(ViewportCommand::WindowLevel(WindowLevel::AlwaysOnBottom));
    Ok(())
}

/// macOS: desktop window level; other apps raising themselves can cover it.
#[derive(Debug, Default)]
pub struct MacOsDesktopLevel;

impl DesktopPlacement for MacOsDesktopLevel {
    fn name(&self) -> &'static str {
        "macos-desktop-level"
    }

    fn configure(&self, viewport: ViewportBuilder) -> ViewportBuilder {
        desktop_viewport(viewport)
    }

    fn needs_reassert(&self) -> bool {
        true
    }

    fn reassert(&self, ctx: &egui::Context) -> Result<(), PlacementError> {
        send_to_bottom(ctx)
    }
}

/// Windows: bottom-most in the z-order, lost whenever the window is activated.
#[derive(Debug, Default)]
pub struct WindowsBottomMost;

impl DesktopPlacement for WindowsBottomMost {
    fn name(&self) -> &'static str {
        "windows-bottom-most"
    }

    fn configure(&self, viewport: ViewportBuilder) -> ViewportBuilder {
        desktop_viewport(viewport)
    }

    fn needs_reassert(&self) -> bool {
        true
    }

    fn reassert(&self, ctx: &egui::Context) -> Result<(), PlacementError> {
        send_to_bottom(ctx)
    }
}

/// Linux/X11: always-on-bottom window level, set once when the window is created.
#[derive(Debug, Default)]
pub struct LinuxDesktopType;

impl DesktopPlacement for LinuxDesktopType {
    fn name(&self) -> &'static str {
        "linux-desktop-type"
    }

    fn configure(&self, viewport: ViewportBuilder) -> ViewportBuilder {
        desktop_viewport(viewport)
    }

    fn needs_reassert(&self) -> bool {
        false
    }

    fn reassert(&self, _ctx: &egui::Context) -> Result<(), PlacementError> {
        Ok(())
    }
}

/// Anything else: a plain borderless window.
#[derive(Debug, Default)]
pub struct NoPlacement {
    platform: &'static str,
}

impl DesktopPlacement for NoPlacement {
    fn name(&self) -> &'static str {
        "none"
    }

    fn configure(&self, viewport: ViewportBuilder) -> ViewportBuilder {
        viewport
            .with_decorations(false)
            .with_transparent(true)
            .with_resizable(false)
    }

    fn needs_reassert(&self) -> bool {
        false
    }

    fn reassert(&self, _ctx: &egui::Context) -> Result<(), PlacementError> {
        Err(PlacementError::Unsupported {
            platform: self.platform,
        })
    }
}

/// Pick the placement strategy for an OS name as in `std::env::consts::OS`.
pub fn select_placement(os: &'static str) -> Box<dyn DesktopPlacement> {
    let placement: Box<dyn DesktopPlacement> = match os {
        "macos" => Box::new(MacOsDesktopLevel),
        "windows" => Box::new(WindowsBottomMost),
        "linux" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => Box::new(LinuxDesktopType),
        other => Box::new(NoPlacement { platform: other }),
    };
    debug!("🖥️ Desktop placement for {}: {}", os, placement.name());
    placement
}

/// Placement for the OS this binary was built for
pub fn current_placement() -> Box<dyn DesktopPlacement> {
    select_placement(std::env::consts::OS)
}

/// Re-assert placement if the platform needs it; errors are only logged.
pub fn reassert_quietly(placement: &dyn DesktopPlacement, ctx: &egui::Context) {
    if !placement.needs_reassert() {
        return;
    }
    if let Err(e) = placement.reassert(ctx) {
        debug!("🖥️ {} placement skipped: {}", placement.name(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_by_os() {
        assert_eq!(select_placement("macos").name(), "macos-desktop-level");
        assert_eq!(select_placement("windows").name(), "windows-bottom-most");
        assert_eq!(select_placement("linux").name(), "linux-desktop-type");
        assert_eq!(select_placement("haiku").name(), "none");
    }

    #[test]
    fn test_reassert_only_where_placement_fades() {
        assert!(select_placement("macos").needs_reassert());
        assert!(select_placement("windows").needs_reassert());
        assert!(!select_placement("linux").needs_reassert());
        assert!(!select_placement("haiku").needs_reassert());
    }

    #[test]
    fn test_desktop_viewport_is_borderless_and_bottom() {
        let viewport = select_placement("linux").configure(ViewportBuilder::default());
        assert_eq!(viewport.decorations, Some(false));
        assert_eq!(viewport.transparent, Some(true));
        assert_eq!(viewport.window_level, Some(WindowLevel::AlwaysOnBottom));
    }

    #[test]
    fn test_unsupported_reports_platform() {
        let ctx = egui::Context::default();
        let err = select_placement("haiku").reassert(&ctx).unwrap_err();
        assert!(err.to_string().contains("haiku"));
    }

    #[test]
    fn test_reassert_sends_command() {
        let ctx = egui::Context::default();
        assert!(WindowsBottomMost.reassert(&ctx).is_ok());
    }
}
