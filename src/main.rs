use anyhow::bail;
use deskpet::config::{write_default_settings_if_missing, ContainerLayout, PetSettings};
use deskpet::platform;
use deskpet::ui::PetApp;
use deskpet::utils::logging::{init_logging, log_system_info};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    init_logging();
    log_system_info();

    match run() {
        Ok(()) => {
            info!("Pet window closed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            eprintln!("deskpet: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    if !display_available() {
        bail!("No display available; deskpet needs a graphical session");
    }

    if let Some(path) = write_default_settings_if_missing() {
        info!("Wrote default settings to {}", path.display());
    }
    let settings = PetSettings::load();
    let layout = ContainerLayout::fallback(&settings.window);
    let placement = platform::current_placement();

    let options = eframe::NativeOptions {
        viewport: PetApp::viewport(&settings, &layout, placement.as_ref()),
        ..Default::default()
    };
    let title = settings.window.title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(PetApp::new(settings, layout, placement)))),
    )
    .map_err(|e| anyhow::anyhow!("Could not open the pet window: {}", e))
}

#[cfg(all(unix, not(target_os = "macos")))]
fn display_available() -> bool {
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|v| !v.is_empty()))
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn display_available() -> bool {
    true
}
