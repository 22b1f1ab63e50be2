use directories::ProjectDirs;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const LOG_FILE: &str = "deskpet.log";
const DEFAULT_FILTER: &str = "info,deskpet=debug";

/// Where the session log goes, if the platform has a data directory
pub fn log_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "deskpet", "deskpet").map(|proj| proj.data_dir().join(LOG_FILE))
}

/// Recreate the log file for this session.
fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != io::ErrorKind::NotFound {
            return Err(e);
        }
    }
    fs::File::create(path)
}

/// Console plus file logging, and a panic hook that goes through tracing.
///
/// `RUST_LOG` overrides the default filter. If the log file cannot be
/// created, logging continues on the console only.
pub fn init_logging() {
    let enable_backtrace = env::var("RUST_BACKTRACE").map(|v| v == "1").unwrap_or(false);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (log_file, file_status) = match log_path() {
        Some(path) => match open_log_file(&path) {
            Ok(file) => (Some(file), Ok(path)),
            Err(e) => (None, Err(format!("Could not create {}: {}", path.display(), e))),
        },
        None => (None, Err("No data directory".to_string())),
    };

    let file_layer = log_file.map(|file| {
        fmt::layer()
            .with_writer(Mutex::new(file))
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false) // No ANSI codes in file
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true)
                .with_ansi(true),
        )
        .with(file_layer)
        .init();

    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!("Panic occurred: {}", panic_info);

        if let Some(location) = panic_info.location() {
            tracing::error!(
                "Panic location: {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            );
        }

        if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            tracing::error!("Panic payload: {}", s);
        }

        if enable_backtrace {
            tracing::error!("Backtrace:\n{:?}", std::backtrace::Backtrace::capture());
        }
    }));

    match file_status {
        Ok(path) => tracing::info!("File logging enabled: {}", path.display()),
        Err(reason) => tracing::warn!("{}; logging to console only", reason),
    }
}

/// Log system information for debugging
pub fn log_system_info() {
    tracing::info!("=== System Information ===");
    tracing::info!("OS: {}", env::consts::OS);
    tracing::info!("Architecture: {}", env::consts::ARCH);
    tracing::info!("{} {}", crate::APP_NAME, crate::VERSION);
    for var in ["WAYLAND_DISPLAY", "DISPLAY"] {
        if let Ok(value) = env::var(var) {
            tracing::info!("{}: {}", var, value);
        }
    }
    tracing::info!("==========================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_recreates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(LOG_FILE);

        open_log_file(&path).unwrap();
        fs::write(&path, "old session").unwrap();

        open_log_file(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_log_path_name() {
        if let Some(path) = log_path() {
            assert!(path.ends_with(LOG_FILE));
        }
    }
}
