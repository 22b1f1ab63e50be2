use crate::pet::{BehaviorTuning, PetTiming};
use config::{Config, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const CONFIG_FILE: &str = "deskpet.toml";
const ENV_PREFIX: &str = "DESKPET";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write settings to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid setting '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

// =============================================================================
// Settings sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingSettings {
    pub behavior_tick_ms: u64,
    pub frame_ms: u64,
    pub sleep_frame_ms: u64, // Slower animation while sleeping
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            behavior_tick_ms: 100,
            frame_ms: 500,
            sleep_frame_ms: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorSettings {
    pub sprite_size: f32,
    pub clamp_padding: f32,
    pub follow_padding: f32,
    pub wander_padding: f32,
    pub grab_padding: f32,
    pub poke_padding: f32,
    pub restless_after_ticks: u32,
    pub reassert_every_ticks: u32,
    pub mood_chance: f64,
    pub wander_chance: f64,
    pub settle_chance: f64,
    pub cursor_tracking: bool,
    pub follow_min_distance: f32,
    pub follow_max_distance: f32,
    pub follow_slack: f32,
    pub max_step: f32,
    pub step_divisor: f32,
    pub arrive_distance: f32,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        let tuning = BehaviorTuning::default();
        Self {
            sprite_size: tuning.sprite_radius * 2.0,
            clamp_padding: tuning.clamp_padding,
            follow_padding: tuning.follow_padding,
            wander_padding: tuning.wander_padding,
            grab_padding: tuning.grab_padding,
            poke_padding: tuning.poke_padding,
            restless_after_ticks: tuning.restless_after_ticks,
            reassert_every_ticks: tuning.reassert_every_ticks,
            mood_chance: tuning.mood_chance,
            wander_chance: tuning.wander_chance,
            settle_chance: tuning.settle_chance,
            cursor_tracking: tuning.cursor_tracking,
            follow_min_distance: tuning.follow_min_distance,
            follow_max_distance: tuning.follow_max_distance,
            follow_slack: tuning.follow_slack,
            max_step: tuning.max_step,
            step_divisor: tuning.step_divisor,
            arrive_distance: tuning.arrive_distance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub opacity: f32,
    /// Container covers 1/area_divisor of the screen area
    pub area_divisor: u32,
    pub min_side: u32,
    pub max_width: u32,
    pub max_height: u32,
    pub screen_margin: u32,
    /// Assumed screen size until the real monitor size is known
    pub fallback_screen_width: u32,
    pub fallback_screen_height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Desktop Pet".to_string(),
            opacity: 0.85,
            area_divisor: 8,
            min_side: 200,
            max_width: 600,
            max_height: 400,
            screen_margin: 50,
            fallback_screen_width: 1920,
            fallback_screen_height: 1080,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetSettings {
    pub timing: TimingSettings,
    pub behavior: BehaviorSettings,
    pub window: WindowSettings,
}

impl PetSettings {
    pub fn timing(&self) -> PetTiming {
        PetTiming {
            behavior_interval: Duration::from_millis(self.timing.behavior_tick_ms),
            frame_interval: Duration::from_millis(self.timing.frame_ms),
            sleep_frame_interval: Duration::from_millis(self.timing.sleep_frame_ms),
        }
    }

    pub fn tuning(&self) -> BehaviorTuning {
        let b = &self.behavior;
        BehaviorTuning {
            sprite_radius: b.sprite_size / 2.0,
            clamp_padding: b.clamp_padding,
            follow_padding: b.follow_padding,
            wander_padding: b.wander_padding,
            grab_padding: b.grab_padding,
            poke_padding: b.poke_padding,
            restless_after_ticks: b.restless_after_ticks,
            reassert_every_ticks: b.reassert_every_ticks,
            mood_chance: b.mood_chance,
            wander_chance: b.wander_chance,
            settle_chance: b.settle_chance,
            cursor_tracking: b.cursor_tracking,
            follow_min_distance: b.follow_min_distance,
            follow_max_distance: b.follow_max_distance,
            follow_slack: b.follow_slack,
            max_step: b.max_step,
            step_divisor: b.step_divisor,
            arrive_distance: b.arrive_distance,
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let t = &self.timing;
        if t.behavior_tick_ms == 0 || t.frame_ms == 0 || t.sleep_frame_ms == 0 {
            return Err(invalid("timing", "tick intervals must be positive"));
        }

        let b = &self.behavior;
        for (field, p) in [
            ("behavior.mood_chance", b.mood_chance),
            ("behavior.wander_chance", b.wander_chance),
            ("behavior.settle_chance", b.settle_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(invalid(field, format!("{p} is not a probability")));
            }
        }
        if b.mood_chance + b.wander_chance > 1.0 {
            return Err(invalid(
                "behavior.wander_chance",
                "mood_chance + wander_chance exceeds 1.0",
            ));
        }
        if b.sprite_size <= 0.0 {
            return Err(invalid("behavior.sprite_size", "must be positive"));
        }
        if b.follow_min_distance >= b.follow_max_distance {
            return Err(invalid(
                "behavior.follow_min_distance",
                "follow band is empty",
            ));
        }
        if b.max_step <= 0.0 || b.step_divisor <= 0.0 {
            return Err(invalid("behavior.max_step", "walking steps must be positive"));
        }
        if b.arrive_distance <= 0.0 {
            return Err(invalid("behavior.arrive_distance", "must be positive"));
        }
        for (field, padding) in [
            ("behavior.clamp_padding", b.clamp_padding),
            ("behavior.follow_padding", b.follow_padding),
            ("behavior.wander_padding", b.wander_padding),
            ("behavior.grab_padding", b.grab_padding),
            ("behavior.poke_padding", b.poke_padding),
            ("behavior.follow_slack", b.follow_slack),
        ] {
            if padding < 0.0 {
                return Err(invalid(field, format!("{padding} is negative")));
            }
        }

        let w = &self.window;
        if !(w.opacity > 0.0 && w.opacity <= 1.0) {
            return Err(invalid("window.opacity", "must be in (0, 1]"));
        }
        if w.area_divisor == 0 {
            return Err(invalid("window.area_divisor", "must be positive"));
        }
        if w.min_side > w.max_width || w.min_side > w.max_height {
            return Err(invalid("window.min_side", "larger than the maximum size"));
        }

        Ok(())
    }

    /// Load from `path` (TOML, optional) overlaid with `DESKPET_*` environment
    /// variables, e.g. `DESKPET_BEHAVIOR__CURSOR_TRACKING=false`.
    pub fn load_from(path: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_with(path, default_environment())
    }

    pub(crate) fn load_with(path: Option<&Path>, env: Environment) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }
        let settings: PetSettings = builder.add_source(env).build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from the platform config directory, falling back to defaults.
    pub fn load() -> Self {
        let path = settings_path();
        match Self::load_from(path.as_deref()) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let write_err = |source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let toml = toml::to_string_pretty(self)?;
        fs::write(path, toml).map_err(write_err)?;
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> SettingsError {
    SettingsError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn default_environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "deskpet", "deskpet").map(|proj| proj.config_dir().join(CONFIG_FILE))
}

/// Write the default settings file on first run so it can be edited.
pub fn write_default_settings_if_missing() -> Option<PathBuf> {
    let path = settings_path()?;
    if path.exists() {
        return None;
    }
    match PetSettings::default().save_to(&path) {
        Ok(()) => Some(path),
        Err(e) => {
            tracing::debug!("Could not write default settings: {}", e);
            None
        }
    }
}
