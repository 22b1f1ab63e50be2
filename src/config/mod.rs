pub mod container;
pub mod settings;

// Re-export commonly used types
pub use container::ContainerLayout;
pub use settings::{
    settings_path, write_default_settings_if_missing, BehaviorSettings, PetSettings,
    SettingsError, TimingSettings, WindowSettings,
};
