// deskpet: an emoji pet that lives on your desktop

pub mod config;
pub mod pet;
pub mod platform;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{ContainerLayout, PetSettings};
pub use pet::{Pet, PetState, PetTiming, StateKind};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
