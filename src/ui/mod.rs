//! eframe front end: turns egui input into pet events, drives the pet's
//! timers and paints the container.

pub mod app;
pub mod canvas;
pub mod pointer;

pub use app::PetApp;
pub use pointer::{PointerSnapshot, PointerTracker};
