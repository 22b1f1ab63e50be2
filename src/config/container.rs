use super::settings::WindowSettings;
use crate::pet::Bounds;
use glam::Vec2;

/// Size and screen position of the pet's window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerLayout {
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

impl ContainerLayout {
    /// Square of 1/`area_divisor` of the screen area, clamped to the
    /// configured limits and tucked into the bottom-right corner.
    pub fn for_screen(screen_width: u32, screen_height: u32, window: &WindowSettings) -> Self {
        let divisor = u64::from(window.area_divisor.max(1));
        let area = u64::from(screen_width) * u64::from(screen_height) / divisor;
        let side = (area as f64).sqrt().floor() as u32;

        let width = side.min(window.max_width).max(window.min_side);
        let height = side.min(window.max_height).max(window.min_side);

        let x = screen_width.saturating_sub(width.saturating_add(window.screen_margin));
        let y = screen_height.saturating_sub(height.saturating_add(window.screen_margin));

        Self {
            width,
            height,
            x,
            y,
        }
    }

    /// Layout for the assumed screen used before a monitor is known
    pub fn fallback(window: &WindowSettings) -> Self {
        Self::for_screen(
            window.fallback_screen_width,
            window.fallback_screen_height,
            window,
        )
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width as f32, self.height as f32)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Convert a screen point into container coordinates
    pub fn to_container(&self, screen_point: Vec2) -> Vec2 {
        screen_point - self.origin()
    }
}
