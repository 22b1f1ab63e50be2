//! Container bounds and movement helpers
//!
//! All coordinates are container-local pixels with the origin in the top-left
//! corner. Positions refer to the centre of the sprite.

use glam::Vec2;

/// The rectangle the pet lives in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() / 2.0
    }

    /// Clamp `point` into `[margin, bound - margin]` on both axes.
    ///
    /// If the container is narrower than two margins the lower bound wins.
    pub fn clamp(&self, point: Vec2, margin: f32) -> Vec2 {
        Vec2::new(
            point.x.min(self.width - margin).max(margin),
            point.y.min(self.height - margin).max(margin),
        )
    }

    /// True if `point` lies inside `[margin, bound - margin]` on both axes
    pub fn contains(&self, point: Vec2, margin: f32) -> bool {
        self.clamp(point, margin) == point
    }

    /// True if `point` lies inside the container grown by `slack` on every side
    pub fn near(&self, point: Vec2, slack: f32) -> bool {
        (-slack..=self.width + slack).contains(&point.x)
            && (-slack..=self.height + slack).contains(&point.y)
    }

    /// Usable range on each axis for a given margin, `None` if empty
    pub fn inner_range(&self, margin: f32) -> Option<(Vec2, Vec2)> {
        let min = Vec2::splat(margin);
        let max = self.size() - Vec2::splat(margin);
        (max.x >= min.x && max.y >= min.y).then_some((min, max))
    }
}

/// One walking step from `current` toward `target`.
///
/// The step length is `min(max_step, distance / divisor)` so the pet slows
/// down near its target.
pub fn step_toward(current: Vec2, target: Vec2, max_step: f32, divisor: f32) -> Vec2 {
    let delta = target - current;
    let distance = delta.length();
    if distance <= f32::EPSILON {
        return current;
    }
    let step = max_step.min(distance / divisor);
    current + delta / distance * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_keeps_margin() {
        let bounds = Bounds::new(200.0, 100.0);
        let margin = 21.0;

        assert_eq!(bounds.clamp(Vec2::new(-5.0, 500.0), margin), Vec2::new(21.0, 79.0));
        assert_eq!(bounds.clamp(Vec2::new(100.0, 50.0), margin), Vec2::new(100.0, 50.0));
        assert!(bounds.contains(Vec2::new(21.0, 79.0), margin));
        assert!(!bounds.contains(Vec2::new(20.0, 50.0), margin));
    }

    #[test]
    fn test_clamp_degenerate_container() {
        let bounds = Bounds::new(30.0, 30.0);
        assert_eq!(bounds.clamp(Vec2::new(0.0, 30.0), 21.0), Vec2::new(21.0, 21.0));
        assert!(bounds.inner_range(21.0).is_none());
    }

    #[test]
    fn test_near_container() {
        let bounds = Bounds::new(200.0, 200.0);
        assert!(bounds.near(Vec2::new(-50.0, 250.0), 50.0));
        assert!(!bounds.near(Vec2::new(-51.0, 100.0), 50.0));
        assert!(!bounds.near(Vec2::new(100.0, 251.0), 50.0));
    }

    #[test]
    fn test_step_is_capped() {
        let next = step_toward(Vec2::ZERO, Vec2::new(100.0, 0.0), 1.5, 8.0);
        assert!((next.x - 1.5).abs() < 1e-6);
        assert_eq!(next.y, 0.0);
    }

    #[test]
    fn test_step_slows_near_target() {
        let next = step_toward(Vec2::ZERO, Vec2::new(0.0, 8.0), 1.5, 8.0);
        assert!((next.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_step_at_target() {
        let here = Vec2::new(3.0, 4.0);
        assert_eq!(step_toward(here, here, 1.5, 8.0), here);
    }
}
