//! Sprite animation
//!
//! Each state has a fixed sequence of sprites. The [`Animator`] walks that
//! sequence one frame per animation tick.

use super::state::StateKind;
use std::time::Duration;

/// Vertical bounce applied while walking, in pixels
pub const BOUNCE_OFFSET: f32 = 2.0;

/// One pet glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Idle1,
    Idle2,
    Walk1,
    Walk2,
    Sleep,
    Play,
}

impl Sprite {
    /// Emoji drawn for this sprite
    pub fn glyph(&self) -> &'static str {
        match self {
            Sprite::Idle1 => "🐱",
            Sprite::Idle2 => "😺",
            Sprite::Walk1 => "🐾",
            Sprite::Walk2 => "🐱",
            Sprite::Sleep => "😴",
            Sprite::Play => "😸",
        }
    }
}

const IDLE_SEQUENCE: [Sprite; 4] = [Sprite::Idle1, Sprite::Idle2, Sprite::Idle1, Sprite::Idle1];
const WALK_SEQUENCE: [Sprite; 4] = [Sprite::Walk1, Sprite::Walk2, Sprite::Walk1, Sprite::Walk2];
const SLEEP_SEQUENCE: [Sprite; 4] = [Sprite::Sleep; 4];
const PLAY_SEQUENCE: [Sprite; 4] = [Sprite::Play, Sprite::Idle1, Sprite::Play, Sprite::Idle2];

/// Animation sequence declared for a state
pub fn sequence(kind: StateKind) -> &'static [Sprite] {
    match kind {
        StateKind::Idle => &IDLE_SEQUENCE,
        StateKind::Walking => &WALK_SEQUENCE,
        StateKind::Sleeping => &SLEEP_SEQUENCE,
        StateKind::Playing => &PLAY_SEQUENCE,
    }
}

/// What to draw after an animation tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub sprite: Sprite,
    /// Vertical render offset; never moves the pet's stored position
    pub bounce: f32,
}

impl Default for AnimationFrame {
    fn default() -> Self {
        Self {
            sprite: Sprite::Idle1,
            bounce: 0.0,
        }
    }
}

/// Frame counter plus per-state tick intervals
#[derive(Debug, Clone)]
pub struct Animator {
    frame: u64,
    frame_interval: Duration,
    sleep_frame_interval: Duration,
}

impl Animator {
    pub fn new(frame_interval: Duration, sleep_frame_interval: Duration) -> Self {
        Self {
            frame: 0,
            frame_interval,
            sleep_frame_interval,
        }
    }

    /// Number of frames shown so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Time until the next frame for a pet in `kind`
    pub fn interval(&self, kind: StateKind) -> Duration {
        match kind {
            StateKind::Sleeping => self.sleep_frame_interval,
            _ => self.frame_interval,
        }
    }

    /// Pick the sprite for the current frame and advance.
    pub fn tick(&mut self, kind: StateKind) -> AnimationFrame {
        let frames = sequence(kind);
        let sprite = frames[(self.frame % frames.len() as u64) as usize];

        let bounce = match (kind, self.frame % 4) {
            (StateKind::Walking, 0) => BOUNCE_OFFSET,
            (StateKind::Walking, 1) => -BOUNCE_OFFSET,
            _ => 0.0,
        };

        self.frame = self.frame.wrapping_add(1);

        AnimationFrame { sprite, bounce }
    }

    /// Re-pick the last shown frame for a new state without advancing.
    pub fn peek(&self, kind: StateKind) -> AnimationFrame {
        let frames = sequence(kind);
        let shown = self.frame.saturating_sub(1);
        AnimationFrame {
            sprite: frames[(shown % frames.len() as u64) as usize],
            bounce: 0.0,
        }
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(Duration::from_millis(500), Duration::from_millis(800))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequences_cycle() {
        let mut animator = Animator::default();
        let shown: Vec<Sprite> = (0..8).map(|_| animator.tick(StateKind::Idle).sprite).collect();

        assert_eq!(&shown[..4], &IDLE_SEQUENCE);
        assert_eq!(&shown[4..], &IDLE_SEQUENCE);
        assert_eq!(animator.frame(), 8);
    }

    #[test]
    fn test_sprite_always_from_current_sequence() {
        let mut animator = Animator::default();
        let kinds = [
            StateKind::Idle,
            StateKind::Playing,
            StateKind::Walking,
            StateKind::Sleeping,
            StateKind::Walking,
            StateKind::Idle,
            StateKind::Playing,
        ];

        for kind in kinds.iter().cycle().take(50) {
            let frame = animator.tick(*kind);
            assert!(sequence(*kind).contains(&frame.sprite), "{:?} in {}", frame.sprite, kind);
        }
    }

    #[test]
    fn test_bounce_only_while_walking() {
        let mut animator = Animator::default();
        let bounces: Vec<f32> = (0..4).map(|_| animator.tick(StateKind::Walking).bounce).collect();
        assert_eq!(bounces, [2.0, -2.0, 0.0, 0.0]);

        for _ in 0..4 {
            assert_eq!(animator.tick(StateKind::Playing).bounce, 0.0);
        }
    }

    #[test]
    fn test_sleep_is_slower() {
        let animator = Animator::default();
        assert_eq!(animator.interval(StateKind::Idle), Duration::from_millis(500));
        assert_eq!(animator.interval(StateKind::Walking), Duration::from_millis(500));
        assert_eq!(animator.interval(StateKind::Sleeping), Duration::from_millis(800));
    }

    #[test]
    fn test_peek_switches_sequence_without_advancing() {
        let mut animator = Animator::default();
        animator.tick(StateKind::Idle);
        animator.tick(StateKind::Idle);

        let frame = animator.peek(StateKind::Playing);
        assert_eq!(frame.sprite, Sprite::Idle1);
        assert_eq!(animator.frame(), 2);
        assert_eq!(animator.peek(StateKind::Sleeping).sprite, Sprite::Sleep);
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(Sprite::Sleep.glyph(), "😴");
        assert_eq!(Sprite::Walk1.glyph(), "🐾");
        assert_eq!(Sprite::Idle1.glyph(), Sprite::Walk2.glyph());
    }
}
