//! The pet itself: state machine, animation and behavior.
//!
//! Nothing in here touches the window system. The UI owns a single [`Pet`],
//! feeds it elapsed time and pointer events, and draws whatever
//! [`Pet::frame`] and [`Pet::position`] report.

pub mod animation;
pub mod behavior;
pub mod dice;
pub mod motion;
pub mod state;
pub mod timer;

pub use animation::{sequence, AnimationFrame, Animator, Sprite};
pub use behavior::{BehaviorController, BehaviorTick, BehaviorTuning, PointerEvent};
pub use dice::{Dice, RngDice, ScriptedDice};
pub use motion::{step_toward, Bounds};
pub use state::{PetState, StateKind, Trigger};
pub use timer::TickTimer;

use glam::Vec2;
use std::time::Duration;

/// Tick rates of the two loops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PetTiming {
    pub behavior_interval: Duration,
    pub frame_interval: Duration,
    pub sleep_frame_interval: Duration,
}

impl Default for PetTiming {
    fn default() -> Self {
        Self {
            behavior_interval: Duration::from_millis(100),
            frame_interval: Duration::from_millis(500),
            sleep_frame_interval: Duration::from_millis(800),
        }
    }
}

/// What the host needs after advancing the pet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PetUpdate {
    pub frame: AnimationFrame,
    /// Push the window back to desktop level
    pub reassert_placement: bool,
    /// Nothing changes before this much time has passed
    pub next_tick_in: Duration,
}

/// Animator and behavior controller driven by two independent timers
#[derive(Debug, Clone)]
pub struct Pet {
    animator: Animator,
    behavior: BehaviorController,
    behavior_interval: Duration,
    animation_timer: TickTimer,
    behavior_timer: TickTimer,
    frame: AnimationFrame,
}

impl Pet {
    pub fn new(bounds: Bounds, timing: PetTiming, tuning: BehaviorTuning) -> Self {
        let mut animator = Animator::new(timing.frame_interval, timing.sleep_frame_interval);
        let behavior = BehaviorController::new(bounds, tuning);
        let frame = animator.tick(behavior.kind());

        Self {
            animator,
            behavior,
            behavior_interval: timing.behavior_interval,
            animation_timer: TickTimer::new(),
            behavior_timer: TickTimer::new(),
            frame,
        }
    }

    pub fn state(&self) -> PetState {
        self.behavior.state()
    }

    pub fn position(&self) -> Vec2 {
        self.behavior.position()
    }

    pub fn frame(&self) -> AnimationFrame {
        self.frame
    }

    pub fn behavior(&self) -> &BehaviorController {
        &self.behavior
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.behavior.set_bounds(bounds);
    }

    /// Run every behavior and animation tick that `elapsed` makes due.
    pub fn advance(&mut self, elapsed: Duration, dice: &mut impl Dice) -> PetUpdate {
        self.behavior_timer.advance(elapsed);
        self.animation_timer.advance(elapsed);

        let mut reassert_placement = false;
        while self.behavior_timer.take(self.behavior_interval) {
            let tick = self.behavior.tick(dice);
            reassert_placement |= tick.reassert_placement;
            if tick.state_changed {
                self.refresh_frame();
            }
        }

        while self
            .animation_timer
            .take(self.animator.interval(self.behavior.kind()))
        {
            self.frame = self.animator.tick(self.behavior.kind());
        }

        PetUpdate {
            frame: self.frame,
            reassert_placement,
            next_tick_in: self.next_tick_in(),
        }
    }

    /// Feed a pointer event; returns true if it hit the pet.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let before = self.behavior.kind();
        let hit = self.behavior.handle_pointer(event);
        if self.behavior.kind() != before {
            self.refresh_frame();
        }
        hit
    }

    fn refresh_frame(&mut self) {
        self.frame = self.animator.peek(self.behavior.kind());
    }

    fn next_tick_in(&self) -> Duration {
        let animation = self
            .animation_timer
            .remaining(self.animator.interval(self.behavior.kind()));
        let behavior = self.behavior_timer.remaining(self.behavior_interval);
        animation.min(behavior)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pet() -> Pet {
        Pet::new(
            Bounds::new(400.0, 300.0),
            PetTiming::default(),
            BehaviorTuning::default(),
        )
    }

    #[test]
    fn test_loops_run_independently() {
        let mut pet = pet();
        let mut dice = ScriptedDice::new();

        pet.advance(Duration::from_millis(1000), &mut dice);
        assert_eq!(pet.behavior().idle_counter(), 10);
        // One frame shown at creation plus two ticks.
        assert_eq!(pet.animator.frame(), 3);
    }

    #[test]
    fn test_next_tick_in() {
        let mut pet = pet();
        let update = pet.advance(Duration::from_millis(30), &mut ScriptedDice::new());
        assert_eq!(update.next_tick_in, Duration::from_millis(70));
    }

    #[test]
    fn test_poke_shows_play_sequence_immediately() {
        let mut pet = pet();
        let at = pet.position();
        assert!(pet.handle_pointer(PointerEvent::DoubleClicked(at)));

        assert_eq!(pet.state(), PetState::Playing);
        assert!(sequence(StateKind::Playing).contains(&pet.frame().sprite));
    }

    #[test]
    fn test_reassert_reported() {
        let mut pet = pet();
        let update = pet.advance(Duration::from_millis(5000), &mut ScriptedDice::new());
        // 5 s is 50 behavior ticks but the catch-up cap keeps it to 10 per call.
        assert!(!update.reassert_placement);

        let mut dice = ScriptedDice::new();
        let mut seen = false;
        for _ in 0..50 {
            seen |= pet.advance(Duration::from_millis(100), &mut dice).reassert_placement;
        }
        assert!(seen);
    }
}
