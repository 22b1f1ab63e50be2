//! Behavior controller
//!
//! Runs on its own fixed tick, independent of the animation. Each tick it
//! counts toward a random mood change, checks whether the cursor is close
//! enough to follow, and moves a walking pet one step toward its target.
//! Pointer events (grab, drag, release, double-click) arrive between ticks and
//! take effect immediately.

use super::dice::Dice;
use super::motion::{step_toward, Bounds};
use super::state::{PetState, StateKind, Trigger};
use glam::Vec2;
use tracing::{debug, trace};

/// Numbers that shape the pet's behavior
#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorTuning {
    /// Half the sprite's drawn size
    pub sprite_radius: f32,
    /// Extra distance kept from the container edge
    pub clamp_padding: f32,
    /// Edge distance for cursor-follow targets
    pub follow_padding: f32,
    /// Edge distance for random wander targets
    pub wander_padding: f32,
    /// How far outside the sprite a press still grabs it
    pub grab_padding: f32,
    /// How far outside the sprite a double-click still pokes it
    pub poke_padding: f32,
    /// Behavior ticks before the pet considers doing something else
    pub restless_after_ticks: u32,
    /// Behavior ticks between desktop-level placement refreshes (0 = never)
    pub reassert_every_ticks: u32,
    /// Probability an idle pet falls asleep or starts playing
    pub mood_chance: f64,
    /// Probability an idle pet wanders off (checked after `mood_chance`)
    pub wander_chance: f64,
    /// Probability a sleeping or playing pet returns to idle
    pub settle_chance: f64,
    pub cursor_tracking: bool,
    /// Cursor must be further than this to be followed
    pub follow_min_distance: f32,
    /// Cursor must be closer than this to be followed
    pub follow_max_distance: f32,
    /// How far outside the container the cursor may be and still count
    pub follow_slack: f32,
    pub max_step: f32,
    /// Step is `distance / step_divisor` when that is below `max_step`
    pub step_divisor: f32,
    /// Walking ends once the target is this close
    pub arrive_distance: f32,
}

impl Default for BehaviorTuning {
    fn default() -> Self {
        Self {
            sprite_radius: 16.0,
            clamp_padding: 5.0,
            follow_padding: 10.0,
            wander_padding: 20.0,
            grab_padding: 10.0,
            poke_padding: 15.0,
            restless_after_ticks: 100,
            reassert_every_ticks: 50,
            mood_chance: 0.2,
            wander_chance: 0.2,
            settle_chance: 0.1,
            cursor_tracking: true,
            follow_min_distance: 30.0,
            follow_max_distance: 150.0,
            follow_slack: 50.0,
            max_step: 1.5,
            step_divisor: 8.0,
            arrive_distance: 3.0,
        }
    }
}

impl BehaviorTuning {
    /// Distance from the container edge the pet never crosses
    pub fn margin(&self) -> f32 {
        self.sprite_radius + self.clamp_padding
    }
}

/// Pointer input, in container coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed(Vec2),
    Moved(Vec2),
    Released,
    DoubleClicked(Vec2),
    Entered,
    Left,
}

/// Result of one behavior tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BehaviorTick {
    /// The host should push the window back to desktop level
    pub reassert_placement: bool,
    /// The state label changed during this tick
    pub state_changed: bool,
}

#[derive(Debug, Clone)]
pub struct BehaviorController {
    tuning: BehaviorTuning,
    bounds: Bounds,
    state: PetState,
    position: Vec2,
    idle_counter: u32,
    /// Offset from pointer to pet centre while grabbed
    grab_offset: Option<Vec2>,
    cursor: Option<Vec2>,
    cursor_inside: bool,
    transition_count: u64,
}

impl BehaviorController {
    /// New idle pet in the middle of `bounds`
    pub fn new(bounds: Bounds, tuning: BehaviorTuning) -> Self {
        let position = bounds.clamp(bounds.center(), tuning.margin());
        Self {
            tuning,
            bounds,
            state: PetState::Idle,
            position,
            idle_counter: 0,
            grab_offset: None,
            cursor: None,
            cursor_inside: false,
            transition_count: 0,
        }
    }

    pub fn state(&self) -> PetState {
        self.state
    }

    pub fn kind(&self) -> StateKind {
        self.state.kind()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn tuning(&self) -> &BehaviorTuning {
        &self.tuning
    }

    pub fn idle_counter(&self) -> u32 {
        self.idle_counter
    }

    pub fn is_dragging(&self) -> bool {
        self.grab_offset.is_some()
    }

    /// Last cursor position, if the cursor is currently over the container
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor.filter(|_| self.cursor_inside)
    }

    pub fn transition_count(&self) -> u64 {
        self.transition_count
    }

    /// Resize the container; the pet and its target are pulled back inside.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.position = bounds.clamp(self.position, self.tuning.margin());
        if let PetState::Walking { target } = self.state {
            self.state = PetState::Walking {
                target: bounds.clamp(target, self.tuning.margin()),
            };
        }
        debug!(
            width = bounds.width,
            height = bounds.height,
            "🐾 Container bounds updated"
        );
    }

    /// Run one behavior tick.
    pub fn tick(&mut self, dice: &mut impl Dice) -> BehaviorTick {
        let before = self.kind();
        self.idle_counter += 1;

        let reassert_placement = self.tuning.reassert_every_ticks > 0
            && self.idle_counter % self.tuning.reassert_every_ticks == 0;

        if self.idle_counter > self.tuning.restless_after_ticks {
            self.restless(dice);
            self.idle_counter = 0;
        }

        self.follow_cursor();
        self.walk();

        BehaviorTick {
            reassert_placement,
            state_changed: self.kind() != before,
        }
    }

    /// Feed a pointer event.
    ///
    /// Returns true if the event hit the pet (grab or poke).
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Pressed(at) => self.grab(at),
            PointerEvent::Moved(at) => {
                self.cursor = Some(at);
                self.cursor_inside = true;
                if let Some(offset) = self.grab_offset {
                    self.position = self.bounds.clamp(at + offset, self.tuning.margin());
                }
                false
            }
            PointerEvent::Released => {
                if self.grab_offset.take().is_some() {
                    trace!("🐾 Released at {}", self.position);
                }
                false
            }
            PointerEvent::DoubleClicked(at) => self.poke(at),
            PointerEvent::Entered => {
                self.cursor_inside = true;
                false
            }
            PointerEvent::Left => {
                self.cursor_inside = false;
                false
            }
        }
    }

    fn grab(&mut self, at: Vec2) -> bool {
        let reach = self.tuning.sprite_radius + self.tuning.grab_padding;
        if at.distance(self.position) > reach {
            return false;
        }
        self.grab_offset = Some(self.position - at);
        trace!("🐾 Grabbed at {} while {}", at, self.kind());
        true
    }

    fn poke(&mut self, at: Vec2) -> bool {
        let reach = self.tuning.sprite_radius + self.tuning.poke_padding;
        if at.distance(self.position) > reach {
            return false;
        }
        self.transition(Trigger::Poke);
        self.idle_counter = 0;
        true
    }

    fn restless(&mut self, dice: &mut impl Dice) {
        match self.state {
            PetState::Idle => {
                let roll = dice.chance();
                if roll < self.tuning.mood_chance {
                    let mood = if dice.coin() {
                        Trigger::Doze
                    } else {
                        Trigger::Frolic
                    };
                    self.transition(mood);
                } else if roll < self.tuning.mood_chance + self.tuning.wander_chance {
                    self.wander(dice);
                }
            }
            PetState::Sleeping | PetState::Playing => {
                if dice.chance() < self.tuning.settle_chance {
                    self.transition(Trigger::Settle);
                }
            }
            PetState::Walking { .. } => {}
        }
    }

    fn wander(&mut self, dice: &mut impl Dice) {
        if self.is_dragging() {
            return;
        }
        let margin = self.tuning.sprite_radius + self.tuning.wander_padding;
        let target = match self.bounds.inner_range(margin) {
            Some((min, max)) => Vec2::new(dice.between(min.x, max.x), dice.between(min.y, max.y)),
            None => self.bounds.clamp(self.bounds.center(), self.tuning.margin()),
        };
        self.transition(Trigger::Wander { target });
    }

    fn follow_cursor(&mut self) {
        if !self.tuning.cursor_tracking || self.is_dragging() || self.state != PetState::Idle {
            return;
        }
        let Some(cursor) = self.cursor() else {
            return;
        };
        if !self.bounds.near(cursor, self.tuning.follow_slack) {
            return;
        }

        let distance = cursor.distance(self.position);
        if distance > self.tuning.follow_min_distance && distance < self.tuning.follow_max_distance {
            let margin = self.tuning.sprite_radius + self.tuning.follow_padding;
            let target = self.bounds.clamp(cursor, margin);
            self.transition(Trigger::Follow { target });
        }
    }

    fn walk(&mut self) {
        if self.is_dragging() {
            return;
        }
        let PetState::Walking { target } = self.state else {
            return;
        };

        if target.distance(self.position) > self.tuning.arrive_distance {
            let next = step_toward(
                self.position,
                target,
                self.tuning.max_step,
                self.tuning.step_divisor,
            );
            self.position = self.bounds.clamp(next, self.tuning.margin());
        } else {
            self.transition(Trigger::Arrive);
        }
    }

    fn transition(&mut self, trigger: Trigger) -> bool {
        match self.state.apply(trigger) {
            Some(next) => {
                debug!(
                    "🐾 State transition: {} -> {} (transition #{})",
                    self.state.kind(),
                    next.kind(),
                    self.transition_count + 1
                );
                self.state = next;
                self.transition_count += 1;
                true
            }
            None => {
                trace!("🐾 Ignored {:?} while {}", trigger, self.state.kind());
                false
            }
        }
    }
}
