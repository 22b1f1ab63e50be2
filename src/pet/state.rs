//! Pet state machine
//!
//! The pet is always in exactly one [`PetState`]. Every change goes through
//! [`PetState::apply`], which is the whole transition table: a trigger that is
//! not listed for the current state is rejected and the state is left alone.

use glam::Vec2;

/// What the pet is currently doing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PetState {
    /// Sitting still, eligible for random behavior and cursor following
    Idle,
    /// Moving toward `target` one step per behavior tick
    Walking { target: Vec2 },
    /// Dozing; animates slower
    Sleeping,
    /// Excited after a poke or a random draw
    Playing,
}

impl Default for PetState {
    fn default() -> Self {
        PetState::Idle
    }
}

/// Payload-free label of a [`PetState`], used to pick animation sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    Idle,
    Walking,
    Sleeping,
    Playing,
}

impl StateKind {
    pub const ALL: [StateKind; 4] = [
        StateKind::Idle,
        StateKind::Walking,
        StateKind::Sleeping,
        StateKind::Playing,
    ];
}

impl std::fmt::Display for StateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateKind::Idle => write!(f, "idle"),
            StateKind::Walking => write!(f, "walking"),
            StateKind::Sleeping => write!(f, "sleeping"),
            StateKind::Playing => write!(f, "playing"),
        }
    }
}

/// Events that drive the pet state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Random draw chose to fall asleep
    Doze,
    /// Random draw chose to play
    Frolic,
    /// Random draw picked a spot to stroll to
    Wander { target: Vec2 },
    /// Cursor came into the follow band
    Follow { target: Vec2 },
    /// Walking reached its target
    Arrive,
    /// Sleeping or playing wore off
    Settle,
    /// Double-click on the pet
    Poke,
}

impl PetState {
    /// Label of this state without its payload
    pub fn kind(&self) -> StateKind {
        match self {
            PetState::Idle => StateKind::Idle,
            PetState::Walking { .. } => StateKind::Walking,
            PetState::Sleeping => StateKind::Sleeping,
            PetState::Playing => StateKind::Playing,
        }
    }

    /// Walking target, if the pet is walking
    pub fn target(&self) -> Option<Vec2> {
        match self {
            PetState::Walking { target } => Some(*target),
            _ => None,
        }
    }

    /// Look up the transition table.
    ///
    /// Returns the state the trigger leads to, or `None` if the trigger does
    /// not apply in the current state.
    pub fn apply(&self, trigger: Trigger) -> Option<PetState> {
        use PetState::*;

        match (self, trigger) {
            // From Idle
            (Idle, Trigger::Doze) => Some(Sleeping),
            (Idle, Trigger::Frolic) => Some(Playing),
            (Idle, Trigger::Wander { target }) => Some(Walking { target }),
            (Idle, Trigger::Follow { target }) => Some(Walking { target }),

            // From Walking
            (Walking { .. }, Trigger::Arrive) => Some(Idle),

            // From Sleeping / Playing
            (Sleeping | Playing, Trigger::Settle) => Some(Idle),

            // A poke wins over everything
            (_, Trigger::Poke) => Some(Playing),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = PetState::default();
        assert_eq!(state, PetState::Idle);
        assert_eq!(state.kind(), StateKind::Idle);
        assert_eq!(state.target(), None);
    }

    #[test]
    fn test_idle_transitions() {
        let idle = PetState::Idle;
        let target = Vec2::new(40.0, 60.0);

        assert_eq!(idle.apply(Trigger::Doze), Some(PetState::Sleeping));
        assert_eq!(idle.apply(Trigger::Frolic), Some(PetState::Playing));
        assert_eq!(
            idle.apply(Trigger::Wander { target }),
            Some(PetState::Walking { target })
        );
        assert_eq!(
            idle.apply(Trigger::Follow { target }),
            Some(PetState::Walking { target })
        );
        assert_eq!(idle.apply(Trigger::Arrive), None);
        assert_eq!(idle.apply(Trigger::Settle), None);
    }

    #[test]
    fn test_walking_only_ends_by_arriving() {
        let walking = PetState::Walking {
            target: Vec2::new(10.0, 10.0),
        };

        assert_eq!(walking.apply(Trigger::Arrive), Some(PetState::Idle));
        assert_eq!(walking.apply(Trigger::Doze), None);
        assert_eq!(walking.apply(Trigger::Settle), None);
        assert_eq!(
            walking.apply(Trigger::Follow {
                target: Vec2::ZERO
            }),
            None
        );
    }

    #[test]
    fn test_rest_states_settle() {
        for state in [PetState::Sleeping, PetState::Playing] {
            assert_eq!(state.apply(Trigger::Settle), Some(PetState::Idle));
            assert_eq!(state.apply(Trigger::Doze), None);
            assert_eq!(state.apply(Trigger::Frolic), None);
        }
    }

    #[test]
    fn test_poke_applies_everywhere() {
        let states = [
            PetState::Idle,
            PetState::Walking {
                target: Vec2::new(1.0, 2.0),
            },
            PetState::Sleeping,
            PetState::Playing,
        ];

        for state in states {
            assert_eq!(state.apply(Trigger::Poke), Some(PetState::Playing));
        }
    }

    #[test]
    fn test_kind_display() {
        let names: Vec<String> = StateKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, ["idle", "walking", "sleeping", "playing"]);
    }
}
