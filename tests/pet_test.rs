use deskpet::pet::{
    sequence, BehaviorTuning, Bounds, Pet, PetState, PetTiming, PointerEvent, RngDice,
    ScriptedDice, StateKind,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn bounds() -> Bounds {
    Bounds::new(339.0, 339.0)
}

fn new_pet() -> Pet {
    Pet::new(bounds(), PetTiming::default(), BehaviorTuning::default())
}

fn random_point(rng: &mut StdRng) -> Vec2 {
    Vec2::new(rng.random_range(-80.0..420.0), rng.random_range(-80.0..420.0))
}

fn random_event(rng: &mut StdRng) -> PointerEvent {
    match rng.random_range(0..6) {
        0 => PointerEvent::Pressed(random_point(rng)),
        1 => PointerEvent::Released,
        2 => PointerEvent::DoubleClicked(random_point(rng)),
        3 => PointerEvent::Entered,
        4 => PointerEvent::Left,
        _ => PointerEvent::Moved(random_point(rng)),
    }
}

#[test]
fn test_invariants_hold_under_random_input() {
    let margin = BehaviorTuning::default().margin();

    for seed in 0..20 {
        let mut pet = new_pet();
        let mut dice = RngDice::seeded(seed);
        let mut input = StdRng::seed_from_u64(seed + 1000);

        for _ in 0..2000 {
            if input.random_bool(0.3) {
                pet.handle_pointer(random_event(&mut input));
            }
            let elapsed = Duration::from_millis(input.random_range(1..250));
            let update = pet.advance(elapsed, &mut dice);

            let kind = pet.state().kind();
            assert!(
                sequence(kind).contains(&update.frame.sprite),
                "seed {}: {:?} shown while {}",
                seed,
                update.frame.sprite,
                kind
            );
            assert!(
                bounds().contains(pet.position(), margin),
                "seed {}: {} escaped the container",
                seed,
                pet.position()
            );
        }
    }
}

#[test]
fn test_drag_tracks_pointer_with_offset() {
    let margin = BehaviorTuning::default().margin();
    let mut pet = new_pet();
    let mut dice = ScriptedDice::new();
    let mut input = StdRng::seed_from_u64(7);

    let grab_at = pet.position() + Vec2::new(6.0, -4.0);
    let offset = pet.position() - grab_at;
    assert!(pet.handle_pointer(PointerEvent::Pressed(grab_at)));

    for _ in 0..500 {
        let at = random_point(&mut input);
        pet.handle_pointer(PointerEvent::Moved(at));
        pet.advance(FRAME, &mut dice);
        assert_eq!(pet.position(), bounds().clamp(at + offset, margin));
    }

    pet.handle_pointer(PointerEvent::Released);
    assert!(!pet.behavior().is_dragging());
}

#[test]
fn test_double_click_plays_from_any_state() {
    let mut dice = ScriptedDice::new().with_chances([0.1]).with_coins([true]);
    let mut pet = new_pet();

    // Eleven seconds of quiet puts the pet to sleep.
    for _ in 0..110 {
        pet.advance(Duration::from_millis(100), &mut dice);
    }
    assert_eq!(pet.state(), PetState::Sleeping);

    let at = pet.position() + Vec2::new(0.0, 30.0);
    assert!(pet.handle_pointer(PointerEvent::DoubleClicked(at)));
    assert_eq!(pet.state(), PetState::Playing);
    assert_eq!(pet.behavior().idle_counter(), 0);
}

#[test]
fn test_walk_terminates() {
    let tuning = BehaviorTuning::default();
    let mut pet = new_pet();
    let mut dice = ScriptedDice::new();

    let cursor = pet.position() + Vec2::new(-100.0, 60.0);
    pet.handle_pointer(PointerEvent::Entered);
    pet.handle_pointer(PointerEvent::Moved(cursor));
    pet.advance(Duration::from_millis(100), &mut dice);
    assert_eq!(pet.state().kind(), StateKind::Walking);
    pet.handle_pointer(PointerEvent::Left);

    let mut elapsed = Duration::ZERO;
    while pet.state().kind() == StateKind::Walking {
        pet.advance(Duration::from_millis(100), &mut dice);
        elapsed += Duration::from_millis(100);
        assert!(elapsed < Duration::from_secs(60), "never arrived");
    }

    assert_eq!(pet.state(), PetState::Idle);
    assert!(pet.position().distance(cursor) <= tuning.arrive_distance);
}

#[test]
fn test_sleeping_pet_shows_sleep_sprite() {
    let mut dice = ScriptedDice::new().with_chances([0.1]).with_coins([true]);
    let mut pet = new_pet();
    for _ in 0..110 {
        pet.advance(Duration::from_millis(100), &mut dice);
    }
    assert_eq!(pet.state(), PetState::Sleeping);

    for _ in 0..5 {
        let update = pet.advance(Duration::from_millis(800), &mut dice);
        assert_eq!(update.frame.sprite.glyph(), "😴");
    }
}
