//! Player domain: tests for the controller tick, damage, and menu rules.

use bevy::prelude::*;

use super::systems::input::normalize_pointer;
use super::{
    BodyState, Facing, LocomotionPolicy, PlayerController, PlayerEffect, PlayerHandle,
    PlayerInput, PlayerSpawnError, PlayerTuning, TickContext, quadrant_for,
};
use crate::combat::{DamageOutcome, Damageable};
use crate::core::AudioCue;
use crate::potions::{Element, ElementBook, ElementPair};

fn tick_with(
    controller: &mut PlayerController,
    tuning: &PlayerTuning,
    book: &ElementBook,
    input: &PlayerInput,
    body: BodyState,
    dt: f32,
) -> Vec<PlayerEffect> {
    let ctx = TickContext {
        dt,
        input,
        body,
        paused: false,
        tuning,
        book,
    };
    controller.tick(&ctx)
}

fn airborne() -> BodyState {
    BodyState::default()
}

fn grounded() -> BodyState {
    BodyState {
        grounded: true,
        ..default()
    }
}

fn velocity_of(effects: &[PlayerEffect]) -> Vec2 {
    effects
        .iter()
        .find_map(|e| match e {
            PlayerEffect::SetVelocity(v) => Some(*v),
            _ => None,
        })
        .expect("tick always sets velocity")
}

fn gravity_of(effects: &[PlayerEffect]) -> f32 {
    effects
        .iter()
        .find_map(|e| match e {
            PlayerEffect::SetGravityScale(g) => Some(*g),
            _ => None,
        })
        .expect("tick always sets gravity scale")
}

// -----------------------------------------------------------------------------
// Pause
// -----------------------------------------------------------------------------

#[test]
fn test_paused_tick_changes_nothing() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);
    controller.auto_iframes();
    let before = controller.clone();

    let input = PlayerInput {
        horizontal: 1.0,
        run_pressed: true,
        run_held: true,
        cycle_pressed: true,
        menu_pressed: true,
        ..default()
    };
    let ctx = TickContext {
        dt: 0.1,
        input: &input,
        body: grounded(),
        paused: true,
        tuning: &tuning,
        book: &book,
    };

    assert!(controller.tick(&ctx).is_empty());
    assert_eq!(controller.movement, before.movement);
    assert_eq!(controller.elements, before.elements);
    assert_eq!(controller.invincibility, before.invincibility);
}

// -----------------------------------------------------------------------------
// Dash
// -----------------------------------------------------------------------------

#[test]
fn test_run_held_dashes_and_clamps_velocity() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);

    let input = PlayerInput {
        horizontal: 1.0,
        run_pressed: true,
        run_held: true,
        ..default()
    };
    let body = BodyState {
        velocity: Vec2::new(10_000.0, 0.0),
        ..airborne()
    };

    let effects = tick_with(&mut controller, &tuning, &book, &input, body, 0.1);

    assert!(controller.movement.dashing);
    assert_eq!(controller.movement.dash_cooldown, 0.5);
    let velocity = velocity_of(&effects);
    assert!(velocity.x <= tuning.max_speed * 2.0);
    assert_eq!(velocity.x, tuning.max_speed * tuning.dash_multiplier);
}

#[test]
fn test_cooldown_refreshes_every_tick_while_run_held() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);
    let input = PlayerInput {
        horizontal: 1.0,
        run_held: true,
        ..default()
    };

    for _ in 0..10 {
        tick_with(&mut controller, &tuning, &book, &input, airborne(), 0.1);
        assert_eq!(controller.movement.dash_cooldown, tuning.dash_window);
    }
}

#[test]
fn test_double_tap_run_engages_autodash() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);

    let tap = PlayerInput {
        horizontal: 1.0,
        run_pressed: true,
        run_held: true,
        ..default()
    };
    let walk = PlayerInput {
        horizontal: 1.0,
        ..default()
    };

    tick_with(&mut controller, &tuning, &book, &tap, airborne(), 0.05);
    tick_with(&mut controller, &tuning, &book, &walk, airborne(), 0.1);
    assert!(!controller.movement.dashing);
    assert!(!controller.movement.autodashing);

    tick_with(&mut controller, &tuning, &book, &tap, airborne(), 0.1);
    assert!(controller.movement.autodashing);

    // Auto-dash survives releasing Run while still moving
    tick_with(&mut controller, &tuning, &book, &walk, airborne(), 0.1);
    assert!(controller.movement.autodashing);
    assert_eq!(controller.speed_factor(&tuning), tuning.dash_multiplier);
}

#[test]
fn test_run_tap_after_cooldown_expires_does_not_autodash() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);
    let tap = PlayerInput {
        horizontal: 1.0,
        run_pressed: true,
        ..default()
    };
    let walk = PlayerInput {
        horizontal: 1.0,
        ..default()
    };

    tick_with(&mut controller, &tuning, &book, &tap, airborne(), 0.01);
    tick_with(&mut controller, &tuning, &book, &walk, airborne(), 1.0);
    assert_eq!(controller.movement.dash_cooldown, 0.0);

    tick_with(&mut controller, &tuning, &book, &tap, airborne(), 0.01);
    assert!(!controller.movement.autodashing);
}

#[test]
fn test_dash_flags_clear_when_input_released() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();

    for horizontal in [0.0, 0.05, -0.05, 0.1, -0.1] {
        let mut controller = PlayerController::new(&tuning);
        controller.movement.dashing = true;
        controller.movement.autodashing = true;
        controller.movement.dash_cooldown = 0.3;

        let input = PlayerInput {
            horizontal,
            run_pressed: true,
            run_held: true,
            ..default()
        };
        tick_with(&mut controller, &tuning, &book, &input, airborne(), 0.016);

        assert!(!controller.movement.dashing, "axis {horizontal}");
        assert!(!controller.movement.autodashing, "axis {horizontal}");
    }
}

#[test]
fn test_timers_never_negative() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);
    controller.auto_iframes();
    controller.slow(0.2);
    controller.movement.dash_cooldown = 0.3;

    for dt in [0.0, 0.01, 0.5, 3.0, 100.0] {
        tick_with(
            &mut controller,
            &tuning,
            &book,
            &PlayerInput::default(),
            airborne(),
            dt,
        );
        assert!(controller.movement.dash_cooldown >= 0.0);
        assert!(controller.invincibility.timer >= 0.0);
        assert!(controller.invincibility.blink_timer >= 0.0);
        assert!(controller.slow_timer >= 0.0);
        assert!(controller.movement.time_since_jump >= 0.0);
    }
}

// -----------------------------------------------------------------------------
// Facing and locomotion
// -----------------------------------------------------------------------------

#[test]
fn test_facing_flips_only_past_threshold() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);

    let small = PlayerInput {
        horizontal: -0.05,
        ..default()
    };
    let effects = tick_with(&mut controller, &tuning, &book, &small, airborne(), 0.016);
    assert_eq!(controller.movement.facing, Facing::Right);
    assert!(!effects.iter().any(|e| matches!(e, PlayerEffect::SetFacing(_))));

    let left = PlayerInput {
        horizontal: -0.8,
        ..default()
    };
    let effects = tick_with(&mut controller, &tuning, &book, &left, airborne(), 0.016);
    assert_eq!(controller.movement.facing, Facing::Left);
    assert!(effects.contains(&PlayerEffect::SetFacing(Facing::Left)));
}

#[test]
fn test_smooth_policy_accelerates_and_drags_on_ground() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);
    let input = PlayerInput {
        horizontal: 1.0,
        ..default()
    };
    let dt = 0.016;

    let effects = tick_with(&mut controller, &tuning, &book, &input, airborne(), dt);
    assert!((velocity_of(&effects).x - tuning.acceleration * dt).abs() < 1e-3);

    let effects = tick_with(&mut controller, &tuning, &book, &input, grounded(), dt);
    let expected = tuning.acceleration * dt * (-tuning.ground_drag * dt).exp();
    assert!((velocity_of(&effects).x - expected).abs() < 1e-3);
}

/// Run `duration` seconds of ticks at `dt`, feeding velocity back in, and
/// return the final velocity. Every tick after the first is airborne.
fn simulate(
    tuning: &PlayerTuning,
    first: (&PlayerInput, BodyState),
    rest: &PlayerInput,
    dt: f32,
    duration: f32,
) -> Vec2 {
    let book = ElementBook::default();
    let mut controller = PlayerController::new(tuning);
    let mut velocity = Vec2::ZERO;
    let steps = (duration / dt).round() as usize;

    for step in 0..steps {
        let (input, body) = if step == 0 {
            first
        } else {
            (rest, airborne())
        };
        let body = BodyState { velocity, ..body };
        let effects = tick_with(&mut controller, tuning, &book, input, body, dt);
        velocity = velocity_of(&effects);
    }
    velocity
}

#[test]
fn test_held_jump_total_is_independent_of_tick_rate() {
    let tuning = PlayerTuning::default();
    let press = PlayerInput {
        jump_pressed: true,
        jump_held: true,
        ..default()
    };
    let hold = PlayerInput {
        jump_held: true,
        ..default()
    };
    let expected = tuning.jump_acceleration * tuning.jump_window;

    // 64 Hz fixed step, 144 Hz, and a 60 Hz step at 0.2 time scale
    for dt in [1.0 / 64.0, 1.0 / 144.0, 0.2 / 60.0] {
        let vy = simulate(&tuning, (&press, grounded()), &hold, dt, 0.3).y;
        assert!(
            (vy - expected).abs() < 0.5,
            "dt {dt}: jump velocity {vy}, expected {expected}"
        );
    }
}

#[test]
fn test_smooth_acceleration_is_independent_of_tick_rate() {
    let tuning = PlayerTuning::default();
    let input = PlayerInput {
        horizontal: 1.0,
        ..default()
    };
    // Short enough to stay under max speed
    let duration = 0.05;
    let expected = tuning.acceleration * duration;

    for dt in [0.0125, 0.01, 0.002] {
        let vx = simulate(&tuning, (&input, airborne()), &input, dt, duration).x;
        assert!((vx - expected).abs() < 1e-2, "dt {dt}: vx {vx}");
    }
}

#[test]
fn test_smooth_jump_holds_gravity_off_inside_window() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);

    let press = PlayerInput {
        jump_pressed: true,
        jump_held: true,
        ..default()
    };
    let hold = PlayerInput {
        jump_held: true,
        ..default()
    };
    let step = tuning.jump_acceleration * 0.05;

    let effects = tick_with(&mut controller, &tuning, &book, &press, grounded(), 0.05);
    assert_eq!(gravity_of(&effects), 0.0);
    assert!((velocity_of(&effects).y - step).abs() < 1e-3);
    assert!(effects.contains(&PlayerEffect::PlayAudio(AudioCue::Jump)));

    let body = BodyState {
        velocity: Vec2::new(0.0, step),
        ..airborne()
    };
    let effects = tick_with(&mut controller, &tuning, &book, &hold, body, 0.05);
    assert_eq!(gravity_of(&effects), 0.0);
    assert!((velocity_of(&effects).y - step * 2.0).abs() < 1e-3);

    // Straddles the end of the window: only the part inside it boosts
    let effects = tick_with(&mut controller, &tuning, &book, &hold, airborne(), 0.1);
    assert_eq!(gravity_of(&effects), 0.0);
    assert!((velocity_of(&effects).y - step).abs() < 1e-2);

    let effects = tick_with(&mut controller, &tuning, &book, &hold, airborne(), 0.05);
    assert_eq!(gravity_of(&effects), 1.0);
    assert_eq!(velocity_of(&effects).y, 0.0);
}

#[test]
fn test_no_jump_pending_at_spawn() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);
    let hold = PlayerInput {
        jump_held: true,
        ..default()
    };

    let effects = tick_with(&mut controller, &tuning, &book, &hold, grounded(), 0.016);
    assert_eq!(gravity_of(&effects), 1.0);
    assert_eq!(velocity_of(&effects).y, 0.0);
}

#[test]
fn test_jump_press_in_air_is_ignored() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);
    let press = PlayerInput {
        jump_pressed: true,
        jump_held: true,
        ..default()
    };

    let effects = tick_with(&mut controller, &tuning, &book, &press, airborne(), 0.016);
    assert_eq!(gravity_of(&effects), 1.0);
    assert!(!effects.contains(&PlayerEffect::PlayAudio(AudioCue::Jump)));
}

#[test]
fn test_snappy_jump_is_single_impulse() {
    let tuning = PlayerTuning {
        locomotion: LocomotionPolicy::Snappy,
        ..default()
    };
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);

    let press = PlayerInput {
        jump_pressed: true,
        jump_held: true,
        ..default()
    };
    let effects = tick_with(&mut controller, &tuning, &book, &press, grounded(), 0.016);
    assert_eq!(velocity_of(&effects).y, tuning.snappy_jump_velocity);
    assert_eq!(gravity_of(&effects), 1.0);

    let hold = PlayerInput {
        jump_held: true,
        ..default()
    };
    let effects = tick_with(&mut controller, &tuning, &book, &hold, grounded(), 0.016);
    assert_eq!(velocity_of(&effects).y, 0.0);
}

// -----------------------------------------------------------------------------
// Throw
// -----------------------------------------------------------------------------

#[test]
fn test_throw_clamps_spawn_to_launch_radius() {
    let tuning = PlayerTuning {
        launch_radius: 1.0,
        bottle_speed: 10.0,
        ..default()
    };
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);
    let body = BodyState {
        position: Vec2::new(5.0, 2.0),
        ..airborne()
    };

    let press = PlayerInput {
        chuck_pressed: true,
        pointer_world: Vec2::new(8.0, 2.0),
        ..default()
    };
    let effects = tick_with(&mut controller, &tuning, &book, &press, body, 0.016);
    assert!(controller.aim.aiming);
    assert!(effects.contains(&PlayerEffect::ShowReticle(true)));
    assert!(effects.contains(&PlayerEffect::MoveReticle(Vec2::new(6.0, 2.0))));

    let release = PlayerInput {
        chuck_released: true,
        pointer_world: Vec2::new(8.0, 2.0),
        ..default()
    };
    let effects = tick_with(&mut controller, &tuning, &book, &release, body, 0.016);

    assert!(!controller.aim.aiming);
    assert!(effects.contains(&PlayerEffect::ShowReticle(false)));
    assert!(effects.contains(&PlayerEffect::SpawnBottle {
        position: Vec2::new(6.0, 2.0),
        velocity: Vec2::new(10.0, 0.0),
        elements: ElementPair(Element::Fire, Element::None),
    }));
    assert!(effects.contains(&PlayerEffect::PlayAudio(AudioCue::Throw)));
}

#[test]
fn test_reticle_stays_on_launch_circle() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);
    let body = BodyState {
        position: Vec2::new(-40.0, 12.0),
        ..airborne()
    };

    for pointer in [
        Vec2::new(1000.0, -300.0),
        Vec2::new(-41.0, 13.0),
        Vec2::new(-40.0, 500.0),
    ] {
        let input = PlayerInput {
            chuck_pressed: true,
            pointer_world: pointer,
            ..default()
        };
        tick_with(&mut controller, &tuning, &book, &input, body, 0.016);
        let offset = controller.aim.reticle - body.position;
        assert!((offset.length() - tuning.launch_radius).abs() < 1e-3);
    }
}

#[test]
fn test_release_without_press_throws_nothing() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);
    let release = PlayerInput {
        chuck_released: true,
        ..default()
    };

    let effects = tick_with(&mut controller, &tuning, &book, &release, airborne(), 0.016);
    assert!(
        !effects
            .iter()
            .any(|e| matches!(e, PlayerEffect::SpawnBottle { .. }))
    );
}

// -----------------------------------------------------------------------------
// Element cycling and radial menu
// -----------------------------------------------------------------------------

#[test]
fn test_cycle_keeps_active_slot_in_range() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);
    let cycle = PlayerInput {
        cycle_pressed: true,
        ..default()
    };

    for i in 1..=7 {
        let effects = tick_with(&mut controller, &tuning, &book, &cycle, airborne(), 0.016);
        assert!(controller.elements.active < 2);
        assert_eq!(controller.elements.active, i % 2);
        assert!(effects.contains(&controller.elements_changed()));
    }
}

#[test]
fn test_quadrant_mapping() {
    assert_eq!(quadrant_for(Vec2::new(0.3, 0.3), 0.1), Some(0));
    assert_eq!(quadrant_for(Vec2::new(0.3, -0.3), 0.1), Some(1));
    assert_eq!(quadrant_for(Vec2::new(-0.3, -0.3), 0.1), Some(2));
    assert_eq!(quadrant_for(Vec2::new(-0.3, 0.3), 0.1), Some(3));
}

#[test]
fn test_quadrant_dead_zone_never_selects() {
    assert_eq!(quadrant_for(Vec2::ZERO, 0.1), None);
    assert_eq!(quadrant_for(Vec2::new(0.05, -0.05), 0.1), None);
    assert_eq!(quadrant_for(Vec2::new(0.1, 0.0), 0.1), None);
    assert_eq!(quadrant_for(Vec2::new(0.0, 0.11), 0.1), Some(0));
}

#[test]
fn test_menu_select_commits_quadrant_and_restores_time() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);
    controller.elements.active = 1;

    let open = PlayerInput {
        menu_pressed: true,
        ..default()
    };
    let effects = tick_with(&mut controller, &tuning, &book, &open, airborne(), 0.016);
    assert!(controller.elements.menu_open);
    assert!(effects.contains(&PlayerEffect::SetTimeScale(tuning.slow_motion_scale)));
    assert!(effects.contains(&PlayerEffect::OpenMenu {
        labels: [
            "Fire".to_string(),
            "Water".to_string(),
            "Earth".to_string(),
            "???".to_string(),
        ],
    }));

    let select = PlayerInput {
        select_pressed: true,
        pointer_normalized: Vec2::new(0.3, 0.3),
        ..default()
    };
    let effects = tick_with(&mut controller, &tuning, &book, &select, airborne(), 0.016);

    assert!(!controller.elements.menu_open);
    assert_eq!(controller.elements.slots[1], tuning.radial_elements[0]);
    assert!(effects.contains(&PlayerEffect::CloseMenu));
    assert!(effects.contains(&PlayerEffect::SetTimeScale(1.0)));
}

#[test]
fn test_menu_select_in_dead_zone_only_closes() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);
    let before = controller.elements.slots;

    let open = PlayerInput {
        menu_pressed: true,
        ..default()
    };
    tick_with(&mut controller, &tuning, &book, &open, airborne(), 0.016);

    let select = PlayerInput {
        select_pressed: true,
        pointer_normalized: Vec2::new(0.02, -0.03),
        ..default()
    };
    let effects = tick_with(&mut controller, &tuning, &book, &select, airborne(), 0.016);

    assert!(!controller.elements.menu_open);
    assert_eq!(controller.elements.slots, before);
    assert!(effects.contains(&PlayerEffect::SetTimeScale(1.0)));
    assert!(
        !effects
            .iter()
            .any(|e| matches!(e, PlayerEffect::ElementsChanged { .. }))
    );
}

#[test]
fn test_menu_refuses_unowned_element() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    assert!(!book.is_owned(Element::Air));
    let mut controller = PlayerController::new(&tuning);

    let open = PlayerInput {
        menu_pressed: true,
        ..default()
    };
    tick_with(&mut controller, &tuning, &book, &open, airborne(), 0.016);

    // Quadrant 3 offers Air
    let select = PlayerInput {
        select_pressed: true,
        pointer_normalized: Vec2::new(-0.3, 0.3),
        ..default()
    };
    tick_with(&mut controller, &tuning, &book, &select, airborne(), 0.016);

    assert!(!controller.elements.menu_open);
    assert_eq!(controller.elements.slots[0], Element::Fire);
}

#[test]
fn test_menu_highlight_follows_pointer() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);

    let open = PlayerInput {
        menu_pressed: true,
        ..default()
    };
    tick_with(&mut controller, &tuning, &book, &open, airborne(), 0.016);

    let hover = PlayerInput {
        pointer_normalized: Vec2::new(-0.4, -0.2),
        ..default()
    };
    let effects = tick_with(&mut controller, &tuning, &book, &hover, airborne(), 0.016);
    assert!(effects.contains(&PlayerEffect::HighlightQuadrant(Some(2))));

    // Unchanged highlight is not re-sent
    let effects = tick_with(&mut controller, &tuning, &book, &hover, airborne(), 0.016);
    assert!(
        !effects
            .iter()
            .any(|e| matches!(e, PlayerEffect::HighlightQuadrant(_)))
    );
}

#[test]
fn test_throw_suppressed_while_menu_open() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);

    let aim = PlayerInput {
        chuck_pressed: true,
        pointer_world: Vec2::new(100.0, 0.0),
        ..default()
    };
    tick_with(&mut controller, &tuning, &book, &aim, airborne(), 0.016);
    assert!(controller.aim.aiming);

    let open = PlayerInput {
        menu_pressed: true,
        ..default()
    };
    let effects = tick_with(&mut controller, &tuning, &book, &open, airborne(), 0.016);
    assert!(!controller.aim.aiming);
    assert!(effects.contains(&PlayerEffect::ShowReticle(false)));

    let release = PlayerInput {
        chuck_released: true,
        chuck_pressed: true,
        ..default()
    };
    let effects = tick_with(&mut controller, &tuning, &book, &release, airborne(), 0.016);
    assert!(!controller.aim.aiming);
    assert!(
        !effects
            .iter()
            .any(|e| matches!(e, PlayerEffect::SpawnBottle { .. }))
    );
}

#[test]
fn test_menu_press_while_open_does_not_reopen() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);
    let open = PlayerInput {
        menu_pressed: true,
        ..default()
    };

    tick_with(&mut controller, &tuning, &book, &open, airborne(), 0.016);
    let effects = tick_with(&mut controller, &tuning, &book, &open, airborne(), 0.016);

    assert!(controller.elements.menu_open);
    assert!(
        !effects
            .iter()
            .any(|e| matches!(e, PlayerEffect::OpenMenu { .. }))
    );
}

// -----------------------------------------------------------------------------
// Damage and invincibility
// -----------------------------------------------------------------------------

#[test]
fn test_damage_ignored_inside_invincibility_window() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);
    let start = controller.health;

    assert_eq!(
        controller.damage(1),
        DamageOutcome::Hurt {
            remaining: start - 1
        }
    );

    tick_with(
        &mut controller,
        &tuning,
        &book,
        &PlayerInput::default(),
        airborne(),
        0.2,
    );
    assert_eq!(controller.damage(1), DamageOutcome::Ignored);
    assert_eq!(controller.health, start - 1);
}

#[test]
fn test_damage_lands_again_after_window() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);
    let start = controller.health;

    controller.damage(1);
    tick_with(
        &mut controller,
        &tuning,
        &book,
        &PlayerInput::default(),
        airborne(),
        1.01,
    );
    controller.damage(1);
    assert_eq!(controller.health, start - 2);
}

#[test]
fn test_lethal_damage_reports_death_and_closes_menu() {
    let tuning = PlayerTuning {
        starting_health: 1,
        ..default()
    };
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);

    let open = PlayerInput {
        menu_pressed: true,
        ..default()
    };
    tick_with(&mut controller, &tuning, &book, &open, airborne(), 0.016);

    let outcome = controller.damage(1);
    assert_eq!(outcome, DamageOutcome::Died);

    let effects = controller.damage_effects(outcome);
    assert!(effects.contains(&PlayerEffect::Died));
    assert!(effects.contains(&PlayerEffect::PlayAudio(AudioCue::Death)));
    assert!(effects.contains(&PlayerEffect::SetTimeScale(1.0)));
    assert!(!controller.elements.menu_open);
}

#[test]
fn test_hurt_effects_carry_remaining_health() {
    let tuning = PlayerTuning::default();
    let mut controller = PlayerController::new(&tuning);

    let outcome = controller.damage(2);
    let effects = controller.damage_effects(outcome);
    assert_eq!(
        effects,
        vec![
            PlayerEffect::PlayAudio(AudioCue::Hurt),
            PlayerEffect::Hurt {
                health: tuning.starting_health - 2
            },
        ]
    );
}

#[test]
fn test_blink_toggles_then_forces_visible() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);
    controller.auto_iframes();

    let effects = tick_with(
        &mut controller,
        &tuning,
        &book,
        &PlayerInput::default(),
        airborne(),
        0.1,
    );
    assert!(effects.contains(&PlayerEffect::SetVisible(false)));

    let effects = tick_with(
        &mut controller,
        &tuning,
        &book,
        &PlayerInput::default(),
        airborne(),
        5.0,
    );
    assert!(effects.contains(&PlayerEffect::SetVisible(true)));
    assert!(controller.invincibility.visible);

    // Nothing blinks once the window is closed
    let effects = tick_with(
        &mut controller,
        &tuning,
        &book,
        &PlayerInput::default(),
        airborne(),
        0.1,
    );
    assert!(
        !effects
            .iter()
            .any(|e| matches!(e, PlayerEffect::SetVisible(_)))
    );
}

// -----------------------------------------------------------------------------
// Handle and input helpers
// -----------------------------------------------------------------------------

#[test]
fn test_second_player_registration_fails() {
    let mut world = World::new();
    let mut handle = PlayerHandle::default();
    let first = world.spawn_empty().id();
    let second = world.spawn_empty().id();

    assert!(handle.register(first).is_ok());
    assert_eq!(
        handle.register(second),
        Err(PlayerSpawnError::AlreadyRegistered { existing: first })
    );
    assert_eq!(handle.get(), Some(first));

    handle.clear();
    assert!(handle.register(second).is_ok());
}

#[test]
fn test_input_edges_latch_until_consumed() {
    let mut pending = PlayerInput::default();

    let tap = PlayerInput {
        horizontal: 1.0,
        jump_pressed: true,
        jump_held: true,
        chuck_pressed: true,
        ..default()
    };
    pending.merge_frame(&tap);

    // A later frame with no edges must not erase the tap
    let next = PlayerInput {
        horizontal: -1.0,
        pointer_world: Vec2::new(5.0, 6.0),
        ..default()
    };
    pending.merge_frame(&next);

    assert!(pending.jump_pressed);
    assert!(pending.chuck_pressed);
    assert!(!pending.jump_held);
    assert_eq!(pending.horizontal, -1.0);
    assert_eq!(pending.pointer_world, Vec2::new(5.0, 6.0));

    pending.consume_edges();
    assert!(!pending.jump_pressed);
    assert!(!pending.chuck_pressed);
    assert_eq!(pending.horizontal, -1.0);
}

#[test]
fn test_latched_tap_throws_in_one_tick() {
    let tuning = PlayerTuning::default();
    let book = ElementBook::default();
    let mut controller = PlayerController::new(&tuning);

    let mut pending = PlayerInput::default();
    pending.merge_frame(&PlayerInput {
        chuck_pressed: true,
        pointer_world: Vec2::new(100.0, 0.0),
        ..default()
    });
    pending.merge_frame(&PlayerInput {
        chuck_released: true,
        pointer_world: Vec2::new(100.0, 0.0),
        ..default()
    });

    let effects = tick_with(&mut controller, &tuning, &book, &pending, grounded(), 1.0 / 64.0);
    assert!(effects.iter().any(|e| matches!(e, PlayerEffect::SpawnBottle { .. })));
    assert!(!controller.aim.aiming);
}

#[test]
fn test_normalize_pointer_centers_and_flips_y() {
    let size = Vec2::new(800.0, 600.0);
    assert_eq!(normalize_pointer(Vec2::new(400.0, 300.0), size), Vec2::ZERO);
    assert_eq!(
        normalize_pointer(Vec2::new(800.0, 0.0), size),
        Vec2::new(0.5, 0.5)
    );
    assert_eq!(
        normalize_pointer(Vec2::new(0.0, 600.0), size),
        Vec2::new(-0.5, -0.5)
    );
    assert_eq!(normalize_pointer(Vec2::new(10.0, 10.0), Vec2::ZERO), Vec2::ZERO);
}

#[test]
fn test_body_effects_stay_on_the_body() {
    assert!(PlayerEffect::SetVelocity(Vec2::ZERO).is_body_effect());
    assert!(PlayerEffect::SetGravityScale(0.0).is_body_effect());
    assert!(PlayerEffect::SetFacing(Facing::Left).is_body_effect());
    assert!(PlayerEffect::SetVisible(false).is_body_effect());

    assert!(!PlayerEffect::ShowReticle(true).is_body_effect());
    assert!(!PlayerEffect::SetTimeScale(0.2).is_body_effect());
    assert!(!PlayerEffect::Died.is_body_effect());
}
