//! Core domain: camera, state flow, pause, and time-scale systems.

use bevy::prelude::*;

use crate::core::{GameState, GameplayPaused, PAUSE_SOURCE_MENU, RunConfig, ScatterRng, TimeScale};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn start_run_on_enter(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Enter) {
        info!("Starting run");
        next_state.set(GameState::Run);
    }
}

pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut paused: ResMut<GameplayPaused>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        paused.toggle(PAUSE_SOURCE_MENU);
        info!("Gameplay paused: {}", paused.is_paused());
    }
}

/// Mirror gameplay pause and the requested time scale onto virtual time,
/// which also drives physics.
pub(crate) fn sync_virtual_time(
    paused: Res<GameplayPaused>,
    scale: Res<TimeScale>,
    mut time: ResMut<Time<Virtual>>,
) {
    if paused.is_paused() != time.is_paused() {
        if paused.is_paused() {
            time.pause();
        } else {
            time.unpause();
        }
    }

    if (time.relative_speed() - scale.0).abs() > f32::EPSILON {
        time.set_relative_speed(scale.0);
        debug!("Time scale set to {}", scale.0);
    }
}

/// Leaving a run clears pauses, restores time, and rewinds the scatter RNG
/// so the next run replays the same seed.
pub(crate) fn reset_run_flow(
    mut paused: ResMut<GameplayPaused>,
    mut scale: ResMut<TimeScale>,
    config: Res<RunConfig>,
    mut rng: ResMut<ScatterRng>,
) {
    paused.clear();
    scale.0 = TimeScale::NORMAL;
    *rng = ScatterRng::from_seed(config.seed);
}
