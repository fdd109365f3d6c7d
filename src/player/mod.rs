//! Player domain: the player controller and its engine glue.

mod components;
mod controller;
mod effects;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{Facing, GameLayer, Grounded, Player};
pub use controller::{
    AimState, BodyState, ElementSelection, MovementState, PlayerController, TickContext,
    quadrant_for,
};
pub use effects::{PlayerEffect, PlayerEffectEvent};
pub use resources::{LocomotionPolicy, PlayerHandle, PlayerInput, PlayerSpawnError, PlayerTuning};

use bevy::prelude::*;

use crate::core::GameState;
use crate::player::systems::{
    apply_time_scale_effects, clear_player_handle, detect_ground, forward_audio_effects,
    read_input, spawn_player, tick_player,
};

/// Input sampling in `Update`; grounding, the controller tick, and effect
/// forwarding in `FixedUpdate`. Effect consumers run after this.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerSystems;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerTuning>()
            .init_resource::<PlayerInput>()
            .init_resource::<PlayerHandle>()
            .add_message::<PlayerEffectEvent>()
            .add_systems(
                OnEnter(GameState::Run),
                spawn_player.after(crate::level::spawn_level),
            )
            .add_systems(OnExit(GameState::Run), clear_player_handle)
            .add_systems(
                Update,
                read_input
                    .in_set(PlayerSystems)
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(
                FixedUpdate,
                (
                    detect_ground,
                    tick_player,
                    (forward_audio_effects, apply_time_scale_effects),
                )
                    .chain()
                    .in_set(PlayerSystems)
                    .run_if(in_state(GameState::Run)),
            );
    }
}
