//! Enemies domain: simple followers that hurt on touch.

mod components;
mod follow;
mod spawn;

pub use components::{Enemy, EnemyFollow, EnemyTuning};
pub use follow::{FollowStep, follow_step};

use bevy::prelude::*;

use crate::core::{GameState, gameplay_active};
use crate::enemies::follow::follow_player;
use crate::enemies::spawn::spawn_enemies;

pub struct EnemiesPlugin;

impl Plugin for EnemiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyTuning>()
            .add_systems(
                OnEnter(GameState::Run),
                spawn_enemies.after(crate::level::spawn_level),
            )
            .add_systems(
                Update,
                follow_player
                    .run_if(in_state(GameState::Run))
                    .run_if(gameplay_active),
            );
    }
}
