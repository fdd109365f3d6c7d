//! Combat domain: invincibility, the damage capability, and damage routing.

mod components;
mod events;
mod systems;

pub use components::{DamageOutcome, Damageable, Invincibility, Vitals};
pub use events::{DamageEvent, EnemyDiedEvent, PlayerDiedEvent};

use bevy::prelude::*;

use crate::combat::systems::{
    despawn_dead_enemies, enemy_contact_damage, route_damage, splash_damage, tick_vitals,
};
use crate::core::{GameState, gameplay_active};
use crate::player::PlayerSystems;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<DamageEvent>()
            .add_message::<EnemyDiedEvent>()
            .add_message::<PlayerDiedEvent>()
            .add_systems(
                Update,
                (
                    (enemy_contact_damage, splash_damage),
                    route_damage,
                    despawn_dead_enemies,
                )
                    .chain()
                    .after(PlayerSystems)
                    .run_if(in_state(GameState::Run))
                    .run_if(gameplay_active),
            )
            .add_systems(
                Update,
                tick_vitals
                    .run_if(in_state(GameState::Run))
                    .run_if(gameplay_active),
            );
    }
}
