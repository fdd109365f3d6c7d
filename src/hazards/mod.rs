//! Hazards domain: mud.

mod mud;

pub use mud::{HazardTuning, MudBlob, Slowed, scatter_offsets};

use bevy::prelude::*;

use crate::core::{GameState, gameplay_active};
use crate::hazards::mud::{
    expire_mud, mud_contact, spawn_level_mud, spawn_mud_from_splashes, tick_slowed,
};

pub struct HazardsPlugin;

impl Plugin for HazardsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HazardTuning>()
            .add_systems(
                OnEnter(GameState::Run),
                spawn_level_mud.after(crate::level::spawn_level),
            )
            .add_systems(
                Update,
                (
                    spawn_mud_from_splashes,
                    mud_contact,
                    tick_slowed,
                    expire_mud,
                )
                    .run_if(in_state(GameState::Run))
                    .run_if(gameplay_active),
            );
    }
}
