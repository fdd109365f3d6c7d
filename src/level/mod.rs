//! Level domain: the static layout and its spawning.

mod layout;
mod spawn;

pub use layout::{LevelLayout, Platform, Signpost, SignpostHelp, SignpostSpec};
pub(crate) use spawn::spawn_level;

use bevy::prelude::*;

use crate::core::GameState;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelLayout>()
            .add_systems(OnEnter(GameState::Run), spawn_level);
    }
}
