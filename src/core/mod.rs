//! Core domain: game state, pause, time scale, audio cues, and run config.

mod audio;
mod resources;
mod state;
mod systems;

pub use audio::{AudioCue, AudioCueEvent, AudioCues};
pub use resources::{
    GameplayPaused, PAUSE_SOURCE_DEATH, PAUSE_SOURCE_MENU, RunConfig, ScatterRng, TimeScale,
    gameplay_active,
};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::audio::{load_audio_cues, play_audio_cues};
use crate::core::systems::{
    reset_run_flow, setup_camera, start_run_on_enter, sync_virtual_time, toggle_pause,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<RunConfig>()
            .init_resource::<ScatterRng>()
            .init_resource::<GameplayPaused>()
            .init_resource::<TimeScale>()
            .init_resource::<AudioCues>()
            .add_message::<AudioCueEvent>()
            .add_systems(Startup, (setup_camera, load_audio_cues))
            .add_systems(
                Update,
                start_run_on_enter.run_if(in_state(GameState::Title)),
            )
            .add_systems(Update, toggle_pause.run_if(in_state(GameState::Run)))
            .add_systems(Update, (sync_virtual_time, play_audio_cues))
            .add_systems(OnExit(GameState::Run), reset_run_flow);
    }
}
