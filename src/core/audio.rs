//! Core domain: one-shot audio cues requested by gameplay.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Jump,
    Throw,
    Hurt,
    Death,
}

impl AudioCue {
    pub const ALL: [AudioCue; 4] = [
        AudioCue::Jump,
        AudioCue::Throw,
        AudioCue::Hurt,
        AudioCue::Death,
    ];

    /// Asset path relative to assets/.
    pub fn asset_path(self) -> &'static str {
        match self {
            AudioCue::Jump => "audio/jump.ogg",
            AudioCue::Throw => "audio/throw.ogg",
            AudioCue::Hurt => "audio/hurt.ogg",
            AudioCue::Death => "audio/death.ogg",
        }
    }
}

/// Request to play a cue once
#[derive(Debug, Clone, Copy)]
pub struct AudioCueEvent(pub AudioCue);

impl Message for AudioCueEvent {}

/// Loaded sound handles keyed by cue.
#[derive(Resource, Default)]
pub struct AudioCues {
    pub handles: HashMap<AudioCue, Handle<AudioSource>>,
}

pub(crate) fn load_audio_cues(asset_server: Res<AssetServer>, mut cues: ResMut<AudioCues>) {
    for cue in AudioCue::ALL {
        cues.handles.insert(cue, asset_server.load(cue.asset_path()));
    }
    info!("Queued {} audio cues for loading", cues.handles.len());
}

pub(crate) fn play_audio_cues(
    mut commands: Commands,
    mut cue_events: MessageReader<AudioCueEvent>,
    cues: Res<AudioCues>,
) {
    for AudioCueEvent(cue) in cue_events.read() {
        let Some(handle) = cues.handles.get(cue) else {
            warn!("No sound loaded for {:?}", cue);
            continue;
        };
        commands.spawn((AudioPlayer::new(handle.clone()), PlaybackSettings::DESPAWN));
    }
}
