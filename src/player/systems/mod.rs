//! Player domain: system modules for input, grounding, ticking, and spawning.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod spawn;
pub(crate) mod tick;

pub(crate) use collisions::detect_ground;
pub(crate) use input::read_input;
pub(crate) use spawn::{clear_player_handle, spawn_player};
pub(crate) use tick::{apply_time_scale_effects, forward_audio_effects, tick_player};
