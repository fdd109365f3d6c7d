//! Core domain: shared resources for pause, time scale, and run configuration.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Pause source owned by the in-game pause toggle.
pub const PAUSE_SOURCE_MENU: &str = "menu";
/// Pause source owned by the death banner.
pub const PAUSE_SOURCE_DEATH: &str = "death";

/// Resource tracking if gameplay should be paused.
/// Gameplay is paused if any source is active.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    pub sources: HashSet<String>,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn pause(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn unpause(&mut self, source: impl Into<String>) {
        self.sources.remove(&source.into());
    }

    pub fn toggle(&mut self, source: impl Into<String>) {
        let source = source.into();
        if !self.sources.remove(&source) {
            self.sources.insert(source);
        }
    }

    pub fn clear(&mut self) {
        self.sources.clear();
    }
}

/// Run condition: returns true only when gameplay is not paused
pub fn gameplay_active(paused: Res<GameplayPaused>) -> bool {
    !paused.is_paused()
}

/// Process-wide simulation speed requested by gameplay (slow-motion selection).
///
/// Only the radial element menu writes this; every open path is paired with a
/// close path that restores [`TimeScale::NORMAL`].
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct TimeScale(pub f32);

impl TimeScale {
    pub const NORMAL: f32 = 1.0;
}

impl Default for TimeScale {
    fn default() -> Self {
        Self(Self::NORMAL)
    }
}

#[derive(Resource, Debug)]
pub struct RunConfig {
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::random(),
        }
    }
}

/// Seeded RNG for level scatter (mud blobs) so a seed replays identically.
#[derive(Resource, Debug)]
pub struct ScatterRng(pub ChaCha8Rng);

impl ScatterRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl FromWorld for ScatterRng {
    fn from_world(world: &mut World) -> Self {
        let seed = world
            .get_resource::<RunConfig>()
            .map(|config| config.seed)
            .unwrap_or_default();
        Self::from_seed(seed)
    }
}
