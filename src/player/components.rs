//! Player domain: markers, physics layers, and facing.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors and platforms; the grounded probe only hits this layer
    Ground,
    Player,
    Enemy,
    /// Thrown bottles
    Bottle,
    /// Mud blobs, signposts and other non-blocking triggers
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Result of the per-tick grounded probe
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Grounded(pub bool);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn from_axis(horizontal: f32) -> Self {
        if horizontal < 0.0 {
            Facing::Left
        } else {
            Facing::Right
        }
    }

    /// Horizontal sprite scale for this facing.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}
