//! Player domain: tuning, input snapshot, and the player handle.

use bevy::prelude::*;
use std::fmt;

use crate::potions::Element;

/// How horizontal input becomes velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocomotionPolicy {
    /// Accelerated, clamped to max speed, drag on the ground, held-jump boost
    #[default]
    Smooth,
    /// Velocity set directly from rounded input, single jump impulse
    Snappy,
}

#[derive(Resource, Debug, Clone)]
pub struct PlayerTuning {
    pub locomotion: LocomotionPolicy,
    /// Below this |axis| the player is considered idle
    pub move_threshold: f32,
    /// Above this |axis| the sprite flips toward the input
    pub flip_threshold: f32,
    /// Double-tap window for auto-dash, refreshed while Run is held
    pub dash_window: f32,
    pub dash_multiplier: f32,
    pub max_speed: f32,
    /// Horizontal acceleration per unit of input, px/s² (smooth policy)
    pub acceleration: f32,
    /// Exponential decay rate of horizontal velocity while grounded, 1/s (smooth policy)
    pub ground_drag: f32,
    /// Upward acceleration while the jump is held inside the window, px/s²
    pub jump_acceleration: f32,
    pub jump_window: f32,
    /// Hand-tuned; does not match v = sqrt(2gh) for the intended apex.
    pub snappy_jump_velocity: f32,
    pub launch_radius: f32,
    pub bottle_speed: f32,
    pub starting_health: i32,
    pub invincibility_duration: f32,
    pub blink_period: f32,
    /// Speed factor multiplier while slowed by mud
    pub slow_multiplier: f32,
    pub slow_motion_scale: f32,
    /// Radial menu dead-zone, in normalized screen units
    pub menu_dead_zone: f32,
    /// Element offered in each radial quadrant.
    /// 0 is up-right, 1 down-right, 2 down-left, 3 up-left
    pub radial_elements: [Element; 4],
    /// Distance below the body origin of the grounded probe point
    pub ground_probe_offset: f32,
    pub body_size: Vec2,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            locomotion: LocomotionPolicy::Smooth,
            move_threshold: 0.1,
            flip_threshold: 0.1,
            dash_window: 0.5,
            dash_multiplier: 2.0,
            max_speed: 256.0,
            acceleration: 4096.0,
            ground_drag: 14.0,
            jump_acceleration: 6144.0,
            jump_window: 0.15,
            snappy_jump_velocity: 420.0,
            launch_radius: 64.0,
            bottle_speed: 640.0,
            starting_health: 5,
            invincibility_duration: 1.0,
            blink_period: 0.1,
            slow_multiplier: 0.5,
            slow_motion_scale: 0.2,
            menu_dead_zone: 0.1,
            radial_elements: [Element::Fire, Element::Water, Element::Earth, Element::Air],
            ground_probe_offset: 36.0,
            body_size: Vec2::new(28.0, 64.0),
        }
    }
}

/// Input sampled every frame and consumed by the fixed tick. Edges latch
/// until a tick consumes them; levels and the pointer always hold the latest
/// frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct PlayerInput {
    pub horizontal: f32,
    pub run_pressed: bool,
    pub run_held: bool,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub chuck_pressed: bool,
    pub chuck_released: bool,
    pub cycle_pressed: bool,
    pub menu_pressed: bool,
    pub select_pressed: bool,
    /// Pointer projected into world space
    pub pointer_world: Vec2,
    /// Pointer in screen space, centered, in [-0.5, 0.5] on both axes (+y up)
    pub pointer_normalized: Vec2,
}

impl PlayerInput {
    /// Fold one frame of sampled input into the pending snapshot.
    pub fn merge_frame(&mut self, frame: &PlayerInput) {
        self.horizontal = frame.horizontal;
        self.run_held = frame.run_held;
        self.jump_held = frame.jump_held;
        self.pointer_world = frame.pointer_world;
        self.pointer_normalized = frame.pointer_normalized;

        self.run_pressed |= frame.run_pressed;
        self.jump_pressed |= frame.jump_pressed;
        self.chuck_pressed |= frame.chuck_pressed;
        self.chuck_released |= frame.chuck_released;
        self.cycle_pressed |= frame.cycle_pressed;
        self.menu_pressed |= frame.menu_pressed;
        self.select_pressed |= frame.select_pressed;
    }

    /// Clear edges once a tick has seen them.
    pub fn consume_edges(&mut self) {
        self.run_pressed = false;
        self.jump_pressed = false;
        self.chuck_pressed = false;
        self.chuck_released = false;
        self.cycle_pressed = false;
        self.menu_pressed = false;
        self.select_pressed = false;
    }
}

/// The one player entity, handed to collaborators that need to find it.
#[derive(Resource, Debug, Default)]
pub struct PlayerHandle(Option<Entity>);

impl PlayerHandle {
    pub fn get(&self) -> Option<Entity> {
        self.0
    }

    pub fn register(&mut self, entity: Entity) -> Result<(), PlayerSpawnError> {
        match self.0 {
            Some(existing) => Err(PlayerSpawnError::AlreadyRegistered { existing }),
            None => {
                self.0 = Some(entity);
                Ok(())
            }
        }
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSpawnError {
    AlreadyRegistered { existing: Entity },
}

impl fmt::Display for PlayerSpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerSpawnError::AlreadyRegistered { existing } => {
                write!(f, "can't have two players at once (existing: {existing:?})")
            }
        }
    }
}

impl std::error::Error for PlayerSpawnError {}
