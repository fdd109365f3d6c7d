//! Player domain: the per-tick controller.
//!
//! `PlayerController::tick` is the whole player: it reads an input snapshot and
//! the body state, mutates its own timers and selections, and returns the side
//! effects for the engine-facing systems to apply. Nothing in here touches the
//! ECS world, so every rule can be exercised in plain unit tests.

use bevy::prelude::*;

use crate::combat::{DamageOutcome, Damageable, Invincibility};
use crate::core::{AudioCue, TimeScale};
use crate::player::{Facing, LocomotionPolicy, PlayerEffect, PlayerInput, PlayerTuning};
use crate::potions::{Element, ElementBook, ElementPair, SLOT_COUNT};

/// Physics state read back from the body at the start of a tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub grounded: bool,
}

/// Everything a tick reads.
pub struct TickContext<'a> {
    pub dt: f32,
    pub input: &'a PlayerInput,
    pub body: BodyState,
    pub paused: bool,
    pub tuning: &'a PlayerTuning,
    pub book: &'a ElementBook,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovementState {
    pub horizontal: f32,
    pub dashing: bool,
    pub autodashing: bool,
    pub dash_cooldown: f32,
    pub time_since_jump: f32,
    pub facing: Facing,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AimState {
    pub aiming: bool,
    pub reticle: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElementSelection {
    pub slots: [Element; SLOT_COUNT],
    pub active: usize,
    pub menu_open: bool,
    pub highlighted: Option<usize>,
}

impl Default for ElementSelection {
    fn default() -> Self {
        Self {
            slots: [Element::Fire, Element::None],
            active: 0,
            menu_open: false,
            highlighted: None,
        }
    }
}

impl ElementSelection {
    pub fn pair(&self) -> ElementPair {
        ElementPair::from_slots(self.slots)
    }

    pub fn cycle(&mut self) {
        self.active = (self.active + 1) % SLOT_COUNT;
    }
}

#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    pub movement: MovementState,
    pub aim: AimState,
    pub elements: ElementSelection,
    pub health: i32,
    pub invincibility: Invincibility,
    pub slow_timer: f32,
}

impl PlayerController {
    pub fn new(tuning: &PlayerTuning) -> Self {
        Self {
            movement: MovementState {
                horizontal: 0.0,
                dashing: false,
                autodashing: false,
                dash_cooldown: 0.0,
                // No jump is pending at spawn
                time_since_jump: tuning.jump_window,
                facing: Facing::Right,
            },
            aim: AimState::default(),
            elements: ElementSelection::default(),
            health: tuning.starting_health,
            invincibility: Invincibility::new(tuning.invincibility_duration, tuning.blink_period),
            slow_timer: 0.0,
        }
    }

    pub fn tick(&mut self, ctx: &TickContext) -> Vec<PlayerEffect> {
        let mut effects = Vec::new();

        if ctx.paused {
            return effects;
        }

        let dt = ctx.dt.max(0.0);
        let input = ctx.input;
        let tuning = ctx.tuning;

        if let Some(visible) = self.invincibility.tick(dt) {
            effects.push(PlayerEffect::SetVisible(visible));
        }
        self.slow_timer = (self.slow_timer - dt).max(0.0);

        self.update_dash(dt, input, tuning);

        if let Some(facing) = self.update_facing(input.horizontal, tuning) {
            effects.push(PlayerEffect::SetFacing(facing));
        }

        let speed = self.speed_factor(tuning);
        let (velocity, gravity_scale) = match tuning.locomotion {
            LocomotionPolicy::Smooth => self.move_smooth(dt, speed, ctx, &mut effects),
            LocomotionPolicy::Snappy => self.move_snappy(speed, ctx, &mut effects),
        };
        effects.push(PlayerEffect::SetVelocity(velocity));
        effects.push(PlayerEffect::SetGravityScale(gravity_scale));

        if !self.elements.menu_open {
            self.update_throw(ctx, &mut effects);
        }

        if input.cycle_pressed {
            self.elements.cycle();
            effects.push(self.elements_changed());
        }

        self.update_menu(ctx, &mut effects);

        effects
    }

    fn update_dash(&mut self, dt: f32, input: &PlayerInput, tuning: &PlayerTuning) {
        let movement = &mut self.movement;
        movement.horizontal = input.horizontal;
        movement.dash_cooldown = (movement.dash_cooldown - dt).max(0.0);

        if input.horizontal.abs() > tuning.move_threshold {
            if input.run_pressed {
                if movement.dash_cooldown > 0.0 {
                    movement.autodashing = true;
                    debug!("Auto-dash engaged");
                } else {
                    movement.dash_cooldown = tuning.dash_window;
                }
            }

            if input.run_held {
                movement.dashing = true;
                movement.dash_cooldown = tuning.dash_window;
            } else {
                movement.dashing = false;
            }
        } else {
            movement.dashing = false;
            movement.autodashing = false;
        }
    }

    fn update_facing(&mut self, horizontal: f32, tuning: &PlayerTuning) -> Option<Facing> {
        if horizontal.abs() <= tuning.flip_threshold {
            return None;
        }
        let facing = Facing::from_axis(horizontal);
        if facing == self.movement.facing {
            return None;
        }
        self.movement.facing = facing;
        Some(facing)
    }

    pub fn speed_factor(&self, tuning: &PlayerTuning) -> f32 {
        let mut factor = if self.movement.dashing || self.movement.autodashing {
            tuning.dash_multiplier
        } else {
            1.0
        };
        if self.slow_timer > 0.0 {
            factor *= tuning.slow_multiplier;
        }
        factor
    }

    fn move_smooth(
        &mut self,
        dt: f32,
        speed: f32,
        ctx: &TickContext,
        effects: &mut Vec<PlayerEffect>,
    ) -> (Vec2, f32) {
        let tuning = ctx.tuning;
        let input = ctx.input;
        let mut velocity = ctx.body.velocity;

        velocity.x += input.horizontal * speed * tuning.acceleration * dt;
        let limit = tuning.max_speed * speed;
        velocity.x = velocity.x.clamp(-limit, limit);

        if ctx.body.grounded {
            if input.jump_pressed {
                self.movement.time_since_jump = 0.0;
                effects.push(PlayerEffect::PlayAudio(AudioCue::Jump));
                debug!("Jump requested at {:?}", ctx.body.position);
            }
            velocity.x *= (-tuning.ground_drag * dt).exp();
        }

        let elapsed = self.movement.time_since_jump;
        self.movement.time_since_jump = (elapsed + dt).min(tuning.jump_window);

        // Gravity is switched off while the jump is held inside the window. The
        // boost only covers the part of this tick that lies inside the window.
        if elapsed < tuning.jump_window && input.jump_held {
            let boost_time = dt.min(tuning.jump_window - elapsed);
            velocity.y += tuning.jump_acceleration * boost_time;
            (velocity, 0.0)
        } else {
            (velocity, 1.0)
        }
    }

    fn move_snappy(
        &mut self,
        speed: f32,
        ctx: &TickContext,
        effects: &mut Vec<PlayerEffect>,
    ) -> (Vec2, f32) {
        let tuning = ctx.tuning;
        let mut velocity = ctx.body.velocity;

        velocity.x = ctx.input.horizontal.round() * speed * tuning.max_speed;

        if ctx.body.grounded && ctx.input.jump_pressed {
            velocity.y += tuning.snappy_jump_velocity;
            effects.push(PlayerEffect::PlayAudio(AudioCue::Jump));
            debug!("Snappy jump at {:?}", ctx.body.position);
        }

        (velocity, 1.0)
    }

    fn update_throw(&mut self, ctx: &TickContext, effects: &mut Vec<PlayerEffect>) {
        let input = ctx.input;
        let tuning = ctx.tuning;
        let position = ctx.body.position;
        let direction = (input.pointer_world - position).normalize_or_zero();

        if input.chuck_pressed {
            self.aim.aiming = true;
            effects.push(PlayerEffect::ShowReticle(true));
        }

        if self.aim.aiming {
            // Reticle sits on the launch circle no matter how far away the pointer is
            self.aim.reticle = position + direction * tuning.launch_radius;
            effects.push(PlayerEffect::MoveReticle(self.aim.reticle));
        }

        if input.chuck_released && self.aim.aiming {
            self.aim.aiming = false;
            effects.push(PlayerEffect::ShowReticle(false));
            effects.push(PlayerEffect::SpawnBottle {
                position: self.aim.reticle,
                velocity: direction * tuning.bottle_speed,
                elements: self.elements.pair(),
            });
            effects.push(PlayerEffect::PlayAudio(AudioCue::Throw));
            debug!(
                "Bottle thrown: {:?} from {:?}",
                self.elements.pair(),
                self.aim.reticle
            );
        }
    }

    fn update_menu(&mut self, ctx: &TickContext, effects: &mut Vec<PlayerEffect>) {
        let input = ctx.input;
        let tuning = ctx.tuning;

        if input.menu_pressed && !self.elements.menu_open {
            let labels = tuning.radial_elements.map(|e| ctx.book.menu_label(e));

            if self.aim.aiming {
                self.aim.aiming = false;
                effects.push(PlayerEffect::ShowReticle(false));
            }

            self.elements.menu_open = true;
            self.elements.highlighted = None;
            effects.push(PlayerEffect::OpenMenu { labels });
            effects.push(PlayerEffect::SetTimeScale(tuning.slow_motion_scale));
            info!("Element menu opened");
            return;
        }

        if !self.elements.menu_open {
            return;
        }

        let quadrant = quadrant_for(input.pointer_normalized, tuning.menu_dead_zone);
        if quadrant != self.elements.highlighted {
            self.elements.highlighted = quadrant;
            effects.push(PlayerEffect::HighlightQuadrant(quadrant));
        }

        if input.select_pressed {
            if let Some(quadrant) = quadrant {
                let element = tuning.radial_elements[quadrant];
                if ctx.book.is_owned(element) {
                    self.elements.slots[self.elements.active] = element;
                    effects.push(self.elements_changed());
                    info!("Slot {} set to {:?}", self.elements.active, element);
                } else {
                    debug!("{:?} is not owned yet", element);
                }
            }
            self.close_menu(effects);
        }
    }

    fn close_menu(&mut self, effects: &mut Vec<PlayerEffect>) {
        self.elements.menu_open = false;
        self.elements.highlighted = None;
        effects.push(PlayerEffect::CloseMenu);
        effects.push(PlayerEffect::SetTimeScale(TimeScale::NORMAL));
        info!("Element menu closed");
    }

    pub fn elements_changed(&self) -> PlayerEffect {
        PlayerEffect::ElementsChanged {
            slots: self.elements.slots,
            active: self.elements.active,
        }
    }

    /// Grant invincibility from outside the damage path (spawn grace, scripted events).
    pub fn auto_iframes(&mut self) {
        self.invincibility.trigger();
    }

    /// Start or extend a slow from a hazard.
    pub fn slow(&mut self, duration: f32) {
        self.slow_timer = self.slow_timer.max(duration);
    }

    /// Effects that follow a damage call.
    pub fn damage_effects(&mut self, outcome: DamageOutcome) -> Vec<PlayerEffect> {
        match outcome {
            DamageOutcome::Ignored => Vec::new(),
            DamageOutcome::Hurt { remaining } => vec![
                PlayerEffect::PlayAudio(AudioCue::Hurt),
                PlayerEffect::Hurt { health: remaining },
            ],
            DamageOutcome::Died => {
                let mut effects = vec![PlayerEffect::PlayAudio(AudioCue::Death)];
                if self.elements.menu_open {
                    self.close_menu(&mut effects);
                }
                if self.aim.aiming {
                    self.aim.aiming = false;
                    effects.push(PlayerEffect::ShowReticle(false));
                }
                effects.push(PlayerEffect::Died);
                effects
            }
        }
    }
}

impl Damageable for PlayerController {
    fn health(&self) -> i32 {
        self.health
    }

    fn invincibility_mut(&mut self) -> &mut Invincibility {
        &mut self.invincibility
    }

    fn set_health(&mut self, health: i32) {
        self.health = health;
    }
}

/// Radial menu quadrant under a centered, normalized pointer.
///
/// 0: +x +y, 1: +x -y, 2: -x -y, 3: -x +y. Nothing inside the dead-zone.
pub fn quadrant_for(pointer: Vec2, dead_zone: f32) -> Option<usize> {
    if pointer.length() <= dead_zone {
        return None;
    }
    let quadrant = match (pointer.x >= 0.0, pointer.y >= 0.0) {
        (true, true) => 0,
        (true, false) => 1,
        (false, false) => 2,
        (false, true) => 3,
    };
    Some(quadrant)
}
