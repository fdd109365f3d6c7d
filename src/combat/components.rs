//! Combat domain: invincibility timing and the damage capability shared by
//! the player and enemies.

use bevy::prelude::*;

/// Invincibility window with a blinking visibility sub-timer.
///
/// Composed by value into anything that can be damaged. `visible` only
/// toggles while the window is open and is forced back on when it closes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Invincibility {
    pub duration: f32,
    pub blink_period: f32,
    pub timer: f32,
    pub blink_timer: f32,
    pub visible: bool,
}

impl Invincibility {
    pub fn new(duration: f32, blink_period: f32) -> Self {
        Self {
            duration,
            blink_period,
            timer: 0.0,
            blink_timer: 0.0,
            visible: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer > 0.0
    }

    /// Open (or reopen) the window for the configured duration.
    pub fn trigger(&mut self) {
        self.timer = self.duration;
        self.blink_timer = self.blink_period;
    }

    /// Advance by `dt`. Returns the new visibility when it changed (or was
    /// forced on at the end of the window).
    pub fn tick(&mut self, dt: f32) -> Option<bool> {
        if self.timer <= 0.0 {
            return None;
        }

        self.timer = (self.timer - dt.max(0.0)).max(0.0);

        if self.timer > 0.0 {
            self.blink_timer = (self.blink_timer - dt.max(0.0)).max(0.0);
            if self.blink_timer <= 0.0 {
                self.visible = !self.visible;
                self.blink_timer = self.blink_period;
                return Some(self.visible);
            }
            None
        } else {
            self.blink_timer = 0.0;
            self.visible = true;
            Some(true)
        }
    }
}

impl Default for Invincibility {
    fn default() -> Self {
        Self::new(1.0, 0.1)
    }
}

/// Result of a damage call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Target was invincible, nothing changed
    Ignored,
    Hurt { remaining: i32 },
    Died,
}

/// Capability for anything that takes integer damage behind an invincibility window.
pub trait Damageable {
    fn health(&self) -> i32;

    fn invincibility_mut(&mut self) -> &mut Invincibility;

    fn set_health(&mut self, health: i32);

    fn damage(&mut self, amount: i32) -> DamageOutcome {
        if self.invincibility_mut().is_active() {
            return DamageOutcome::Ignored;
        }

        let remaining = self.health() - amount;
        self.set_health(remaining);
        self.invincibility_mut().trigger();

        if remaining > 0 {
            DamageOutcome::Hurt { remaining }
        } else {
            DamageOutcome::Died
        }
    }
}

/// Health and invincibility for non-player combatants.
#[derive(Component, Debug, Clone)]
pub struct Vitals {
    pub health: i32,
    pub invincibility: Invincibility,
}

impl Vitals {
    pub fn new(health: i32, invincibility: Invincibility) -> Self {
        Self {
            health,
            invincibility,
        }
    }
}

impl Damageable for Vitals {
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
