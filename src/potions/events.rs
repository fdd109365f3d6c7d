//! Potions domain: splash messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::potions::{ElementPair, PotionEffect};

/// A bottle shattered at `position`
#[derive(Debug, Clone)]
pub struct PotionSplashEvent {
    pub position: Vec2,
    pub elements: ElementPair,
    pub effect: PotionEffect,
    pub owner: Option<Entity>,
}

impl Message for PotionSplashEvent {}
