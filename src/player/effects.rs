//! Player domain: side effects requested by the controller.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::core::AudioCue;
use crate::player::Facing;
use crate::potions::{Element, ElementPair, SLOT_COUNT};

/// A single side effect returned by [`crate::player::PlayerController`].
/// Body effects are applied by the tick system; the rest travel as
/// [`PlayerEffectEvent`]s to the systems that own them.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEffect {
    SetVelocity(Vec2),
    SetGravityScale(f32),
    SetFacing(Facing),
    SetVisible(bool),
    PlayAudio(AudioCue),
    ShowReticle(bool),
    MoveReticle(Vec2),
    SpawnBottle {
        position: Vec2,
        velocity: Vec2,
        elements: ElementPair,
    },
    ElementsChanged {
        slots: [Element; SLOT_COUNT],
        active: usize,
    },
    OpenMenu {
        labels: [String; 4],
    },
    HighlightQuadrant(Option<usize>),
    CloseMenu,
    SetTimeScale(f32),
    Hurt {
        health: i32,
    },
    Died,
}

impl PlayerEffect {
    /// Effects the tick system applies to the physics body and sprite directly.
    pub fn is_body_effect(&self) -> bool {
        matches!(
            self,
            PlayerEffect::SetVelocity(_)
                | PlayerEffect::SetGravityScale(_)
                | PlayerEffect::SetFacing(_)
                | PlayerEffect::SetVisible(_)
        )
    }
}

#[derive(Debug, Clone)]
pub struct PlayerEffectEvent(pub PlayerEffect);

impl Message for PlayerEffectEvent {}
