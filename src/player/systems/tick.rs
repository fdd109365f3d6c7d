//! Player domain: drives the controller once per fixed step and applies body effects.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{AudioCueEvent, GameplayPaused, TimeScale};
use crate::player::{
    BodyState, Grounded, Player, PlayerController, PlayerEffect, PlayerEffectEvent, PlayerInput,
    PlayerTuning, TickContext,
};
use crate::potions::ElementBook;

/// One fixed simulation step. `Time` here is the fixed clock, which follows
/// virtual time, so slow motion runs fewer steps rather than shorter ones.
pub(crate) fn tick_player(
    time: Res<Time>,
    mut input: ResMut<PlayerInput>,
    tuning: Res<PlayerTuning>,
    book: Res<ElementBook>,
    paused: Res<GameplayPaused>,
    mut effect_events: MessageWriter<PlayerEffectEvent>,
    mut query: Query<
        (
            &mut PlayerController,
            &mut Transform,
            &Grounded,
            &mut LinearVelocity,
            &mut GravityScale,
            &mut Visibility,
        ),
        With<Player>,
    >,
) {
    for (mut controller, mut transform, grounded, mut velocity, mut gravity, mut visibility) in
        &mut query
    {
        let ctx = TickContext {
            dt: time.delta_secs(),
            input: &input,
            body: BodyState {
                position: transform.translation.truncate(),
                velocity: velocity.0,
                grounded: grounded.0,
            },
            paused: paused.is_paused(),
            tuning: &tuning,
            book: &book,
        };

        for effect in controller.tick(&ctx) {
            if !effect.is_body_effect() {
                effect_events.write(PlayerEffectEvent(effect));
                continue;
            }

            match effect {
                PlayerEffect::SetVelocity(v) => velocity.0 = v,
                PlayerEffect::SetGravityScale(scale) => gravity.0 = scale,
                PlayerEffect::SetFacing(facing) => {
                    transform.scale.x = facing.sign() * transform.scale.x.abs();
                }
                PlayerEffect::SetVisible(visible) => {
                    *visibility = if visible {
                        Visibility::Inherited
                    } else {
                        Visibility::Hidden
                    };
                }
                _ => {}
            }
        }
    }

    input.consume_edges();
}

/// Route audio requests to the cue player.
pub(crate) fn forward_audio_effects(
    mut effect_events: MessageReader<PlayerEffectEvent>,
    mut cue_events: MessageWriter<AudioCueEvent>,
) {
    for PlayerEffectEvent(effect) in effect_events.read() {
        if let PlayerEffect::PlayAudio(cue) = effect {
            cue_events.write(AudioCueEvent(*cue));
        }
    }
}

pub(crate) fn apply_time_scale_effects(
    mut effect_events: MessageReader<PlayerEffectEvent>,
    mut scale: ResMut<TimeScale>,
) {
    for PlayerEffectEvent(effect) in effect_events.read() {
        if let PlayerEffect::SetTimeScale(value) = effect {
            scale.0 = *value;
        }
    }
}
