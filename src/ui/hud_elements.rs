//! UI domain: element slots, brew name, and health readout.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::GameState;
use crate::player::{ElementSelection, PlayerEffect, PlayerEffectEvent, PlayerTuning};
use crate::potions::{Element, ElementBook, ElementPair, SLOT_COUNT};

pub(crate) const HUD_PADDING: f32 = 16.0;

const ACTIVE_SLOT_COLOR: Color = Color::srgb(1.0, 0.85, 0.3);
const INACTIVE_SLOT_COLOR: Color = Color::srgb(0.6, 0.6, 0.65);

#[derive(Component)]
pub struct ElementHudUI;

#[derive(Component)]
pub struct SlotLabel(pub usize);

#[derive(Component)]
pub struct BrewLabel;

#[derive(Component)]
pub struct HealthLabel;

/// Text for one slot; the active slot is bracketed.
pub fn slot_label_text(book: &ElementBook, element: Element, active: bool) -> String {
    if active {
        format!("[{}]", book.name(element))
    } else {
        book.name(element).to_string()
    }
}

pub fn health_label_text(health: i32) -> String {
    format!("HP {}", health.max(0))
}

pub(crate) fn spawn_element_hud(
    mut commands: Commands,
    book: Res<ElementBook>,
    tuning: Res<PlayerTuning>,
) {
    let selection = ElementSelection::default();

    commands
        .spawn((
            ElementHudUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.6)),
            DespawnOnExit(GameState::Run),
        ))
        .with_children(|parent| {
            parent.spawn((
                HealthLabel,
                Text::new(health_label_text(tuning.starting_health)),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.3, 0.3)),
            ));

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(12.0),
                    ..default()
                })
                .with_children(|row| {
                    for index in 0..SLOT_COUNT {
                        let active = index == selection.active;
                        row.spawn((
                            SlotLabel(index),
                            Text::new(slot_label_text(&book, selection.slots[index], active)),
                            TextFont {
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(if active {
                                ACTIVE_SLOT_COLOR
                            } else {
                                INACTIVE_SLOT_COLOR
                            }),
                        ));
                    }
                });

            parent.spawn((
                BrewLabel,
                Text::new(book.combination_name(selection.pair())),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.9)),
            ));
        });
}

pub(crate) fn update_element_hud(
    mut effects: MessageReader<PlayerEffectEvent>,
    book: Res<ElementBook>,
    mut slot_query: Query<(&SlotLabel, &mut Text, &mut TextColor), Without<BrewLabel>>,
    mut brew_query: Query<&mut Text, (With<BrewLabel>, Without<SlotLabel>)>,
) {
    for PlayerEffectEvent(effect) in effects.read() {
        let PlayerEffect::ElementsChanged { slots, active } = effect else {
            continue;
        };

        for (slot, mut text, mut color) in &mut slot_query {
            let is_active = slot.0 == *active;
            **text = slot_label_text(&book, slots[slot.0], is_active);
            color.0 = if is_active {
                ACTIVE_SLOT_COLOR
            } else {
                INACTIVE_SLOT_COLOR
            };
        }

        for mut text in &mut brew_query {
            **text = book
                .combination_name(ElementPair::from_slots(*slots))
                .to_string();
        }
    }
}

pub(crate) fn update_health_label(
    mut effects: MessageReader<PlayerEffectEvent>,
    mut label_query: Query<&mut Text, With<HealthLabel>>,
) {
    for PlayerEffectEvent(effect) in effects.read() {
        let health = match effect {
            PlayerEffect::Hurt { health } => *health,
            PlayerEffect::Died => 0,
            _ => continue,
        };
        for mut text in &mut label_query {
            **text = health_label_text(health);
        }
    }
}
