//! Player domain: input sampling.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::GameplayPaused;
use crate::player::PlayerInput;

/// Sample this frame's input and latch it until the next fixed tick.
pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
    paused: Res<GameplayPaused>,
    mut input: ResMut<PlayerInput>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut frame = PlayerInput {
        horizontal: x,
        run_pressed: keyboard.just_pressed(KeyCode::ShiftLeft),
        run_held: keyboard.pressed(KeyCode::ShiftLeft),
        jump_pressed: keyboard.just_pressed(KeyCode::Space)
            || keyboard.just_pressed(KeyCode::KeyW),
        jump_held: keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyW),
        chuck_pressed: mouse.just_pressed(MouseButton::Left),
        chuck_released: mouse.just_released(MouseButton::Left),
        cycle_pressed: keyboard.just_pressed(KeyCode::KeyQ)
            || keyboard.just_pressed(KeyCode::Tab),
        menu_pressed: keyboard.just_pressed(KeyCode::KeyE)
            || mouse.just_pressed(MouseButton::Right),
        // Select shares the chuck button; throwing is suppressed while the menu is open
        select_pressed: mouse.just_pressed(MouseButton::Left)
            || keyboard.just_pressed(KeyCode::Enter),
        // Keep the last known pointer when the cursor leaves the window
        pointer_world: input.pointer_world,
        pointer_normalized: input.pointer_normalized,
    };

    if let Ok(window) = window_query.single()
        && let Some(cursor) = window.cursor_position()
    {
        frame.pointer_normalized =
            normalize_pointer(cursor, Vec2::new(window.width(), window.height()));

        if let Some((camera, camera_transform)) = camera_query.iter().next()
            && let Ok(world) = camera.viewport_to_world_2d(camera_transform, cursor)
        {
            frame.pointer_world = world;
        }
    }

    input.merge_frame(&frame);
    // Fixed ticks stop while paused; presses made then must not fire on resume
    if paused.is_paused() {
        input.consume_edges();
    }
}

/// Window cursor (origin top-left, +y down) to centered [-0.5, 0.5] with +y up.
pub(crate) fn normalize_pointer(cursor: Vec2, window_size: Vec2) -> Vec2 {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        cursor.x / window_size.x - 0.5,
        0.5 - cursor.y / window_size.y,
    )
}
