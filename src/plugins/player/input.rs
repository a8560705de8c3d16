//! Input sampling: keyboard/mouse → `PlayerInput`, cursor → `Aim`.
//!
//! Everything downstream reads these two resources, never the raw devices,
//! so gameplay systems can be driven directly in tests.

use bevy::prelude::*;

use crate::plugins::camera::MainCamera;

/// Raw per-frame intent. Not persisted across frames.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct PlayerInput {
    /// Raw axes, each component in {-1, 0, 1}. Not normalized.
    pub move_axis: Vec2,
    pub dash_pressed: bool,
    pub fire_held: bool,
}

/// Cursor position projected into world space, if there is one this frame.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct Aim {
    pub world_cursor: Option<Vec2>,
}

const AXIS_KEYS: [(KeyCode, KeyCode, Vec2); 4] = [
    (KeyCode::KeyW, KeyCode::ArrowUp, Vec2::Y),
    (KeyCode::KeyS, KeyCode::ArrowDown, Vec2::NEG_Y),
    (KeyCode::KeyA, KeyCode::ArrowLeft, Vec2::NEG_X),
    (KeyCode::KeyD, KeyCode::ArrowRight, Vec2::X),
];

pub fn gather_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    mut input: ResMut<PlayerInput>,
) {
    let Some(keys) = keys else {
        *input = PlayerInput::default();
        return;
    };

    let axis = AXIS_KEYS
        .iter()
        .filter(|(primary, alt, _)| keys.any_pressed([*primary, *alt]))
        .fold(Vec2::ZERO, |acc, (_, _, dir)| acc + *dir);

    input.move_axis = axis;
    input.dash_pressed = keys.just_pressed(KeyCode::Space);
    input.fire_held = buttons.is_some_and(|b| b.pressed(MouseButton::Left));
}

pub fn update_aim(
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut aim: ResMut<Aim>,
) {
    aim.world_cursor = None;

    let Ok(window) = windows.single() else { return; };
    let Some(cursor) = window.cursor_position() else { return; };

    let (camera, camera_tf) = match q_camera.single() {
        Ok(v) => v,
        Err(e) => { debug!("No single MainCamera: {e:?}"); return; }
    };

    match camera.viewport_to_world_2d(camera_tf, cursor) {
        Ok(p) => aim.world_cursor = Some(p),
        Err(e) => debug!("viewport_to_world_2d failed: {e:?}"),
    }
}
