//! Viewport camera marker and the demo viewer's orbit rig.

use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;

use constants::grid::HALF_WORLD_X;

/// Marks the camera the LOD heuristic measures distances from.
#[derive(Component)]
pub struct ViewportCamera;

/// Orbit rig state for the demo viewer: a focus point on the ground plane,
/// a yaw angle, and a height that doubles as orbit radius.
#[derive(Resource)]
pub struct CameraRig {
    pub focus_point: Vec3,
    pub yaw: f32,
    pub height: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            focus_point: Vec3::new(HALF_WORLD_X, 0.0, HALF_WORLD_X),
            yaw: 0.0,
            height: 120.0,
        }
    }
}

pub fn spawn_viewport_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(HALF_WORLD_X, 120.0, HALF_WORLD_X + 60.0)
            .looking_at(Vec3::new(HALF_WORLD_X, 0.0, HALF_WORLD_X), Vec3::Y),
        ViewportCamera,
    ));
}

/// Keyboard/scroll orbit controls: A/D rotate, arrow keys pan the focus
/// point, scroll wheel zooms. The camera eases toward the rig target.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<ViewportCamera>>,
    mut rig: ResMut<CameraRig>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    for scroll in scroll_events.read() {
        let zoom_factor = if scroll.y > 0.0 { 0.9 } else { 1.1 };
        rig.height = (rig.height * zoom_factor).clamp(5.0, 2000.0);
    }

    let mut rotation_input = 0.0;
    if keyboard.pressed(KeyCode::KeyA) {
        rotation_input -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        rotation_input += 1.0;
    }
    rig.yaw += rotation_input * time.delta_secs();

    let yaw_rot = Quat::from_rotation_y(rig.yaw);
    let pan_speed = rig.height * 0.5 * time.delta_secs();
    let mut pan = Vec3::ZERO;
    if keyboard.pressed(KeyCode::ArrowUp) {
        pan -= yaw_rot * Vec3::Z;
    }
    if keyboard.pressed(KeyCode::ArrowDown) {
        pan += yaw_rot * Vec3::Z;
    }
    if keyboard.pressed(KeyCode::ArrowLeft) {
        pan -= yaw_rot * Vec3::X;
    }
    if keyboard.pressed(KeyCode::ArrowRight) {
        pan += yaw_rot * Vec3::X;
    }
    rig.focus_point += pan * pan_speed;

    let horizontal_offset = yaw_rot * Vec3::new(0.0, 0.0, rig.height * 0.5);
    let target_pos = rig.focus_point
        + Vec3::new(horizontal_offset.x, rig.height, horizontal_offset.z);
    let target_transform =
        Transform::from_translation(target_pos).looking_at(rig.focus_point, Vec3::Y);

    let lerp_speed = (12.0 * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform
        .translation
        .lerp(target_transform.translation, lerp_speed);
    camera_transform.rotation = camera_transform
        .rotation
        .slerp(target_transform.rotation, lerp_speed);
}
