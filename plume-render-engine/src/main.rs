use std::path::Path;

use bevy::prelude::*;
use bevy::window::PresentMode;

use plume_render_engine::PlumePointCloudPlugin;
use plume_render_engine::engine::camera::{CameraRig, camera_controller, spawn_viewport_camera};
use plume_render_engine::engine::scene::grid::spawn_cell_outline_grid;
use plume_render_engine::engine::settings::{PlumeSettings, load_settings};

const SETTINGS_PATH: &str = "assets/plume_settings.json";

fn main() {
    create_app().run();
}

fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .insert_resource(resolve_settings())
        .add_plugins(PlumePointCloudPlugin)
        .init_resource::<CameraRig>()
        .add_systems(Startup, setup)
        .add_systems(Update, camera_controller);

    app
}

/// Settings file overrides the defaults when present; a broken file falls
/// back to defaults rather than refusing to start.
fn resolve_settings() -> PlumeSettings {
    let path = Path::new(SETTINGS_PATH);
    if !path.exists() {
        return PlumeSettings::default();
    }
    match load_settings(path) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Ignoring settings file: {err}");
            PlumeSettings::default()
        }
    }
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(Window {
            title: "Plume Point Cloud".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    };

    DefaultPlugins.set(window_config)
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    spawn_lighting(&mut commands);
    spawn_viewport_camera(&mut commands);
    spawn_cell_outline_grid(&mut commands, &mut meshes, &mut materials);
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}
