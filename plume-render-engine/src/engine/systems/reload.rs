//! The reload chain: timer accumulation, manual trigger, and the render pass.

use bevy::prelude::*;

use crate::engine::camera::ViewportCamera;
use crate::engine::dataset::load_concentration_grid;
use crate::engine::scene::grid::cell_for_world;
use crate::engine::scene::lod::{lod_factor, point_count};
use crate::engine::scene::points::{
    ConcentrationPoint, PointAssets, despawn_all_points, spawn_cell_points,
};
use crate::engine::session::RenderSession;
use crate::engine::settings::PlumeSettings;

/// Request one render pass. Written by the timer and the manual trigger;
/// multiple requests in a frame collapse into a single pass.
#[derive(Event)]
pub struct ReloadRequest;

/// Accumulate frame time and request a reload each time the configured
/// interval elapses.
pub fn tick_reload_timer(
    time: Res<Time>,
    settings: Res<PlumeSettings>,
    mut session: ResMut<RenderSession>,
    mut requests: EventWriter<ReloadRequest>,
) {
    session.timer += time.delta_secs();
    if session.timer >= settings.update_interval_secs {
        session.timer = 0.0;
        requests.write(ReloadRequest);
    }
}

/// Force a reload between timer ticks.
pub fn manual_reload_trigger(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut requests: EventWriter<ReloadRequest>,
) {
    if keyboard.just_pressed(KeyCode::KeyL) {
        info!("Manual dataset reload requested");
        requests.write(ReloadRequest);
    }
}

/// Execute one render pass when a reload is pending.
///
/// Previous points are despawned unconditionally before the load, so a failed
/// load leaves an empty scene rather than a stale one, and the set of live
/// points always matches the most recently loaded grid. The file index only
/// advances on success; a broken file is retried on the next pass.
pub fn run_reload_pass(
    mut commands: Commands,
    mut requests: EventReader<ReloadRequest>,
    settings: Res<PlumeSettings>,
    mut session: ResMut<RenderSession>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    point_assets: Res<PointAssets>,
    existing: Query<Entity, With<ConcentrationPoint>>,
    camera: Query<&GlobalTransform, With<ViewportCamera>>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();

    despawn_all_points(&mut commands, &existing, &mut session);

    let path = settings.dataset_path(session.file_index);
    let grid = match load_concentration_grid(&path) {
        Ok(grid) => grid,
        Err(err) => {
            error!("Abandoning render pass: {err}");
            return;
        }
    };

    let camera_position = camera
        .single()
        .ok()
        .map(|transform| transform.translation());
    if camera_position.is_none() && !session.camera_warning_issued {
        warn!("No viewport camera found; rendering at full detail");
        session.camera_warning_issued = true;
    }

    let mut spawned = 0;
    for (x, z, concentration) in grid.iter_nonzero() {
        let world_x = x as f32;
        let world_z = z as f32;
        let cell = cell_for_world(world_x, world_z);

        let lod = match camera_position {
            Some(position) => {
                let cell_centre = Vec3::new(world_x, 0.0, world_z);
                lod_factor(position.distance(cell_centre))
            }
            None => 1.0,
        };
        let count = point_count(concentration, settings.concentration_scale, lod);

        spawn_cell_points(
            &mut commands,
            &mut materials,
            &point_assets,
            &settings,
            &mut session,
            cell,
            world_x,
            world_z,
            concentration,
            count,
        );
        spawned += count;
    }

    info!(
        "Rendered {} points across {} cells from {}",
        spawned,
        session.active_cells.len(),
        path.display()
    );
    session.advance_file_index(settings.file_count);
}
