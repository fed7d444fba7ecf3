//! Spawning and removal of concentration point primitives.

use bevy::prelude::*;
use rand::Rng;

use crate::engine::scene::colour::concentration_to_colour;
use crate::engine::scene::grid::{CellIndex, cell_bounds_around};
use crate::engine::session::RenderSession;
use crate::engine::settings::PlumeSettings;

/// Marker for one rendered concentration sphere, tagged with its owning cell
/// and its index within that cell's cluster.
#[derive(Component)]
pub struct ConcentrationPoint {
    pub cell: CellIndex,
    pub index: usize,
}

/// Shared mesh handle for every point sphere; one mesh, many materials.
#[derive(Resource)]
pub struct PointAssets {
    pub sphere: Handle<Mesh>,
}

pub fn setup_point_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    settings: Res<PlumeSettings>,
) {
    let sphere = meshes.add(Sphere::new(settings.point_radius));
    commands.insert_resource(PointAssets { sphere });
}

/// Scatter `count` points uniformly over the cell footprint around the sampled
/// world position, all sharing one colour derived from the concentration.
/// Records the cell as active in the session.
#[allow(clippy::too_many_arguments)]
pub fn spawn_cell_points(
    commands: &mut Commands,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    point_assets: &PointAssets,
    settings: &PlumeSettings,
    session: &mut RenderSession,
    cell: CellIndex,
    world_x: f32,
    world_z: f32,
    concentration: f32,
    count: usize,
) {
    let colour = concentration_to_colour(concentration, settings.max_concentration);
    let material = materials.add(StandardMaterial {
        base_color: colour,
        unlit: true,
        ..default()
    });

    let (min_x, max_x, min_z, max_z) = cell_bounds_around(world_x, world_z);
    for index in 0..count {
        let x = session.rng.random_range(min_x..=max_x);
        let z = session.rng.random_range(min_z..=max_z);
        commands.spawn((
            Mesh3d(point_assets.sphere.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(Vec3::new(x, 0.0, z)),
            Visibility::Visible,
            ConcentrationPoint { cell, index },
        ));
    }

    session.active_cells.insert(cell);
}

/// Remove every live point primitive and forget the active cells. Despawning
/// by marker query removes exactly the set of spawned points, independent of
/// how many each cell held.
pub fn despawn_all_points(
    commands: &mut Commands,
    existing: &Query<Entity, With<ConcentrationPoint>>,
    session: &mut RenderSession,
) {
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }
    session.active_cells.clear();
}
