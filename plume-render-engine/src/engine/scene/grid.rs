//! World-grid cell mapping and the demo cell-outline overlay.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::view::NoFrustumCulling;

use constants::grid::{CELL_SIZE, HALF_WORLD_X, HALF_WORLD_Z, WORLD_SIZE_X, WORLD_SIZE_Z};

/// Integer cell coordinates within the world grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex {
    pub i: i32,
    pub j: i32,
}

/// Map world coordinates to the owning grid cell. Pure and deterministic:
/// `i = floor((x + half_world) / cell_size) - floor(world_size / (2 * cell_size))`,
/// symmetrically for `j`.
pub fn cell_for_world(x: f32, z: f32) -> CellIndex {
    let offset_i = (WORLD_SIZE_X / (2.0 * CELL_SIZE)).floor() as i32;
    let offset_j = (WORLD_SIZE_Z / (2.0 * CELL_SIZE)).floor() as i32;
    CellIndex {
        i: ((x + HALF_WORLD_X) / CELL_SIZE).floor() as i32 - offset_i,
        j: ((z + HALF_WORLD_Z) / CELL_SIZE).floor() as i32 - offset_j,
    }
}

/// Square footprint a cell's points scatter over, centred on the sampled world
/// position: `(min_x, max_x, min_z, max_z)`.
pub fn cell_bounds_around(x: f32, z: f32) -> (f32, f32, f32, f32) {
    let half_cell = CELL_SIZE / 2.0;
    (x - half_cell, x + half_cell, z - half_cell, z + half_cell)
}

#[derive(Component)]
pub struct GroundGrid;

/// Spawn a flat line grid outlining the cell boundaries, for the demo viewer.
pub fn spawn_cell_outline_grid(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let grid_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.5),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    let line_count_x = (WORLD_SIZE_X / CELL_SIZE).round() as u32;
    let line_count_z = (WORLD_SIZE_Z / CELL_SIZE).round() as u32;

    let mut vertices: Vec<[f32; 3]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    // Lines at fixed X running along Z, then fixed Z running along X.
    for i in 0..=line_count_x {
        let x = -HALF_WORLD_X + i as f32 * CELL_SIZE;
        push_line(
            &mut vertices,
            &mut indices,
            [x, 0.0, -HALF_WORLD_Z],
            [x, 0.0, HALF_WORLD_Z],
        );
    }
    for j in 0..=line_count_z {
        let z = -HALF_WORLD_Z + j as f32 * CELL_SIZE;
        push_line(
            &mut vertices,
            &mut indices,
            [-HALF_WORLD_X, 0.0, z],
            [HALF_WORLD_X, 0.0, z],
        );
    }

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_indices(bevy::render::mesh::Indices::U32(indices));

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(grid_material),
        Visibility::Visible,
        NoFrustumCulling,
        Transform::IDENTITY,
        GroundGrid,
    ));
}

fn push_line(vertices: &mut Vec<[f32; 3]>, indices: &mut Vec<u32>, from: [f32; 3], to: [f32; 3]) {
    let base = vertices.len() as u32;
    vertices.push(from);
    vertices.push(to);
    indices.extend_from_slice(&[base, base + 1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_cell_zero() {
        // World 150, cell 10: i = floor(75 / 10) - floor(150 / 20) = 7 - 7.
        assert_eq!(cell_for_world(0.0, 0.0), CellIndex { i: 0, j: 0 });
    }

    #[test]
    fn mapping_is_deterministic() {
        for &(x, z) in &[(0.0, 0.0), (12.5, -30.0), (149.0, 149.0), (-75.0, 3.0)] {
            assert_eq!(cell_for_world(x, z), cell_for_world(x, z));
        }
    }

    #[test]
    fn grid_corners_map_symmetrically() {
        assert_eq!(cell_for_world(-75.0, -75.0), CellIndex { i: -7, j: -7 });
        assert_eq!(cell_for_world(149.0, 149.0), CellIndex { i: 15, j: 15 });
    }

    #[test]
    fn adjacent_cells_differ_by_one() {
        let a = cell_for_world(4.9, 0.0);
        let b = cell_for_world(5.0, 0.0);
        assert_eq!(b.i, a.i + 1);
        assert_eq!(b.j, a.j);
    }

    #[test]
    fn footprint_is_centred_on_sample() {
        let (min_x, max_x, min_z, max_z) = cell_bounds_around(20.0, -10.0);
        assert_eq!((min_x, max_x), (15.0, 25.0));
        assert_eq!((min_z, max_z), (-15.0, -5.0));
    }
}
