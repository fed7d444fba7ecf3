//! Camera-distance level of detail and the point-count heuristic.

use constants::lod::{DISTANT_LOD_FACTOR, LOD_BANDS};

/// Detail factor for a cell at `distance` metres from the viewport camera.
pub fn lod_factor(distance: f32) -> f32 {
    for band in LOD_BANDS {
        if distance < band.max_distance {
            return band.factor;
        }
    }
    DISTANT_LOD_FACTOR
}

/// Number of points a cell renders. Scales with concentration and the LOD
/// factor, never below one so faint cells stay visible.
pub fn point_count(concentration: f32, scale: f32, lod: f32) -> usize {
    ((concentration * scale * lod) as usize).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lod_bands_match_distance() {
        assert_eq!(lod_factor(0.0), 1.0);
        assert_eq!(lod_factor(99.9), 1.0);
        assert_eq!(lod_factor(100.0), 0.5);
        assert_eq!(lod_factor(299.9), 0.5);
        assert_eq!(lod_factor(300.0), 0.1);
        assert_eq!(lod_factor(10_000.0), 0.1);
    }

    #[test]
    fn at_least_one_point_for_any_nonzero_concentration() {
        assert_eq!(point_count(0.001, 50.0, 0.1), 1);
    }

    #[test]
    fn point_count_is_monotonic_in_concentration() {
        let mut last = 0;
        for step in 1..=100 {
            let count = point_count(step as f32 * 0.01, 50.0, 1.0);
            assert!(count >= last);
            last = count;
        }
    }

    #[test]
    fn point_count_truncates_the_product() {
        assert_eq!(point_count(1.0, 50.0, 1.0), 50);
        assert_eq!(point_count(1.0, 50.0, 0.5), 25);
        assert_eq!(point_count(0.99, 50.0, 1.0), 49);
    }
}
