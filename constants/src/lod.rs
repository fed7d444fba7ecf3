/// Level-of-detail band: cells closer to the camera than `max_distance` metres
/// render `factor` of their full point count.
pub struct LodBand {
    pub max_distance: f32,
    pub factor: f32,
}

/// Bands are checked in order; the first match wins.
pub const LOD_BANDS: &[LodBand] = &[
    LodBand {
        max_distance: 100.0,
        factor: 1.0,
    },
    LodBand {
        max_distance: 300.0,
        factor: 0.5,
    },
];

/// Detail factor for cells beyond every band.
pub const DISTANT_LOD_FACTOR: f32 = 0.1;
