/// World grid geometry. The concentration grid covers a square region centred
/// on the origin; array indices double as world coordinates in metres.
pub const WORLD_SIZE_X: f32 = 150.0;
pub const WORLD_SIZE_Z: f32 = 150.0;

/// Edge length of one grid cell in metres.
pub const CELL_SIZE: f32 = 10.0;

pub const HALF_WORLD_X: f32 = WORLD_SIZE_X / 2.0;
pub const HALF_WORLD_Z: f32 = WORLD_SIZE_Z / 2.0;
