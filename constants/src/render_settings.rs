/// Sphere radius of a single rendered concentration point, in metres.
pub const POINT_RADIUS: f32 = 0.1;

/// Points per unit of concentration at full LOD. Exposed as a setting because
/// datasets at different release rates need different densities.
pub const DEFAULT_CONCENTRATION_SCALE: f32 = 50.0;

/// Concentration mapped to the red end of the colour ramp.
pub const DEFAULT_MAX_CONCENTRATION: f32 = 1.0;

/// Seconds between automatic dataset reloads.
pub const DEFAULT_UPDATE_INTERVAL_SECS: f32 = 1.0;
