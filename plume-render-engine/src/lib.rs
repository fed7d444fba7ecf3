//! Plume point-cloud render engine.
//!
//! Periodically loads a gas-concentration grid from a cycling sequence of
//! dataset files and renders every nonzero grid cell as a cluster of small
//! coloured sphere primitives, with camera-distance LOD. Wire
//! [`PlumePointCloudPlugin`] into a Bevy app; the demo viewer binary shows the
//! full setup.

pub mod engine;

pub use engine::PlumePointCloudPlugin;
