pub mod dataset;
pub mod grid;
pub mod lod;
pub mod render_settings;
