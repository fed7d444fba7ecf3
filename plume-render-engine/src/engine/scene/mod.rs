pub mod colour;
pub mod grid;
pub mod lod;
pub mod points;
