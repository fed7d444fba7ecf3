//! Dataset loading for gridded concentration files.
//!
//! A dataset is a JSON document holding one named 2D floating-point variable:
//!
//! ```json
//! { "name": "concentrations", "shape": [150, 150], "values": [[...], ...] }
//! ```
//!
//! Files are named `{stem}_{index:02}.json` with the index cycling through
//! `0..file_count`, one file per reload.

pub mod concentration_grid;

pub use concentration_grid::ConcentrationGrid;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::engine::dataset::concentration_grid::GridDocument;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dataset JSON in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("dataset variable is named {found:?}, expected {expected:?}")]
    VariableName { expected: String, found: String },
    #[error("declared shape {declared:?} does not match {rows} rows of values")]
    RowCountMismatch { declared: [usize; 2], rows: usize },
    #[error("row {row} holds {len} values, declared shape {declared:?}")]
    RowLengthMismatch {
        declared: [usize; 2],
        row: usize,
        len: usize,
    },
    #[error("negative concentration {value} at ({x}, {z})")]
    NegativeValue { x: usize, z: usize, value: f32 },
}

/// Read and validate one concentration grid document.
pub fn load_concentration_grid(path: &Path) -> Result<ConcentrationGrid, DatasetError> {
    let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: GridDocument =
        serde_json::from_str(&content).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    ConcentrationGrid::from_document(document)
}
