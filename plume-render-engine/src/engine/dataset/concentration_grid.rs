use serde::Deserialize;

use crate::engine::dataset::DatasetError;

/// On-disk shape of a dataset file: one named 2D variable plus its declared
/// dimensions. Kept separate from [`ConcentrationGrid`] so validation sits
/// between parsing and use.
#[derive(Debug, Clone, Deserialize)]
pub struct GridDocument {
    pub name: String,
    pub shape: [usize; 2],
    pub values: Vec<Vec<f32>>,
}

/// A validated concentration grid. Indexed `(x, z)`; row-major storage.
/// Read-only once built — a reload replaces the whole grid.
#[derive(Debug, Clone)]
pub struct ConcentrationGrid {
    dim_x: usize,
    dim_z: usize,
    values: Vec<f32>,
}

impl ConcentrationGrid {
    /// Validate a parsed document: variable name, declared shape against the
    /// actual rows, and non-negativity of every value.
    pub fn from_document(document: GridDocument) -> Result<Self, DatasetError> {
        if document.name != constants::dataset::DATASET_VARIABLE_NAME {
            return Err(DatasetError::VariableName {
                expected: constants::dataset::DATASET_VARIABLE_NAME.to_string(),
                found: document.name,
            });
        }

        let [dim_x, dim_z] = document.shape;
        if document.values.len() != dim_x {
            return Err(DatasetError::RowCountMismatch {
                declared: document.shape,
                rows: document.values.len(),
            });
        }

        // The declared shape is untrusted input; every row is checked against
        // it before any allocation is sized from it.
        for (x, row) in document.values.iter().enumerate() {
            if row.len() != dim_z {
                return Err(DatasetError::RowLengthMismatch {
                    declared: document.shape,
                    row: x,
                    len: row.len(),
                });
            }
            for (z, &value) in row.iter().enumerate() {
                if value < 0.0 {
                    return Err(DatasetError::NegativeValue { x, z, value });
                }
            }
        }

        let values = document.values.into_iter().flatten().collect();
        Ok(Self {
            dim_x,
            dim_z,
            values,
        })
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.dim_x, self.dim_z)
    }

    pub fn value(&self, x: usize, z: usize) -> f32 {
        self.values[x * self.dim_z + z]
    }

    /// Every `(x, z, concentration)` with a nonzero concentration, in row
    /// order. Zero cells never reach the renderer.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        (0..self.dim_x)
            .flat_map(move |x| (0..self.dim_z).map(move |z| (x, z, self.value(x, z))))
            .filter(|&(_, _, value)| value != 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(values: Vec<Vec<f32>>) -> GridDocument {
        let shape = [values.len(), values.first().map_or(0, Vec::len)];
        GridDocument {
            name: constants::dataset::DATASET_VARIABLE_NAME.to_string(),
            shape,
            values,
        }
    }

    #[test]
    fn indexing_matches_rows() {
        let grid =
            ConcentrationGrid::from_document(document(vec![vec![0.0, 1.0], vec![2.0, 3.0]]))
                .unwrap();
        assert_eq!(grid.value(0, 0), 0.0);
        assert_eq!(grid.value(0, 1), 1.0);
        assert_eq!(grid.value(1, 0), 2.0);
        assert_eq!(grid.value(1, 1), 3.0);
    }

    #[test]
    fn iter_nonzero_skips_zero_cells() {
        let grid =
            ConcentrationGrid::from_document(document(vec![vec![0.0, 0.5], vec![0.0, 0.0]]))
                .unwrap();
        let cells: Vec<_> = grid.iter_nonzero().collect();
        assert_eq!(cells, vec![(0, 1, 0.5)]);
    }

    #[test]
    fn huge_declared_shape_is_an_error_not_a_panic() {
        let grid = ConcentrationGrid::from_document(GridDocument {
            name: constants::dataset::DATASET_VARIABLE_NAME.to_string(),
            shape: [1, usize::MAX],
            values: vec![vec![0.0]],
        });
        assert!(matches!(
            grid,
            Err(DatasetError::RowLengthMismatch { row: 0, len: 1, .. })
        ));
    }

    #[test]
    fn all_zero_grid_yields_no_cells() {
        let grid =
            ConcentrationGrid::from_document(document(vec![vec![0.0; 3]; 3])).unwrap();
        assert_eq!(grid.iter_nonzero().count(), 0);
    }
}
