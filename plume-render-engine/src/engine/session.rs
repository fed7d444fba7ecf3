use std::collections::HashSet;

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use crate::engine::scene::grid::CellIndex;

/// Mutable per-session render state. Everything the reload pass touches lives
/// here rather than in ambient globals: the dataset cursor, the reload timer,
/// the cells currently holding points, and the scatter RNG.
#[derive(Resource)]
pub struct RenderSession {
    /// Index of the next dataset file, cycling `0..file_count`.
    pub file_index: usize,
    /// Seconds accumulated since the last automatic reload.
    pub timer: f32,
    /// Cells that received points in the most recent pass.
    pub active_cells: HashSet<CellIndex>,
    /// Seeded so point scatter reproduces across runs with the same settings.
    pub rng: ChaCha12Rng,
    /// The missing-camera warning is logged once per session, not per pass.
    pub camera_warning_issued: bool,
}

impl RenderSession {
    pub fn new(seed: u64) -> Self {
        Self {
            file_index: 0,
            timer: 0.0,
            active_cells: HashSet::new(),
            rng: ChaCha12Rng::seed_from_u64(seed),
            camera_warning_issued: false,
        }
    }

    /// Move the dataset cursor to the next file in the cycle. `file_count` is
    /// validated nonzero at settings load; a hand-built settings struct with
    /// zero files must still not panic the frame loop.
    pub fn advance_file_index(&mut self, file_count: usize) {
        self.file_index = (self.file_index + 1) % file_count.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_index_cycles_back_to_start() {
        let mut session = RenderSession::new(0);
        for _ in 0..12 {
            session.advance_file_index(12);
        }
        assert_eq!(session.file_index, 0);
    }

    #[test]
    fn zero_file_count_does_not_panic_the_cursor() {
        let mut session = RenderSession::new(0);
        session.advance_file_index(0);
        assert_eq!(session.file_index, 0);
    }

    #[test]
    fn same_seed_reproduces_the_scatter_stream() {
        use rand::Rng;

        let mut a = RenderSession::new(7);
        let mut b = RenderSession::new(7);
        for _ in 0..32 {
            let x: f32 = a.rng.random_range(-5.0..=5.0);
            let y: f32 = b.rng.random_range(-5.0..=5.0);
            assert_eq!(x, y);
        }
    }
}
