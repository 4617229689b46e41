//! Terrain propagation over the hex grid
//!
//! Cells are filled in row-major order. Each new cell picks one already
//! generated neighbor as its parent and samples the parent's transition table.
//!
//! ```text
//!      ___
//!  ___/0,1\___
//! /0,0\___/0,2\
//! \___/   \___/
//! ```
//!
//! Odd columns sit half a hex higher, so they also border the row above on
//! both diagonals.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::draws::{DrawSource, RandomDraws};
use crate::hexmap::TerrainGrid;
use crate::seeds::cell_seed;
use crate::terrain::TerrainCell;
use crate::transitions;

/// Default map height in hexes.
pub const DEFAULT_HEIGHT: usize = 29;
/// Default map width in hexes. A hex step across is about 15% wider than a
/// step down, so this approximates a square area.
pub const DEFAULT_WIDTH: usize = 33;

/// Already generated neighbors of `(row, col)` eligible as its parent.
pub fn candidate_parents(row: usize, col: usize, width: usize) -> Vec<(usize, usize)> {
    let mut result = Vec::with_capacity(4);

    if row == 0 && col == 0 {
        return result;
    }
    if row == 0 {
        result.push((0, col - 1));
        return result;
    }
    if col == 0 {
        result.push((row - 1, 0));
        return result;
    }

    result.push((row, col - 1));
    result.push((row - 1, col));
    if col % 2 == 1 {
        result.push((row - 1, col - 1));
        if col + 1 < width {
            result.push((row - 1, col + 1));
        }
    }
    result
}

/// Sample a successor from `parent`, delegating ponds and depressions to their origin.
pub fn sample<D: DrawSource + ?Sized>(parent: &TerrainCell, draws: &mut D) -> TerrainCell {
    transitions::next_cell(parent, draws.terrain_draw())
}

/// Pick one of `candidates` uniformly and sample it.
///
/// An empty candidate set falls back to Plain with a warning.
pub fn sample_from_candidates<D: DrawSource + ?Sized>(
    grid: &TerrainGrid,
    row: usize,
    col: usize,
    candidates: &[(usize, usize)],
    draws: &mut D,
) -> TerrainCell {
    let parent = match candidates.len() {
        0 => {
            log::warn!(
                "No candidate parent for hex ({}, {}), defaulting to Plain",
                row,
                col
            );
            return TerrainCell::PLAIN;
        }
        1 => candidates[0],
        n => candidates[draws.pick(n)],
    };
    sample(grid.get(parent.0, parent.1), draws)
}

/// Generate the value of `(row, col)` from its already built neighbors.
pub fn generate_cell<D: DrawSource + ?Sized>(
    grid: &TerrainGrid,
    row: usize,
    col: usize,
    draws: &mut D,
) -> TerrainCell {
    if row == 0 && col == 0 {
        return TerrainCell::PLAIN;
    }
    let candidates = candidate_parents(row, col, grid.width);
    sample_from_candidates(grid, row, col, &candidates, draws)
}

/// Builds terrain grids of fixed dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBuilder {
    pub height: usize,
    pub width: usize,
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}

impl GridBuilder {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Build the grid in row-major order, consuming `draws` strictly in
    /// construction order.
    pub fn build<D: DrawSource + ?Sized>(&self, draws: &mut D) -> TerrainGrid {
        let mut grid = TerrainGrid::new_with(self.height, self.width, TerrainCell::PLAIN);

        for row in 0..self.height {
            for col in 0..self.width {
                let cell = generate_cell(&grid, row, col, draws);
                grid.set(row, col, cell);
            }
        }

        log::debug!("Built {}x{} hex grid", self.height, self.width);
        grid
    }

    /// Build in row-major order where each cell draws from its own stream
    /// seeded by `cell_seed(base, row, col, width)`.
    ///
    /// Single-threaded reference for `build_parallel`.
    pub fn build_per_cell(&self, base: u64) -> TerrainGrid {
        let mut grid = TerrainGrid::new_with(self.height, self.width, TerrainCell::PLAIN);

        for row in 0..self.height {
            for col in 0..self.width {
                let mut draws = self.cell_draws(base, row, col);
                let cell = generate_cell(&grid, row, col, &mut draws);
                grid.set(row, col, cell);
            }
        }
        grid
    }

    /// Build in wavefronts on the rayon pool.
    ///
    /// Wavefront `k` holds the cells with `2 * row + col == k`; every candidate
    /// parent lies on an earlier wavefront. Cells draw from per-cell streams,
    /// so the result matches `build_per_cell` for any thread count.
    pub fn build_parallel(&self, base: u64) -> TerrainGrid {
        let mut grid = TerrainGrid::new_with(self.height, self.width, TerrainCell::PLAIN);
        if grid.is_empty() {
            return grid;
        }

        let wavefronts = 2 * (self.height - 1) + self.width;
        for wave in 0..wavefronts {
            let cells = self.wavefront(wave);

            let generated: Vec<(usize, usize, TerrainCell)> = cells
                .into_par_iter()
                .map(|(row, col)| {
                    let mut draws = self.cell_draws(base, row, col);
                    (row, col, generate_cell(&grid, row, col, &mut draws))
                })
                .collect();

            for (row, col, cell) in generated {
                grid.set(row, col, cell);
            }
        }

        log::debug!(
            "Built {}x{} hex grid in {} wavefronts",
            self.height,
            self.width,
            wavefronts
        );
        grid
    }

    /// Cells with `2 * row + col == wave`.
    fn wavefront(&self, wave: usize) -> Vec<(usize, usize)> {
        (0..self.height)
            .take_while(|row| 2 * row <= wave)
            .map(|row| (row, wave - 2 * row))
            .filter(|&(_, col)| col < self.width)
            .collect()
    }

    fn cell_draws(&self, base: u64, row: usize, col: usize) -> RandomDraws<ChaCha8Rng> {
        let seed = cell_seed(base, row, col, self.width);
        RandomDraws::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draws::ScriptedDraws;
    use crate::hexmap::HexGrid;
    use crate::terrain::{BaseKind, TerrainKind};
    use crate::transitions::DRAW_RANGE;

    fn seeded() -> RandomDraws<ChaCha8Rng> {
        RandomDraws::new(ChaCha8Rng::seed_from_u64(42))
    }

    #[test]
    fn test_candidate_counts() {
        let width = 6;
        assert!(candidate_parents(0, 0, width).is_empty());
        for col in 1..width {
            assert_eq!(candidate_parents(0, col, width), vec![(0, col - 1)]);
        }
        for row in 1..4 {
            assert_eq!(candidate_parents(row, 0, width), vec![(row - 1, 0)]);
            assert_eq!(candidate_parents(row, 2, width).len(), 2);
            assert_eq!(candidate_parents(row, 4, width).len(), 2);
            assert_eq!(candidate_parents(row, 1, width).len(), 4);
            assert_eq!(candidate_parents(row, 3, width).len(), 4);
        }
        // Odd last column loses its northeast neighbor
        assert_eq!(candidate_parents(2, 5, width), vec![(2, 4), (1, 5), (1, 4)]);
    }

    #[test]
    fn test_candidates_precede_cell() {
        let width = 7;
        for row in 0..5 {
            for col in 0..width {
                for (prow, pcol) in candidate_parents(row, col, width) {
                    assert!(prow < row || (prow == row && pcol < col));
                    assert!(pcol < width);
                    // Also precede it in wavefront order
                    assert!(2 * prow + pcol < 2 * row + col);
                }
            }
        }
    }

    #[test]
    fn test_origin_is_plain() {
        for (height, width) in [(1, 1), (3, 4), (29, 33)] {
            let grid = GridBuilder::new(height, width).build(&mut seeded());
            assert_eq!(*grid.get(0, 0), TerrainCell::PLAIN);
            assert_eq!(grid.len(), height * width);
        }
    }

    #[test]
    fn test_single_cell_map() {
        let mut draws = ScriptedDraws::default();
        let grid = GridBuilder::new(1, 1).build(&mut draws);
        assert_eq!(grid, HexGrid::new_with(1, 1, TerrainCell::PLAIN));
        assert_eq!(draws.draws_consumed(), 0);
    }

    #[test]
    fn test_draw_19_on_plain_spawns_depression() {
        let mut draws = ScriptedDraws::from_draws(vec![19, 0]);
        let grid = GridBuilder::new(1, 3).build(&mut draws);

        let depression = *grid.get(0, 1);
        assert_eq!(depression.kind(), TerrainKind::Depression);
        assert_eq!(depression.origin(), Some(BaseKind::Plain));

        // Depression delegates to Plain's row: draw 0 is Plain
        assert_eq!(*grid.get(0, 2), TerrainCell::PLAIN);
        assert_eq!(draws.draws_consumed(), 2);
    }

    #[test]
    fn test_delegation_law() {
        let pond = TerrainCell::Pond { origin: BaseKind::Forest };
        let forest = TerrainCell::Base(BaseKind::Forest);
        let sequence: Vec<u8> = (0..DRAW_RANGE).collect();

        let mut a = ScriptedDraws::from_draws(sequence.clone());
        let mut b = ScriptedDraws::from_draws(sequence);
        for _ in 0..DRAW_RANGE {
            assert_eq!(sample(&pond, &mut a), sample(&forest, &mut b));
        }
    }

    #[test]
    fn test_origin_never_derived() {
        let grid = GridBuilder::new(29, 33).build(&mut seeded());
        for (_, _, cell) in grid.iter() {
            match cell.origin() {
                Some(origin) => {
                    assert!(cell.kind().is_derived());
                    assert!(!TerrainKind::from(origin).is_derived());
                }
                None => assert!(!cell.kind().is_derived()),
            }
        }
    }

    #[test]
    fn test_parent_pick_follows_script() {
        // (1,1) has candidates [(1,0), (0,1), (0,0), (0,2)]; pick index 1 -> (0,1)
        let mut draws = ScriptedDraws::new(vec![19, 0, 0, 0], vec![1]);
        let grid = GridBuilder::new(2, 3).build(&mut draws);
        // (0,1) is a Depression of Plain, so (1,1) samples Plain's row
        assert_eq!(grid.get(0, 1).kind(), TerrainKind::Depression);
        assert_eq!(*grid.get(1, 1), TerrainCell::PLAIN);
    }

    #[test]
    fn test_empty_candidates_default_to_plain() {
        let grid = TerrainGrid::new_with(2, 2, TerrainCell::Base(BaseKind::Marsh));
        let mut draws = ScriptedDraws::from_draws(vec![19]);
        let cell = sample_from_candidates(&grid, 1, 1, &[], &mut draws);
        assert_eq!(cell, TerrainCell::PLAIN);
        assert_eq!(draws.draws_consumed(), 0);
    }

    #[test]
    fn test_same_draws_same_grid() {
        let builder = GridBuilder::new(12, 15);
        let a = builder.build(&mut seeded());
        let b = builder.build(&mut seeded());
        assert_eq!(a, b);

        let script: Vec<u8> = (0..97).map(|i| (i * 7 % 20) as u8).collect();
        let picks: Vec<usize> = (0..31).map(|i| i % 4).collect();
        let c = builder.build(&mut ScriptedDraws::new(script.clone(), picks.clone()));
        let d = builder.build(&mut ScriptedDraws::new(script, picks));
        assert_eq!(c, d);
    }

    #[test]
    fn test_terrain_spreads() {
        // Most rows favor their own kind, so matching west neighbors should
        // beat one in eight.
        let grid = GridBuilder::new(29, 33).build(&mut seeded());
        let mut same = 0;
        let mut total = 0;
        for (row, col, cell) in grid.iter() {
            if col > 0 {
                total += 1;
                if grid.get(row, col - 1).kind() == cell.kind() {
                    same += 1;
                }
            }
        }
        assert!(same * 8 > total, "only {} of {} neighbors match", same, total);
    }

    #[test]
    fn test_parallel_matches_per_cell_reference() {
        for (height, width) in [(1, 1), (1, 9), (9, 1), (7, 8), (29, 33)] {
            let builder = GridBuilder::new(height, width);
            let reference = builder.build_per_cell(99);
            let parallel = builder.build_parallel(99);
            assert_eq!(reference, parallel, "{}x{}", height, width);
            assert_eq!(*parallel.get(0, 0), TerrainCell::PLAIN);
        }
    }

    #[test]
    fn test_wavefronts_cover_every_cell_once() {
        let builder = GridBuilder::new(5, 6);
        let mut seen = HexGrid::new_with(5, 6, 0u8);
        for wave in 0..2 * (5 - 1) + 6 {
            for (row, col) in builder.wavefront(wave) {
                let count = *seen.get(row, col);
                seen.set(row, col, count + 1);
            }
        }
        assert!(seen.iter().all(|(_, _, &count)| count == 1));
    }

    #[test]
    fn test_empty_dimensions() {
        assert!(GridBuilder::new(0, 5).build_parallel(1).is_empty());
        assert!(GridBuilder::new(3, 0).build(&mut seeded()).is_empty());
    }
}
