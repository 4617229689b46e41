//! Seed management for map generation
//!
//! One master seed is split into independent streams so the sequential and
//! parallel builders never share draws.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Seeds for each generation stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapSeeds {
    /// Master seed (used for display/reference)
    pub master: u64,
    /// Single stream consumed by the sequential builder
    pub grid: u64,
    /// Base for the per-cell streams of the parallel builder
    pub cells: u64,
}

impl MapSeeds {
    /// Create seeds from a master seed, deriving all sub-seeds deterministically.
    pub fn from_master(master: u64) -> Self {
        Self {
            master,
            grid: derive_seed(master, "grid"),
            cells: derive_seed(master, "cells"),
        }
    }

    /// Seed of the stream owned by cell `(row, col)`.
    pub fn cell_seed(&self, row: usize, col: usize, width: usize) -> u64 {
        cell_seed(self.cells, row, col, width)
    }
}

impl Default for MapSeeds {
    fn default() -> Self {
        Self::from_master(rand::random())
    }
}

/// Per-cell seed: the base offset by the cell's row-major index.
pub fn cell_seed(base: u64, row: usize, col: usize, width: usize) -> u64 {
    base.wrapping_add((row * width + col) as u64)
}

/// Derive a sub-seed from a master seed and a stream name.
fn derive_seed(master: u64, stream: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    master.hash(&mut hasher);
    stream.hash(&mut hasher);
    hasher.finish()
}

impl std::fmt::Display for MapSeeds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MapSeeds {{ master: {}, grid: {}, cells: {} }}",
            self.master, self.grid, self.cells
        )
    }
}
