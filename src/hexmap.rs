use serde::{Deserialize, Serialize};

use crate::terrain::TerrainCell;

/// A row-major grid of hexes addressed by `(row, col)`.
///
/// Odd columns sit half a hex higher than even columns when drawn.
/// Unlike a world tilemap the grid does not wrap at any edge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexGrid<T> {
    pub height: usize,
    pub width: usize,
    data: Vec<T>,
}

/// The generated terrain map.
pub type TerrainGrid = HexGrid<TerrainCell>;

impl<T: Clone> HexGrid<T> {
    pub fn new_with(height: usize, width: usize, value: T) -> Self {
        Self {
            height,
            width,
            data: vec![value; height * width],
        }
    }
}

impl<T> HexGrid<T> {
    /// Wrap an already populated row-major buffer.
    ///
    /// Returns `None` if the buffer length does not match the dimensions.
    pub fn from_rows(height: usize, width: usize, data: Vec<T>) -> Option<Self> {
        if data.len() != height * width {
            return None;
        }
        Some(Self { height, width, data })
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.data[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let idx = self.index(row, col);
        self.data[idx] = value;
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    /// Iterate over all cells with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width;
        self.data.iter().enumerate().map(move |(idx, val)| {
            let row = idx / width;
            let col = idx % width;
            (row, col, val)
        })
    }
}
