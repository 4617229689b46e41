//! Text rendering of the hex map
//!
//! Each grid row becomes two lines of 11-character labels. The first line is
//! shifted right by one field so the labels stagger like the hexes do.

use std::collections::HashMap;

use crate::hexmap::TerrainGrid;
use crate::terrain::{TerrainKind, LABEL_WIDTH};

/// Render the text dump: `2 * height` lines.
pub fn render_text_map(grid: &TerrainGrid) -> String {
    let blank = " ".repeat(LABEL_WIDTH);
    let mut result = String::with_capacity(2 * grid.height * (2 * LABEL_WIDTH * grid.width + 1));

    for row in 0..grid.height {
        for cell in grid.row(row) {
            result.push_str(&blank);
            result.push_str(&cell.kind().label());
        }
        result.push('\n');

        // Lower line starts at column 0, not shifted by one column.
        for cell in grid.row(row) {
            result.push_str(&cell.kind().label());
            result.push_str(&blank);
        }
        result.push('\n');
    }

    result
}

/// Print the text dump to stdout.
pub fn print_text_map(grid: &TerrainGrid) {
    print!("{}", render_text_map(grid));
}

/// Count hexes of each kind.
pub fn terrain_stats(grid: &TerrainGrid) -> HashMap<TerrainKind, usize> {
    let mut stats = HashMap::new();
    for (_, _, cell) in grid.iter() {
        *stats.entry(cell.kind()).or_insert(0) += 1;
    }
    stats
}

/// One line per kind present, most common first.
pub fn stats_summary(grid: &TerrainGrid) -> String {
    let stats = terrain_stats(grid);
    let total = grid.len().max(1);
    let mut counts: Vec<(TerrainKind, usize)> = TerrainKind::all()
        .iter()
        .filter_map(|kind| stats.get(kind).map(|&count| (*kind, count)))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let mut summary = String::new();
    for (kind, count) in counts {
        summary.push_str(&format!(
            "  {} {:>5} ({:.1}%)\n",
            kind.label(),
            count,
            100.0 * count as f64 / total as f64
        ));
    }
    summary
}
