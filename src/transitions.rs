//! Weighted transition tables between terrain kinds
//!
//! Each base kind splits the draw range `[0, DRAW_RANGE)` into contiguous
//! sub-ranges, one per successor it can produce. The order of the sub-ranges
//! is part of the table: Rough, Desert, Hills, Mountains and Marsh open with
//! Depression and close with Pond.

use crate::terrain::{BaseKind, Successor, TerrainCell};

use BaseKind::*;
use Successor::{Base, Depression as Dep, Pond};

/// Draws are uniform over `0..DRAW_RANGE`.
pub const DRAW_RANGE: u8 = 20;

/// Ordered `(successor, width)` sub-ranges of one base kind.
pub type Partition = &'static [(Successor, u8)];

#[rustfmt::skip]
const PLAIN: Partition = &[
    (Base(Plain), 11), (Base(Scrub), 1), (Base(Forest), 1), (Base(Rough), 1),
    (Base(Desert), 1), (Base(Hills), 1), (Base(Mountains), 1), (Pond, 1), (Dep, 2),
];

#[rustfmt::skip]
const SCRUB: Partition = &[
    (Base(Plain), 3), (Base(Scrub), 7), (Base(Forest), 2), (Base(Rough), 1),
    (Base(Hills), 1), (Base(Mountains), 1), (Base(Marsh), 1), (Pond, 1), (Dep, 3),
];

#[rustfmt::skip]
const FOREST: Partition = &[
    (Base(Plain), 1), (Base(Scrub), 3), (Base(Forest), 10), (Base(Rough), 1),
    (Base(Hills), 1), (Base(Mountains), 1), (Base(Marsh), 1), (Pond, 1), (Dep, 1),
];

#[rustfmt::skip]
const ROUGH: Partition = &[
    (Dep, 1), (Base(Plain), 2), (Base(Scrub), 2), (Base(Forest), 1), (Base(Rough), 3),
    (Base(Desert), 2), (Base(Hills), 5), (Base(Mountains), 2), (Base(Marsh), 1), (Pond, 1),
];

#[rustfmt::skip]
const DESERT: Partition = &[
    (Dep, 1), (Base(Plain), 3), (Base(Scrub), 2), (Base(Rough), 3), (Base(Desert), 6),
    (Base(Hills), 1), (Base(Mountains), 2), (Base(Marsh), 1), (Pond, 1),
];

#[rustfmt::skip]
const HILLS: Partition = &[
    (Dep, 1), (Base(Plain), 1), (Base(Scrub), 2), (Base(Forest), 2), (Base(Rough), 2),
    (Base(Desert), 1), (Base(Hills), 6), (Base(Mountains), 2), (Base(Marsh), 1), (Pond, 2),
];

#[rustfmt::skip]
const MOUNTAINS: Partition = &[
    (Dep, 1), (Base(Plain), 1), (Base(Scrub), 1), (Base(Forest), 1), (Base(Rough), 2),
    (Base(Desert), 1), (Base(Hills), 4), (Base(Mountains), 8), (Pond, 1),
];

#[rustfmt::skip]
const MARSH: Partition = &[
    (Dep, 1), (Base(Plain), 2), (Base(Scrub), 2), (Base(Forest), 2), (Base(Rough), 1),
    (Base(Hills), 1), (Base(Marsh), 7), (Pond, 4),
];

/// Sub-ranges of a base kind, lowest draws first.
pub fn partition(kind: BaseKind) -> Partition {
    match kind {
        Plain => PLAIN,
        Scrub => SCRUB,
        Forest => FOREST,
        Rough => ROUGH,
        Desert => DESERT,
        Hills => HILLS,
        Mountains => MOUNTAINS,
        Marsh => MARSH,
    }
}

/// Number of draws out of `DRAW_RANGE` that turn `kind` into `target`.
pub fn weight(kind: BaseKind, target: Successor) -> u8 {
    partition(kind)
        .iter()
        .filter(|(successor, _)| *successor == target)
        .map(|&(_, width)| width)
        .sum()
}

/// Successor selected by `draw` in `kind`'s partition.
///
/// Draws outside the range are clamped to the last sub-range.
pub fn successor(kind: BaseKind, draw: u8) -> Successor {
    let ranges = partition(kind);
    let mut upper = 0u8;
    for &(next, width) in ranges {
        upper += width;
        if draw < upper {
            return next;
        }
    }
    ranges[ranges.len() - 1].0
}

/// The half-open draw range mapped to `target` in `kind`'s partition.
/// Empty when `kind` never produces `target`.
pub fn draw_span(kind: BaseKind, target: Successor) -> std::ops::Range<u8> {
    let mut lower = 0u8;
    for &(next, width) in partition(kind) {
        if next == target {
            return lower..lower + width;
        }
        lower += width;
    }
    lower..lower
}

/// Cell produced from `parent` by `draw`, applying delegation for derived cells.
pub fn next_cell(parent: &TerrainCell, draw: u8) -> TerrainCell {
    let kind = parent.effective_kind();
    TerrainCell::spawn(successor(kind, draw), kind)
}
