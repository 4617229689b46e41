//! Terrain kinds and the per-hex cell value
//!
//! Eight base kinds own a transition table. Ponds and depressions are derived:
//! they remember the base kind that spawned them and propagate exactly like it.

use serde::{Deserialize, Serialize};

/// Width of a text label field.
pub const LABEL_WIDTH: usize = 11;

/// Terrain kinds with their own transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseKind {
    Plain,
    Scrub,
    Forest,
    Rough,
    Desert,
    Hills,
    Mountains,
    Marsh,
}

impl BaseKind {
    pub fn all() -> &'static [BaseKind] {
        &[
            BaseKind::Plain,
            BaseKind::Scrub,
            BaseKind::Forest,
            BaseKind::Rough,
            BaseKind::Desert,
            BaseKind::Hills,
            BaseKind::Mountains,
            BaseKind::Marsh,
        ]
    }
}

impl From<BaseKind> for TerrainKind {
    fn from(base: BaseKind) -> Self {
        match base {
            BaseKind::Plain => TerrainKind::Plain,
            BaseKind::Scrub => TerrainKind::Scrub,
            BaseKind::Forest => TerrainKind::Forest,
            BaseKind::Rough => TerrainKind::Rough,
            BaseKind::Desert => TerrainKind::Desert,
            BaseKind::Hills => TerrainKind::Hills,
            BaseKind::Mountains => TerrainKind::Mountains,
            BaseKind::Marsh => TerrainKind::Marsh,
        }
    }
}

/// Every terrain kind a hex can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainKind {
    Plain,
    Scrub,
    Forest,
    Rough,
    Desert,
    Hills,
    Mountains,
    Marsh,
    Pond,
    Depression,
}

impl TerrainKind {
    pub fn all() -> &'static [TerrainKind] {
        &[
            TerrainKind::Plain,
            TerrainKind::Scrub,
            TerrainKind::Forest,
            TerrainKind::Rough,
            TerrainKind::Desert,
            TerrainKind::Hills,
            TerrainKind::Mountains,
            TerrainKind::Marsh,
            TerrainKind::Pond,
            TerrainKind::Depression,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            TerrainKind::Plain => "Plain",
            TerrainKind::Scrub => "Scrub",
            TerrainKind::Forest => "Forest",
            TerrainKind::Rough => "Rough",
            TerrainKind::Desert => "Desert",
            TerrainKind::Hills => "Hills",
            TerrainKind::Mountains => "Mountains",
            TerrainKind::Marsh => "Marsh",
            TerrainKind::Pond => "Pond",
            TerrainKind::Depression => "Depression",
        }
    }

    /// SVG fill color
    pub fn color(&self) -> &'static str {
        match self {
            TerrainKind::Plain => "greenyellow",
            TerrainKind::Scrub => "yellowgreen",
            TerrainKind::Forest => "forestgreen",
            TerrainKind::Rough => "orange",
            TerrainKind::Desert => "lightyellow",
            TerrainKind::Hills => "sandybrown",
            TerrainKind::Mountains => "brown",
            TerrainKind::Marsh => "aquamarine",
            TerrainKind::Pond => "aqua",
            TerrainKind::Depression => "black",
        }
    }

    /// Name padded with spaces to `LABEL_WIDTH`.
    pub fn label(&self) -> String {
        format!("{:<width$}", self.name(), width = LABEL_WIDTH)
    }

    /// The base kind, or `None` for ponds and depressions.
    pub fn as_base(&self) -> Option<BaseKind> {
        match self {
            TerrainKind::Plain => Some(BaseKind::Plain),
            TerrainKind::Scrub => Some(BaseKind::Scrub),
            TerrainKind::Forest => Some(BaseKind::Forest),
            TerrainKind::Rough => Some(BaseKind::Rough),
            TerrainKind::Desert => Some(BaseKind::Desert),
            TerrainKind::Hills => Some(BaseKind::Hills),
            TerrainKind::Mountains => Some(BaseKind::Mountains),
            TerrainKind::Marsh => Some(BaseKind::Marsh),
            TerrainKind::Pond | TerrainKind::Depression => None,
        }
    }

    pub fn is_derived(&self) -> bool {
        self.as_base().is_none()
    }
}

impl std::fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind a transition can produce. Derived outcomes pick up their origin
/// from the cell being sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Successor {
    Base(BaseKind),
    Pond,
    Depression,
}

/// The generated value at one grid position.
///
/// Ponds and depressions hold the base kind whose table they use. Base cells
/// never carry an origin, and an origin is never itself derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainCell {
    Base(BaseKind),
    Pond { origin: BaseKind },
    Depression { origin: BaseKind },
}

impl TerrainCell {
    pub const PLAIN: TerrainCell = TerrainCell::Base(BaseKind::Plain);

    /// Build the cell produced when `successor` is drawn from a cell whose
    /// effective kind is `origin`.
    pub fn spawn(successor: Successor, origin: BaseKind) -> Self {
        match successor {
            Successor::Base(base) => TerrainCell::Base(base),
            Successor::Pond => TerrainCell::Pond { origin },
            Successor::Depression => TerrainCell::Depression { origin },
        }
    }

    pub fn kind(&self) -> TerrainKind {
        match self {
            TerrainCell::Base(base) => (*base).into(),
            TerrainCell::Pond { .. } => TerrainKind::Pond,
            TerrainCell::Depression { .. } => TerrainKind::Depression,
        }
    }

    pub fn origin(&self) -> Option<BaseKind> {
        match self {
            TerrainCell::Base(_) => None,
            TerrainCell::Pond { origin } | TerrainCell::Depression { origin } => Some(*origin),
        }
    }

    /// Kind whose transition table governs propagation from this cell.
    /// This is the only place derived kinds are resolved.
    pub fn effective_kind(&self) -> BaseKind {
        match self {
            TerrainCell::Base(base) => *base,
            TerrainCell::Pond { origin } | TerrainCell::Depression { origin } => *origin,
        }
    }
}

impl Default for TerrainCell {
    fn default() -> Self {
        TerrainCell::PLAIN
    }
}
