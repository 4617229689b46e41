//! Hex terrain map generation library
//!
//! Re-exports modules for use by binaries and tools.

pub mod ascii;
pub mod builder;
pub mod config;
pub mod draws;
pub mod error;
pub mod export;
pub mod hexmap;
pub mod logging;
pub mod seeds;
pub mod terrain;
pub mod transitions;

pub use builder::GridBuilder;
pub use config::{generate_map, MapConfig};
pub use error::{MapError, Result};
pub use hexmap::{HexGrid, TerrainGrid};
pub use terrain::{BaseKind, TerrainCell, TerrainKind};
