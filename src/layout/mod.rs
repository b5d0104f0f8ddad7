//! Visual layout of the yield on a sheet.

mod tiles;

pub use tiles::{Tile, TileLayout};
