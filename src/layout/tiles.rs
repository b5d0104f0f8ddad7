//! Repeated-tile layout of finished pieces on a sheet.
//!
//! Coordinates are fractions of the sheet (0.0..=1.0 on each axis), origin
//! at the top-left corner. Tiles are placed left to right and wrap to a new
//! row when the next one would cross the right edge.

use crate::config::{EPS, MAX_DRAWN_TILES};
use crate::model::ProductionPlan;
use serde::{Deserialize, Serialize};

/// One finished piece drawn on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Position in placement order.
    pub index: u64,
    /// Left edge (fraction of sheet width).
    pub x: f64,
    /// Top edge (fraction of sheet height).
    pub y: f64,
}

/// Uniform tiles proportioned to the oriented cut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayout {
    /// Tile width as a fraction of sheet width.
    pub tile_width: f64,
    /// Tile height as a fraction of sheet height.
    pub tile_height: f64,
    /// Label shown in each tile, e.g. `21x29.7`.
    pub label: String,
    /// Placed tiles, `best_yield` of them up to `MAX_DRAWN_TILES`.
    pub tiles: Vec<Tile>,
    /// Fewer tiles were placed than the plan yields.
    pub truncated: bool,
}

impl TileLayout {
    /// Lay out `plan.best_yield` tiles, at most `MAX_DRAWN_TILES` of them.
    pub fn from_plan(plan: &ProductionPlan) -> Self {
        let tile_width = proportion(plan.final_cut_width, plan.sheet_width);
        let tile_height = proportion(plan.final_cut_height, plan.sheet_height);

        let drawn = plan.best_yield.min(MAX_DRAWN_TILES);
        let mut tiles = Vec::with_capacity(drawn as usize);
        let (mut x, mut y) = (0.0, 0.0);

        for index in 0..drawn {
            if x > 0.0 && x + tile_width > 1.0 + EPS {
                x = 0.0;
                y += tile_height;
            }
            tiles.push(Tile { index, x, y });
            x += tile_width;
        }

        Self {
            tile_width,
            tile_height,
            label: plan.final_cut().to_string(),
            tiles,
            truncated: drawn < plan.best_yield,
        }
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when nothing fits on the sheet.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of rows used.
    pub fn rows(&self) -> usize {
        let mut rows = 0;
        let mut last_y = f64::NEG_INFINITY;
        for tile in &self.tiles {
            if tile.y > last_y {
                rows += 1;
                last_y = tile.y;
            }
        }
        rows
    }
}

fn proportion(part: f64, whole: f64) -> f64 {
    let ratio = part / whole;
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        0.0
    }
}
