//! CostGrid: per-tile traversal costs, scenery occupancy, and coordinate
//! transforms between tile and world space.

use glam::Vec2;
use thiserror::Error;

use broadside_core::constants::MAX_SAIL_COST;

/// Grid access errors. Out-of-bounds indexing is a programming error at the
/// call site and is surfaced loudly rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("tile ({col},{row}) outside {width}x{height} chart")]
    OutOfBounds {
        col: i32,
        row: i32,
        width: u32,
        height: u32,
    },
}

/// One externally parsed map layer: every listed cell gains the layer's
/// cost, and scenery layers additionally occupy the cell for the purposes
/// of cannonball splash detection.
#[derive(Debug, Clone)]
pub struct TileLayer {
    pub cost: u32,
    pub scenery: bool,
    /// Occupied cells as (col, row).
    pub cells: Vec<(u32, u32)>,
}

/// Immutable-per-encounter grid of traversal costs.
///
/// Cost 0 is open water, cost 1 still sailable, and 2 or more impassable.
/// Costs from overlapping layers accumulate additively per tile.
#[derive(Debug, Clone)]
pub struct CostGrid {
    width: u32,
    height: u32,
    tile_width: f32,
    tile_height: f32,
    /// Row-major costs, `costs[row * width + col]`.
    costs: Vec<u32>,
    /// Row-major scenery occupancy (islands, decorations).
    scenery: Vec<bool>,
    /// Enemy spawn points parsed from the map.
    spawns: Vec<Vec2>,
}

impl CostGrid {
    /// An all-zero-cost grid with no scenery and no spawn points.
    pub fn open_water(width: u32, height: u32, tile_width: f32, tile_height: f32) -> Self {
        let cells = (width * height) as usize;
        Self {
            width,
            height,
            tile_width,
            tile_height,
            costs: vec![0; cells],
            scenery: vec![false; cells],
            spawns: Vec::new(),
        }
    }

    /// Build a grid by accumulating layer costs per tile, the way the
    /// external map loader hands them over.
    pub fn from_layers(
        width: u32,
        height: u32,
        tile_width: f32,
        tile_height: f32,
        layers: &[TileLayer],
        spawns: Vec<Vec2>,
    ) -> Self {
        let mut grid = Self::open_water(width, height, tile_width, tile_height);
        grid.spawns = spawns;
        for layer in layers {
            for &(col, row) in &layer.cells {
                if col < width && row < height {
                    let idx = (row * width + col) as usize;
                    grid.costs[idx] += layer.cost;
                    if layer.scenery {
                        grid.scenery[idx] = true;
                    }
                }
            }
        }
        grid
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn tile_size(&self) -> Vec2 {
        Vec2::new(self.tile_width, self.tile_height)
    }

    pub fn spawns(&self) -> &[Vec2] {
        &self.spawns
    }

    /// Translate a world-space position to its tile location by truncating
    /// division. No bounds clamping: callers validate the result.
    pub fn tile_of(&self, world: Vec2) -> (i32, i32) {
        (
            (world.x / self.tile_width) as i32,
            (world.y / self.tile_height) as i32,
        )
    }

    /// Translate a tile location to world space, always offset to the
    /// tile's center point.
    pub fn world_of(&self, col: i32, row: i32) -> Vec2 {
        Vec2::new(
            (col + 1) as f32 * self.tile_width - self.tile_width * 0.5,
            (row + 1) as f32 * self.tile_height - self.tile_height * 0.5,
        )
    }

    /// Traversal cost at a tile, or `OutOfBounds` for invalid indices.
    pub fn cost_at(&self, col: i32, row: i32) -> Result<u32, ChartError> {
        self.index(col, row)
            .map(|idx| self.costs[idx])
            .ok_or(ChartError::OutOfBounds {
                col,
                row,
                width: self.width,
                height: self.height,
            })
    }

    /// Whether a vessel may pass through this tile. Out-of-bounds tiles are
    /// never sailable.
    pub fn sailable(&self, col: i32, row: i32) -> bool {
        self.cost_at(col, row)
            .map(|cost| cost <= MAX_SAIL_COST)
            .unwrap_or(false)
    }

    /// Whether the tile holds island/decoration scenery. Out-of-bounds
    /// tiles hold none, so shots sailing off the chart still splash.
    pub fn has_scenery(&self, col: i32, row: i32) -> bool {
        self.index(col, row)
            .map(|idx| self.scenery[idx])
            .unwrap_or(false)
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return None;
        }
        Some((row as u32 * self.width + col as u32) as usize)
    }
}
