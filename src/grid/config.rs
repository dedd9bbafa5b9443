//! Grid dimensions

use serde::{Deserialize, Serialize};

use super::error::GridError;
use super::types::{GridRect, GridSize};

/// Default number of columns on a slide grid
pub const GRID_COLUMNS: u32 = 12;

/// Default number of rows on a slide grid
pub const GRID_ROWS: u32 = 12;

/// Smallest supported grid edge
pub const MIN_GRID_EDGE: u32 = 2;

/// Largest supported grid edge
pub const MAX_GRID_EDGE: u32 = 64;

/// The addressable placement space every geometry function works against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGridSpec")]
pub struct GridSpec {
    columns: u32,
    rows: u32,
}

#[derive(Deserialize)]
struct RawGridSpec {
    columns: u32,
    rows: u32,
}

impl TryFrom<RawGridSpec> for GridSpec {
    type Error = GridError;

    fn try_from(raw: RawGridSpec) -> Result<Self, Self::Error> {
        GridSpec::new(raw.columns, raw.rows)
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            columns: GRID_COLUMNS,
            rows: GRID_ROWS,
        }
    }
}

impl GridSpec {
    /// Create a grid with explicit dimensions
    pub fn new(columns: u32, rows: u32) -> Result<Self, GridError> {
        let valid = MIN_GRID_EDGE..=MAX_GRID_EDGE;
        if !valid.contains(&columns) || !valid.contains(&rows) {
            return Err(GridError::InvalidDimensions { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// The rectangle covering the whole grid
    pub fn full_rect(&self) -> GridRect {
        GridRect::new(0, 0, self.columns, self.rows)
    }

    /// Check that a rectangle is non-empty and lies entirely on the grid
    pub fn in_bounds(&self, rect: &GridRect) -> bool {
        rect.size().is_valid() && rect.right() <= self.columns && rect.bottom() <= self.rows
    }

    /// Check whether a rectangle of this size fits the grid anywhere
    pub fn fits(&self, size: GridSize) -> bool {
        size.is_valid() && size.w <= self.columns && size.h <= self.rows
    }

    /// Total number of cells
    pub fn cell_count(&self) -> u32 {
        self.columns * self.rows
    }
}
