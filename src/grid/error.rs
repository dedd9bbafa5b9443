//! Error types for the grid model

use thiserror::Error;

use super::config::{MAX_GRID_EDGE, MIN_GRID_EDGE};

/// Errors that can occur when describing a grid
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// Grid dimensions outside the supported range
    #[error(
        "invalid grid {columns}x{rows}: each edge must be between {min} and {max} cells",
        min = MIN_GRID_EDGE,
        max = MAX_GRID_EDGE
    )]
    InvalidDimensions { columns: u32, rows: u32 },
}

/// Errors that can occur when naming a slot
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlotError {
    /// Slot name outside the closed vocabulary
    #[error("unknown slot '{name}' (valid slots: top, bottom, left, right, full, center)")]
    Unknown { name: String },
}
