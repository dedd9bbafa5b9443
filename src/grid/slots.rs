//! Named placement slots
//!
//! Generated content often reasons in qualitative terms ("title on top, image
//! on the left") rather than grid coordinates. A [`Slot`] names such a region
//! and [`slot_rect`] turns it into a concrete rectangle.
//!
//! Convention on a `C x R` grid with a title band of `B` rows:
//!
//! | slot     | rectangle                              | 12 x 12, B = 3 |
//! |----------|----------------------------------------|----------------|
//! | `top`    | `{0, 0, C, B}`                         | `{0, 0, 12, 3}` |
//! | `bottom` | `{0, B, C, R - B}`                     | `{0, 3, 12, 9}` |
//! | `left`   | `{0, B, C/2, R - B}`                   | `{0, 3, 6, 9}`  |
//! | `right`  | `{C/2, B, C - C/2, R - B}`             | `{6, 3, 6, 9}`  |
//! | `full`   | `{0, 0, C, R}`                         | `{0, 0, 12, 12}` |
//! | `center` | `{C/6, R/4, C - 2(C/6), R - 2(R/4)}`   | `{2, 3, 8, 6}`  |
//!
//! `top` never overlaps `bottom`, `left` or `right`, and `left` never
//! overlaps `right`, so the common one- and two-element arrangements land
//! without collisions.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use super::collision::check_collision;
use super::config::GridSpec;
use super::error::SlotError;
use super::types::GridRect;
use super::Occupant;

/// A qualitative placement region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Top,
    Bottom,
    Left,
    Right,
    Full,
    Center,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::Top,
        Slot::Bottom,
        Slot::Left,
        Slot::Right,
        Slot::Full,
        Slot::Center,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Top => "top",
            Slot::Bottom => "bottom",
            Slot::Left => "left",
            Slot::Right => "right",
            Slot::Full => "full",
            Slot::Center => "center",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Slot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == name)
            .ok_or_else(|| SlotError::Unknown { name: s.to_string() })
    }
}

/// How tall the title band is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotConvention {
    /// Rows given to the `top` band; `None` uses a quarter of the grid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub band_rows: Option<u32>,
}

impl SlotConvention {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the height of the `top` band
    pub fn with_band_rows(mut self, rows: u32) -> Self {
        self.band_rows = Some(rows);
        self
    }

    /// Band height for a grid, clamped so the body keeps at least one row
    pub fn band_for(&self, grid: &GridSpec) -> u32 {
        self.band_rows
            .unwrap_or(grid.rows() / 4)
            .clamp(1, grid.rows() - 1)
    }
}

/// Map a slot to its rectangle on `grid`
pub fn slot_rect(grid: &GridSpec, convention: &SlotConvention, slot: Slot) -> GridRect {
    let cols = grid.columns();
    let rows = grid.rows();
    let band = convention.band_for(grid);
    let half = cols / 2;

    match slot {
        Slot::Top => GridRect::new(0, 0, cols, band),
        Slot::Bottom => GridRect::new(0, band, cols, rows - band),
        Slot::Left => GridRect::new(0, band, half, rows - band),
        Slot::Right => GridRect::new(half, band, cols - half, rows - band),
        Slot::Full => grid.full_rect(),
        Slot::Center => {
            let inset_x = cols / 6;
            let inset_y = rows / 4;
            GridRect::new(inset_x, inset_y, cols - 2 * inset_x, rows - 2 * inset_y)
        }
    }
}

/// Map a slot and settle it against an existing layout
///
/// Returns the slot rectangle when it is free, the same size moved to the
/// first free position when it is not, and `None` when nothing fits.
pub fn place_in_slot<T: Occupant>(
    grid: &GridSpec,
    convention: &SlotConvention,
    slot: Slot,
    existing: &[T],
) -> Option<GridRect> {
    let rect = slot_rect(grid, convention, slot);
    let result = check_collision(grid, &rect, existing, None);
    if !result.has_collision {
        return Some(rect);
    }
    let moved = result.suggested_position.map(|position| rect.at(position));
    debug!(slot:% = slot, moved:? = moved; "Slot occupied");
    moved
}
