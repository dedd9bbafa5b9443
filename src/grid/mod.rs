//! Placement grid geometry
//!
//! This module holds the pure geometry of slide layouts: the grid model,
//! collision detection, the free-position search, named slots and the lint
//! checks. Nothing here mutates its inputs; every function maps borrowed
//! element lists to fresh results.

pub mod collision;
pub mod config;
pub mod error;
pub mod lint;
pub mod search;
pub mod slots;
pub mod types;

pub use collision::{check_collision, colliding_ids, overlaps, CollisionResult};
pub use config::{GridSpec, GRID_COLUMNS, GRID_ROWS};
pub use error::{GridError, SlotError};
pub use lint::{LintCategory, LintWarning};
pub use search::find_free_position;
pub use slots::{place_in_slot, slot_rect, Slot, SlotConvention};
pub use types::*;

/// Anything that occupies a rectangle on the grid under an id
pub trait Occupant {
    fn occupant_id(&self) -> &str;
    fn rect(&self) -> GridRect;
}

impl Occupant for (String, GridRect) {
    fn occupant_id(&self) -> &str {
        &self.0
    }

    fn rect(&self) -> GridRect {
        self.1
    }
}

impl<T: Occupant> Occupant for &T {
    fn occupant_id(&self) -> &str {
        (**self).occupant_id()
    }

    fn rect(&self) -> GridRect {
        (**self).rect()
    }
}
