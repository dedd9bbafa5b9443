//! Collision detection between element rectangles

use log::debug;
use serde::{Deserialize, Serialize};

use super::config::GridSpec;
use super::search::find_free_position;
use super::types::{GridPosition, GridRect};
use super::Occupant;

/// Outcome of checking a candidate rectangle against a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollisionResult {
    pub has_collision: bool,
    /// First free position for the candidate's size, when one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_position: Option<GridPosition>,
}

impl CollisionResult {
    pub fn clear() -> Self {
        Self {
            has_collision: false,
            suggested_position: None,
        }
    }

    pub fn collision(suggested_position: Option<GridPosition>) -> Self {
        Self {
            has_collision: true,
            suggested_position,
        }
    }
}

/// Axis-aligned overlap test; rectangles that only share an edge do not overlap
pub fn overlaps(a: &GridRect, b: &GridRect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Elements that take part in a comparison once `exclude_id` is removed
pub(crate) fn others<'a, T: Occupant>(
    existing: &'a [T],
    exclude_id: Option<&'a str>,
) -> impl Iterator<Item = &'a T> + 'a {
    existing
        .iter()
        .filter(move |e| exclude_id.map_or(true, |id| e.occupant_id() != id))
}

/// Check a candidate rectangle against a layout
///
/// The element named by `exclude_id` is left out of the comparison so that
/// moving or resizing an element never collides with its own prior position.
/// On collision the first free position for the candidate's size is attached
/// as a suggestion; `None` means the grid has no room for it.
pub fn check_collision<T: Occupant>(
    grid: &GridSpec,
    candidate: &GridRect,
    existing: &[T],
    exclude_id: Option<&str>,
) -> CollisionResult {
    let hit = others(existing, exclude_id).find(|e| overlaps(candidate, &e.rect()));

    let Some(hit) = hit else {
        return CollisionResult::clear();
    };

    let suggestion = find_free_position(grid, candidate.size(), existing, exclude_id);
    debug!(
        candidate:% = candidate,
        blocker = hit.occupant_id(),
        suggestion:? = suggestion;
        "Candidate collides"
    );
    CollisionResult::collision(suggestion)
}

/// Ids of every element the candidate overlaps, in layout order
pub fn colliding_ids<'a, T: Occupant>(
    candidate: &GridRect,
    existing: &'a [T],
    exclude_id: Option<&'a str>,
) -> Vec<&'a str> {
    others(existing, exclude_id)
        .filter(|e| overlaps(candidate, &e.rect()))
        .map(|e| e.occupant_id())
        .collect()
}
