//! Free-position search

use log::trace;

use super::collision::{others, overlaps};
use super::config::GridSpec;
use super::types::{GridPosition, GridRect, GridSize};
use super::Occupant;

/// Find the first position where a rectangle of `size` overlaps nothing
///
/// Positions are scanned row-major: `y` from the top, then `x` from the left,
/// so the first hit is the top-most, then left-most free spot. Elements named
/// by `exclude_id` are ignored. Returns `None` when the size does not fit the
/// grid or every position is blocked.
pub fn find_free_position<T: Occupant>(
    grid: &GridSpec,
    size: GridSize,
    existing: &[T],
    exclude_id: Option<&str>,
) -> Option<GridPosition> {
    if !grid.fits(size) {
        trace!(size:% = size; "Size does not fit the grid");
        return None;
    }

    let occupied: Vec<GridRect> = others(existing, exclude_id).map(|e| e.rect()).collect();

    for y in 0..=grid.rows() - size.h {
        for x in 0..=grid.columns() - size.w {
            let candidate = GridRect::from_parts(GridPosition::new(x, y), size);
            if !occupied.iter().any(|rect| overlaps(&candidate, rect)) {
                trace!(size:% = size, x = x, y = y; "Found free position");
                return Some(candidate.position());
            }
        }
    }

    trace!(size:% = size, occupied = occupied.len(); "Grid exhausted");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(id: &str, x: u32, y: u32, w: u32, h: u32) -> (String, GridRect) {
        (id.to_string(), GridRect::new(x, y, w, h))
    }

    #[test]
    fn test_empty_grid_returns_origin() {
        let grid = GridSpec::default();
        let existing: Vec<(String, GridRect)> = vec![];
        assert_eq!(
            find_free_position(&grid, GridSize::new(4, 4), &existing, None),
            Some(GridPosition::new(0, 0))
        );
    }

    #[test]
    fn test_first_slot_right_of_blocker() {
        let grid = GridSpec::default();
        let existing = vec![placed("a", 0, 0, 6, 6)];
        assert_eq!(
            find_free_position(&grid, GridSize::new(6, 6), &existing, None),
            Some(GridPosition::new(6, 0))
        );
    }

    #[test]
    fn test_row_major_order() {
        let grid = GridSpec::default();
        // Top row blocked except the far right; one free cell at (11, 0)
        let existing = vec![placed("a", 0, 0, 11, 1), placed("b", 0, 1, 12, 1)];
        assert_eq!(
            find_free_position(&grid, GridSize::new(1, 1), &existing, None),
            Some(GridPosition::new(11, 0))
        );
        // Two rows tall cannot use it; first fit is below the blocked band
        assert_eq!(
            find_free_position(&grid, GridSize::new(1, 2), &existing, None),
            Some(GridPosition::new(0, 2))
        );
    }

    #[test]
    fn test_exhausted_grid() {
        let grid = GridSpec::default();
        let existing = vec![
            placed("a", 0, 0, 6, 6),
            placed("b", 6, 0, 6, 6),
            placed("c", 0, 6, 6, 6),
            placed("d", 6, 6, 6, 6),
        ];
        assert_eq!(find_free_position(&grid, GridSize::new(1, 1), &existing, None), None);
    }

    #[test]
    fn test_exclusion_frees_space() {
        let grid = GridSpec::default();
        let existing = vec![placed("a", 0, 0, 12, 12)];
        assert_eq!(
            find_free_position(&grid, GridSize::new(3, 3), &existing, Some("a")),
            Some(GridPosition::new(0, 0))
        );
    }

    #[test]
    fn test_oversized_element() {
        let grid = GridSpec::default();
        let existing: Vec<(String, GridRect)> = vec![];
        assert_eq!(find_free_position(&grid, GridSize::new(13, 1), &existing, None), None);
        assert_eq!(find_free_position(&grid, GridSize::new(0, 1), &existing, None), None);
    }

    #[test]
    fn test_full_size_on_empty_grid() {
        let grid = GridSpec::default();
        let existing: Vec<(String, GridRect)> = vec![];
        assert_eq!(
            find_free_position(&grid, GridSize::new(12, 12), &existing, None),
            Some(GridPosition::new(0, 0))
        );
    }
}
