//! ASCII occupancy map of a layout
//!
//! One line per grid row, one character per cell. Empty cells are `.`, the
//! element at list index `i` is drawn with the `i`-th letter (`a`..`z` then
//! `A`..`Z`, `?` beyond that) and cells covered more than once are `#`.

use crate::grid::{GridSpec, Occupant};

const EMPTY: char = '.';
const OVERLAP: char = '#';
const UNNAMED: char = '?';

/// Glyph used for the element at `index`
pub fn glyph(index: usize) -> char {
    match index {
        0..=25 => (b'a' + index as u8) as char,
        26..=51 => (b'A' + (index - 26) as u8) as char,
        _ => UNNAMED,
    }
}

/// Render the occupancy map; cells outside the grid are clipped
pub fn render<T: Occupant>(grid: &GridSpec, elements: &[T]) -> String {
    let columns = grid.columns() as usize;
    let rows = grid.rows() as usize;
    let mut cells = vec![EMPTY; columns * rows];

    for (index, element) in elements.iter().enumerate() {
        let Some(rect) = element.rect().intersection(&grid.full_rect()) else {
            continue;
        };
        for cell in rect.cells() {
            let slot = &mut cells[cell.y as usize * columns + cell.x as usize];
            *slot = if *slot == EMPTY { glyph(index) } else { OVERLAP };
        }
    }

    let mut out = String::with_capacity((columns + 1) * rows);
    for row in cells.chunks(columns) {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// Legend lines `a  title-1 {x: 0, y: 0, w: 12, h: 2}`, one per element
pub fn legend<T: Occupant>(elements: &[T]) -> String {
    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            format!("{}  {} {}\n", glyph(index), element.occupant_id(), element.rect())
        })
        .collect()
}
