//! Lint engine for detecting layout defects.
//!
//! Checks a finished element list for mechanical issues: rectangles that
//! leave the grid, empty spans, overlapping elements and repeated ids.

use std::collections::HashMap;
use std::fmt;

use super::collision::overlaps;
use super::config::GridSpec;
use super::Occupant;

/// A lint warning about a layout defect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Bounds,
    Size,
    Overlap,
    DuplicateId,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Bounds => write!(f, "bounds"),
            LintCategory::Size => write!(f, "size"),
            LintCategory::Overlap => write!(f, "overlap"),
            LintCategory::DuplicateId => write!(f, "duplicate-id"),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

/// Run all lint checks on a layout.
pub fn check<T: Occupant>(grid: &GridSpec, elements: &[T]) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_sizes(elements, &mut warnings);
    check_bounds(grid, elements, &mut warnings);
    check_duplicate_ids(elements, &mut warnings);
    check_overlaps(elements, &mut warnings);
    warnings
}

/// Display name for an element: its id, or its position in the list when blank.
fn display_name<T: Occupant>(elem: &T, index: usize) -> String {
    if elem.occupant_id().is_empty() {
        format!("<element #{}>", index + 1)
    } else {
        format!("\"{}\"", elem.occupant_id())
    }
}

fn check_sizes<T: Occupant>(elements: &[T], warnings: &mut Vec<LintWarning>) {
    for (i, elem) in elements.iter().enumerate() {
        let rect = elem.rect();
        if !rect.size().is_valid() {
            warnings.push(LintWarning {
                category: LintCategory::Size,
                message: format!(
                    "element {} has an empty span {}",
                    display_name(elem, i),
                    rect.size()
                ),
            });
        }
    }
}

fn check_bounds<T: Occupant>(grid: &GridSpec, elements: &[T], warnings: &mut Vec<LintWarning>) {
    for (i, elem) in elements.iter().enumerate() {
        let rect = elem.rect();
        let name = display_name(elem, i);
        if rect.right() > grid.columns() {
            warnings.push(LintWarning {
                category: LintCategory::Bounds,
                message: format!(
                    "element {} extends {} column(s) past the right edge",
                    name,
                    rect.right() - grid.columns()
                ),
            });
        }
        if rect.bottom() > grid.rows() {
            warnings.push(LintWarning {
                category: LintCategory::Bounds,
                message: format!(
                    "element {} extends {} row(s) past the bottom edge",
                    name,
                    rect.bottom() - grid.rows()
                ),
            });
        }
    }
}

fn check_duplicate_ids<T: Occupant>(elements: &[T], warnings: &mut Vec<LintWarning>) {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (i, elem) in elements.iter().enumerate() {
        let id = elem.occupant_id();
        if id.is_empty() {
            continue;
        }
        if let Some(first) = seen.get(id) {
            warnings.push(LintWarning {
                category: LintCategory::DuplicateId,
                message: format!(
                    "id \"{}\" is used by elements #{} and #{}",
                    id,
                    first + 1,
                    i + 1
                ),
            });
        } else {
            seen.insert(id, i);
        }
    }
}

fn check_overlaps<T: Occupant>(elements: &[T], warnings: &mut Vec<LintWarning>) {
    for i in 0..elements.len() {
        for j in (i + 1)..elements.len() {
            let a = elements[i].rect();
            let b = elements[j].rect();
            if !overlaps(&a, &b) {
                continue;
            }
            if let Some(shared) = a.intersection(&b) {
                warnings.push(LintWarning {
                    category: LintCategory::Overlap,
                    message: format!(
                        "elements {} and {} overlap by {} cell(s) at {}",
                        display_name(&elements[i], i),
                        display_name(&elements[j], j),
                        shared.area(),
                        shared.position()
                    ),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridRect;

    fn placed(id: &str, x: u32, y: u32, w: u32, h: u32) -> (String, GridRect) {
        (id.to_string(), GridRect::new(x, y, w, h))
    }

    fn categories(warnings: &[LintWarning]) -> Vec<String> {
        warnings.iter().map(|w| w.category.to_string()).collect()
    }

    #[test]
    fn test_clean_layout() {
        let elements = vec![
            placed("title", 0, 0, 12, 3),
            placed("left", 0, 3, 6, 9),
            placed("right", 6, 3, 6, 9),
        ];
        assert!(check(&GridSpec::default(), &elements).is_empty());
    }

    #[test]
    fn test_overlap_reported_once_per_pair() {
        let elements = vec![placed("a", 0, 0, 6, 6), placed("b", 3, 3, 6, 6)];
        let warnings = check(&GridSpec::default(), &elements);
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].message,
            "elements \"a\" and \"b\" overlap by 9 cell(s) at (3, 3)"
        );
    }

    #[test]
    fn test_bounds_and_size() {
        let elements = vec![placed("wide", 8, 0, 6, 2), placed("flat", 0, 11, 3, 0)];
        let warnings = check(&GridSpec::default(), &elements);
        assert_eq!(categories(&warnings), vec!["size", "bounds"]);
        assert!(warnings[1].message.contains("2 column(s) past the right edge"));
    }

    #[test]
    fn test_duplicate_ids() {
        let elements = vec![placed("a", 0, 0, 2, 2), placed("a", 4, 4, 2, 2)];
        let warnings = check(&GridSpec::default(), &elements);
        assert_eq!(categories(&warnings), vec!["duplicate-id"]);
        assert_eq!(warnings[0].to_string(), "duplicate-id: id \"a\" is used by elements #1 and #2");
    }

    #[test]
    fn test_anonymous_elements_use_index() {
        let elements = vec![placed("", 0, 0, 2, 2), placed("", 1, 1, 2, 2)];
        let warnings = check(&GridSpec::default(), &elements);
        assert_eq!(categories(&warnings), vec!["overlap"]);
        assert!(warnings[0].message.contains("<element #1> and <element #2>"));
    }
}
