//! Slide Grid - a grid layout engine for educational slides
//!
//! This library positions typed slide elements (titles, text, media, quizzes,
//! ...) on a fixed 12 x 12 placement grid. It provides collision detection,
//! a deterministic free-position search, named placement slots, a template
//! library with content-preserving instantiation and an edit-command layer
//! that applies placement policies.
//!
//! # Example
//!
//! ```rust
//! use slide_grid::{check_collision, GridElement, GridPosition, GridRect, GridSpec};
//! use slide_grid::element::ElementKind;
//!
//! let grid = GridSpec::default();
//! let layout = vec![GridElement::empty("a", ElementKind::Image, GridRect::new(0, 0, 6, 6))];
//!
//! let result = check_collision(&grid, &GridRect::new(3, 3, 6, 6), &layout, None);
//! assert!(result.has_collision);
//! assert_eq!(result.suggested_position, Some(GridPosition::new(6, 0)));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod element;
pub mod error;
pub mod grid;
pub mod preview;
pub mod slide;
pub mod template;

pub use commands::{CollisionPolicy, CommandOutcome, EditCommand, EditError, Editor, Placement};
pub use config::{ConfigError, EngineConfig};
pub use element::{ElementId, ElementKind, ElementProps, GridElement};
pub use error::Error;
pub use grid::{
    check_collision, find_free_position, lint, overlaps, place_in_slot, slot_rect,
    CollisionResult, GridPosition, GridRect, GridSize, GridSpec, Slot, SlotConvention,
};
pub use slide::SlideLayout;
pub use template::{apply_template, ApplyOptions, TemplateRegistry};
