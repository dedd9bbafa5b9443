//! Layout templates
//!
//! This module provides the infrastructure for defining, storing and
//! instantiating templates: named arrangements of typed elements at fixed
//! grid rectangles, with default properties per element type.
//!
//! # Example
//!
//! ```rust
//! use slide_grid::element::SequentialIds;
//! use slide_grid::template::{apply_template, ApplyOptions, TemplateRegistry};
//! use slide_grid::GridSpec;
//!
//! let registry = TemplateRegistry::builtin();
//! let template = registry.require("title-content").unwrap();
//! let elements = apply_template(
//!     &GridSpec::default(),
//!     template,
//!     &[],
//!     &ApplyOptions::new(),
//!     &mut SequentialIds::new(),
//! )
//! .unwrap();
//! assert_eq!(elements.len(), 2);
//! ```

mod apply;
mod builtin;
mod registry;

pub use apply::{apply_template, ApplyOptions};
pub use builtin::BUILTIN_TEMPLATES;
pub use registry::{
    TemplateCategory, TemplateDefinition, TemplateElement, TemplateError, TemplateRegistry,
};
