//! Positioned, typed slide elements
//!
//! A [`GridElement`] is the unit the geometry engine places: an id, a
//! rectangle in grid units and a typed property bag. On the wire it is the
//! flat object `{id, type, x, y, w, h, props}`.

pub mod error;
pub mod ids;
pub mod kind;
pub mod props;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::grid::{GridRect, Occupant};

pub use error::ElementError;
pub use ids::{fresh_id, IdGenerator, SequentialIds, UuidIds};
pub use kind::ElementKind;
pub use props::*;

/// Unique identifier of an element within a slide
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A positioned, typed visual unit on a slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawElement", into = "RawElement")]
pub struct GridElement {
    pub id: ElementId,
    pub rect: GridRect,
    pub props: ElementProps,
}

impl GridElement {
    pub fn new(id: impl Into<ElementId>, rect: GridRect, props: ElementProps) -> Self {
        Self {
            id: id.into(),
            rect,
            props,
        }
    }

    /// An element with empty properties for its kind
    pub fn empty(id: impl Into<ElementId>, kind: ElementKind, rect: GridRect) -> Self {
        Self::new(id, rect, ElementProps::default_for(kind))
    }

    pub fn kind(&self) -> ElementKind {
        self.props.kind()
    }

    /// The same element at another rectangle
    pub fn with_rect(&self, rect: GridRect) -> Self {
        Self {
            rect,
            ..self.clone()
        }
    }
}

impl Occupant for GridElement {
    fn occupant_id(&self) -> &str {
        self.id.as_str()
    }

    fn rect(&self) -> GridRect {
        self.rect
    }
}

/// Wire shape of an element
#[derive(Serialize, Deserialize)]
struct RawElement {
    id: String,
    #[serde(rename = "type")]
    kind: ElementKind,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    #[serde(default)]
    props: Map<String, Value>,
}

impl TryFrom<RawElement> for GridElement {
    type Error = ElementError;

    fn try_from(raw: RawElement) -> Result<Self, Self::Error> {
        Ok(GridElement {
            id: ElementId(raw.id),
            rect: GridRect::new(raw.x, raw.y, raw.w, raw.h),
            props: ElementProps::from_map(raw.kind, raw.props)?,
        })
    }
}

impl From<GridElement> for RawElement {
    fn from(element: GridElement) -> Self {
        RawElement {
            kind: element.kind(),
            props: element.props.to_map(),
            id: element.id.0,
            x: element.rect.x,
            y: element.rect.y,
            w: element.rect.w,
            h: element.rect.h,
        }
    }
}
