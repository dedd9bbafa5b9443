//! Slide documents
//!
//! A [`SlideLayout`] is the persisted form of one slide: metadata plus the
//! ordered element list. List order carries z-order only; placement lives in
//! each element's rectangle.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::element::{ElementId, GridElement};
use crate::error::Error;

/// An ordered container of elements plus slide-level metadata
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
    /// Auto-advance delay in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default)]
    pub elements: Vec<GridElement>,
}

impl SlideLayout {
    /// Create an empty slide
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a slide from its JSON document
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a slide from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serialize the slide as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The same slide with a replacement element list
    pub fn with_elements(&self, elements: Vec<GridElement>) -> Self {
        Self {
            elements,
            ..self.clone()
        }
    }

    /// Set the slide title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Look up an element by id
    pub fn element(&self, id: &ElementId) -> Option<&GridElement> {
        self.elements.iter().find(|e| &e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;
    use crate::grid::GridRect;
    use pretty_assertions::assert_eq;

    const SLIDE: &str = r#"{
        "title": "Photosynthesis",
        "notes": "Mention chlorophyll",
        "transition": "fade",
        "duration": 30,
        "elements": [
            {"id": "t", "type": "title", "x": 0, "y": 0, "w": 12, "h": 2,
             "props": {"text": "Photosynthesis"}},
            {"id": "i", "type": "image", "x": 0, "y": 2, "w": 6, "h": 10,
             "props": {"src": "leaf.png"}}
        ]
    }"#;

    #[test]
    fn test_parse_slide() {
        let slide = SlideLayout::from_json(SLIDE).unwrap();
        assert_eq!(slide.title.as_deref(), Some("Photosynthesis"));
        assert_eq!(slide.duration, Some(30));
        assert_eq!(slide.theme, None);
        assert_eq!(slide.elements.len(), 2);
        assert_eq!(slide.elements[1].kind(), ElementKind::Image);
    }

    #[test]
    fn test_json_round_trip_keeps_content() {
        let slide = SlideLayout::from_json(SLIDE).unwrap();
        let again = SlideLayout::from_json(&slide.to_json().unwrap()).unwrap();
        assert_eq!(again, slide);
    }

    #[test]
    fn test_elements_default_to_empty() {
        let slide = SlideLayout::from_json(r#"{"title": "Empty"}"#).unwrap();
        assert!(slide.elements.is_empty());
    }

    #[test]
    fn test_with_elements_keeps_metadata() {
        let slide = SlideLayout::from_json(SLIDE).unwrap();
        let replaced = slide.with_elements(vec![GridElement::empty(
            "x",
            ElementKind::Spacer,
            GridRect::new(0, 0, 1, 1),
        )]);
        assert_eq!(replaced.title, slide.title);
        assert_eq!(replaced.notes, slide.notes);
        assert_eq!(replaced.elements.len(), 1);
        assert!(replaced.element(&ElementId::new("x")).is_some());
        assert!(replaced.element(&ElementId::new("t")).is_none());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(
            SlideLayout::from_json("{\"elements\": 3}"),
            Err(Error::Json(_))
        ));
    }
}
