//! Template instantiation - expands a template into concrete slide elements

use std::collections::{BTreeMap, HashSet};

use log::debug;
use serde_json::{Map, Value};

use crate::element::{fresh_id, merge_props, ElementKind, ElementProps, GridElement, IdGenerator};
use crate::grid::GridSpec;

use super::registry::{TemplateDefinition, TemplateError};

/// Options for [`apply_template`]
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    /// Carry content of existing elements into the new layout
    pub preserve_content: bool,
    /// Caller-supplied properties per element type, laid over everything else
    pub overrides: BTreeMap<ElementKind, Map<String, Value>>,
}

impl ApplyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable content preservation
    pub fn with_preserve_content(mut self, preserve: bool) -> Self {
        self.preserve_content = preserve;
        self
    }

    /// Add caller properties for one element type
    pub fn with_override(mut self, kind: ElementKind, props: Map<String, Value>) -> Self {
        self.overrides.insert(kind, props);
        self
    }
}

/// Instantiate a template as a complete replacement element list
///
/// Each template element becomes a new element with an id that collides
/// with nothing in `existing` and nothing produced earlier in the call.
/// Properties are layered, later layers winning key by key:
///
/// 1. the template's default props for the element type
/// 2. the template element's own props
/// 3. with `preserve_content`, the props of the matching existing element
/// 4. the caller's overrides for the element type
///
/// Preservation matches by type in order: each template element takes the
/// first unused existing element of the same type. Existing elements left
/// unmatched, or all of them without `preserve_content`, are dropped.
pub fn apply_template(
    grid: &GridSpec,
    template: &TemplateDefinition,
    existing: &[GridElement],
    options: &ApplyOptions,
    ids: &mut dyn IdGenerator,
) -> Result<Vec<GridElement>, TemplateError> {
    let mut taken: HashSet<String> = existing.iter().map(|e| e.id.0.clone()).collect();
    let mut used = vec![false; existing.len()];
    let mut elements = Vec::with_capacity(template.elements.len());
    let mut carried = 0usize;

    for (index, descriptor) in template.elements.iter().enumerate() {
        if !grid.in_bounds(&descriptor.rect) {
            return Err(TemplateError::OutOfBounds {
                template: template.id.clone(),
                index,
                rect: descriptor.rect,
            });
        }

        let mut props = template.element_props(index).unwrap_or_default();

        if options.preserve_content {
            let source = existing
                .iter()
                .enumerate()
                .find(|(i, e)| !used[*i] && e.kind() == descriptor.kind);
            if let Some((i, source)) = source {
                used[i] = true;
                carried += 1;
                merge_props(&mut props, &source.props.to_map());
            }
        }

        if let Some(overrides) = options.overrides.get(&descriptor.kind) {
            merge_props(&mut props, overrides);
        }

        let props = ElementProps::from_map(descriptor.kind, props).map_err(|source| {
            TemplateError::InvalidProps {
                template: template.id.clone(),
                source,
            }
        })?;

        let id = fresh_id(ids, descriptor.kind, &mut taken);
        elements.push(GridElement::new(id, descriptor.rect, props));
    }

    debug!(
        template = template.id.as_str(),
        created = elements.len(),
        carried = carried,
        dropped = existing.len() - carried;
        "Applied template"
    );
    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{SequentialIds, TextProps, TitleProps};
    use crate::grid::{overlaps, GridRect};
    use crate::template::{TemplateCategory, TemplateElement, TemplateRegistry};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn text_of(element: &GridElement) -> &str {
        match &element.props {
            ElementProps::Title(TitleProps { text, .. })
            | ElementProps::Text(TextProps { text, .. }) => text.as_str(),
            other => panic!("no text on {other:?}"),
        }
    }

    fn lecture() -> TemplateDefinition {
        TemplateDefinition::new("lecture", "Lecture", TemplateCategory::Content)
            .with_element(TemplateElement::new(ElementKind::Title, GridRect::new(0, 0, 12, 2)))
            .with_element(TemplateElement::new(ElementKind::Text, GridRect::new(0, 2, 6, 10)))
            .with_element(
                TemplateElement::new(ElementKind::Text, GridRect::new(6, 2, 6, 10))
                    .with_props(object(json!({"text": "Right", "align": "right"}))),
            )
            .with_default_props(ElementKind::Title, object(json!({"text": "Heading", "level": 2})))
            .with_default_props(ElementKind::Text, object(json!({"text": "Body"})))
    }

    #[test]
    fn test_two_column_on_empty_slide() {
        let registry = TemplateRegistry::builtin();
        let template = registry.require("two-column").unwrap();
        let grid = GridSpec::default();
        let elements =
            apply_template(&grid, template, &[], &ApplyOptions::new(), &mut SequentialIds::new())
                .unwrap();

        assert_eq!(elements.len(), 2);
        assert!(elements.iter().all(|e| e.kind() == ElementKind::Text));
        assert!(elements.iter().all(|e| grid.in_bounds(&e.rect)));
        assert!(!overlaps(&elements[0].rect, &elements[1].rect));
        assert_ne!(elements[0].id, elements[1].id);
    }

    #[test]
    fn test_defaults_then_element_props() {
        let elements = apply_template(
            &GridSpec::default(),
            &lecture(),
            &[],
            &ApplyOptions::new(),
            &mut SequentialIds::new(),
        )
        .unwrap();

        let ids: Vec<&str> = elements.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["title-1", "text-2", "text-3"]);
        assert_eq!(text_of(&elements[0]), "Heading");
        assert_eq!(text_of(&elements[1]), "Body");
        assert_eq!(text_of(&elements[2]), "Right");
    }

    #[test]
    fn test_existing_ids_are_never_reused() {
        let existing = vec![
            GridElement::empty("title-1", ElementKind::Title, GridRect::new(0, 0, 1, 1)),
            GridElement::empty("text-2", ElementKind::Text, GridRect::new(1, 0, 1, 1)),
        ];
        let elements = apply_template(
            &GridSpec::default(),
            &lecture(),
            &existing,
            &ApplyOptions::new(),
            &mut SequentialIds::new(),
        )
        .unwrap();

        let ids: Vec<&str> = elements.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["title-1-2", "text-2-2", "text-3"]);
    }

    #[test]
    fn test_preserve_content_matches_by_type_in_order() {
        let existing = vec![
            GridElement::new(
                "old-text-a",
                GridRect::new(0, 5, 4, 4),
                ElementProps::Text(TextProps {
                    text: "First paragraph".to_string(),
                    ..TextProps::default()
                }),
            ),
            GridElement::new(
                "old-title",
                GridRect::new(0, 0, 12, 3),
                ElementProps::Title(TitleProps {
                    text: "Cell Biology".to_string(),
                    ..TitleProps::default()
                }),
            ),
            GridElement::new(
                "old-text-b",
                GridRect::new(4, 5, 4, 4),
                ElementProps::Text(TextProps {
                    text: "Second paragraph".to_string(),
                    ..TextProps::default()
                }),
            ),
            GridElement::empty("old-image", ElementKind::Image, GridRect::new(8, 5, 4, 4)),
        ];

        let elements = apply_template(
            &GridSpec::default(),
            &lecture(),
            &existing,
            &ApplyOptions::new().with_preserve_content(true),
            &mut SequentialIds::new(),
        )
        .unwrap();

        assert_eq!(elements.len(), 3);
        assert_eq!(text_of(&elements[0]), "Cell Biology");
        assert_eq!(text_of(&elements[1]), "First paragraph");
        assert_eq!(text_of(&elements[2]), "Second paragraph");
        // Template geometry wins; content keys not set by the old element survive
        assert_eq!(elements[2].rect, GridRect::new(6, 2, 6, 10));
        let ElementProps::Title(title) = &elements[0].props else {
            panic!("expected title");
        };
        assert_eq!(title.level, Some(2));
    }

    #[test]
    fn test_without_preserve_existing_content_is_discarded() {
        let existing = vec![GridElement::new(
            "old-title",
            GridRect::new(0, 0, 12, 3),
            ElementProps::Title(TitleProps {
                text: "Cell Biology".to_string(),
                ..TitleProps::default()
            }),
        )];
        let elements = apply_template(
            &GridSpec::default(),
            &lecture(),
            &existing,
            &ApplyOptions::new(),
            &mut SequentialIds::new(),
        )
        .unwrap();
        assert_eq!(text_of(&elements[0]), "Heading");
        assert!(elements.iter().all(|e| e.id.as_str() != "old-title"));
    }

    #[test]
    fn test_overrides_win() {
        let options = ApplyOptions::new()
            .with_preserve_content(true)
            .with_override(ElementKind::Text, object(json!({"align": "center"})));
        let existing = vec![GridElement::new(
            "t",
            GridRect::new(0, 0, 1, 1),
            ElementProps::Text(TextProps {
                text: "Kept".to_string(),
                align: Some(crate::element::Align::Left),
                ..TextProps::default()
            }),
        )];
        let elements = apply_template(
            &GridSpec::default(),
            &lecture(),
            &existing,
            &options,
            &mut SequentialIds::new(),
        )
        .unwrap();
        let ElementProps::Text(text) = &elements[1].props else {
            panic!("expected text");
        };
        assert_eq!(text.text, "Kept");
        assert_eq!(text.align, Some(crate::element::Align::Center));
    }

    #[test]
    fn test_template_larger_than_grid() {
        let small = GridSpec::new(6, 6).unwrap();
        let result = apply_template(
            &small,
            &lecture(),
            &[],
            &ApplyOptions::new(),
            &mut SequentialIds::new(),
        );
        assert!(matches!(
            result,
            Err(TemplateError::OutOfBounds { index: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_override_is_error() {
        let options =
            ApplyOptions::new().with_override(ElementKind::Title, object(json!({"level": "loud"})));
        let result = apply_template(
            &GridSpec::default(),
            &lecture(),
            &[],
            &options,
            &mut SequentialIds::new(),
        );
        assert!(matches!(result, Err(TemplateError::InvalidProps { .. })));
    }

    #[test]
    fn test_template_is_not_mutated() {
        let template = lecture();
        let before = template.clone();
        apply_template(
            &GridSpec::default(),
            &template,
            &[],
            &ApplyOptions::new(),
            &mut SequentialIds::new(),
        )
        .unwrap();
        assert_eq!(template, before);
    }
}
