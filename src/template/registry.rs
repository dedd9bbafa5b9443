//! Template registry for storing and retrieving layout templates

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::element::{merge_props, ElementError, ElementKind, ElementProps};
use crate::grid::{GridRect, GridSpec};

use super::builtin::BUILTIN_TEMPLATES;

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found in registry
    #[error("template not found: {id}")]
    NotFound { id: String },

    /// Duplicate template definition
    #[error("duplicate template definition: {id}")]
    Duplicate { id: String },

    /// Template element that does not fit the grid
    #[error("element #{index} of template {template} does not fit the grid: {rect}")]
    OutOfBounds {
        template: String,
        index: usize,
        rect: GridRect,
    },

    /// Unknown category name
    #[error("unknown template category '{name}' in template {template}")]
    UnknownCategory { template: String, name: String },

    /// Unknown element type in a template
    #[error("unknown element type '{name}' in template {template}")]
    UnknownElementType { template: String, name: String },

    /// Properties that do not decode for their element type
    #[error("invalid properties in template {template}: {source}")]
    InvalidProps {
        template: String,
        #[source]
        source: ElementError,
    },

    /// Error reading a template library file
    #[error("error reading template file {path}: {message}")]
    FileReadError { path: PathBuf, message: String },

    /// Malformed template library
    #[error("failed to parse template library TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Grouping used to browse templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateCategory {
    /// Opening and section slides
    Title,
    /// Text-centred teaching slides
    Content,
    /// Image, video and audio slides
    Media,
    /// Side-by-side comparisons
    Comparison,
    /// Quizzes and checks for understanding
    Assessment,
    /// Code walkthroughs
    Code,
    /// Summaries and wrap-ups
    Closing,
}

impl TemplateCategory {
    pub const ALL: [TemplateCategory; 7] = [
        TemplateCategory::Title,
        TemplateCategory::Content,
        TemplateCategory::Media,
        TemplateCategory::Comparison,
        TemplateCategory::Assessment,
        TemplateCategory::Code,
        TemplateCategory::Closing,
    ];

    /// Get category as string
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::Title => "title",
            TemplateCategory::Content => "content",
            TemplateCategory::Media => "media",
            TemplateCategory::Comparison => "comparison",
            TemplateCategory::Assessment => "assessment",
            TemplateCategory::Code => "code",
            TemplateCategory::Closing => "closing",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        TemplateCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element descriptor of a template: a type at a fixed rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateElement {
    pub kind: ElementKind,
    pub rect: GridRect,
    /// Properties specific to this element, laid over the template defaults
    pub props: Map<String, Value>,
}

impl TemplateElement {
    pub fn new(kind: ElementKind, rect: GridRect) -> Self {
        Self {
            kind,
            rect,
            props: Map::new(),
        }
    }

    pub fn with_props(mut self, props: Map<String, Value>) -> Self {
        self.props = props;
        self
    }
}

/// A named, reusable arrangement of element descriptors
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDefinition {
    /// Template identifier
    pub id: String,
    /// Display name
    pub name: String,
    pub description: String,
    pub category: TemplateCategory,
    /// Free-text tags for search
    pub tags: Vec<String>,
    pub elements: Vec<TemplateElement>,
    /// Default properties per element type
    pub default_props: BTreeMap<ElementKind, Map<String, Value>>,
}

impl TemplateDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: TemplateCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category,
            tags: Vec::new(),
            elements: Vec::new(),
            default_props: BTreeMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_element(mut self, element: TemplateElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn with_default_props(mut self, kind: ElementKind, props: Map<String, Value>) -> Self {
        self.default_props.insert(kind, props);
        self
    }

    /// Properties the template gives element `index` before any caller input
    pub fn element_props(&self, index: usize) -> Option<Map<String, Value>> {
        let element = self.elements.get(index)?;
        let mut props = self
            .default_props
            .get(&element.kind)
            .cloned()
            .unwrap_or_default();
        merge_props(&mut props, &element.props);
        Some(props)
    }

    /// Check every element against a grid and its property schema
    pub fn validate(&self, grid: &GridSpec) -> Result<(), TemplateError> {
        for (index, element) in self.elements.iter().enumerate() {
            if !grid.in_bounds(&element.rect) {
                return Err(TemplateError::OutOfBounds {
                    template: self.id.clone(),
                    index,
                    rect: element.rect,
                });
            }
            let props = self.element_props(index).unwrap_or_default();
            ElementProps::from_map(element.kind, props).map_err(|source| {
                TemplateError::InvalidProps {
                    template: self.id.clone(),
                    source,
                }
            })?;
        }
        Ok(())
    }

    /// Case-insensitive substring match over name, description and tags
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
    }
}

/// TOML structure for deserializing template libraries
#[derive(Deserialize)]
struct TomlLibrary {
    #[serde(default)]
    template: Vec<TomlTemplate>,
}

#[derive(Deserialize)]
struct TomlTemplate {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    category: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    elements: Vec<TomlElement>,
    #[serde(default)]
    default_props: BTreeMap<String, Map<String, Value>>,
}

#[derive(Deserialize)]
struct TomlElement {
    #[serde(rename = "type")]
    kind: String,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    #[serde(default)]
    props: Map<String, Value>,
}

impl TomlTemplate {
    fn into_definition(self) -> Result<TemplateDefinition, TemplateError> {
        let id = self.id;
        let unknown_type = |name: String| TemplateError::UnknownElementType {
            template: id.clone(),
            name,
        };

        let category =
            TemplateCategory::parse(&self.category).ok_or_else(|| TemplateError::UnknownCategory {
                template: id.clone(),
                name: self.category.clone(),
            })?;

        let mut elements = Vec::with_capacity(self.elements.len());
        for element in self.elements {
            let kind: ElementKind = element
                .kind
                .parse()
                .map_err(|_| unknown_type(element.kind.clone()))?;
            elements.push(
                TemplateElement::new(
                    kind,
                    GridRect::new(element.x, element.y, element.w, element.h),
                )
                .with_props(element.props),
            );
        }

        let mut default_props = BTreeMap::new();
        for (name, props) in self.default_props {
            let kind: ElementKind = name.parse().map_err(|_| unknown_type(name.clone()))?;
            default_props.insert(kind, props);
        }

        Ok(TemplateDefinition {
            id: id.clone(),
            name: self.name,
            description: self.description,
            category,
            tags: self.tags,
            elements,
            default_props,
        })
    }
}

/// Registry for storing template definitions
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, TemplateDefinition>,
    /// Grid every registered template must fit
    grid: GridSpec,
}

impl TemplateRegistry {
    /// Create a new empty registry for the default grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty registry whose templates must fit `grid`
    pub fn with_grid(grid: GridSpec) -> Self {
        Self {
            templates: HashMap::new(),
            grid,
        }
    }

    /// A registry preloaded with the built-in library
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry
            .load_toml_str(BUILTIN_TEMPLATES)
            .expect("Built-in templates should be valid");
        registry
    }

    /// The grid templates are validated against
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Register a template definition
    pub fn register(&mut self, def: TemplateDefinition) -> Result<(), TemplateError> {
        if self.templates.contains_key(&def.id) {
            return Err(TemplateError::Duplicate { id: def.id });
        }
        def.validate(&self.grid)?;
        debug!(template = def.id.as_str(), elements = def.elements.len(); "Registered template");
        self.templates.insert(def.id.clone(), def);
        Ok(())
    }

    /// Register every template of a TOML library, returning how many were added
    pub fn load_toml_str(&mut self, content: &str) -> Result<usize, TemplateError> {
        let library: TomlLibrary = toml::from_str(content)?;
        let count = library.template.len();
        for template in library.template {
            self.register(template.into_definition()?)?;
        }
        Ok(count)
    }

    /// Register every template of a TOML library file
    pub fn load_file(&mut self, path: &Path) -> Result<usize, TemplateError> {
        let content = std::fs::read_to_string(path).map_err(|e| TemplateError::FileReadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        self.load_toml_str(&content)
    }

    /// Get a template by id
    pub fn get(&self, id: &str) -> Option<&TemplateDefinition> {
        self.templates.get(id)
    }

    /// Get a template by id, or a `NotFound` error
    pub fn require(&self, id: &str) -> Result<&TemplateDefinition, TemplateError> {
        self.get(id).ok_or_else(|| TemplateError::NotFound { id: id.to_string() })
    }

    /// Check if a template exists
    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// All template ids, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.templates.keys().map(|s| s.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    /// Templates in a category, sorted by id
    pub fn by_category(&self, category: TemplateCategory) -> Vec<&TemplateDefinition> {
        self.sorted(|t| t.category == category)
    }

    /// Templates whose name, description or tags contain `query`, sorted by id
    pub fn search(&self, query: &str) -> Vec<&TemplateDefinition> {
        self.sorted(|t| t.matches(query))
    }

    fn sorted(&self, keep: impl Fn(&TemplateDefinition) -> bool) -> Vec<&TemplateDefinition> {
        let mut found: Vec<&TemplateDefinition> =
            self.templates.values().filter(|t| keep(t)).collect();
        found.sort_by(|a, b| a.id.cmp(&b.id));
        found
    }
}
