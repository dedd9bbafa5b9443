//! Engine configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! [grid]
//! columns = 12
//! rows = 12
//!
//! [slots]
//! band_rows = 3
//!
//! [placement]
//! on_collision = "relocate"
//!
//! [templates]
//! builtin = true
//! libraries = ["extra-templates.toml"]
//! ```
//!
//! Every table is optional. Relative library paths are resolved against the
//! directory of the configuration file.

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::commands::{CollisionPolicy, Editor};
use crate::grid::{GridSpec, SlotConvention};
use crate::template::{TemplateError, TemplateRegistry, BUILTIN_TEMPLATES};

/// Errors that can occur when loading a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Collision handling for edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlacementConfig {
    pub on_collision: CollisionPolicy,
}

/// Which template libraries to load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    /// Start from the built-in library (authored for a 12 x 12 grid)
    pub builtin: bool,
    /// Extra TOML libraries, loaded in order
    pub libraries: Vec<PathBuf>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            libraries: Vec::new(),
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub grid: GridSpec,
    pub slots: SlotConvention,
    pub placement: PlacementConfig,
    pub templates: TemplateConfig,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_str(&content)?;

        if let Some(dir) = path.parent() {
            for library in &mut config.templates.libraries {
                if library.is_relative() {
                    *library = dir.join(&*library);
                }
            }
        }
        debug!(path:? = path, grid:? = config.grid; "Loaded config");
        Ok(config)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_grid(mut self, grid: GridSpec) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_slots(mut self, slots: SlotConvention) -> Self {
        self.slots = slots;
        self
    }

    pub fn with_policy(mut self, policy: CollisionPolicy) -> Self {
        self.placement.on_collision = policy;
        self
    }

    /// Append a template library
    pub fn with_library(mut self, path: impl Into<PathBuf>) -> Self {
        self.templates.libraries.push(path.into());
        self
    }

    /// An editor for this grid, slot convention and collision policy
    pub fn editor(&self) -> Editor {
        Editor::new(self.grid)
            .with_slots(self.slots)
            .with_policy(self.placement.on_collision)
    }

    /// Build the template registry: built-ins (unless disabled) then every library
    pub fn registry(&self) -> Result<TemplateRegistry, TemplateError> {
        let mut registry = TemplateRegistry::with_grid(self.grid);
        if self.templates.builtin {
            registry.load_toml_str(BUILTIN_TEMPLATES)?;
        }
        for library in &self.templates.libraries {
            let count = registry.load_file(library)?;
            debug!(library:? = library, count = count; "Loaded template library");
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_is_default() {
        let config = EngineConfig::from_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.grid, GridSpec::default());
        assert_eq!(config.placement.on_collision, CollisionPolicy::Relocate);
        assert!(config.templates.builtin);
    }

    #[test]
    fn test_full_config() {
        let config = EngineConfig::from_str(
            r#"
[grid]
columns = 16
rows = 9

[slots]
band_rows = 2

[placement]
on_collision = "reject"

[templates]
builtin = false
libraries = ["a.toml", "b.toml"]
"#,
        )
        .unwrap();

        assert_eq!(config.grid, GridSpec::new(16, 9).unwrap());
        assert_eq!(config.slots.band_rows, Some(2));
        assert_eq!(config.placement.on_collision, CollisionPolicy::Reject);
        assert!(!config.templates.builtin);
        assert_eq!(
            config.templates.libraries,
            vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
        );
        assert_eq!(config.editor().policy(), CollisionPolicy::Reject);
    }

    #[test]
    fn test_invalid_grid_is_parse_error() {
        let result = EngineConfig::from_str("[grid]\ncolumns = 0\nrows = 12\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let result = EngineConfig::from_str("[placement]\non_overlap = \"allow\"\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_unknown_policy_is_parse_error() {
        let result = EngineConfig::from_str("[placement]\non_collision = \"shrug\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_registry_without_builtins() {
        let config = EngineConfig::from_str("[templates]\nbuiltin = false\n").unwrap();
        assert!(config.registry().unwrap().is_empty());
    }

    #[test]
    fn test_registry_with_builtins() {
        let registry = EngineConfig::new().registry().unwrap();
        assert!(registry.contains("two-column"));
    }

    #[test]
    fn test_missing_file() {
        let result = EngineConfig::from_file(Path::new("/nonexistent/slide-grid.toml"));
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }
}
