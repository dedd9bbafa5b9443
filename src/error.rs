//! Crate-level error type

use thiserror::Error;

use crate::commands::EditError;
use crate::config::ConfigError;
use crate::element::ElementError;
use crate::grid::{GridError, SlotError};
use crate::template::TemplateError;

/// Any error the engine or its loaders can return
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Slot(#[from] SlotError),

    #[error(transparent)]
    Element(#[from] ElementError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_pass_through() {
        let err: Error = SlotError::Unknown {
            name: "middle".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            SlotError::Unknown {
                name: "middle".to_string()
            }
            .to_string()
        );
    }

    #[test]
    fn test_json_error_converts() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("Invalid JSON"));
    }
}
