//! Error types for slide elements

use thiserror::Error;

use super::kind::ElementKind;

/// Errors that can occur when decoding element data
#[derive(Debug, Error)]
pub enum ElementError {
    /// Type tag outside the known element kinds
    #[error("unknown element type '{name}'")]
    UnknownKind { name: String },

    /// Property bag that does not match its element kind
    #[error("invalid props for {kind} element: {source}")]
    InvalidProps {
        kind: ElementKind,
        #[source]
        source: serde_json::Error,
    },
}
