//! Element type tags

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ElementError;
use crate::grid::GridSize;

/// The kind of visual unit an element is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Title,
    Text,
    Image,
    Video,
    Audio,
    Quiz,
    Code,
    Chart,
    Table,
    Columns,
    Callout,
    Spacer,
}

impl ElementKind {
    pub const ALL: [ElementKind; 12] = [
        ElementKind::Title,
        ElementKind::Text,
        ElementKind::Image,
        ElementKind::Video,
        ElementKind::Audio,
        ElementKind::Quiz,
        ElementKind::Code,
        ElementKind::Chart,
        ElementKind::Table,
        ElementKind::Columns,
        ElementKind::Callout,
        ElementKind::Spacer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Title => "title",
            ElementKind::Text => "text",
            ElementKind::Image => "image",
            ElementKind::Video => "video",
            ElementKind::Audio => "audio",
            ElementKind::Quiz => "quiz",
            ElementKind::Code => "code",
            ElementKind::Chart => "chart",
            ElementKind::Table => "table",
            ElementKind::Columns => "columns",
            ElementKind::Callout => "callout",
            ElementKind::Spacer => "spacer",
        }
    }

    /// Size used when content arrives without explicit dimensions (12 x 12 grid)
    pub fn default_size(&self) -> GridSize {
        let (w, h) = match self {
            ElementKind::Title => (12, 2),
            ElementKind::Text => (6, 4),
            ElementKind::Image => (6, 6),
            ElementKind::Video => (8, 6),
            ElementKind::Audio => (6, 2),
            ElementKind::Quiz => (12, 8),
            ElementKind::Code => (8, 8),
            ElementKind::Chart => (6, 6),
            ElementKind::Table => (8, 6),
            ElementKind::Columns => (12, 6),
            ElementKind::Callout => (6, 2),
            ElementKind::Spacer => (2, 1),
        };
        GridSize::new(w, h)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = ElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ElementError::UnknownKind {
                name: s.to_string(),
            })
    }
}
