//! Typed property bags, one per element kind
//!
//! Every variant keeps the fields its kind understands. Unknown keys are
//! collected into `extra` and written back unchanged, so data produced by a
//! newer editor survives a round trip.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::ElementError;
use super::kind::ElementKind;

/// Free-form fields a props struct does not model
pub type ExtraProps = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    Cover,
    Contain,
    Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutVariant {
    Info,
    Warning,
    Success,
    Tip,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleProps {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(flatten)]
    pub extra: ExtraProps,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextProps {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(flatten)]
    pub extra: ExtraProps,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageProps {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub src: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<ImageFit>,
    #[serde(flatten)]
    pub extra: ExtraProps,
}

/// Shared by video and audio elements
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaProps {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub src: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub autoplay: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraProps,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizProps {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<QuizQuestion>,
    #[serde(flatten)]
    pub extra: ExtraProps,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeProps {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraProps,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartProps {
    #[serde(rename = "chartType", skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<String>,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub data: Value,
    #[serde(flatten)]
    pub extra: ExtraProps,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableProps {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<Vec<String>>,
    #[serde(flatten)]
    pub extra: ExtraProps,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnsProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(flatten)]
    pub extra: ExtraProps,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalloutProps {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<CalloutVariant>,
    #[serde(flatten)]
    pub extra: ExtraProps,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacerProps {
    #[serde(flatten)]
    pub extra: ExtraProps,
}

/// Properties of an element, tagged by its kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ElementProps {
    Title(TitleProps),
    Text(TextProps),
    Image(ImageProps),
    Video(MediaProps),
    Audio(MediaProps),
    Quiz(QuizProps),
    Code(CodeProps),
    Chart(ChartProps),
    Table(TableProps),
    Columns(ColumnsProps),
    Callout(CalloutProps),
    Spacer(SpacerProps),
}

impl ElementProps {
    /// Empty properties for a kind
    pub fn default_for(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Title => ElementProps::Title(TitleProps::default()),
            ElementKind::Text => ElementProps::Text(TextProps::default()),
            ElementKind::Image => ElementProps::Image(ImageProps::default()),
            ElementKind::Video => ElementProps::Video(MediaProps::default()),
            ElementKind::Audio => ElementProps::Audio(MediaProps::default()),
            ElementKind::Quiz => ElementProps::Quiz(QuizProps::default()),
            ElementKind::Code => ElementProps::Code(CodeProps::default()),
            ElementKind::Chart => ElementProps::Chart(ChartProps::default()),
            ElementKind::Table => ElementProps::Table(TableProps::default()),
            ElementKind::Columns => ElementProps::Columns(ColumnsProps::default()),
            ElementKind::Callout => ElementProps::Callout(CalloutProps::default()),
            ElementKind::Spacer => ElementProps::Spacer(SpacerProps::default()),
        }
    }

    /// The kind these properties belong to
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementProps::Title(_) => ElementKind::Title,
            ElementProps::Text(_) => ElementKind::Text,
            ElementProps::Image(_) => ElementKind::Image,
            ElementProps::Video(_) => ElementKind::Video,
            ElementProps::Audio(_) => ElementKind::Audio,
            ElementProps::Quiz(_) => ElementKind::Quiz,
            ElementProps::Code(_) => ElementKind::Code,
            ElementProps::Chart(_) => ElementKind::Chart,
            ElementProps::Table(_) => ElementKind::Table,
            ElementProps::Columns(_) => ElementKind::Columns,
            ElementProps::Callout(_) => ElementKind::Callout,
            ElementProps::Spacer(_) => ElementKind::Spacer,
        }
    }

    /// Decode an untyped property map for a kind
    pub fn from_map(kind: ElementKind, map: Map<String, Value>) -> Result<Self, ElementError> {
        let value = Value::Object(map);
        let props = match kind {
            ElementKind::Title => serde_json::from_value(value).map(ElementProps::Title),
            ElementKind::Text => serde_json::from_value(value).map(ElementProps::Text),
            ElementKind::Image => serde_json::from_value(value).map(ElementProps::Image),
            ElementKind::Video => serde_json::from_value(value).map(ElementProps::Video),
            ElementKind::Audio => serde_json::from_value(value).map(ElementProps::Audio),
            ElementKind::Quiz => serde_json::from_value(value).map(ElementProps::Quiz),
            ElementKind::Code => serde_json::from_value(value).map(ElementProps::Code),
            ElementKind::Chart => serde_json::from_value(value).map(ElementProps::Chart),
            ElementKind::Table => serde_json::from_value(value).map(ElementProps::Table),
            ElementKind::Columns => serde_json::from_value(value).map(ElementProps::Columns),
            ElementKind::Callout => serde_json::from_value(value).map(ElementProps::Callout),
            ElementKind::Spacer => serde_json::from_value(value).map(ElementProps::Spacer),
        };
        props.map_err(|source| ElementError::InvalidProps { kind, source })
    }

    /// Encode as an untyped property map
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Lay `top` over these properties, key by key
    ///
    /// Keys present in `top` win; keys only present here are kept.
    pub fn overlay(&self, top: &Map<String, Value>) -> Result<Self, ElementError> {
        let mut merged = self.to_map();
        merge_props(&mut merged, top);
        ElementProps::from_map(self.kind(), merged)
    }
}

/// Shallow merge: every key of `top` overwrites the same key in `base`
pub fn merge_props(base: &mut Map<String, Value>, top: &Map<String, Value>) {
    for (key, value) in top {
        base.insert(key.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_decode_title() {
        let props = ElementProps::from_map(
            ElementKind::Title,
            object(json!({"text": "Welcome", "level": 2, "align": "center"})),
        )
        .unwrap();
        assert_eq!(
            props,
            ElementProps::Title(TitleProps {
                text: "Welcome".to_string(),
                level: Some(2),
                align: Some(Align::Center),
                extra: Map::new(),
            })
        );
    }

    #[test]
    fn test_unknown_keys_survive() {
        let props = ElementProps::from_map(
            ElementKind::Image,
            object(json!({"src": "a.png", "borderRadius": 8})),
        )
        .unwrap();
        assert_eq!(
            Value::Object(props.to_map()),
            json!({"src": "a.png", "borderRadius": 8})
        );
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let err = ElementProps::from_map(ElementKind::Title, object(json!({"level": "huge"})))
            .unwrap_err();
        assert!(err.to_string().starts_with("invalid props for title element"));
    }

    #[test]
    fn test_quiz_questions() {
        let props = ElementProps::from_map(
            ElementKind::Quiz,
            object(json!({
                "questions": [{"prompt": "2 + 2?", "options": ["3", "4"], "answer": 1}]
            })),
        )
        .unwrap();
        let ElementProps::Quiz(quiz) = props else {
            panic!("expected quiz props");
        };
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].answer, Some(1));
    }

    #[test]
    fn test_overlay_keeps_base_keys() {
        let base = ElementProps::Text(TextProps {
            text: "Default".to_string(),
            align: Some(Align::Left),
            extra: Map::new(),
        });
        let merged = base.overlay(&object(json!({"text": "Mine"}))).unwrap();
        assert_eq!(
            merged,
            ElementProps::Text(TextProps {
                text: "Mine".to_string(),
                align: Some(Align::Left),
                extra: Map::new(),
            })
        );
    }

    #[test]
    fn test_empty_fields_are_not_written() {
        let props = ElementProps::default_for(ElementKind::Video);
        assert!(props.to_map().is_empty());
    }

    #[test]
    fn test_default_kind_matches() {
        for kind in ElementKind::ALL {
            assert_eq!(ElementProps::default_for(kind).kind(), kind);
        }
    }
}
