use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Error;

/// Reserved key that carries the template id inside a serialized story.
pub const TEMPLATE_KEY: &str = "template";

/// A single answer typed into a template blank.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }

    /// Non-finite numbers have no JSON form and are dropped on encode.
    pub fn is_serializable(&self) -> bool {
        match self {
            Self::Text(_) => true,
            Self::Number(n) => n.is_finite(),
        }
    }

    /// Loose JSON → field value. Anything but a string or number is rejected.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(Self::Text(text)),
            Value::Number(n) => n.as_f64().map(Self::Number),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            // 42.0 prints as "42", the way a form user typed it
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

/// The answers a user filled into one template, plus that template's id.
///
/// On the wire this is a single flat JSON object: `template` sits next to
/// the field names. Decoding tolerates keys the current template no longer
/// declares (and missing ones), since links outlive catalog revisions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryRecord {
    template: String,
    fields: BTreeMap<String, FieldValue>,
}

impl StoryRecord {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a field. The reserved `template` key cannot be used as a field name.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        let name = name.into();
        if name == TEMPLATE_KEY {
            tracing::debug!("story_record_reserved_key_ignored");
            return None;
        }
        self.fields.insert(name, value.into())
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.fields.values()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build a record from a loose JSON object, e.g. raw form state.
    ///
    /// `template` must be a string. Values that are not strings or numbers
    /// (booleans, null, nested objects, arrays) are silently dropped.
    pub fn from_json_map(mut map: Map<String, Value>) -> Result<Self, Error> {
        let template = match map.remove(TEMPLATE_KEY) {
            Some(Value::String(template)) => template,
            _ => return Err(Error::MissingField(TEMPLATE_KEY)),
        };

        let mut fields = BTreeMap::new();
        for (name, value) in map {
            match FieldValue::from_json(value) {
                Some(value) => {
                    fields.insert(name, value);
                }
                None => tracing::debug!(field = %name, "story_field_dropped"),
            }
        }

        Ok(Self { template, fields })
    }
}

impl Serialize for StoryRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kept: Vec<_> = self
            .fields
            .iter()
            .filter(|(name, value)| {
                let keep = value.is_serializable();
                if !keep {
                    tracing::debug!(field = %name, "story_field_dropped");
                }
                keep
            })
            .collect();

        let mut map = serializer.serialize_map(Some(kept.len() + 1))?;
        map.serialize_entry(TEMPLATE_KEY, &self.template)?;
        for (name, value) in kept {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StoryRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_json_map(map).map_err(de::Error::custom)
    }
}

/// Share payload for a recorded reading: the uploaded video plus the story
/// it reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    pub video_id: String,
    pub chortle: StoryRecord,
    /// Milliseconds since the Unix epoch.
    pub upload_time: i64,
}

impl LinkRecord {
    pub fn new(video_id: impl Into<String>, chortle: StoryRecord, upload_time: i64) -> Self {
        Self {
            video_id: video_id.into(),
            chortle,
            upload_time,
        }
    }
}
