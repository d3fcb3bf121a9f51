use std::collections::{HashMap, HashSet};

use chortle_codec::{FieldValue, StoryRecord};
use serde::{Deserialize, Serialize};

use crate::Error;
use crate::render::placeholders;

/// What kind of word a blank asks for. Only `Number` changes how the answer
/// is stored; the rest drive the prompt shown to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Noun,
    PluralNoun,
    Verb,
    Adjective,
    Adverb,
    Place,
    Name,
    Exclamation,
    Number,
    #[default]
    #[serde(other)]
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
}

impl Field {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
        }
    }
}

/// A story with `{field}` placeholders and the blanks that fill them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Catalog key. Filled from the map key when loading a JSON catalog.
    #[serde(default)]
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub fields: Vec<Field>,
    pub text: String,
}

impl Template {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        placeholders(&self.text)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Every placeholder must name a declared field, and field names must be
    /// unique. Declared fields the text never uses are allowed.
    pub fn validate(&self) -> Result<(), Error> {
        let mut names = HashSet::new();
        for field in &self.fields {
            if !names.insert(field.name.as_str()) {
                return Err(Error::DuplicateField {
                    template: self.key.clone(),
                    field: field.name.clone(),
                });
            }
        }

        if let Some(missing) = self.placeholders().into_iter().find(|p| !names.contains(p)) {
            return Err(Error::UndeclaredPlaceholder {
                template: self.key.clone(),
                placeholder: missing.to_string(),
            });
        }

        Ok(())
    }

    /// Turn the wizard's raw answers into a shareable record.
    ///
    /// Answers are trimmed; every declared field needs a non-empty answer.
    /// `number` fields are stored as numbers, everything else as text.
    /// Answers for names the template does not declare are ignored.
    pub fn build_record(&self, answers: &HashMap<String, String>) -> Result<StoryRecord, Error> {
        let mut record = StoryRecord::new(self.key.clone());

        for field in &self.fields {
            let answer = answers
                .get(&field.name)
                .map(|a| a.trim())
                .filter(|a| !a.is_empty())
                .ok_or_else(|| Error::MissingAnswer(field.name.clone()))?;

            let value = match field.kind {
                FieldKind::Number => answer
                    .parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .map(FieldValue::Number)
                    .ok_or_else(|| Error::InvalidNumber {
                        field: field.name.clone(),
                        value: answer.to_string(),
                    })?,
                _ => FieldValue::Text(answer.to_string()),
            };

            record.insert(field.name.clone(), value);
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> Template {
        Template {
            key: "zoo".into(),
            title: "Zoo".into(),
            category: "animals".into(),
            fields: vec![
                Field::new("animal", "An animal", FieldKind::Noun),
                Field::new("count", "A number", FieldKind::Number),
            ],
            text: "I saw {count} {animal}s. The {animal} saw me.".into(),
        }
    }

    fn answers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn placeholders_are_unique_and_ordered() {
        assert_eq!(template().placeholders(), ["count", "animal"]);
    }

    #[test]
    fn validate_catches_undeclared_placeholder() {
        let mut t = template();
        t.text.push_str(" {mystery}");
        assert!(matches!(
            t.validate(),
            Err(Error::UndeclaredPlaceholder { placeholder, .. }) if placeholder == "mystery"
        ));
    }

    #[test]
    fn validate_catches_duplicate_field() {
        let mut t = template();
        t.fields.push(Field::new("animal", "Again", FieldKind::Noun));
        assert!(matches!(t.validate(), Err(Error::DuplicateField { .. })));
    }

    #[test]
    fn build_record_parses_numbers_and_trims() {
        let record = template()
            .build_record(&answers(&[("animal", "  wombat "), ("count", "12"), ("extra", "x")]))
            .unwrap();

        assert_eq!(record.template(), "zoo");
        assert_eq!(record.get("animal"), Some(&FieldValue::from("wombat")));
        assert_eq!(record.get("count"), Some(&FieldValue::Number(12.0)));
        assert!(record.get("extra").is_none());
    }

    #[test]
    fn build_record_rejects_blank_and_bad_numbers() {
        let t = template();
        assert!(matches!(
            t.build_record(&answers(&[("animal", "   "), ("count", "1")])),
            Err(Error::MissingAnswer(name)) if name == "animal"
        ));
        assert!(matches!(
            t.build_record(&answers(&[("animal", "cat"), ("count", "lots")])),
            Err(Error::InvalidNumber { .. })
        ));
        assert!(matches!(
            t.build_record(&answers(&[("animal", "cat"), ("count", "inf")])),
            Err(Error::InvalidNumber { .. })
        ));
    }

    #[test]
    fn unknown_field_type_falls_back_to_text() {
        let field: Field =
            serde_json::from_str(r#"{"name":"x","label":"X","type":"color"}"#).unwrap();
        assert_eq!(field.kind, FieldKind::Text);

        let field: Field = serde_json::from_str(r#"{"name":"x","label":"X"}"#).unwrap();
        assert_eq!(field.kind, FieldKind::Text);

        let field: Field =
            serde_json::from_str(r#"{"name":"x","label":"X","type":"plural-noun"}"#).unwrap();
        assert_eq!(field.kind, FieldKind::PluralNoun);
    }
}
