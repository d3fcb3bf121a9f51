use std::collections::BTreeMap;
use std::path::Path;

use crate::{Error, Template};

/// Source of story templates. Injected wherever templates are needed so
/// the renderer never reaches for a global.
pub trait TemplateCatalog {
    fn get(&self, key: &str) -> Option<&Template>;

    /// All templates, ordered by key.
    fn templates(&self) -> Vec<&Template>;
}

/// In-memory catalog, validated on construction.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    templates: BTreeMap<String, Template>,
}

impl StaticCatalog {
    pub fn new(templates: impl IntoIterator<Item = Template>) -> Result<Self, Error> {
        let mut map = BTreeMap::new();
        for template in templates {
            template.validate()?;
            if map.insert(template.key.clone(), template).is_some() {
                tracing::warn!("catalog_duplicate_template_replaced");
            }
        }
        Ok(Self { templates: map })
    }

    /// The templates that ship with the app.
    pub fn builtin() -> Self {
        Self {
            templates: crate::builtin::templates()
                .into_iter()
                .map(|t| (t.key.clone(), t))
                .collect(),
        }
    }

    /// Parse a catalog shaped as `{ "<key>": { title, category, fields, text } }`.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let entries: BTreeMap<String, Template> = serde_json::from_str(json)?;
        Self::new(entries.into_iter().map(|(key, mut template)| {
            template.key = key;
            template
        }))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            templates = catalog.templates.len(),
            "catalog_loaded"
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateCatalog for StaticCatalog {
    fn get(&self, key: &str) -> Option<&Template> {
        self.templates.get(key)
    }

    fn templates(&self) -> Vec<&Template> {
        self.templates.values().collect()
    }
}
