use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::slug::field_config::SluggableConfig;
use crate::domain::slug::value_objects::RecordId;

/// A record the engine can slug.
///
/// The record stays owned by the caller and its store; the engine only reads
/// and writes in-memory attribute values. Attribute values are plain strings
/// here — richer column types are the store adapter's concern.
pub trait SluggableRecord: Send + Sync {
    /// Namespace the record's slugs are unique within, e.g. a table name.
    fn entity_name(&self) -> &str;

    /// Identity once persisted; `None` for a record that does not exist in
    /// the store yet. An existing record must never collide with itself.
    fn identity(&self) -> Option<RecordId>;

    fn attribute(&self, key: &str) -> Option<String>;

    fn set_attribute(&mut self, key: &str, value: String);

    /// Declared slug field configuration. Read fresh on every slugging pass
    /// so locale expansion can follow process-wide settings.
    fn sluggable(&self) -> SluggableConfig;

    /// Capability check, satisfied by interface rather than reflection:
    /// records with per-locale attribute values return themselves here.
    fn as_translatable(&self) -> Option<&dyn TranslatableAttributes> {
        None
    }

    fn as_translatable_mut(&mut self) -> Option<&mut dyn TranslatableAttributes> {
        None
    }
}

/// Per-locale attribute values on a record.
pub trait TranslatableAttributes: Send + Sync {
    fn translatable_attributes(&self) -> Vec<String>;

    fn translation(&self, attribute: &str, locale: &str) -> Option<String>;

    fn set_translation(&mut self, attribute: &str, locale: &str, value: String);
}

/// Locale → value map, the shape a store persists for one translatable
/// attribute (typically a JSON column).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations(BTreeMap<String, String>);

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    pub fn set(&mut self, locale: impl Into<String>, value: impl Into<String>) {
        self.0.insert(locale.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<L, V> FromIterator<(L, V)> for Translations
where
    L: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (L, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(l, v)| (l.into(), v.into()))
                .collect(),
        )
    }
}
