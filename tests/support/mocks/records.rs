// tests/support/mocks/records.rs
use std::collections::HashMap;

use sluggable_core::domain::slug::field_config::SluggableConfig;
use sluggable_core::domain::slug::record::{
    SluggableRecord, TranslatableAttributes, Translations,
};
use sluggable_core::domain::slug::value_objects::RecordId;

/// テスト用の投稿レコード
pub struct Post {
    pub id: Option<RecordId>,
    pub attributes: HashMap<String, String>,
    pub config: SluggableConfig,
}

impl Post {
    pub fn new(config: SluggableConfig) -> Self {
        Self {
            id: None,
            attributes: HashMap::new(),
            config,
        }
    }

    pub fn persisted(id: &str, config: SluggableConfig) -> Self {
        let mut post = Self::new(config);
        post.id = Some(RecordId::new(id).unwrap());
        post
    }

    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }
}

impl SluggableRecord for Post {
    fn entity_name(&self) -> &str {
        "posts"
    }

    fn identity(&self) -> Option<RecordId> {
        self.id.clone()
    }

    fn attribute(&self, key: &str) -> Option<String> {
        self.attributes.get(key).cloned()
    }

    fn set_attribute(&mut self, key: &str, value: String) {
        self.attributes.insert(key.to_string(), value);
    }

    fn sluggable(&self) -> SluggableConfig {
        self.config.clone()
    }
}

/// 多言語属性を持つ投稿レコード
pub struct LocalizedPost {
    pub id: Option<RecordId>,
    pub attributes: HashMap<String, String>,
    pub translations: HashMap<String, Translations>,
    pub translatable: Vec<String>,
    pub config: SluggableConfig,
}

impl LocalizedPost {
    pub fn new(config: SluggableConfig, translatable: &[&str]) -> Self {
        Self {
            id: None,
            attributes: HashMap::new(),
            translations: HashMap::new(),
            translatable: translatable.iter().map(|s| s.to_string()).collect(),
            config,
        }
    }

    pub fn with_translation(mut self, attribute: &str, locale: &str, value: &str) -> Self {
        self.translations
            .entry(attribute.to_string())
            .or_default()
            .set(locale, value);
        self
    }
}

impl SluggableRecord for LocalizedPost {
    fn entity_name(&self) -> &str {
        "posts"
    }

    fn identity(&self) -> Option<RecordId> {
        self.id.clone()
    }

    fn attribute(&self, key: &str) -> Option<String> {
        self.attributes.get(key).cloned()
    }

    fn set_attribute(&mut self, key: &str, value: String) {
        self.attributes.insert(key.to_string(), value);
    }

    fn sluggable(&self) -> SluggableConfig {
        self.config.clone()
    }

    fn as_translatable(&self) -> Option<&dyn TranslatableAttributes> {
        Some(self)
    }

    fn as_translatable_mut(&mut self) -> Option<&mut dyn TranslatableAttributes> {
        Some(self)
    }
}

impl TranslatableAttributes for LocalizedPost {
    fn translatable_attributes(&self) -> Vec<String> {
        self.translatable.clone()
    }

    fn translation(&self, attribute: &str, locale: &str) -> Option<String> {
        self.translations
            .get(attribute)
            .and_then(|t| t.get(locale))
            .map(str::to_string)
    }

    fn set_translation(&mut self, attribute: &str, locale: &str, value: String) {
        self.translations
            .entry(attribute.to_string())
            .or_default()
            .set(locale, value);
    }
}
