use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::application::ports::util::Slugifier;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::locale;

pub const DEFAULT_SEPARATOR: &str = "-";

/// Which record attribute(s) feed a slug. A list is concatenated with the
/// field separator before slugifying.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlugSource {
    Attribute(String),
    Attributes(Vec<String>),
}

impl SlugSource {
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::Attribute(name) => vec![name.as_str()],
            Self::Attributes(names) => names.iter().map(String::as_str).collect(),
        }
    }

    /// Rewrite every source name to its locale-qualified form.
    pub fn localized(&self, locale_code: &str) -> Self {
        match self {
            Self::Attribute(name) => Self::Attribute(locale::qualify(name, locale_code)),
            Self::Attributes(names) => Self::Attributes(
                names
                    .iter()
                    .map(|name| locale::qualify(name, locale_code))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for SlugSource {
    fn from(value: &str) -> Self {
        Self::Attribute(value.to_string())
    }
}

impl From<String> for SlugSource {
    fn from(value: String) -> Self {
        Self::Attribute(value)
    }
}

/// Forbidden slug values, as a literal set and/or a rule predicate.
#[derive(Clone, Debug, Default)]
pub struct ReservedSlugs {
    literals: HashSet<String>,
    pattern: Option<Regex>,
}

impl ReservedSlugs {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn literals<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            literals: values.into_iter().map(Into::into).collect(),
            pattern: None,
        }
    }

    pub fn with_pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty() && self.pattern.is_none()
    }

    pub fn is_reserved(&self, slug: &str) -> bool {
        if self.literals.contains(slug) {
            return true;
        }
        self.pattern.as_ref().is_some_and(|p| p.is_match(slug))
    }
}

/// Configuration for one slug field on a record type.
#[derive(Clone)]
pub struct SlugFieldConfig {
    source: SlugSource,
    separator: String,
    max_length: Option<usize>,
    unique: bool,
    on_update: bool,
    reserved: ReservedSlugs,
    method: Option<Arc<dyn Slugifier>>,
    include_trashed: bool,
    source_fallback: Option<String>,
}

impl SlugFieldConfig {
    pub fn new(source: impl Into<SlugSource>) -> Self {
        Self {
            source: source.into(),
            separator: DEFAULT_SEPARATOR.to_string(),
            max_length: None,
            unique: true,
            on_update: false,
            reserved: ReservedSlugs::none(),
            method: None,
            include_trashed: false,
            source_fallback: None,
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn with_on_update(mut self, on_update: bool) -> Self {
        self.on_update = on_update;
        self
    }

    pub fn with_reserved(mut self, reserved: ReservedSlugs) -> Self {
        self.reserved = reserved;
        self
    }

    /// Per-field override of the slugify strategy.
    pub fn with_method(mut self, method: Arc<dyn Slugifier>) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_include_trashed(mut self, include_trashed: bool) -> Self {
        self.include_trashed = include_trashed;
        self
    }

    /// Attribute consulted when the primary source resolves empty.
    pub fn with_source_fallback(mut self, attribute: impl Into<String>) -> Self {
        self.source_fallback = Some(attribute.into());
        self
    }

    pub(crate) fn with_source(mut self, source: SlugSource) -> Self {
        self.source = source;
        self
    }

    pub fn source(&self) -> &SlugSource {
        &self.source
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn unique(&self) -> bool {
        self.unique
    }

    pub fn on_update(&self) -> bool {
        self.on_update
    }

    pub fn reserved(&self) -> &ReservedSlugs {
        &self.reserved
    }

    pub fn method(&self) -> Option<&Arc<dyn Slugifier>> {
        self.method.as_ref()
    }

    pub fn include_trashed(&self) -> bool {
        self.include_trashed
    }

    pub fn source_fallback(&self) -> Option<&str> {
        self.source_fallback.as_deref()
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.separator.is_empty() {
            return Err(DomainError::Config("separator cannot be empty".into()));
        }
        let names = self.source.names();
        if names.is_empty() {
            return Err(DomainError::Config(
                "slug source must name at least one attribute".into(),
            ));
        }
        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(DomainError::Config(
                "slug source attribute names cannot be empty".into(),
            ));
        }
        if self.max_length == Some(0) {
            return Err(DomainError::Config("max_length must be positive".into()));
        }
        Ok(())
    }
}

impl fmt::Debug for SlugFieldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlugFieldConfig")
            .field("source", &self.source)
            .field("separator", &self.separator)
            .field("max_length", &self.max_length)
            .field("unique", &self.unique)
            .field("on_update", &self.on_update)
            .field("reserved", &self.reserved)
            .field("method", &self.method.as_ref().map(|_| "custom"))
            .field("include_trashed", &self.include_trashed)
            .field("source_fallback", &self.source_fallback)
            .finish()
    }
}

/// Slug field declarations for one record type, keyed by slug field name.
/// Deterministic iteration order keeps multi-field passes stable.
#[derive(Clone, Debug, Default)]
pub struct SluggableConfig {
    entries: BTreeMap<String, SlugFieldConfig>,
}

impl SluggableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: impl Into<String>, config: SlugFieldConfig) -> Self {
        self.entries.insert(key.into(), config);
        self
    }

    pub fn get(&self, key: &str) -> Option<&SlugFieldConfig> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, config: SlugFieldConfig) {
        self.entries.insert(key.into(), config);
    }

    pub fn remove(&mut self, key: &str) -> Option<SlugFieldConfig> {
        self.entries.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SlugFieldConfig)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn validate(&self) -> DomainResult<()> {
        for (key, config) in &self.entries {
            if key.trim().is_empty() {
                return Err(DomainError::Config(
                    "slug field name cannot be empty".into(),
                ));
            }
            config.validate()?;
        }
        Ok(())
    }
}
