use std::sync::Arc;

use crate::application::ports::util::Slugifier;
use crate::config::SlugSettings;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::events::SlugObserver;
use crate::domain::slug::field_config::SlugFieldConfig;
use crate::domain::slug::locale;
use crate::domain::slug::record::SluggableRecord;
use crate::domain::slug::resolver::{UniquenessResolver, truncate_on_boundary};
use crate::domain::slug::store::SlugStore;
use crate::domain::slug::value_objects::Slug;

/// Result of one slug field's generation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlugOutcome {
    /// A new value was written onto the record.
    Set(Slug),
    /// The existing value was kept (idempotent no-op).
    Unchanged(Slug),
    /// A `slugging` observer cancelled the pass; the record was not touched.
    Vetoed,
}

/// Orchestrates one slug field: skip check, source extraction, slugify,
/// truncation, reserved check, uniqueness resolution, write-back.
pub struct SlugEngine {
    slugifier: Arc<dyn Slugifier>,
    resolver: UniquenessResolver,
    settings: SlugSettings,
    observers: Vec<Arc<dyn SlugObserver>>,
}

impl SlugEngine {
    pub fn new(
        store: Arc<dyn SlugStore>,
        slugifier: Arc<dyn Slugifier>,
        settings: SlugSettings,
    ) -> Self {
        Self {
            slugifier,
            resolver: UniquenessResolver::new(store),
            settings,
            observers: Vec::new(),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn SlugObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn settings(&self) -> &SlugSettings {
        &self.settings
    }

    /// Generate and write the slug for one field. `force` bypasses the skip
    /// check and always derives a fresh value (duplication, manual refresh).
    #[tracing::instrument(skip_all, fields(field = field_key))]
    pub async fn slug_for(
        &self,
        record: &mut dyn SluggableRecord,
        field_key: &str,
        config: &SlugFieldConfig,
        force: bool,
    ) -> DomainResult<SlugOutcome> {
        config.validate()?;

        let current = locale::read_attribute(&*record, field_key, &self.settings);
        if !force {
            if let Some(existing) = current.filter(|value| !value.is_empty()) {
                if !config.on_update() && record.identity().is_some() {
                    return Ok(SlugOutcome::Unchanged(Slug::new(existing)?));
                }
            }
        }

        let source_text = self.extract_source(&*record, config)?;
        let slugifier: &dyn Slugifier = match config.method() {
            Some(method) => method.as_ref(),
            None => self.slugifier.as_ref(),
        };
        let mut candidate = slugifier.slugify(&source_text, config.separator());
        if candidate.is_empty() {
            return Err(DomainError::MissingSource(format!(
                "source for {field_key:?} produced an empty slug"
            )));
        }

        if let Some(limit) = config.max_length() {
            candidate = truncate_on_boundary(&candidate, limit, config.separator());
            if candidate.is_empty() {
                return Err(DomainError::Config(format!(
                    "max_length {limit} truncated the candidate for {field_key:?} to nothing"
                )));
            }
        }

        for observer in &self.observers {
            if !observer.slugging(&*record, field_key, &candidate) {
                tracing::debug!(field = field_key, "slugging pass vetoed");
                return Ok(SlugOutcome::Vetoed);
            }
        }

        // A reserved candidate is a forced collision: it resolves as if the
        // base value already existed in the namespace.
        let reserved_hit = config.reserved().is_reserved(&candidate);
        let resolved = if config.unique() || reserved_hit {
            let exclude = record.identity();
            self.resolver
                .resolve(
                    &candidate,
                    field_key,
                    record.entity_name(),
                    exclude.as_ref(),
                    config,
                    reserved_hit,
                )
                .await?
        } else {
            candidate
        };

        locale::write_attribute(record, field_key, resolved.clone(), &self.settings);
        let slug = Slug::new(resolved)?;
        for observer in &self.observers {
            observer.slugged(&*record, field_key, slug.as_str());
        }
        Ok(SlugOutcome::Set(slug))
    }

    /// Join the configured source attributes, falling back to the declared
    /// fallback attribute when the primary source resolves empty.
    fn extract_source(
        &self,
        record: &dyn SluggableRecord,
        config: &SlugFieldConfig,
    ) -> DomainResult<String> {
        let mut parts = Vec::new();
        let mut missing = None;
        for name in config.source().names() {
            match locale::read_attribute(record, name, &self.settings) {
                Some(value) if !value.trim().is_empty() => parts.push(value),
                _ => {
                    missing = Some(name.to_string());
                    break;
                }
            }
        }

        if let Some(missing) = missing {
            if let Some(fallback) = config.source_fallback() {
                if let Some(value) = locale::read_attribute(record, fallback, &self.settings) {
                    if !value.trim().is_empty() {
                        return Ok(value);
                    }
                }
            }
            return Err(DomainError::MissingSource(format!(
                "attribute {missing:?} is empty or absent"
            )));
        }

        Ok(parts.join(config.separator()))
    }
}
