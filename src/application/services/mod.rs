// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::util::Slugifier;
use crate::config::SlugSettings;
use crate::domain::errors::DomainError;
use crate::domain::slug::engine::{SlugEngine, SlugOutcome};
use crate::domain::slug::events::SlugObserver;
use crate::domain::slug::locale;
use crate::domain::slug::record::SluggableRecord;
use crate::domain::slug::store::SlugStore;

/// Outcome of one field in a slugging pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SluggedField {
    pub field: String,
    pub outcome: SlugOutcome,
}

/// Record lifecycle entry points for slugging.
///
/// Callers wire these to their store's hook points: `before_create` and
/// `before_update` ahead of a commit, `regenerate` on demand — duplication
/// of a record must regenerate with `force` so the copy never keeps the
/// original's slug.
pub struct SlugLifecycle {
    engine: SlugEngine,
}

impl SlugLifecycle {
    /// Settings are validated here, before any slugging occurs; localized
    /// mode without a locale list never gets as far as a record.
    pub fn new(
        store: Arc<dyn SlugStore>,
        slugifier: Arc<dyn Slugifier>,
        settings: SlugSettings,
    ) -> ApplicationResult<Self> {
        settings.validate()?;
        Ok(Self {
            engine: SlugEngine::new(store, slugifier, settings),
        })
    }

    pub fn with_observer(mut self, observer: Arc<dyn SlugObserver>) -> Self {
        self.engine = self.engine.with_observer(observer);
        self
    }

    pub fn engine(&self) -> &SlugEngine {
        &self.engine
    }

    #[tracing::instrument(skip_all, fields(entity = record.entity_name()))]
    pub async fn before_create(
        &self,
        record: &mut dyn SluggableRecord,
    ) -> ApplicationResult<Vec<SluggedField>> {
        self.run(record, false).await
    }

    #[tracing::instrument(skip_all, fields(entity = record.entity_name()))]
    pub async fn before_update(
        &self,
        record: &mut dyn SluggableRecord,
    ) -> ApplicationResult<Vec<SluggedField>> {
        self.run(record, false).await
    }

    /// Manual entry point. With `force`, existing values are discarded and
    /// every field derives a fresh, independently-unique slug.
    #[tracing::instrument(skip_all, fields(entity = record.entity_name(), force))]
    pub async fn regenerate(
        &self,
        record: &mut dyn SluggableRecord,
        force: bool,
    ) -> ApplicationResult<Vec<SluggedField>> {
        self.run(record, force).await
    }

    async fn run(
        &self,
        record: &mut dyn SluggableRecord,
        force: bool,
    ) -> ApplicationResult<Vec<SluggedField>> {
        let settings = self.engine.settings();
        if settings.is_localized() && record.as_translatable().is_none() {
            return Err(ApplicationError::Domain(DomainError::Config(format!(
                "localized slugging is enabled but {:?} records expose no translatable attributes",
                record.entity_name()
            ))));
        }

        // Declared config is read fresh every pass; the locale expansion
        // depends on process-wide settings, not the record type definition.
        let declared = record.sluggable();
        declared.validate().map_err(ApplicationError::Domain)?;
        let expanded = locale::expand(declared, &*record, settings);

        let mut outcomes = Vec::with_capacity(expanded.len());
        let fields: Vec<_> = expanded
            .iter()
            .map(|(field, config)| (field.to_string(), config.clone()))
            .collect();
        for (field, config) in fields {
            let outcome = self.engine.slug_for(record, &field, &config, force).await?;
            outcomes.push(SluggedField { field, outcome });
        }
        Ok(outcomes)
    }
}
