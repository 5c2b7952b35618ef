//! Slug derivation and uniqueness policy for persisted records.
//!
//! This crate decides *when* to slug, *from what*, and *how to disambiguate*.
//! Text normalization is delegated to a [`Slugifier`] port and persistence to
//! a [`SlugStore`] port, so the engine works against any backing store that
//! can answer one disjunctive "similar slugs" query.
//!
//! [`Slugifier`]: application::ports::util::Slugifier
//! [`SlugStore`]: domain::slug::store::SlugStore

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::error::{ApplicationError, ApplicationResult};
pub use application::ports::util::Slugifier;
pub use application::services::{SlugLifecycle, SluggedField};
pub use config::{ConfigError, SlugSettings};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::slug::{
    RecordId, ReservedSlugs, SimilarSlugQuery, Slug, SlugEngine, SlugFieldConfig, SlugObserver,
    SlugOutcome, SlugSource, SlugStore, SluggableConfig, SluggableRecord, TranslatableAttributes,
    Translations, UniquenessResolver,
};
pub use infrastructure::stores::{InMemorySlugStore, PostgresSlugStore};
pub use infrastructure::util::DefaultSlugifier;
