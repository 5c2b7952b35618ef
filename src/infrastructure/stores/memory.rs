use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::slug::store::{SimilarSlugQuery, SlugStore};
use crate::domain::slug::value_objects::RecordId;

#[derive(Clone, Debug)]
struct StoredSlug {
    entity: String,
    attribute: String,
    value: String,
    record: Option<RecordId>,
    trashed: bool,
}

/// In-memory slug store for tests, demos, and seeding fixtures.
#[derive(Default)]
pub struct InMemorySlugStore {
    inner: Mutex<Vec<StoredSlug>>,
}

impl InMemorySlugStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &self,
        entity: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
        record: Option<RecordId>,
    ) {
        self.push(entity, attribute, value, record, false);
    }

    pub fn insert_trashed(
        &self,
        entity: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
        record: Option<RecordId>,
    ) {
        self.push(entity, attribute, value, record, true);
    }

    fn push(
        &self,
        entity: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
        record: Option<RecordId>,
        trashed: bool,
    ) {
        let mut rows = self.inner.lock().unwrap();
        rows.push(StoredSlug {
            entity: entity.into(),
            attribute: attribute.into(),
            value: value.into(),
            record,
            trashed,
        });
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl SlugStore for InMemorySlugStore {
    async fn find_similar(&self, query: &SimilarSlugQuery) -> DomainResult<Vec<String>> {
        let rows = self.inner.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|row| row.entity == query.entity && row.attribute == query.attribute)
            .filter(|row| query.include_trashed || !row.trashed)
            .filter(|row| match (&query.exclude, &row.record) {
                (Some(excluded), Some(record)) => excluded != record,
                _ => true,
            })
            .filter(|row| query.matches(&row.value))
            .map(|row| row.value.clone())
            .collect())
    }
}
