// tests/support/mocks/stores.rs
use async_trait::async_trait;

use sluggable_core::domain::errors::{DomainError, DomainResult};
use sluggable_core::domain::slug::store::{SimilarSlugQuery, SlugStore};

/// 常に失敗するストア
pub struct FailingStore;

#[async_trait]
impl SlugStore for FailingStore {
    async fn find_similar(&self, _query: &SimilarSlugQuery) -> DomainResult<Vec<String>> {
        Err(DomainError::Store("connection refused".into()))
    }
}
