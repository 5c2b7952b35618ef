use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::RecordId;

/// The single disjunctive lookup the resolver needs from a store: values of
/// `attribute` equal to `slug` or starting with `slug + separator`, within
/// the `entity` namespace, excluding one identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimilarSlugQuery {
    pub entity: String,
    pub attribute: String,
    pub slug: String,
    pub separator: String,
    pub exclude: Option<RecordId>,
    pub include_trashed: bool,
}

impl SimilarSlugQuery {
    pub fn new(
        entity: impl Into<String>,
        attribute: impl Into<String>,
        slug: impl Into<String>,
        separator: impl Into<String>,
    ) -> Self {
        Self {
            entity: entity.into(),
            attribute: attribute.into(),
            slug: slug.into(),
            separator: separator.into(),
            exclude: None,
            include_trashed: false,
        }
    }

    pub fn excluding(mut self, id: Option<RecordId>) -> Self {
        self.exclude = id;
        self
    }

    pub fn with_trashed(mut self, include_trashed: bool) -> Self {
        self.include_trashed = include_trashed;
        self
    }

    /// Whether a stored value falls inside this query. Adapters that cannot
    /// push the disjunction into their backend can filter with this.
    pub fn matches(&self, value: &str) -> bool {
        value == self.slug
            || (value.len() > self.slug.len()
                && value.starts_with(&self.slug)
                && value[self.slug.len()..].starts_with(&self.separator))
    }
}

#[async_trait]
pub trait SlugStore: Send + Sync {
    /// Existing slug values similar to the queried one. Ordering is not
    /// significant; the resolver scans the whole result.
    async fn find_similar(&self, query: &SimilarSlugQuery) -> DomainResult<Vec<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_and_prefixed_values() {
        let query = SimilarSlugQuery::new("posts", "slug", "my-post", "-");
        assert!(query.matches("my-post"));
        assert!(query.matches("my-post-1"));
        assert!(query.matches("my-post-extra"));
        assert!(!query.matches("my-postscript"));
        assert!(!query.matches("my"));
    }
}
