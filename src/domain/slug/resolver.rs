use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::field_config::{ReservedSlugs, SlugFieldConfig};
use crate::domain::slug::store::{SimilarSlugQuery, SlugStore};
use crate::domain::slug::value_objects::RecordId;

/// Resolves a candidate slug against the namespace of existing values.
///
/// The check-then-act window here is deliberate: the final write happens in
/// the caller's store commit, and a storage-level unique constraint is the
/// backstop for concurrent passes racing to the same suffix.
pub struct UniquenessResolver {
    store: Arc<dyn SlugStore>,
}

impl UniquenessResolver {
    pub fn new(store: Arc<dyn SlugStore>) -> Self {
        Self { store }
    }

    /// Determine the final slug for `base` within `entity`/`attribute`.
    ///
    /// With no conflict the base passes through untouched. Otherwise the
    /// suffix is one past the greatest strict `separator + positive integer`
    /// tail already present — gaps are never reused and non-numeric tails
    /// are ignored. `force_suffix` treats the base as occupied even when the
    /// store has no match (reserved values).
    pub async fn resolve(
        &self,
        base: &str,
        attribute: &str,
        entity: &str,
        exclude: Option<&RecordId>,
        config: &SlugFieldConfig,
        force_suffix: bool,
    ) -> DomainResult<String> {
        let separator = config.separator();
        let similar = self.find_similar(base, attribute, entity, exclude, config).await?;

        if !force_suffix && !similar.iter().any(|value| value == base) {
            return Ok(base.to_string());
        }

        let mut stem = base.to_string();
        let mut suffix = next_suffix(&stem, separator, &similar, config.reserved());

        if let Some(limit) = config.max_length() {
            loop {
                let tail_len = separator.len() + decimal_width(suffix);
                if stem.len() + tail_len <= limit {
                    break;
                }
                let allowed = limit.saturating_sub(tail_len);
                if allowed == 0 {
                    return Err(DomainError::Config(format!(
                        "max_length {limit} leaves no room for a uniqueness suffix"
                    )));
                }
                let shorter = truncate_on_boundary(&stem, allowed, separator);
                if shorter.is_empty() {
                    return Err(DomainError::Config(format!(
                        "max_length {limit} leaves no room for a uniqueness suffix"
                    )));
                }
                stem = shorter;
                // The shortened base occupies a different namespace slice.
                let similar = self
                    .find_similar(&stem, attribute, entity, exclude, config)
                    .await?;
                suffix = next_suffix(&stem, separator, &similar, config.reserved());
            }
        }

        let resolved = format!("{stem}{separator}{suffix}");
        tracing::debug!(base, %resolved, "resolved unique slug");
        Ok(resolved)
    }

    async fn find_similar(
        &self,
        slug: &str,
        attribute: &str,
        entity: &str,
        exclude: Option<&RecordId>,
        config: &SlugFieldConfig,
    ) -> DomainResult<Vec<String>> {
        let query = SimilarSlugQuery::new(entity, attribute, slug, config.separator())
            .excluding(exclude.cloned())
            .with_trashed(config.include_trashed());
        self.store.find_similar(&query).await
    }
}

/// One past the greatest numeric suffix among similar values, bumped over
/// any reserved collisions.
fn next_suffix(stem: &str, separator: &str, similar: &[String], reserved: &ReservedSlugs) -> u64 {
    let max = similar
        .iter()
        .filter_map(|value| parse_suffix(stem, separator, value))
        .max()
        .unwrap_or(0);
    let mut suffix = max + 1;
    while reserved.is_reserved(&format!("{stem}{separator}{suffix}")) {
        suffix += 1;
    }
    suffix
}

/// Extract the numeric suffix of `value` when it has the exact shape
/// `stem + separator + positive integer`; anything else is ignored.
fn parse_suffix(stem: &str, separator: &str, value: &str) -> Option<u64> {
    let tail = value.strip_prefix(stem)?.strip_prefix(separator)?;
    if tail.is_empty() || !tail.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    tail.parse::<u64>().ok().filter(|n| *n > 0)
}

/// Truncate a slug to at most `limit` bytes without cutting mid-token. A
/// first token longer than the limit has no boundary to respect and is hard
/// cut on a char boundary instead.
pub(crate) fn truncate_on_boundary(slug: &str, limit: usize, separator: &str) -> String {
    if slug.len() <= limit {
        return slug.to_string();
    }
    let mut out = String::new();
    for token in slug.split(separator) {
        let next_len = if out.is_empty() {
            token.len()
        } else {
            out.len() + separator.len() + token.len()
        };
        if next_len > limit {
            break;
        }
        if !out.is_empty() {
            out.push_str(separator);
        }
        out.push_str(token);
    }
    if out.is_empty() {
        hard_cut(slug, limit)
    } else {
        out
    }
}

fn hard_cut(slug: &str, limit: usize) -> String {
    let mut cut = limit.min(slug.len());
    while cut > 0 && !slug.is_char_boundary(cut) {
        cut -= 1;
    }
    slug[..cut].to_string()
}

fn decimal_width(mut n: u64) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}
