use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::locale::LOCALE_DELIMITER;
use crate::domain::slug::store::{SimilarSlugQuery, SlugStore};

/// Postgres-backed slug store.
///
/// Runs the similar-slug lookup as a single disjunctive query:
/// `attribute = $1 OR attribute LIKE $2` within the entity's table. A
/// locale-qualified attribute (`slug___en`) is read from a JSON column via
/// `->>`, matching stores that persist translations as one JSON value per
/// attribute. The query namespace (`SimilarSlugQuery::entity`) is the table
/// name.
pub struct PostgresSlugStore {
    pool: PgPool,
    id_column: String,
    soft_delete_column: Option<String>,
}

impl PostgresSlugStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            id_column: "id".to_string(),
            soft_delete_column: None,
        }
    }

    pub fn with_id_column(mut self, column: impl Into<String>) -> Self {
        self.id_column = column.into();
        self
    }

    /// Column that marks soft-deleted rows (e.g. `deleted_at`). Without it,
    /// `include_trashed` has no effect because the table has no trash state.
    pub fn with_soft_delete_column(mut self, column: impl Into<String>) -> Self {
        self.soft_delete_column = Some(column.into());
        self
    }
}

#[async_trait]
impl SlugStore for PostgresSlugStore {
    async fn find_similar(&self, query: &SimilarSlugQuery) -> DomainResult<Vec<String>> {
        ensure_identifier(&query.entity)?;
        ensure_identifier(&self.id_column)?;
        if let Some(column) = &self.soft_delete_column {
            ensure_identifier(column)?;
        }
        let column = column_expr(&query.attribute)?;

        let pattern = format!(
            "{}{}%",
            escape_like(&query.slug),
            escape_like(&query.separator)
        );

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {column} FROM \"{}\" WHERE ({column} = ",
            query.entity
        ));
        builder.push_bind(query.slug.clone());
        builder.push(format!(" OR {column} LIKE "));
        builder.push_bind(pattern);
        builder.push(")");

        if let Some(exclude) = &query.exclude {
            builder.push(format!(" AND \"{}\"::text <> ", self.id_column));
            builder.push_bind(exclude.as_str().to_string());
        }

        if !query.include_trashed {
            if let Some(column) = &self.soft_delete_column {
                builder.push(format!(" AND \"{column}\" IS NULL"));
            }
        }

        builder
            .build_query_scalar()
            .fetch_all(&self.pool)
            .await
            .map_err(map_store)
    }
}

// Store failures are carried through uninterpreted; retrying on constraint
// violations is the caller's responsibility.
fn map_store(err: sqlx::Error) -> DomainError {
    DomainError::Store(err.to_string())
}

fn ensure_identifier(name: &str) -> DomainResult<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(DomainError::Config(format!(
            "{name:?} is not a valid SQL identifier"
        )))
    }
}

/// Column expression for an attribute name; a locale-qualified name turns
/// into JSON text extraction on the base column.
fn column_expr(attribute: &str) -> DomainResult<String> {
    if let Some((base, locale)) = attribute.rsplit_once(LOCALE_DELIMITER) {
        if !base.is_empty() && !locale.is_empty() {
            ensure_identifier(base)?;
            ensure_identifier(locale)?;
            return Ok(format!("\"{base}\"->>'{locale}'"));
        }
    }
    ensure_identifier(attribute)?;
    Ok(format!("\"{attribute}\""))
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
