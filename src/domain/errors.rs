// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("missing slug source: {0}")]
    MissingSource(String),
    #[error("slug configuration error: {0}")]
    Config(String),
    #[error("store query error: {0}")]
    Store(String),
}
