//! Error types for catalog operations

use thiserror::Error;

use super::draft::ValidationErrors;
use super::types::ClassId;

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Class {0} not found")]
    NotFound(ClassId),

    #[error("Invalid class: {0}")]
    Validation(#[from] ValidationErrors),
}
