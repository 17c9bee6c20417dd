//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in commerce operations.
///
/// The cart store itself never fails; these surface while building a
/// [`Catalog`](crate::catalog::Catalog) from fixture data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Duplicate identifier in catalog data.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },
}
