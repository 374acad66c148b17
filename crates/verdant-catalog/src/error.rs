//! Catalog error types.

/// Errors that can occur when loading or validating a garden catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to read the catalog file from disk.
    #[error("failed to read catalog: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse catalog: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// The catalog lists no plants.
    #[error("catalog contains no plants")]
    Empty,

    /// Two entries share a name.
    #[error("duplicate plant name: {0}")]
    DuplicateName(String),
}
