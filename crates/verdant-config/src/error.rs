//! Errors raised while persisting the garden configuration.

/// Failure modes of `config.ron` handling.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `config.ron` exists but could not be read.
    #[error("could not read config.ron: {0}")]
    ReadError(#[source] std::io::Error),

    /// The config directory or file could not be written.
    #[error("could not write config.ron: {0}")]
    WriteError(#[source] std::io::Error),

    /// `config.ron` is not valid RON for [`crate::Config`].
    #[error("invalid config.ron: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    #[error("could not serialize config: {0}")]
    SerializeError(#[source] ron::Error),
}
