//! Error types for the link-code codec.
//!
//! None of these cross the public pure functions: the URL builders catch
//! them, log them, and degrade to a fallback. They surface only from
//! configuration loading and the code generator.

use thiserror::Error;

/// Errors that can occur while building links or loading configuration.
#[derive(Debug, Error)]
pub enum LinkError {
    /// The string is not a parsable absolute URL.
    #[error("invalid url {url:?}: {source}")]
    UrlParse {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The URL parsed, but its scheme gives no guarantees about query and
    /// fragment handling.
    #[error("unsupported url scheme {scheme:?} in {url:?}; expected http or https")]
    UnsupportedScheme { url: String, scheme: String },

    /// Requested code body length is outside the allowed range.
    #[error("link code length must be between {min} and {max}, got {length}")]
    InvalidCodeLength { length: usize, min: usize, max: usize },

    /// Configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O error while reading configuration.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for codec operations.
pub type Result<T> = std::result::Result<T, LinkError>;
