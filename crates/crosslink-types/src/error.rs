use thiserror::Error;

/// Errors produced by type construction and parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown platform: {0:?}")]
    UnknownPlatform(String),

    #[error("account id must not be empty")]
    EmptyAccountId,
}
