//! URL fragment state for clients that route inside the hash.
//!
//! Three fragment conventions occur in the wild:
//!
//! | fragment            | shape                         |
//! |---------------------|-------------------------------|
//! | `#/promo?tab=tasks` | [`FragmentShape::PathAndQuery`] |
//! | `#tab=tasks&x=1`    | [`FragmentShape::QueryOnly`]    |
//! | `#/promo`           | [`FragmentShape::PathOnly`]     |
//!
//! A fragment starting with `/` is always a path, even when it contains `=`.
//!
//! Parsing yields one tagged variant and [`fmt::Display`] re-serializes it
//! in the shape it was found in. Paths are kept byte for byte. Parameters
//! are decoded and written back form-encoded, so their decoded values
//! survive but the raw text may not: `a%20b` becomes `a+b`, `~` becomes
//! `%7E`, and a bare `flag` becomes `flag=`.

use std::fmt;

use crate::url_util::{decode_pairs, encode_pairs, set_pair};

/// A parsed URL fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FragmentShape {
    /// `path?k=v&...`
    PathAndQuery {
        path: String,
        params: Vec<(String, String)>,
    },
    /// `k=v&...` with no path.
    QueryOnly { params: Vec<(String, String)> },
    /// A bare path, possibly empty.
    PathOnly { path: String },
}

impl FragmentShape {
    /// Parse a fragment without its leading `#`.
    pub fn parse(fragment: &str) -> Self {
        if let Some((path, query)) = fragment.split_once('?') {
            Self::PathAndQuery {
                path: path.to_string(),
                params: decode_pairs(query),
            }
        } else if fragment.starts_with('/') || !fragment.contains('=') {
            Self::PathOnly {
                path: fragment.to_string(),
            }
        } else {
            Self::QueryOnly {
                params: decode_pairs(fragment),
            }
        }
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            Self::PathAndQuery { path, .. } | Self::PathOnly { path } => Some(path.as_str()),
            Self::QueryOnly { .. } => None,
        }
    }

    pub fn params(&self) -> &[(String, String)] {
        match self {
            Self::PathAndQuery { params, .. } | Self::QueryOnly { params } => params.as_slice(),
            Self::PathOnly { .. } => &[],
        }
    }

    /// Value of the first parameter named `key`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set a parameter, keeping the path and all unrelated parameters.
    ///
    /// A bare path gains a query part; an empty fragment becomes query-only.
    pub fn set_param(&mut self, key: &str, value: &str) {
        if let Self::PathOnly { path } = self {
            let path = std::mem::take(path);
            *self = if path.is_empty() {
                Self::QueryOnly { params: Vec::new() }
            } else {
                Self::PathAndQuery {
                    path,
                    params: Vec::new(),
                }
            };
        }
        if let Self::PathAndQuery { params, .. } | Self::QueryOnly { params } = self {
            set_pair(params, key, value);
        }
    }
}

impl fmt::Display for FragmentShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathAndQuery { path, params } => write!(f, "{path}?{}", encode_pairs(params)),
            Self::QueryOnly { params } => f.write_str(&encode_pairs(params)),
            Self::PathOnly { path } => f.write_str(path),
        }
    }
}
