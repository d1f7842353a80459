use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::block::BlockSnapshot;
use crate::error::TypeError;

/// Opaque, stable account identifier.
///
/// Ordered lexicographically. The order carries no meaning beyond being a
/// deterministic last-resort tie-break.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    /// Create an identifier. Rejects empty or whitespace-only input.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TypeError::EmptyAccountId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccountId {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self.0)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the two accounts considered for a merge.
///
/// Read-only input: the caller loads it from storage and hands it to the
/// resolver. Moderation fields are flattened so the serialized form matches
/// the stored row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateIdentity {
    pub id: AccountId,
    /// First time this identity authenticated, if known.
    #[serde(default)]
    pub first_auth_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub block: BlockSnapshot,
}

impl CandidateIdentity {
    /// A never-blocked candidate created at `created_at`.
    pub fn new(id: AccountId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            first_auth_at: None,
            created_at,
            block: BlockSnapshot::default(),
        }
    }

    pub fn with_first_auth_at(mut self, at: DateTime<Utc>) -> Self {
        self.first_auth_at = Some(at);
        self
    }

    pub fn with_block(mut self, block: BlockSnapshot) -> Self {
        self.block = block;
        self
    }

    /// How long this human has been using the product: the first
    /// authentication time when known, else the record creation time.
    pub fn chronology_stamp(&self) -> DateTime<Utc> {
        self.first_auth_at.unwrap_or(self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn account_id_rejects_blank() {
        assert_eq!(AccountId::new(""), Err(TypeError::EmptyAccountId));
        assert_eq!(AccountId::new("  "), Err(TypeError::EmptyAccountId));
        assert!(AccountId::new("u-1").is_ok());
    }

    #[test]
    fn account_id_orders_lexicographically() {
        let a = AccountId::new("abc").unwrap();
        let b = AccountId::new("abd").unwrap();
        let c = AccountId::new("b").unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn chronology_prefers_first_auth() {
        let id = AccountId::new("u1").unwrap();
        let plain = CandidateIdentity::new(id.clone(), ts(500));
        assert_eq!(plain.chronology_stamp(), ts(500));

        let authed = CandidateIdentity::new(id, ts(500)).with_first_auth_at(ts(100));
        assert_eq!(authed.chronology_stamp(), ts(100));
    }

    #[test]
    fn deserialize_flat_row() {
        let json = r#"{
            "id": "u-7",
            "created_at": "2024-03-01T00:00:00Z",
            "is_blocked": true,
            "block_reason": "spam"
        }"#;
        let candidate: CandidateIdentity = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.id.as_str(), "u-7");
        assert!(candidate.first_auth_at.is_none());
        assert!(candidate.block.is_blocked);
        assert!(candidate.block.is_permanent());
        assert_eq!(candidate.block.block_reason.as_deref(), Some("spam"));
    }

    #[test]
    fn deserialize_rejects_empty_id() {
        let json = r#"{"id": "", "created_at": "2024-03-01T00:00:00Z"}"#;
        assert!(serde_json::from_str::<CandidateIdentity>(json).is_err());
    }
}
