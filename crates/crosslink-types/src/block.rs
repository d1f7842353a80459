use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Moderation state of a single account as stored.
///
/// `blocked_until == None` while `is_blocked` means a permanent block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockSnapshot {
    pub is_blocked: bool,
    pub blocked_at: Option<DateTime<Utc>>,
    pub blocked_until: Option<DateTime<Utc>>,
    pub block_reason: Option<String>,
}

impl BlockSnapshot {
    /// A block with no expiry.
    pub fn permanent(blocked_at: Option<DateTime<Utc>>, reason: Option<&str>) -> Self {
        Self {
            is_blocked: true,
            blocked_at,
            blocked_until: None,
            block_reason: reason.map(str::to_owned),
        }
    }

    /// A block that lifts at `until`.
    pub fn temporary(
        blocked_at: Option<DateTime<Utc>>,
        until: DateTime<Utc>,
        reason: Option<&str>,
    ) -> Self {
        Self {
            is_blocked: true,
            blocked_at,
            blocked_until: Some(until),
            block_reason: reason.map(str::to_owned),
        }
    }

    /// Blocked with no expiry.
    pub fn is_permanent(&self) -> bool {
        self.is_blocked && self.blocked_until.is_none()
    }
}

/// The moderation state a surviving account carries after a merge.
///
/// Only produced when at least one input was blocked, so `is_blocked` is
/// always `true`; it is kept as a field so the value maps 1:1 onto the
/// stored columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedBlockState {
    pub is_blocked: bool,
    pub blocked_at: Option<DateTime<Utc>>,
    pub blocked_until: Option<DateTime<Utc>>,
    pub block_reason: Option<String>,
}

impl MergedBlockState {
    pub fn is_permanent(&self) -> bool {
        self.blocked_until.is_none()
    }

    /// Whether the restriction still applies at `now`.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        match self.blocked_until {
            None => true,
            Some(until) => until > now,
        }
    }
}

impl From<MergedBlockState> for BlockSnapshot {
    fn from(state: MergedBlockState) -> Self {
        Self {
            is_blocked: state.is_blocked,
            blocked_at: state.blocked_at,
            blocked_until: state.blocked_until,
            block_reason: state.block_reason,
        }
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
    fn default_snapshot_is_unblocked() {
        let snap = BlockSnapshot::default();
        assert!(!snap.is_blocked);
        assert!(!snap.is_permanent());
    }

    #[test]
    fn permanent_and_temporary_constructors() {
        assert!(BlockSnapshot::permanent(None, Some("fraud")).is_permanent());
        assert!(!BlockSnapshot::temporary(None, ts(10), None).is_permanent());
    }

    #[test]
    fn merged_state_activity() {
        let temporary = MergedBlockState {
            is_blocked: true,
            blocked_at: Some(ts(0)),
            blocked_until: Some(ts(100)),
            block_reason: None,
        };
        assert!(temporary.is_active_at(ts(99)));
        assert!(!temporary.is_active_at(ts(100)));

        let permanent = MergedBlockState {
            blocked_until: None,
            ..temporary
        };
        assert!(permanent.is_permanent());
        assert!(permanent.is_active_at(ts(i32::MAX as i64)));
    }
}
