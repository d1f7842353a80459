use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crosslink_types::{AccountId, CandidateIdentity};

use crate::seniority::cmp_seniority;

/// Which rule decided the master account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasterRule {
    /// Exactly one side holds a primary-platform identity.
    PrimaryIdentity,
    /// Both or neither hold it; the earlier chronology stamp won.
    Chronology,
    /// Chronology stamps were equal; the smaller account id won.
    IdTieBreak,
}

impl fmt::Display for MasterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrimaryIdentity => write!(f, "primary-identity"),
            Self::Chronology => write!(f, "chronology"),
            Self::IdTieBreak => write!(f, "id-tie-break"),
        }
    }
}

/// Master selection with both sides labeled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MasterDecision<'a> {
    pub master: &'a CandidateIdentity,
    pub secondary: &'a CandidateIdentity,
    pub rule: MasterRule,
}

/// Decide which of two candidates survives a merge.
///
/// First match wins:
/// 1. If exactly one side holds the primary-platform identity, it is master.
/// 2. Otherwise the earlier chronology stamp is master.
/// 3. Equal stamps: the lexicographically smaller id is master.
///
/// Swapping `a` with `b` (and their flags) yields the same master.
pub fn pick_master<'a>(
    a: &'a CandidateIdentity,
    b: &'a CandidateIdentity,
    has_primary_a: bool,
    has_primary_b: bool,
) -> MasterDecision<'a> {
    let decision = if has_primary_a != has_primary_b {
        let (master, secondary) = if has_primary_a { (a, b) } else { (b, a) };
        MasterDecision {
            master,
            secondary,
            rule: MasterRule::PrimaryIdentity,
        }
    } else {
        let rule = if a.chronology_stamp() == b.chronology_stamp() {
            MasterRule::IdTieBreak
        } else {
            MasterRule::Chronology
        };
        let (master, secondary) = match cmp_seniority(a, b) {
            Ordering::Greater => (b, a),
            _ => (a, b),
        };
        MasterDecision {
            master,
            secondary,
            rule,
        }
    };

    debug!(
        master = %decision.master.id,
        secondary = %decision.secondary.id,
        rule = %decision.rule,
        "master account selected"
    );
    decision
}

/// Id of the account that survives a merge. See [`pick_master`].
pub fn pick_master_account<'a>(
    a: &'a CandidateIdentity,
    b: &'a CandidateIdentity,
    has_primary_a: bool,
    has_primary_b: bool,
) -> &'a AccountId {
    &pick_master(a, b, has_primary_a, has_primary_b).master.id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{candidate, ts};

    #[test]
    fn primary_holder_wins_over_chronology() {
        let old = candidate("old", 100);
        let young = candidate("young", 900);
        assert_eq!(pick_master_account(&old, &young, false, true).as_str(), "young");
        assert_eq!(pick_master_account(&young, &old, true, false).as_str(), "young");

        let decision = pick_master(&old, &young, false, true);
        assert_eq!(decision.rule, MasterRule::PrimaryIdentity);
        assert_eq!(decision.secondary.id.as_str(), "old");
    }

    #[test]
    fn both_primary_uses_chronology() {
        let old = candidate("z-old", 100);
        let young = candidate("a-young", 900);
        let decision = pick_master(&young, &old, true, true);
        assert_eq!(decision.master.id.as_str(), "z-old");
        assert_eq!(decision.rule, MasterRule::Chronology);
    }

    #[test]
    fn neither_primary_uses_chronology() {
        let old = candidate("b", 100);
        let young = candidate("a", 200);
        assert_eq!(pick_master_account(&young, &old, false, false).as_str(), "b");
    }

    #[test]
    fn first_auth_at_drives_chronology() {
        // Created later, but authenticated long before the other record existed.
        let migrated = candidate("migrated", 5_000).with_first_auth_at(ts(10));
        let fresh = candidate("fresh", 1_000);
        assert_eq!(
            pick_master_account(&fresh, &migrated, false, false).as_str(),
            "migrated"
        );
    }

    #[test]
    fn equal_stamps_pick_smaller_id() {
        let a = candidate("acc-a", 100);
        let b = candidate("acc-b", 100);
        let decision = pick_master(&b, &a, false, false);
        assert_eq!(decision.master.id.as_str(), "acc-a");
        assert_eq!(decision.rule, MasterRule::IdTieBreak);
    }

    #[test]
    fn stamp_equality_ignores_which_field_supplied_it() {
        let via_auth = candidate("b", 900).with_first_auth_at(ts(100));
        let via_created = candidate("a", 100);
        assert_eq!(
            pick_master(&via_auth, &via_created, true, true).rule,
            MasterRule::IdTieBreak
        );
    }

    #[test]
    fn rule_display() {
        assert_eq!(MasterRule::PrimaryIdentity.to_string(), "primary-identity");
        assert_eq!(MasterRule::IdTieBreak.to_string(), "id-tie-break");
    }
}
