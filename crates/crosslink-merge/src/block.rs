//! Moderation state merging.
//!
//! The merged account is always at least as restricted as either input:
//! creating a second account must never be a way out of a block.

use tracing::debug;

use crosslink_types::{CandidateIdentity, MergedBlockState};

use crate::seniority::{cmp_seniority, most_senior};

/// Merge the moderation state of two accounts.
///
/// Returns `None` when neither account is blocked. Otherwise:
/// - `blocked_at` is the earliest known block start of the blocked accounts.
/// - Any permanent block makes the result permanent; the most senior
///   permanently blocked account supplies the preferred reason.
/// - With only temporary blocks, the latest `blocked_until` wins, ties going
///   to the more senior account.
/// - The reason falls back to the first reason that is set (even an empty
///   string) in input order when the selected account has none.
///
/// The caller labels `master`/`secondary` with [`crate::pick_master`]; the
/// result does not depend on that labeling.
pub fn resolve_merged_block_state(
    master: &CandidateIdentity,
    secondary: &CandidateIdentity,
) -> Option<MergedBlockState> {
    let blocked: Vec<&CandidateIdentity> = [master, secondary]
        .into_iter()
        .filter(|c| c.block.is_blocked)
        .collect();
    if blocked.is_empty() {
        return None;
    }

    let blocked_at = blocked.iter().filter_map(|c| c.block.blocked_at).min();

    let selected = match most_senior(blocked.iter().copied().filter(|c| c.block.is_permanent())) {
        Some(permanent) => permanent,
        None => blocked.iter().copied().max_by(|a, b| {
            a.block
                .blocked_until
                .cmp(&b.block.blocked_until)
                .then_with(|| cmp_seniority(b, a))
        })?,
    };

    let block_reason = selected
        .block
        .block_reason
        .clone()
        .or_else(|| blocked.iter().find_map(|c| c.block.block_reason.clone()));

    let state = MergedBlockState {
        is_blocked: true,
        blocked_at,
        blocked_until: selected.block.blocked_until,
        block_reason,
    };
    debug!(
        selected = %selected.id,
        permanent = state.is_permanent(),
        "merged block state resolved"
    );
    Some(state)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::test_support::ts;
    use crosslink_types::{AccountId, BlockSnapshot};
    use proptest::prelude::*;

    fn arb_block() -> impl Strategy<Value = BlockSnapshot> {
        let reason = proptest::option::of("[a-z]{1,6}");
        prop_oneof![
            Just(BlockSnapshot::default()),
            (proptest::option::of(0i64..100), reason.clone())
                .prop_map(|(at, r)| BlockSnapshot::permanent(at.map(ts), r.as_deref())),
            (proptest::option::of(0i64..100), 0i64..100, reason)
                .prop_map(|(at, until, r)| BlockSnapshot::temporary(at.map(ts), ts(until), r.as_deref())),
        ]
    }

    fn arb_candidate() -> impl Strategy<Value = CandidateIdentity> {
        ("[a-c]{1,2}", 0i64..20, arb_block()).prop_map(|(id, created, block)| {
            CandidateIdentity::new(AccountId::new(id).unwrap(), ts(created)).with_block(block)
        })
    }

    proptest! {
        #[test]
        fn none_iff_neither_blocked(a in arb_candidate(), b in arb_candidate()) {
            let state = resolve_merged_block_state(&a, &b);
            prop_assert_eq!(state.is_none(), !a.block.is_blocked && !b.block.is_blocked);
        }

        /// Labeling does not change the merged state.
        #[test]
        fn merge_is_order_independent(a in arb_candidate(), b in arb_candidate()) {
            prop_assume!(a.id != b.id);
            prop_assert_eq!(
                resolve_merged_block_state(&a, &b),
                resolve_merged_block_state(&b, &a)
            );
        }

        /// The result is at least as restrictive as each blocked input.
        #[test]
        fn merge_never_relaxes_a_block(a in arb_candidate(), b in arb_candidate()) {
            if let Some(state) = resolve_merged_block_state(&a, &b) {
                for input in [&a, &b].into_iter().filter(|c| c.block.is_blocked) {
                    match (state.blocked_until, input.block.blocked_until) {
                        (None, _) => {}
                        (Some(_), None) => prop_assert!(false, "permanent block relaxed"),
                        (Some(merged), Some(own)) => prop_assert!(merged >= own),
                    }
                }
            }
        }
    }
}
