use serde::{Deserialize, Serialize};

use crosslink_types::{AccountId, CandidateIdentity, MergedBlockState};

use crate::block::resolve_merged_block_state;
use crate::master::{pick_master, MasterRule};

/// Everything a caller needs to apply a merge to storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergePlan {
    /// The surviving account.
    pub master_id: AccountId,
    /// The account merged away.
    pub secondary_id: AccountId,
    pub rule: MasterRule,
    /// Moderation state to write onto the master; `None` clears any block.
    pub block_state: Option<MergedBlockState>,
}

/// Select the master and merge moderation state in one step, so the
/// master/secondary labeling cannot drift between the two decisions.
pub fn resolve_merge(
    a: &CandidateIdentity,
    b: &CandidateIdentity,
    has_primary_a: bool,
    has_primary_b: bool,
) -> MergePlan {
    let decision = pick_master(a, b, has_primary_a, has_primary_b);
    MergePlan {
        master_id: decision.master.id.clone(),
        secondary_id: decision.secondary.id.clone(),
        rule: decision.rule,
        block_state: resolve_merged_block_state(decision.master, decision.secondary),
    }
}
