use crosslink_types::{AccountLinkResult, Platform};

/// Report the outcome of a link operation.
///
/// Without a resolved target platform nothing was performed. Otherwise the
/// source is inferred as the opposite platform, which only holds while the
/// system has exactly two platforms.
pub fn build_account_link_result(target: Option<Platform>, merged: bool) -> AccountLinkResult {
    match target {
        None => AccountLinkResult::not_performed(),
        Some(target) => AccountLinkResult {
            performed: true,
            merged,
            source_platform: Some(target.opposite()),
            target_platform: Some(target),
        },
    }
}
