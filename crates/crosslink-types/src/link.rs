use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Outcome report of a link operation.
///
/// `performed == false` means no target platform was resolved; the platform
/// fields are then `None` and `merged` is `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountLinkResult {
    pub performed: bool,
    pub merged: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_platform: Option<Platform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_platform: Option<Platform>,
}

impl AccountLinkResult {
    pub const fn not_performed() -> Self {
        Self {
            performed: false,
            merged: false,
            source_platform: None,
            target_platform: None,
        }
    }
}
