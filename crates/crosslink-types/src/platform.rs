use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A client platform an account can be created on.
///
/// The system knows exactly two platforms. [`Platform::opposite`] relies on
/// that: adding a third variant means callers must carry the source platform
/// explicitly instead of inferring it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Telegram Mini App. The primary platform for identity.
    Telegram,
    /// VK Mini App. Keeps client route state in the URL fragment.
    Vk,
}

impl Platform {
    /// All platforms, in declaration order.
    pub const ALL: [Platform; 2] = [Platform::Telegram, Platform::Vk];

    /// The other platform of the pair.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Telegram => Self::Vk,
            Self::Vk => Self::Telegram,
        }
    }

    /// Whether holding an identity on this platform overrides chronology
    /// when choosing a master account.
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Telegram)
    }

    /// Lower-case canonical name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Telegram => "telegram",
            Self::Vk => "vk",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "telegram" | "tg" => Ok(Self::Telegram),
            "vk" | "vkontakte" => Ok(Self::Vk),
            _ => Err(TypeError::UnknownPlatform(s.to_string())),
        }
    }
}
