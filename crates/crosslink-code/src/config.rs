use std::path::Path;

use serde::{Deserialize, Serialize};

use crosslink_types::Platform;

use crate::code::{DEFAULT_CODE_BODY_LEN, MAX_CODE_BODY_LEN, MIN_CODE_BODY_LEN};
use crate::error::{LinkError, Result};
use crate::url_util::parse_http_url;

/// Configuration for link-code minting and outbound link construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Mini App link used when no usable Telegram base URL is supplied.
    pub telegram_fallback_url: String,
    /// Mini App link used when no usable VK base URL is supplied.
    pub vk_fallback_url: String,
    /// Number of characters after the `LINK_` prefix in generated codes.
    pub code_length: usize,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            telegram_fallback_url: "https://t.me/jr_app_bot/app".into(),
            vk_fallback_url: "https://vk.com/app51800000".into(),
            code_length: DEFAULT_CODE_BODY_LEN,
        }
    }
}

impl LinkConfig {
    /// The fallback Mini App URL for `platform`.
    pub fn fallback_url(&self, platform: Platform) -> &str {
        match platform {
            Platform::Telegram => &self.telegram_fallback_url,
            Platform::Vk => &self.vk_fallback_url,
        }
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Check that both fallbacks are absolute HTTP(S) URLs and the code
    /// length is in range.
    pub fn validate(&self) -> Result<()> {
        for platform in Platform::ALL {
            parse_http_url(self.fallback_url(platform))?;
        }
        if !(MIN_CODE_BODY_LEN..=MAX_CODE_BODY_LEN).contains(&self.code_length) {
            return Err(LinkError::InvalidCodeLength {
                length: self.code_length,
                min: MIN_CODE_BODY_LEN,
                max: MAX_CODE_BODY_LEN,
            });
        }
        Ok(())
    }
}
