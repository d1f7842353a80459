//! Inbound link code extraction.
//!
//! A code reaches the backend through one of two channels: an explicit
//! request body field, or the opaque start parameter a platform hands to its
//! Mini App on launch. A valid body code always takes precedence.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::code::{normalize_link_code, TRANSPORT_PREFIX};

/// Raw, untrusted inputs that may carry a link code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkCodeSources<'a> {
    /// Code sent explicitly in the request body.
    pub body_code: Option<&'a str>,
    /// Platform launch start/referral parameter.
    pub start_param: Option<&'a str>,
}

/// Result of extracting a link code, with enough diagnostics for the caller
/// to tell "bad code supplied" from "no code at all".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCodeResolution {
    /// Normalized code, or empty when neither channel yielded a valid one.
    pub link_code: String,
    pub has_body_code: bool,
    pub has_start_param_code: bool,
    pub body_code_invalid: bool,
}

impl LinkCodeResolution {
    pub fn is_resolved(&self) -> bool {
        !self.link_code.is_empty()
    }
}

/// Extract a link code from the body and start-param channels.
///
/// # Examples
///
/// ```
/// use crosslink_code::{resolve_link_code, LinkCodeSources};
///
/// let resolved = resolve_link_code(LinkCodeSources {
///     body_code: Some("link_a1b2c3d4"),
///     start_param: None,
/// });
/// assert_eq!(resolved.link_code, "LINK_A1B2C3D4");
/// assert!(!resolved.body_code_invalid);
/// ```
pub fn resolve_link_code(sources: LinkCodeSources<'_>) -> LinkCodeResolution {
    let body = sources.body_code.map(str::trim).filter(|s| !s.is_empty());
    let has_body_code = body.is_some();
    let body_code = body.and_then(normalize_link_code);
    let body_code_invalid = has_body_code && body_code.is_none();

    let start_code = sources.start_param.and_then(start_param_code);
    let has_start_param_code = start_code.is_some();

    if body_code_invalid {
        debug!(
            fallback = has_start_param_code,
            "body link code rejected"
        );
    }

    LinkCodeResolution {
        link_code: body_code.or(start_code).unwrap_or_default(),
        has_body_code,
        has_start_param_code,
        body_code_invalid,
    }
}

/// A start parameter is either a bare code or a code behind the transport
/// prefix.
fn start_param_code(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    normalize_link_code(raw).or_else(|| {
        raw.strip_prefix(TRANSPORT_PREFIX)
            .and_then(normalize_link_code)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(body: Option<&str>, start: Option<&str>) -> LinkCodeResolution {
        resolve_link_code(LinkCodeSources {
            body_code: body,
            start_param: start,
        })
    }

    #[test]
    fn nothing_supplied() {
        let r = resolve(None, None);
        assert_eq!(r, LinkCodeResolution::default());
        assert!(!r.is_resolved());
    }

    #[test]
    fn blank_body_counts_as_absent() {
        let r = resolve(Some("   "), None);
        assert!(!r.has_body_code);
        assert!(!r.body_code_invalid);
    }

    #[test]
    fn lower_case_body_is_normalized() {
        let r = resolve(Some("link_a1b2c3d4"), None);
        assert_eq!(r.link_code, "LINK_A1B2C3D4");
        assert!(r.has_body_code);
        assert!(!r.body_code_invalid);
    }

    #[test]
    fn broken_body_and_broken_start_param() {
        let r = resolve(Some("broken"), Some("link_broken"));
        assert_eq!(r.link_code, "");
        assert!(r.body_code_invalid);
        assert!(!r.has_start_param_code);
    }

    #[test]
    fn invalid_body_falls_back_to_start_param() {
        let r = resolve(Some("nope"), Some("link_LINK_ZZZZ9999"));
        assert_eq!(r.link_code, "LINK_ZZZZ9999");
        assert!(r.body_code_invalid);
        assert!(r.has_start_param_code);
    }

    #[test]
    fn valid_body_wins_over_start_param() {
        let r = resolve(Some("LINK_BODY0001"), Some("link_LINK_START001"));
        assert_eq!(r.link_code, "LINK_BODY0001");
        assert!(r.has_start_param_code);
    }

    #[test]
    fn bare_start_param_code() {
        let r = resolve(None, Some("LINK_A1B2C3D4"));
        assert_eq!(r.link_code, "LINK_A1B2C3D4");
        assert!(r.has_start_param_code);
        assert!(!r.has_body_code);
    }

    #[test]
    fn transport_prefixed_start_param() {
        let r = resolve(None, Some("link_link_a1b2c3d4"));
        assert_eq!(r.link_code, "LINK_A1B2C3D4");
    }

    #[test]
    fn transport_prefix_is_lower_case_only() {
        let r = resolve(None, Some("LINK_LINK_A1B2C3D4"));
        assert!(!r.has_start_param_code);
        assert_eq!(r.link_code, "");
    }

    #[test]
    fn resolution_serializes_with_flag_names() {
        let r = resolve(Some("nope"), Some("link_LINK_ZZZZ9999"));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "link_code": "LINK_ZZZZ9999",
                "has_body_code": true,
                "has_start_param_code": true,
                "body_code_invalid": true,
            })
        );
        let back: LinkCodeResolution = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn unrelated_start_param_is_ignored() {
        let r = resolve(None, Some("ref_campaign42"));
        assert!(!r.has_start_param_code);
        assert!(!r.is_resolved());
    }
}
