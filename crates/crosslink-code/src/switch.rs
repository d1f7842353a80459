//! Outbound "switch platform" links.
//!
//! A switch link opens the other platform's Mini App with a link code. The
//! code is written under three parameter names because different client
//! versions read different ones:
//!
//! - the platform's own start/referral parameter, carrying
//!   `link_<CODE>` ([`start_param_value`]),
//! - [`LINK_CODE_PARAM`] and [`APP_LINK_CODE_PARAM`], carrying the raw code.
//!
//! Platforms that keep client state in the fragment get the same three
//! parameters merged into the fragment as well.

use tracing::warn;
use url::Url;

use crosslink_types::Platform;

use crate::code::start_param_value;
use crate::config::LinkConfig;
use crate::error::Result;
use crate::fragment::FragmentShape;
use crate::url_util::{parse_http_url, set_query_params};

/// Platform-agnostic parameter carrying the raw code.
pub const LINK_CODE_PARAM: &str = "link_code";

/// Application-namespaced parameter carrying the raw code.
pub const APP_LINK_CODE_PARAM: &str = "jr_link_code";

/// Name of the launch parameter a platform forwards to its Mini App.
pub fn start_param_name(platform: Platform) -> &'static str {
    match platform {
        Platform::Telegram => "startapp",
        Platform::Vk => "ref",
    }
}

/// Whether the platform's client reads its route state from the fragment.
pub fn uses_fragment_state(platform: Platform) -> bool {
    matches!(platform, Platform::Vk)
}

/// Build a switch link using the default configuration.
///
/// See [`build_switch_url_with`].
pub fn build_switch_url(platform: Platform, code: &str, base_app_url: Option<&str>) -> String {
    build_switch_url_with(&LinkConfig::default(), platform, code, base_app_url)
}

/// Build a link into `platform`'s Mini App carrying `code`.
///
/// `base_app_url` is used when it is an absolute HTTP(S) URL; otherwise the
/// configured fallback for the platform is the base. Existing query and
/// fragment parameters are preserved. Never fails: if no base can be parsed
/// the fallback URL is returned verbatim.
pub fn build_switch_url_with(
    config: &LinkConfig,
    platform: Platform,
    code: &str,
    base_app_url: Option<&str>,
) -> String {
    let fallback = config.fallback_url(platform);
    match select_base(platform, base_app_url, fallback) {
        Ok(mut url) => {
            inject_link_params(&mut url, platform, code.trim());
            url.into()
        }
        Err(e) => {
            warn!(%platform, error = %e, "fallback url unusable; returning it verbatim");
            fallback.to_string()
        }
    }
}

fn select_base(platform: Platform, base_app_url: Option<&str>, fallback: &str) -> Result<Url> {
    if let Some(raw) = base_app_url.map(str::trim).filter(|s| !s.is_empty()) {
        match parse_http_url(raw) {
            Ok(url) => return Ok(url),
            Err(e) => warn!(%platform, error = %e, "base app url unusable; using fallback"),
        }
    }
    parse_http_url(fallback)
}

fn inject_link_params(url: &mut Url, platform: Platform, code: &str) {
    let start_value = start_param_value(code);
    let params = [
        (start_param_name(platform), start_value.as_str()),
        (LINK_CODE_PARAM, code),
        (APP_LINK_CODE_PARAM, code),
    ];

    set_query_params(url, &params);

    if uses_fragment_state(platform) {
        let mut fragment = FragmentShape::parse(url.fragment().unwrap_or_default());
        for (key, value) in params {
            fragment.set_param(key, value);
        }
        url.set_fragment(Some(&fragment.to_string()));
    }
}
