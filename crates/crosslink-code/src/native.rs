use url::form_urlencoded;

use crate::url_util::parse_http_url;

/// Host of Telegram's public web links.
const TELEGRAM_WEB_HOST: &str = "t.me";

/// Convert a Telegram web link into a `tg://resolve` URI the native client
/// opens directly.
///
/// `https://t.me/<bot>/<app>?startapp=X` becomes
/// `tg://resolve?domain=<bot>&appname=<app>&startapp=X` and
/// `https://t.me/<bot>?start=X` becomes `tg://resolve?domain=<bot>&start=X`.
/// Returns an empty string when the input is not an HTTP(S) `t.me` link of
/// one of those shapes.
pub fn to_native_deep_link(http_url: &str) -> String {
    let Ok(url) = parse_http_url(http_url) else {
        return String::new();
    };
    if url.host_str() != Some(TELEGRAM_WEB_HOST) {
        return String::new();
    }

    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();
    let (domain, app) = match segments.as_slice() {
        [domain] => (*domain, None),
        [domain, app] => (*domain, Some(*app)),
        _ => return String::new(),
    };

    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("domain", domain);
    if let Some(app) = app {
        query.append_pair("appname", app);
    }
    query.extend_pairs(url.query_pairs());
    format!("tg://resolve?{}", query.finish())
}
