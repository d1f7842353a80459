//! Small helpers over the `url` crate shared by the link builders.
//!
//! Query strings are rewritten by decoding every pair and serializing the
//! list again as `application/x-www-form-urlencoded`. Decoded values are
//! preserved; raw text is not (`a%20b` comes back as `a+b`, `~` as `%7E`,
//! a bare `flag` as `flag=`).

use url::{form_urlencoded, Url};

use crate::error::{LinkError, Result};

/// Parse an absolute URL and require an `http` or `https` scheme.
pub(crate) fn parse_http_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|source| LinkError::UrlParse {
        url: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(LinkError::UnsupportedScheme {
            url: raw.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}

/// Decode an `application/x-www-form-urlencoded` string into ordered pairs.
pub(crate) fn decode_pairs(s: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(s.as_bytes()).into_owned().collect()
}

/// Encode ordered pairs as `application/x-www-form-urlencoded`.
pub(crate) fn encode_pairs(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Set `key` to `value`: the first occurrence is updated in place and any
/// later duplicates are dropped; a missing key is appended.
pub(crate) fn set_pair(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    let Some(first) = pairs.iter().position(|(k, _)| k == key) else {
        pairs.push((key.to_string(), value.to_string()));
        return;
    };
    pairs[first].1 = value.to_string();
    let mut index = 0;
    pairs.retain(|(k, _)| {
        let keep = k != key || index == first;
        index += 1;
        keep
    });
}

/// Set several parameters in a URL's query string, keeping all others.
pub(crate) fn set_query_params(url: &mut Url, params: &[(&str, &str)]) {
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    for (key, value) in params {
        set_pair(&mut pairs, key, value);
    }
    url.query_pairs_mut().clear().extend_pairs(&pairs);
}
