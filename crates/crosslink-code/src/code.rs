//! Link code text format.
//!
//! A link code is `LINK_` followed by 8 to 32 characters from `[A-Z0-9]`.
//! [`is_link_code`] checks the canonical upper-case form; inbound input is
//! run through [`normalize_link_code`] first, so users may type codes in
//! any case.
//!
//! Inside a platform start/referral parameter the code travels behind the
//! lower-case transport prefix `link_`, e.g. `link_LINK_A1B2C3D4`.

use rand::Rng;

use crate::error::{LinkError, Result};

/// Fixed prefix of every link code.
pub const LINK_CODE_PREFIX: &str = "LINK_";

/// Prefix placed before a code inside a platform start parameter.
pub const TRANSPORT_PREFIX: &str = "link_";

/// Shortest allowed body after [`LINK_CODE_PREFIX`].
pub const MIN_CODE_BODY_LEN: usize = 8;

/// Longest allowed body after [`LINK_CODE_PREFIX`].
pub const MAX_CODE_BODY_LEN: usize = 32;

/// Body length of codes minted by [`generate_link_code_default`].
pub const DEFAULT_CODE_BODY_LEN: usize = 12;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Whether `s`, ignoring surrounding whitespace, is a well-formed link code.
///
/// The check is case-sensitive: `link_a1b2c3d4` is not a link code until it
/// has been normalized with [`normalize_link_code`].
///
/// # Examples
///
/// ```
/// use crosslink_code::is_link_code;
///
/// assert!(is_link_code("LINK_A1B2C3D4"));
/// assert!(!is_link_code("link_a1b2c3d4"));
/// assert!(!is_link_code("LINK_SHORT"));
/// ```
pub fn is_link_code(s: &str) -> bool {
    let Some(body) = s.trim().strip_prefix(LINK_CODE_PREFIX) else {
        return false;
    };
    (MIN_CODE_BODY_LEN..=MAX_CODE_BODY_LEN).contains(&body.len())
        && body
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

/// Trim and upper-case `s`, returning it only if the result is a link code.
pub fn normalize_link_code(s: &str) -> Option<String> {
    let normalized = s.trim().to_ascii_uppercase();
    is_link_code(&normalized).then_some(normalized)
}

/// The value a platform start parameter carries for `code`.
pub fn start_param_value(code: &str) -> String {
    format!("{TRANSPORT_PREFIX}{code}")
}

/// Mint a link code with a body of `length` characters drawn from `rng`.
///
/// Callers that need reproducible codes pass a seeded RNG.
pub fn generate_link_code<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Result<String> {
    if !(MIN_CODE_BODY_LEN..=MAX_CODE_BODY_LEN).contains(&length) {
        return Err(LinkError::InvalidCodeLength {
            length,
            min: MIN_CODE_BODY_LEN,
            max: MAX_CODE_BODY_LEN,
        });
    }
    Ok(sample_code(rng, length))
}

/// Mint a link code of the default length from the thread-local RNG.
pub fn generate_link_code_default() -> String {
    sample_code(&mut rand::thread_rng(), DEFAULT_CODE_BODY_LEN)
}

fn sample_code<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    let mut code = String::with_capacity(LINK_CODE_PREFIX.len() + length);
    code.push_str(LINK_CODE_PREFIX);
    for _ in 0..length {
        code.push(CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char);
    }
    code
}
