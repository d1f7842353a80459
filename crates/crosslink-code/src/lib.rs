//! Link-code codec for Crosslink.
//!
//! A link code authorizes merging one account into another across the two
//! client platforms. This crate owns everything textual about it: the code
//! format, extracting a code from untrusted inbound input, and building the
//! outbound deep links that carry a code into the other platform's client.
//!
//! Nothing here performs I/O on the request path or fails on bad business
//! input. Invalid codes come back as empty strings and diagnostic flags;
//! unusable URLs degrade to a configured fallback.
//!
//! # Quick Start
//!
//! ```rust
//! use crosslink_code::{build_switch_url, resolve_link_code, LinkCodeSources};
//! use crosslink_types::Platform;
//!
//! let link = build_switch_url(Platform::Telegram, "LINK_A1B2C3D4", None);
//! assert!(link.contains("startapp=link_LINK_A1B2C3D4"));
//!
//! let inbound = resolve_link_code(LinkCodeSources {
//!     body_code: None,
//!     start_param: Some("link_LINK_A1B2C3D4"),
//! });
//! assert_eq!(inbound.link_code, "LINK_A1B2C3D4");
//! ```
//!
//! # Modules
//!
//! - [`code`] — Code format, normalization, and generation
//! - [`resolve`] — Inbound extraction from body and start-param channels
//! - [`switch`] — Outbound switch links
//! - [`fragment`] — Tagged parser for fragment-held client state
//! - [`native`] — Web link to native client URI conversion
//! - [`config`] — [`LinkConfig`] and its TOML loader
//! - [`error`] — Error types

pub mod code;
pub mod config;
pub mod error;
pub mod fragment;
pub mod native;
pub mod resolve;
pub mod switch;

mod url_util;

pub use code::{
    generate_link_code, generate_link_code_default, is_link_code, normalize_link_code,
    start_param_value, LINK_CODE_PREFIX, TRANSPORT_PREFIX,
};
pub use config::LinkConfig;
pub use error::{LinkError, Result};
pub use fragment::FragmentShape;
pub use native::to_native_deep_link;
pub use resolve::{resolve_link_code, LinkCodeResolution, LinkCodeSources};
pub use switch::{build_switch_url, build_switch_url_with, APP_LINK_CODE_PARAM, LINK_CODE_PARAM};
