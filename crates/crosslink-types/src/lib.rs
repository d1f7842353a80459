//! Foundation types for Crosslink.
//!
//! Crosslink collapses two accounts of the same person, one created on each
//! client platform, into a single surviving account. This crate holds the
//! plain data shared by the merge resolver and the link-code codec. Every
//! other Crosslink crate depends on `crosslink-types`.
//!
//! # Key Types
//!
//! - [`Platform`] — The two client platforms and their fixed pairing
//! - [`AccountId`] — Opaque, lexicographically ordered account identifier
//! - [`CandidateIdentity`] — One of the two accounts considered for a merge
//! - [`BlockSnapshot`] — Moderation state of a single account
//! - [`MergedBlockState`] — Moderation state the surviving account inherits
//! - [`AccountLinkResult`] — Outcome report of a completed link operation

pub mod block;
pub mod error;
pub mod identity;
pub mod link;
pub mod platform;

pub use block::{BlockSnapshot, MergedBlockState};
pub use error::TypeError;
pub use identity::{AccountId, CandidateIdentity};
pub use link::AccountLinkResult;
pub use platform::Platform;
