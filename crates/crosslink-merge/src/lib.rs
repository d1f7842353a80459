//! Merge resolver for Crosslink.
//!
//! Given two already-loaded account records, decides which one survives the
//! merge and which moderation state the survivor carries. Every function is
//! pure and deterministic: the same pair of candidates always yields the same
//! verdict, whatever order the caller passes them in, so a retried merge
//! recomputes an identical outcome.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use crosslink_merge::resolve_merge;
//! use crosslink_types::{AccountId, BlockSnapshot, CandidateIdentity};
//!
//! let tg = CandidateIdentity::new(AccountId::new("tg-1").unwrap(), Utc.timestamp_opt(2_000, 0).unwrap());
//! let vk = CandidateIdentity::new(AccountId::new("vk-1").unwrap(), Utc.timestamp_opt(1_000, 0).unwrap())
//!     .with_block(BlockSnapshot::permanent(None, Some("spam")));
//!
//! let plan = resolve_merge(&tg, &vk, true, false);
//! assert_eq!(plan.master_id.as_str(), "tg-1");
//! assert!(plan.block_state.unwrap().is_permanent());
//! ```
//!
//! # Modules
//!
//! - [`seniority`] — Chronology-then-id ordering shared by every tie-break
//! - [`master`] — Master account selection
//! - [`block`] — Moderation state merging
//! - [`link`] — Link operation result reporting
//! - [`plan`] — One-call merge plan combining the above

pub mod block;
pub mod link;
pub mod master;
pub mod plan;
pub mod seniority;

pub use block::resolve_merged_block_state;
pub use link::build_account_link_result;
pub use master::{pick_master, pick_master_account, MasterDecision, MasterRule};
pub use plan::{resolve_merge, MergePlan};
pub use seniority::{cmp_seniority, most_senior};
