//! Seniority ordering between candidate identities.
//!
//! A candidate is *more senior* when its chronology stamp is earlier. Equal
//! stamps fall back to the lexicographically smaller account id, which makes
//! the order total for any two distinct accounts.

use std::cmp::Ordering;

use crosslink_types::CandidateIdentity;

/// Compare two candidates by seniority. `Ordering::Less` means `a` is more
/// senior than `b`.
pub fn cmp_seniority(a: &CandidateIdentity, b: &CandidateIdentity) -> Ordering {
    a.chronology_stamp()
        .cmp(&b.chronology_stamp())
        .then_with(|| a.id.cmp(&b.id))
}

/// The most senior candidate of the set, or `None` if it is empty.
pub fn most_senior<'a, I>(candidates: I) -> Option<&'a CandidateIdentity>
where
    I: IntoIterator<Item = &'a CandidateIdentity>,
{
    candidates.into_iter().min_by(|a, b| cmp_seniority(a, b))
}
