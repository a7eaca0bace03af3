//! Secondary-structure screens based on exact complementarity.
//!
//! Both checks are string tests over reverse complements, not free-energy
//! predictions. Inputs are expected to be uppercase already (see
//! [`crate::seq::normalize`]); matching is case-sensitive.
//!
//! # Examples
//! ```
//! use primerqc::structure::{has_dimer, has_hairpin};
//! assert!(has_dimer("AAAA", "TTTT"));
//! assert!(has_hairpin("GAATTC"));
//! ```
use crate::seq::reverse_complement;

/// `true` if `a` contains the full reverse complement of `b`.
///
/// Call with the same primer twice for a self-dimer check, or with the
/// forward and reverse primers for a heterodimer check.
pub fn has_dimer(a: &str, b: &str) -> bool {
    a.contains(reverse_complement(b).as_str())
}

/// `true` if the first half (rounded down) of the reverse complement occurs
/// anywhere in the sequence itself.
///
/// A one-base sequence has an empty half and therefore always reports a hairpin.
pub fn has_hairpin(seq: &str) -> bool {
    let half = seq.chars().count() / 2;
    let prefix: String = reverse_complement(seq).chars().take(half).collect();
    seq.contains(prefix.as_str())
}
