//! Exact-match binding of primers on a target sequence.
//!
//! Matching is case-insensitive and forward-strand only: a primer is looked
//! up in the target as given, never in its reverse complement, and no
//! mismatches are tolerated.
//!
//! # Examples
//! ```
//! use primerqc::binding::find_binding_position;
//! use primerqc::BindingPosition;
//! assert_eq!(find_binding_position("ATG", "CCATGCC"), BindingPosition::Found(2));
//! assert_eq!(find_binding_position("GGG", "CCATGCC"), BindingPosition::NotFound);
//! ```
use aho_corasick::AhoCorasick;
use tracing::warn;

use crate::model::{BindingPosition, PrimerPair, TargetBinding};
use crate::seq::normalize;

/// Character index of the byte offset `at` within `seq`.
fn char_index(seq: &str, at: usize) -> usize {
    seq[..at].chars().count()
}

/// Zero-based index (in characters) of the first occurrence of `primer` in `target`.
pub fn find_binding_position(primer: &str, target: &str) -> BindingPosition {
    let target = normalize(target);
    target.find(normalize(primer).as_str()).map(|at| char_index(&target, at)).into()
}

/// Locate both primers of a pair with a single pass over the target.
///
/// Uses an overlapping Aho–Corasick scan so each primer's earliest start is
/// found even when the two primers overlap on the target.
pub fn locate_pair(pair: &PrimerPair, target: &str) -> TargetBinding {
    let ac = match AhoCorasick::new([pair.forward(), pair.reverse()]) {
        Ok(ac) => ac,
        // Only the builder's size limits can fail here.
        Err(e) => {
            warn!(error = %e, "could not build automaton; searching primers one by one");
            return TargetBinding {
                forward: find_binding_position(pair.forward(), target),
                reverse: find_binding_position(pair.reverse(), target),
            };
        }
    };
    let target = normalize(target);
    let mut first: [Option<usize>; 2] = [None, None];
    for m in ac.find_overlapping_iter(&target) {
        let slot = &mut first[m.pattern().as_usize()];
        if slot.map_or(true, |s| m.start() < s) {
            *slot = Some(m.start());
        }
    }
    let to_char = |at: Option<usize>| at.map(|b| char_index(&target, b));
    TargetBinding { forward: to_char(first[0]).into(), reverse: to_char(first[1]).into() }
}
