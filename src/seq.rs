//! Sequence primitives: case normalisation, Watson–Crick complement,
//! reverse complement and GC content.
//!
//! Everything here is total: characters outside `{A,C,G,T}` are never
//! rejected, they simply pass through [`complement_base`] unchanged and count
//! towards a sequence's length.
//!
//! # Examples
//! ```
//! use primerqc::seq::{reverse_complement, gc_content};
//! assert_eq!(reverse_complement("ATGC"), "GCAT");
//! assert_eq!(gc_content("atgc"), 50.0);
//! ```

/// Uppercase a sequence (ASCII only; other characters are kept as-is).
#[inline]
pub fn normalize(seq: &str) -> String {
    seq.to_ascii_uppercase()
}

/// Complement a single base: `A<->T`, `G<->C`; any other character maps to itself.
#[inline]
pub fn complement_base(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        other => other,
    }
}

/// Reverse a sequence and complement every base.
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement_base).collect()
}

/// Percentage of `G`/`C` over the full length of the (normalised) sequence.
///
/// Returns `0.0` for an empty sequence.
pub fn gc_content(seq: &str) -> f64 {
    let mut total = 0usize;
    let mut gc = 0usize;
    for c in seq.chars() {
        total += 1;
        if matches!(c.to_ascii_uppercase(), 'G' | 'C') {
            gc += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    gc as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complement_pairs_and_identity() {
        assert_eq!(complement_base('A'), 'T');
        assert_eq!(complement_base('T'), 'A');
        assert_eq!(complement_base('G'), 'C');
        assert_eq!(complement_base('C'), 'G');
        assert_eq!(complement_base('N'), 'N');
        assert_eq!(complement_base('R'), 'R');
        // lowercase is not complemented; callers normalise first
        assert_eq!(complement_base('a'), 'a');
    }

    #[test]
    fn reverse_complement_is_an_involution_on_acgt() {
        for s in ["A", "ACGT", "GATTACA", "CCCCGGGGTTAA", "ATGCATGCAT"] {
            assert_eq!(reverse_complement(&reverse_complement(s)), s);
        }
    }

    #[test]
    fn reverse_complement_keeps_unknown_characters() {
        assert_eq!(reverse_complement("ANRT"), "ARNT");
        assert_eq!(reverse_complement(""), "");
    }

    #[test]
    fn gc_content_counts_over_whole_length() {
        assert_eq!(gc_content("GCGC"), 100.0);
        assert_eq!(gc_content("ATAT"), 0.0);
        assert_eq!(gc_content("GCNN"), 50.0);
        assert_eq!(gc_content(""), 0.0);
        assert!((gc_content("ACGTACGTAC") - 50.0).abs() < 1e-9);
    }

    #[test]
    fn normalize_uppercases_ascii() {
        assert_eq!(normalize("acgtn"), "ACGTN");
    }
}
