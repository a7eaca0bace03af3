//! Melting and annealing temperatures.
//!
//! Tm uses the Wallace rule (`4 °C` per G/C, `2 °C` per A/T). This is a
//! deliberately coarse estimate for short oligos and is not a
//! nearest-neighbour model; results are integers.

/// Offset subtracted from the lower primer Tm to obtain the common Ta.
pub const DEFAULT_ANNEALING_OFFSET: i32 = 3;

/// Wallace-rule melting temperature in °C.
///
/// The sequence is case-normalised; characters other than `A/C/G/T`
/// contribute nothing.
///
/// # Examples
/// ```
/// assert_eq!(primerqc::thermo::melting_temperature("GC"), 8);
/// assert_eq!(primerqc::thermo::melting_temperature("at"), 4);
/// assert_eq!(primerqc::thermo::melting_temperature(""), 0);
/// ```
pub fn melting_temperature(seq: &str) -> i32 {
    seq.chars()
        .map(|c| match c.to_ascii_uppercase() {
            'G' | 'C' => 4,
            'A' | 'T' => 2,
            _ => 0,
        })
        .sum()
}

/// Common annealing temperature for a primer pair: `min(Tm) - 3`.
///
/// ```
/// assert_eq!(primerqc::thermo::common_annealing_temperature(60, 55), 52);
/// ```
#[inline]
pub fn common_annealing_temperature(tm_forward: i32, tm_reverse: i32) -> i32 {
    annealing_temperature_with_offset(tm_forward, tm_reverse, DEFAULT_ANNEALING_OFFSET)
}

/// Like [`common_annealing_temperature`] with a caller-chosen offset.
#[inline]
pub fn annealing_temperature_with_offset(tm_forward: i32, tm_reverse: i32, offset: i32) -> i32 {
    tm_forward.min(tm_reverse) - offset
}
