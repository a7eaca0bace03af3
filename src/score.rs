//! Heuristic "percent probability of functionality" for a single primer.
//!
//! Five independent buckets are summed and the total is capped at 100.
//! There is no lower clamp: a self-dimer costs 20 points, so the floor of
//! the arithmetic is `10 + 10 + 0 - 20 + 0 = 0` and callers must not assume
//! the value was clamped.

/// Upper bound of a reported score.
pub const MAX_SCORE: f64 = 100.0;

fn gc_points(gc_content: f64) -> f64 {
    if (40.0..=60.0).contains(&gc_content) {
        30.0
    } else if (35.0..=65.0).contains(&gc_content) {
        20.0
    } else {
        10.0
    }
}

fn tm_points(tm: i32) -> f64 {
    if (50..=60).contains(&tm) {
        30.0
    } else if (45..=65).contains(&tm) {
        20.0
    } else {
        10.0
    }
}

fn length_points(length: usize) -> f64 {
    if (18..=20).contains(&length) {
        20.0
    } else if (15..=25).contains(&length) {
        10.0
    } else {
        0.0
    }
}

/// Score a primer from its GC percentage, Tm (°C), length and structure flags.
///
/// # Examples
/// ```
/// use primerqc::score::functionality_score;
/// assert_eq!(functionality_score(50.0, 55, 19, false, false), 100.0);
/// assert_eq!(functionality_score(50.0, 55, 19, false, true), 80.0);
/// ```
pub fn functionality_score(gc_content: f64, tm: i32, length: usize, hairpin: bool, self_dimer: bool) -> f64 {
    let mut score = gc_points(gc_content) + tm_points(tm) + length_points(length);
    if !hairpin {
        score += 20.0;
    }
    if self_dimer {
        score -= 20.0;
    } else {
        score += 20.0;
    }
    score.min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ideal_primer_is_capped_at_100() {
        // 30 + 30 + 20 + 20 + 20 = 120
        assert_eq!(functionality_score(50.0, 55, 19, false, false), 100.0);
    }

    #[test]
    fn self_dimer_penalty_applies_after_sum() {
        // 30 + 30 + 20 - 20 + 20 = 80
        assert_eq!(functionality_score(50.0, 55, 19, false, true), 80.0);
    }

    #[test]
    fn bucket_edges_are_inclusive() {
        assert_eq!(gc_points(40.0), 30.0);
        assert_eq!(gc_points(60.0), 30.0);
        assert_eq!(gc_points(35.0), 20.0);
        assert_eq!(gc_points(65.0), 20.0);
        assert_eq!(gc_points(65.01), 10.0);
        assert_eq!(gc_points(34.99), 10.0);
        assert_eq!(tm_points(50), 30.0);
        assert_eq!(tm_points(45), 20.0);
        assert_eq!(tm_points(66), 10.0);
        assert_eq!(length_points(18), 20.0);
        assert_eq!(length_points(25), 10.0);
        assert_eq!(length_points(14), 0.0);
        assert_eq!(length_points(26), 0.0);
    }

    #[test]
    fn worst_case_reaches_zero_without_clamping() {
        // 10 + 10 + 0 (hairpin) - 20 (dimer) + 0 (length) = 0
        assert_eq!(functionality_score(0.0, 4, 2, true, true), 0.0);
        // 10 + 10 + 0 + 20 + 0
        assert_eq!(functionality_score(100.0, 80, 30, true, false), 40.0);
    }

    #[test]
    fn ten_mer_scores() {
        // ATGCATGCAT: gc 40, tm 28, len 10, hairpin, self-dimer
        assert_eq!(functionality_score(40.0, 28, 10, true, true), 20.0);
    }
}
