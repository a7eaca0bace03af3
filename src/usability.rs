//! Evaluate a primer pair end to end and decide whether it is usable.
//!
//! Rules, applied after all metrics are computed:
//! - with a target, a primer without an exact match rejects the pair outright
//!   (Tm and dimer findings are reported but not listed as issues);
//! - otherwise the pair is rejected for a Tm gap above the limit and/or a
//!   heterodimer, each named in the issue list.
use tracing::debug;

use crate::binding::locate_pair;
use crate::error::EvalError;
use crate::model::{
    BindingPosition, Issue, PairMetrics, PrimerMetrics, PrimerPair, TargetBinding, Thresholds, UsabilityReport,
    Verdict,
};
use crate::score::functionality_score;
use crate::seq::gc_content;
use crate::structure::{has_dimer, has_hairpin};
use crate::thermo::{annealing_temperature_with_offset, melting_temperature};

/// Evaluate `"FORWARD,REVERSE"` against an optional target with default thresholds.
///
/// # Examples
/// ```
/// let r = primerqc::evaluate_primer_pair("ATGCATGCAT,ACGTACGTAC", None).unwrap();
/// assert_eq!(r.forward.tm, 28);
/// assert_eq!(r.reverse.tm, 30);
/// assert_eq!(r.pair.annealing_temperature, 25);
/// assert!(primerqc::evaluate_primer_pair("", None).is_err());
/// ```
pub fn evaluate_primer_pair(raw: &str, target: Option<&str>) -> Result<UsabilityReport, EvalError> {
    evaluate_primer_pair_with(raw, target, &Thresholds::default())
}

/// Like [`evaluate_primer_pair`] with explicit thresholds.
pub fn evaluate_primer_pair_with(
    raw: &str,
    target: Option<&str>,
    thresholds: &Thresholds,
) -> Result<UsabilityReport, EvalError> {
    let pair = PrimerPair::parse(raw)?;
    Ok(evaluate(&pair, target, thresholds))
}

fn primer_metrics(seq: &str, tm: i32, ta: i32, binding: Option<BindingPosition>) -> PrimerMetrics {
    let length = seq.chars().count();
    let gc = gc_content(seq);
    let hairpin = has_hairpin(seq);
    let self_dimer = has_dimer(seq, seq);
    let functionality = functionality_score(gc, tm, length, hairpin, self_dimer);
    debug!(seq, tm, gc, hairpin, self_dimer, functionality, "primer metrics");
    PrimerMetrics {
        sequence: seq.to_string(),
        length,
        tm,
        annealing_temperature: ta,
        gc_content: gc,
        hairpin,
        self_dimer,
        binding,
        functionality,
    }
}

/// Collect the Tm/heterodimer issues for a pair.
fn pair_issues(pair: &PairMetrics, thresholds: &Thresholds) -> Vec<Issue> {
    let mut issues = Vec::new();
    if pair.tm_difference > thresholds.max_tm_difference {
        issues.push(Issue::TmDifference { limit: thresholds.max_tm_difference });
    }
    if pair.heterodimer {
        issues.push(Issue::Heterodimer);
    }
    issues
}

/// Evaluate an already validated pair.
///
/// An empty or whitespace-only target counts as no target; any other target
/// is searched as given, so positions count leading whitespace too.
pub fn evaluate(pair: &PrimerPair, target: Option<&str>, thresholds: &Thresholds) -> UsabilityReport {
    let target = target.filter(|t| !t.trim().is_empty());
    debug!(forward = pair.forward(), reverse = pair.reverse(), has_target = target.is_some(), "evaluating primer pair");

    let tm_f = melting_temperature(pair.forward());
    let tm_r = melting_temperature(pair.reverse());
    let ta = annealing_temperature_with_offset(tm_f, tm_r, thresholds.annealing_offset);

    let binding: Option<TargetBinding> = target.map(|t| locate_pair(pair, t));

    let forward = primer_metrics(pair.forward(), tm_f, ta, binding.map(|b| b.forward));
    let reverse = primer_metrics(pair.reverse(), tm_r, ta, binding.map(|b| b.reverse));

    let pair_metrics = PairMetrics {
        annealing_temperature: ta,
        tm_difference: (tm_f - tm_r).abs(),
        heterodimer: has_dimer(pair.forward(), pair.reverse()),
    };

    let (verdict, issues) = match binding {
        Some(b) if !b.both_bind() => (Verdict::NoTargetBinding, vec![Issue::NoTargetBinding]),
        _ => {
            let issues = pair_issues(&pair_metrics, thresholds);
            if issues.is_empty() {
                (Verdict::Usable, issues)
            } else {
                (Verdict::Unusable(issues.clone()), issues)
            }
        }
    };
    debug!(?verdict, "usability decided");

    UsabilityReport { forward, reverse, pair: pair_metrics, target: binding, verdict, issues }
}
