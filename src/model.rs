//! Core types for **primer pairs**, **per-primer metrics** and the
//! **usability report**.
//!
//! Every value here is built once per evaluation and never mutated
//! afterwards. Reports serialise with serde for JSON output and implement
//! [`Display`](core::fmt::Display) as a plain-text summary.
use core::fmt;

use serde::Serialize;

use crate::error::EvalError;
use crate::seq::normalize;
use crate::thermo::DEFAULT_ANNEALING_OFFSET;

/// Largest tolerated Tm gap (°C) between the primers of a pair.
pub const DEFAULT_MAX_TM_DIFFERENCE: i32 = 5;

/// A validated, uppercased forward/reverse primer pair.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PrimerPair {
    forward: String,
    reverse: String,
}

impl PrimerPair {
    /// Build a pair from two sequences (trimmed and uppercased).
    ///
    /// Fails with [`EvalError::MalformedPrimerPair`] if either is empty after trimming.
    pub fn new(forward: &str, reverse: &str) -> Result<Self, EvalError> {
        let forward = normalize(forward.trim());
        let reverse = normalize(reverse.trim());
        if forward.is_empty() || reverse.is_empty() {
            return Err(EvalError::MalformedPrimerPair { components: 2 });
        }
        Ok(Self { forward, reverse })
    }

    /// Parse `"FORWARD,REVERSE"`.
    ///
    /// # Examples
    /// ```
    /// let p = primerqc::PrimerPair::parse(" atgc , GGCC ").unwrap();
    /// assert_eq!(p.forward(), "ATGC");
    /// assert_eq!(p.reverse(), "GGCC");
    /// assert!(primerqc::PrimerPair::parse("").is_err());
    /// assert!(primerqc::PrimerPair::parse("A,B,C").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, EvalError> {
        if raw.trim().is_empty() {
            return Err(EvalError::MissingInput);
        }
        let parts: Vec<&str> = raw.split(',').collect();
        match parts.as_slice() {
            [forward, reverse] => Self::new(forward, reverse),
            _ => Err(EvalError::MalformedPrimerPair { components: parts.len() }),
        }
    }

    /// Uppercased forward primer.
    pub fn forward(&self) -> &str { &self.forward }

    /// Uppercased reverse primer.
    pub fn reverse(&self) -> &str { &self.reverse }
}

/// Where a primer sits on the target (forward strand, exact match).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingPosition {
    /// Zero-based index of the first occurrence.
    Found(usize),
    NotFound,
}

impl BindingPosition {
    /// `true` if the primer occurs on the target.
    pub fn is_found(self) -> bool { matches!(self, BindingPosition::Found(_)) }

    /// The zero-based position, if found.
    pub fn index(self) -> Option<usize> {
        match self {
            BindingPosition::Found(i) => Some(i),
            BindingPosition::NotFound => None,
        }
    }
}

impl From<Option<usize>> for BindingPosition {
    fn from(pos: Option<usize>) -> Self {
        pos.map_or(BindingPosition::NotFound, BindingPosition::Found)
    }
}

impl fmt::Display for BindingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingPosition::Found(i) => write!(f, "{i}"),
            BindingPosition::NotFound => f.write_str("Not found"),
        }
    }
}

/// Binding positions of both primers on the target.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct TargetBinding {
    pub forward: BindingPosition,
    pub reverse: BindingPosition,
}

impl TargetBinding {
    /// `true` if both primers occur on the target.
    pub fn both_bind(&self) -> bool { self.forward.is_found() && self.reverse.is_found() }
}

/// Metrics derived from a single primer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PrimerMetrics {
    /// Uppercased primer sequence.
    pub sequence: String,
    /// Number of bases.
    pub length: usize,
    /// Wallace-rule melting temperature (°C).
    pub tm: i32,
    /// Common annealing temperature of the pair this primer belongs to (°C).
    pub annealing_temperature: i32,
    /// GC percentage (0–100).
    pub gc_content: f64,
    pub hairpin: bool,
    pub self_dimer: bool,
    /// `None` when no target was supplied.
    pub binding: Option<BindingPosition>,
    /// Heuristic score, capped at 100 but not floored.
    pub functionality: f64,
}

/// Metrics derived from both primers together.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct PairMetrics {
    pub annealing_temperature: i32,
    /// `|Tm(forward) - Tm(reverse)|` in °C.
    pub tm_difference: i32,
    pub heterodimer: bool,
}

/// A reason a pair is rejected.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Issue {
    /// Tm gap above `limit` °C.
    TmDifference { limit: i32 },
    Heterodimer,
    /// At least one primer has no exact match on the target.
    NoTargetBinding,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::TmDifference { limit } => write!(f, "Tm difference > {limit}°C"),
            Issue::Heterodimer => f.write_str("heterodimer formation"),
            Issue::NoTargetBinding => f.write_str("no binding to the target sequence"),
        }
    }
}

/// Final usability decision.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Usable,
    /// Rejected for the listed Tm/dimer issues.
    Unusable(Vec<Issue>),
    /// Rejected because a primer does not bind the target; Tm/dimer issues are not listed.
    NoTargetBinding,
}

impl Verdict {
    /// `true` only for [`Verdict::Usable`].
    pub fn is_usable(&self) -> bool { matches!(self, Verdict::Usable) }

    /// Human-readable sentence describing the verdict.
    pub fn explanation(&self) -> String {
        match self {
            Verdict::Usable => {
                "The primers are usable with optimal Tm and Ta, no significant hairpin or dimer formation.".to_string()
            }
            Verdict::Unusable(issues) => {
                let listed: Vec<String> = issues.iter().map(ToString::to_string).collect();
                format!("The primers cannot be used due to the following issues: {}.", listed.join(", "))
            }
            Verdict::NoTargetBinding => {
                "The primers cannot be used because they do not bind to the target sequence.".to_string()
            }
        }
    }
}

/// Limits applied by the usability rules.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Thresholds {
    /// Largest tolerated Tm gap (°C); a larger gap is an issue.
    pub max_tm_difference: i32,
    /// Subtracted from the lower Tm to get the common Ta.
    pub annealing_offset: i32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { max_tm_difference: DEFAULT_MAX_TM_DIFFERENCE, annealing_offset: DEFAULT_ANNEALING_OFFSET }
    }
}

/// Everything known about one evaluated primer pair.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UsabilityReport {
    pub forward: PrimerMetrics,
    pub reverse: PrimerMetrics,
    pub pair: PairMetrics,
    /// `None` when no target was supplied.
    pub target: Option<TargetBinding>,
    pub verdict: Verdict,
    pub issues: Vec<Issue>,
}

impl UsabilityReport {
    /// `true` if the verdict is [`Verdict::Usable`].
    pub fn is_usable(&self) -> bool { self.verdict.is_usable() }

    /// Sentence describing the verdict (see [`Verdict::explanation`]).
    pub fn explanation(&self) -> String { self.verdict.explanation() }
}

fn yes_no(b: bool) -> &'static str { if b { "Yes" } else { "No" } }

fn write_primer(f: &mut fmt::Formatter<'_>, title: &str, m: &PrimerMetrics) -> fmt::Result {
    writeln!(f, "{title}: {}", m.sequence)?;
    writeln!(f, "  melting temperature (Tm): {}°C", m.tm)?;
    writeln!(f, "  annealing temperature (Ta): {}°C", m.annealing_temperature)?;
    writeln!(f, "  GC content: {:.2}%", m.gc_content)?;
    writeln!(f, "  hairpin formation: {}", yes_no(m.hairpin))?;
    writeln!(f, "  self-dimer formation: {}", yes_no(m.self_dimer))?;
    writeln!(f, "  functionality: {:.2}%", m.functionality)?;
    if let Some(pos) = m.binding {
        writeln!(f, "  binding position: {pos}")?;
    }
    Ok(())
}

impl fmt::Display for UsabilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_primer(f, "forward primer", &self.forward)?;
        write_primer(f, "reverse primer", &self.reverse)?;
        writeln!(f, "common annealing temperature (Ta): {}°C", self.pair.annealing_temperature)?;
        writeln!(f, "heterodimer formation: {}", yes_no(self.pair.heterodimer))?;
        if let Some(t) = &self.target {
            writeln!(f, "forward binding position: {}", t.forward)?;
            writeln!(f, "reverse binding position: {}", t.reverse)?;
        }
        write!(f, "usability: {}", self.explanation())
    }
}
