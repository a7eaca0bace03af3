#![forbid(unsafe_code)]
//! # primerqc
//!
//! Quick, dependency-light quality check of a **PCR primer pair**: Wallace-rule
//! melting temperatures, a common annealing temperature, GC content, hairpin
//! and dimer flags, optional exact-match binding against a **target**, a
//! heuristic functionality score per primer, and a usability verdict.
//!
//! ## Highlights
//! - Pure, synchronous functions; nothing is cached or shared between calls.
//! - Every rule is deliberately simple (string complementarity, base counts)
//!   so results are reproducible by hand.
//! - Reports serialise to JSON and print as plain text.
//!
//! ## Examples
//! ```rust
//! let report = primerqc::evaluate_primer_pair("ATGCATGCAT,ACGTACGTAC", None).unwrap();
//! assert_eq!(report.forward.tm, 28);
//! assert!(report.is_usable());
//!
//! // With a target, both primers must occur in it verbatim.
//! let report = primerqc::evaluate_primer_pair("ATG,GGG", Some("CCATGCC")).unwrap();
//! assert!(!report.is_usable());
//! assert!(report.explanation().contains("do not bind to the target"));
//! ```

pub mod seq;
pub mod thermo;
pub mod structure;
pub mod binding;
pub mod score;
pub mod model;
pub mod usability;
pub mod error;
pub mod seqio;
pub mod batch;
pub mod logging;

pub use error::EvalError;
pub use model::{
    BindingPosition, Issue, PairMetrics, PrimerMetrics, PrimerPair, TargetBinding, Thresholds, UsabilityReport,
    Verdict,
};
pub use usability::{evaluate, evaluate_primer_pair, evaluate_primer_pair_with};

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
