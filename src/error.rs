//! Validation errors raised before any metric is computed.

use thiserror::Error;

/// Why a raw primer input could not be evaluated.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EvalError {
    /// No primer text at all.
    #[error("Please enter both forward and reverse primers.")]
    MissingInput,

    /// The text does not split into exactly two non-empty sequences.
    #[error("Please provide both forward and reverse primers separated by a comma (got {components} component(s)).")]
    MalformedPrimerPair { components: usize },
}
