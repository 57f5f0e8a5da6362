use thiserror::Error;

/// Failures surfaced by the engine. All are fatal to the single call that
/// produced them; no partial results are returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The bounded Lab search exhausted its iteration ceiling without
    /// reaching the target perceptual delta. Retrying with the same inputs
    /// deterministically reproduces this failure.
    #[error("no convergence after {iterations} iterations (delta {delta:.4} < target {target:.4})")]
    NonConvergence {
        iterations: u32,
        delta: f64,
        target: f64,
    },

    /// Unrecognized strategy selector. Rejected at the boundary rather than
    /// silently defaulting.
    #[error("unknown strategy: {0:?}")]
    UnknownStrategy(String),

    /// A color literal that neither the hex fast path nor csscolorparser
    /// could make sense of.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}
