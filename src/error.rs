use thiserror::Error;

#[cfg(doc)]
use crate::prelude::Convergence;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Raw broadcast record does not have the expected size.
    /// Fatal for that satellite's record only: skip it or substitute it,
    /// other satellites are not affected.
    #[error("malformed ephemeris: expected {expected} fields, found {found}")]
    MalformedEphemeris { expected: usize, found: usize },

    /// The eccentric anomaly iteration hit its cap before reaching tolerance.
    /// Only returned when escalating a [Convergence::IterationCapReached]
    /// state: the solver itself never aborts on this condition.
    #[error("kepler solver did not converge within iteration cap")]
    NonConvergentSolution,
}
