#[cfg(feature = "serde")]
use serde::Deserialize;

#[cfg(doc)]
use crate::prelude::Convergence;

fn default_tolerance_rad() -> f64 {
    1.0E-12
}

fn default_max_iterations() -> usize {
    30
}

fn default_sv_clock() -> bool {
    true
}

fn default_sv_tgd() -> bool {
    true
}

fn default_relativistic_clock_bias() -> bool {
    true
}

/// Eccentric anomaly iteration options.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct SolverOpts {
    /// Convergence tolerance on the eccentric anomaly (radians).
    #[cfg_attr(feature = "serde", serde(default = "default_tolerance_rad"))]
    pub tolerance_rad: f64,

    /// Hard iteration cap. This is the sole termination guarantee of the
    /// iteration: when hit, the best estimate is returned and tagged
    /// [Convergence::IterationCapReached].
    #[cfg_attr(feature = "serde", serde(default = "default_max_iterations"))]
    pub max_iterations: usize,
}

impl Default for SolverOpts {
    fn default() -> Self {
        Self {
            tolerance_rad: default_tolerance_rad(),
            max_iterations: default_max_iterations(),
        }
    }
}

/// Physical effects compensation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Modeling {
    /// Compensate for onboard clock offset to system time (+/- 100 km)
    #[cfg_attr(feature = "serde", serde(default = "default_sv_clock"))]
    pub sv_clock_bias: bool,

    /// Compensate for onboard circuitry delay (+/- 1 m)
    #[cfg_attr(feature = "serde", serde(default = "default_sv_tgd"))]
    pub sv_total_group_delay: bool,

    /// Compensate for relativistic effect on onboard clock (+/- 1 m)
    #[cfg_attr(feature = "serde", serde(default = "default_relativistic_clock_bias"))]
    pub relativistic_clock_bias: bool,
}

impl Default for Modeling {
    fn default() -> Self {
        Self {
            sv_clock_bias: default_sv_clock(),
            sv_total_group_delay: default_sv_tgd(),
            relativistic_clock_bias: default_relativistic_clock_bias(),
        }
    }
}

/// Solver configuration.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Config {
    /// Eccentric anomaly iteration options.
    #[cfg_attr(feature = "serde", serde(default))]
    pub solver: SolverOpts,

    /// Physical effects compensation. All effects are modeled by default.
    #[cfg_attr(feature = "serde", serde(default))]
    pub modeling: Modeling,
}
