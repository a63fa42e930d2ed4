use crate::prelude::Epoch;

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Signal observation of one satellite at one sampling epoch.
/// Collect these into a `(SV, epoch index)` keyed mapping: a missing
/// entry is a valid situation (no measurement that epoch).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Observation {
    /// Pseudo range observation, expressed in meters.
    pub pseudo_range_m: Option<f64>,

    /// Carrier phase accumulation on the primary band, in cycles.
    pub l1_phase_cycles: Option<f64>,

    /// Carrier phase accumulation on the secondary band, in cycles.
    pub l2_phase_cycles: Option<f64>,

    /// Sampling [Epoch] (receiver time of reception).
    pub epoch: Epoch,
}

impl Observation {
    /// Creates new pseudo range [Observation] (in meters).
    pub fn pseudo_range(epoch: Epoch, range_m: f64) -> Self {
        Self {
            epoch,
            pseudo_range_m: Some(range_m),
            l1_phase_cycles: None,
            l2_phase_cycles: None,
        }
    }

    /// Creates new phase only [Observation], both accumulations in cycles.
    pub fn phases(epoch: Epoch, l1_cycles: f64, l2_cycles: f64) -> Self {
        Self {
            epoch,
            pseudo_range_m: None,
            l1_phase_cycles: Some(l1_cycles),
            l2_phase_cycles: Some(l2_cycles),
        }
    }

    /// Copies and returns new [Observation] with both carrier phase
    /// accumulations (in cycles) defined.
    pub fn with_phases(&self, l1_cycles: f64, l2_cycles: f64) -> Self {
        let mut s = self.clone();
        s.l1_phase_cycles = Some(l1_cycles);
        s.l2_phase_cycles = Some(l2_cycles);
        s
    }
}
