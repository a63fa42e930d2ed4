//! Dense per (satellite, epoch) pseudo range assembly.
use std::collections::BTreeMap;

use itertools::Itertools;
use log::debug;
use nalgebra::DMatrix;

use crate::prelude::{Observation, SV};

/// Dense pseudo range table, one satellite per row, one epoch per column.
/// Absent observations are kept as an explicit NaN sentinel, never as a
/// silent zero range: the estimation stage must not mistake a dropped
/// measurement for a zero reading.
#[derive(Debug, Clone, PartialEq)]
pub struct PseudoRangeMatrix {
    /// Row identities, sorted by [SV].
    satellites: Vec<SV>,

    /// Number of epoch columns.
    num_epochs: usize,

    /// Pseudo ranges (in meters); absent entries are NaN.
    data: DMatrix<f64>,

    /// Satellites observed without a single pseudo range, left out of the
    /// table rows. Diagnostic: they are reported, never silently discarded.
    excluded_satellites: Vec<SV>,
}

impl PseudoRangeMatrix {
    /// Assembles the dense table from per (satellite, epoch index) signal
    /// observations. Missing entries in the mapping are valid (no
    /// measurement that epoch). Stateless and idempotent: rebuilding from
    /// identical observations yields an identical table.
    pub fn build(observations: &BTreeMap<(SV, usize), Observation>) -> Self {
        let num_epochs = observations
            .keys()
            .map(|(_, epoch)| epoch + 1)
            .max()
            .unwrap_or(0);

        let (satellites, excluded_satellites): (Vec<SV>, Vec<SV>) = observations
            .keys()
            .map(|(sv, _)| *sv)
            .unique()
            .sorted()
            .partition(|sv| {
                observations
                    .iter()
                    .any(|((obs_sv, _), obs)| obs_sv == sv && obs.pseudo_range_m.is_some())
            });

        for sv in &excluded_satellites {
            debug!("{} - excluded: no pseudo range in any epoch", sv);
        }

        let mut data = DMatrix::from_element(satellites.len(), num_epochs, f64::NAN);

        for (row, sv) in satellites.iter().enumerate() {
            for epoch in 0..num_epochs {
                if let Some(observation) = observations.get(&(*sv, epoch)) {
                    if let Some(pseudo_range_m) = observation.pseudo_range_m {
                        data[(row, epoch)] = pseudo_range_m;
                    }
                }
            }
        }

        Self {
            satellites,
            num_epochs,
            data,
            excluded_satellites,
        }
    }

    /// Pseudo range (in meters) observed for this (satellite, epoch index),
    /// mapping the absent sentinel back to [None].
    pub fn get(&self, sv: SV, epoch: usize) -> Option<f64> {
        let row = self.satellites.iter().position(|k| *k == sv)?;
        if epoch >= self.num_epochs {
            return None;
        }
        let value = self.data[(row, epoch)];
        if value.is_nan() {
            None
        } else {
            Some(value)
        }
    }

    /// Row identities, sorted by [SV].
    pub fn satellites(&self) -> &[SV] {
        &self.satellites
    }

    /// Number of epoch columns.
    pub fn num_epochs(&self) -> usize {
        self.num_epochs
    }

    /// Satellites left out of the table rows (zero pseudo range observed).
    pub fn excluded_satellites(&self) -> &[SV] {
        &self.excluded_satellites
    }

    /// Raw table access; absent observations are the NaN sentinel.
    pub fn data(&self) -> &DMatrix<f64> {
        &self.data
    }
}
