use std::collections::BTreeMap;

use log::debug;

use crate::{
    constants::SPEED_OF_LIGHT_M_S,
    prelude::{Config, Ephemeris, PseudoRangeMatrix, SatelliteState, SV},
};

/// Batch satellite state resolution over an observation epoch.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    cfg: Config,
}

impl Solver {
    /// Builds a new [Solver] from this [Config].
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    /// Resolves the state of every satellite observed at this epoch index.
    ///
    /// ## Input
    /// - ephemerides: latest decoded [Ephemeris] per [SV]
    /// - matrix: assembled [PseudoRangeMatrix]
    /// - epoch: epoch index (table column)
    /// - t_obs_s: reception time of that epoch, in seconds of GPS week
    ///
    /// Each transit time estimate derives from that satellite's own pseudo
    /// range. Satellites missing an ephemeris or an observation at this
    /// epoch are skipped with a trace: one satellite never prevents the
    /// resolution of any other.
    pub fn resolve(
        &self,
        ephemerides: &BTreeMap<SV, Ephemeris>,
        matrix: &PseudoRangeMatrix,
        epoch: usize,
        t_obs_s: f64,
    ) -> BTreeMap<SV, SatelliteState> {
        let mut states = BTreeMap::new();

        for sv in matrix.satellites() {
            let Some(ephemeris) = ephemerides.get(sv) else {
                debug!("{} - no ephemeris decoded: skipped", sv);
                continue;
            };

            let Some(pseudo_range_m) = matrix.get(*sv, epoch) else {
                debug!("{} - no observation at epoch {}: skipped", sv, epoch);
                continue;
            };

            let transit_s = pseudo_range_m / SPEED_OF_LIGHT_M_S;
            let state = ephemeris.resolve_state(t_obs_s, Some(transit_s), &self.cfg);
            states.insert(*sv, state);
        }

        states
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;

    use super::Solver;
    use crate::prelude::{Config, Epoch, Observation, PseudoRangeMatrix};
    use crate::tests::{gps_ephemeris, init_logger};

    #[test]
    fn isolated_resolution() {
        init_logger();

        let eph = gps_ephemeris();
        let g01 = eph.sv;

        let mut g12 = g01;
        g12.prn = 12;

        let t0 = Epoch::default();

        let mut observations = BTreeMap::new();
        observations.insert((g01, 0), Observation::pseudo_range(t0, 21.0E6));
        // observed satellite without any decoded ephemeris
        observations.insert((g12, 0), Observation::pseudo_range(t0, 24.2E6));
        let matrix = PseudoRangeMatrix::build(&observations);

        let mut ephemerides = BTreeMap::new();
        ephemerides.insert(g01, eph);

        let solver = Solver::new(Config::default());
        let states = solver.resolve(&ephemerides, &matrix, 0, 518_418.0);

        // the missing G12 ephemeris never prevented the G01 resolution
        assert_eq!(states.len(), 1);
        assert!(states[&g01].converged());

        // no observation on the requested epoch: empty batch, no failure
        let states = solver.resolve(&ephemerides, &matrix, 1, 518_448.0);
        assert!(states.is_empty());
    }
}
