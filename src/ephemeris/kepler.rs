use log::{debug, warn};
use nalgebra::{Rotation3, Vector3};

use crate::{
    cfg::{Config, SolverOpts},
    constants::{
        DEFAULT_TRANSIT_TIME_S, EARTH_ANGULAR_VEL_RAD_S, EARTH_GRAVITATION_MU_M3_S2,
        RELATIVISTIC_CLOCK_F_S_SQRT_M,
    },
    ephemeris::{time_from_reference, Ephemeris},
    prelude::{Error, SV},
};

/// Outcome of the eccentric anomaly iteration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Convergence {
    /// Tolerance was met after that many refinements.
    Converged { iterations: usize },

    /// The iteration cap was hit first. The associated state is the best
    /// estimate, with that much residual left on Kepler's equation.
    /// Warning level condition: downstream may tolerate the reduced precision.
    IterationCapReached { residual_rad: f64 },
}

/// Satellite state at signal transmission time. Derived from exactly one
/// [Ephemeris] record and one transit time estimate: recompute it (never
/// patch it) whenever either input changes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SatelliteState {
    /// [SV] this state applies to.
    pub sv: SV,

    /// Position in ECEF frame at transmission time (meters).
    pub position_ecef_m: Vector3<f64>,

    /// Onboard clock correction at transmission time (seconds).
    pub clock_correction_s: f64,

    /// [Convergence] diagnosis of the underlying iteration.
    pub convergence: Convergence,
}

impl SatelliteState {
    /// Returns true if the eccentric anomaly iteration met its tolerance.
    pub fn converged(&self) -> bool {
        matches!(self.convergence, Convergence::Converged { .. })
    }

    /// Escalates [Convergence::IterationCapReached] into
    /// [Error::NonConvergentSolution], for applications that reject
    /// degraded precision states.
    pub fn into_result(self) -> Result<Self, Error> {
        match self.convergence {
            Convergence::Converged { .. } => Ok(self),
            Convergence::IterationCapReached { .. } => Err(Error::NonConvergentSolution),
        }
    }
}

/// Solves Kepler's equation `E - e·sin(E) = M` for the eccentric anomaly,
/// by Newton iteration starting from the mean anomaly.
fn eccentric_anomaly(eccentricity: f64, m_rad: f64, opts: &SolverOpts) -> (f64, Convergence) {
    let mut e_k = m_rad;

    for iterations in 0..opts.max_iterations {
        let residual = e_k - eccentricity * e_k.sin() - m_rad;
        if residual.abs() < opts.tolerance_rad {
            return (e_k, Convergence::Converged { iterations });
        }
        e_k -= residual / (1.0 - eccentricity * e_k.cos());
    }

    let residual_rad = e_k - eccentricity * e_k.sin() - m_rad;
    (e_k, Convergence::IterationCapReached { residual_rad })
}

impl Ephemeris {
    /// Resolves the satellite state at signal transmission time.
    ///
    /// ## Input
    /// - t_obs_s: observation (reception) time, in seconds of GPS week
    /// - transit_s: estimated signal transit time; [None] selects the
    ///   nominal MEO value [DEFAULT_TRANSIT_TIME_S]. Derive it from the
    ///   observed pseudo range whenever one is available.
    /// - cfg: solver [Config]
    ///
    /// Transmission time is the observation time minus the transit estimate,
    /// further compensated for the onboard clock offset when
    /// `cfg.modeling.sv_clock_bias` is set.
    ///
    /// Never fatal: when the iteration cap is hit, the best estimate is
    /// returned and tagged by its [Convergence].
    pub fn resolve_state(
        &self,
        t_obs_s: f64,
        transit_s: Option<f64>,
        cfg: &Config,
    ) -> SatelliteState {
        let transit_s = transit_s.unwrap_or(DEFAULT_TRANSIT_TIME_S);

        let mut t_tx = t_obs_s - transit_s;
        if cfg.modeling.sv_clock_bias {
            t_tx -= self.clock_polynomial(t_tx);
        }

        let t_k = time_from_reference(t_tx, self.toe_s);

        let e = self.eccentricity;
        let a = self.semi_major_axis_m;

        let n0 = (EARTH_GRAVITATION_MU_M3_S2 / a.powi(3)).sqrt();
        let n = n0 + self.dn_rad_s;
        let m_k = self.m0_rad + n * t_k;

        let (e_k, convergence) = eccentric_anomaly(e, m_k, &cfg.solver);
        if let Convergence::IterationCapReached { residual_rad } = convergence {
            warn!(
                "{} - kepler iteration cap hit, {:.3e} rad residual",
                self.sv, residual_rad
            );
        }

        let (sin_e_k, cos_e_k) = e_k.sin_cos();
        let v_k = ((1.0 - e.powi(2)).sqrt() * sin_e_k).atan2(cos_e_k - e);

        let (cus, cuc) = self.cus_cuc_rad;
        let (cis, cic) = self.cis_cic_rad;
        let (crs, crc) = self.crs_crc_m;

        let phi = v_k + self.omega_rad;
        let (sin_2phi, cos_2phi) = (2.0 * phi).sin_cos();

        let u_k = phi + cuc * cos_2phi + cus * sin_2phi;
        let r_k = a * (1.0 - e * cos_e_k) + crc * cos_2phi + crs * sin_2phi;
        let i_k = self.i0_rad + self.idot_rad_s * t_k + cic * cos_2phi + cis * sin_2phi;

        let omega_k = self.omega0_rad + (self.omega_dot_rad_s - EARTH_ANGULAR_VEL_RAD_S) * t_k
            - EARTH_ANGULAR_VEL_RAD_S * self.toe_s;

        let orbital = Vector3::new(r_k * u_k.cos(), r_k * u_k.sin(), 0.0);

        // orbital plane to ECEF rotation
        let rot_x3 = Rotation3::from_axis_angle(&Vector3::x_axis(), i_k);
        let rot_z3 = Rotation3::from_axis_angle(&Vector3::z_axis(), omega_k);
        let position_ecef_m = rot_z3 * rot_x3 * orbital;

        let mut clock_correction_s = if cfg.modeling.sv_clock_bias {
            self.clock_polynomial(t_tx)
        } else {
            0.0
        };

        if cfg.modeling.relativistic_clock_bias {
            clock_correction_s += RELATIVISTIC_CLOCK_F_S_SQRT_M * e * a.sqrt() * sin_e_k;
        }

        if cfg.modeling.sv_total_group_delay {
            clock_correction_s -= self.tgd_s;
        }

        debug!(
            "{} - x={:.3}km y={:.3}km z={:.3}km dt={:.3e}s t_k={:.3}s",
            self.sv,
            position_ecef_m[0] / 1000.0,
            position_ecef_m[1] / 1000.0,
            position_ecef_m[2] / 1000.0,
            clock_correction_s,
            t_k
        );

        SatelliteState {
            sv: self.sv,
            position_ecef_m,
            clock_correction_s,
            convergence,
        }
    }
}
