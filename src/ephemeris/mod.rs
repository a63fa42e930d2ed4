//! Broadcast ephemeris records and satellite state resolution.
use crate::{
    constants::{HALF_WEEK_S, SECONDS_PER_WEEK},
    prelude::{Error, SV},
};

mod kepler;

pub use kepler::{Convergence, SatelliteState};

/// Expected length of a raw broadcast parameter vector.
pub const RAW_EPHEMERIS_LEN: usize = 21;

/// Decoded broadcast ephemeris. One record per [SV], refreshed with each
/// navigation message; immutable once decoded. All angles in radians,
/// lengths in meters, weekly times in seconds of GPS week.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Ephemeris {
    /// [SV] this record applies to.
    pub sv: SV,

    /// Semi-major axis (in meters)
    pub semi_major_axis_m: f64,

    /// Eccentricity
    pub eccentricity: f64,

    /// Mean anomaly at reference time (in radians)
    pub m0_rad: f64,

    /// Inclination angle at reference time (in radians)
    pub i0_rad: f64,

    /// Inclination rate of change (in radians/s)
    pub idot_rad_s: f64,

    /// Mean motion difference from computed value (in radians/s)
    pub dn_rad_s: f64,

    /// Longitude of ascending node at reference time (in radians)
    pub omega0_rad: f64,

    /// Argument of perigee (in radians)
    pub omega_rad: f64,

    /// Rate of right ascension (in radians/s)
    pub omega_dot_rad_s: f64,

    /// Sine / Cosine harmonic corrections to the argument of latitude (in radians)
    pub cus_cuc_rad: (f64, f64),

    /// Sine / Cosine harmonic corrections to the inclination angle (in radians)
    pub cis_cic_rad: (f64, f64),

    /// Sine / Cosine harmonic corrections to the orbit radius (in meters)
    pub crs_crc_m: (f64, f64),

    /// Clock bias (s), drift (s/s) and drift rate (s/s²) polynomial terms
    pub clock_bias_drift_rate: (f64, f64, f64),

    /// Total group delay (s)
    pub tgd_s: f64,

    /// Time of Clock, reference of the clock polynomial (seconds of GPS week)
    pub toc_s: f64,

    /// Time of Ephemeris this record is valid from (seconds of GPS week)
    pub toe_s: f64,
}

impl Ephemeris {
    /// Decodes a raw broadcast parameter vector into a strictly typed
    /// [Ephemeris] record. Pure transform, no side effects.
    ///
    /// The raw vector must contain exactly [RAW_EPHEMERIS_LEN] fields,
    /// in this fixed order (angles in radians):
    ///
    /// | index | field                                  |
    /// |-------|----------------------------------------|
    /// |     0 | semi-major axis (m)                    |
    /// |     1 | eccentricity                           |
    /// |   2-3 | i0 (rad), idot (rad/s)                 |
    /// |   4-5 | Ω0 (rad), Ω̇ (rad/s)                    |
    /// |     6 | argument of perigee ω (rad)            |
    /// |     7 | mean anomaly m0 (rad)                  |
    /// |     8 | mean motion difference Δn (rad/s)      |
    /// |  9-10 | cus, cuc (rad)                         |
    /// | 11-12 | cis, cic (rad)                         |
    /// | 13-14 | crs, crc (m)                           |
    /// | 15-17 | clock bias (s), drift (s/s), rate (s/s²) |
    /// |    18 | total group delay (s)                  |
    /// |    19 | time of clock (seconds of week)        |
    /// |    20 | time of ephemeris (seconds of week)    |
    ///
    /// Any other vector length is rejected with [Error::MalformedEphemeris].
    pub fn decode(sv: SV, raw: &[f64]) -> Result<Self, Error> {
        if raw.len() != RAW_EPHEMERIS_LEN {
            return Err(Error::MalformedEphemeris {
                expected: RAW_EPHEMERIS_LEN,
                found: raw.len(),
            });
        }

        Ok(Self {
            sv,
            semi_major_axis_m: raw[0],
            eccentricity: raw[1],
            i0_rad: raw[2],
            idot_rad_s: raw[3],
            omega0_rad: raw[4],
            omega_dot_rad_s: raw[5],
            omega_rad: raw[6],
            m0_rad: raw[7],
            dn_rad_s: raw[8],
            cus_cuc_rad: (raw[9], raw[10]),
            cis_cic_rad: (raw[11], raw[12]),
            crs_crc_m: (raw[13], raw[14]),
            clock_bias_drift_rate: (raw[15], raw[16], raw[17]),
            tgd_s: raw[18],
            toc_s: raw[19],
            toe_s: raw[20],
        })
    }

    /// Time of Ephemeris this record is valid from, in seconds of GPS week.
    pub fn reference_time(&self) -> f64 {
        self.toe_s
    }

    /// Returns true if this record is still valid at `t_s` (seconds of
    /// GPS week), for a tolerated record age.
    pub fn is_valid(&self, t_s: f64, max_age_s: f64) -> bool {
        time_from_reference(t_s, self.toe_s).abs() < max_age_s
    }

    /// Broadcast clock polynomial, evaluated at `t_s` (seconds of GPS week).
    pub fn clock_polynomial(&self, t_s: f64) -> f64 {
        let (a0, a1, a2) = self.clock_bias_drift_rate;
        let dt = time_from_reference(t_s, self.toc_s);
        a0 + a1 * dt + a2 * dt.powi(2)
    }
}

/// Difference `t - t_ref` between two seconds-of-week values, corrected
/// for end of week crossovers.
pub fn time_from_reference(t_s: f64, t_ref_s: f64) -> f64 {
    let mut dt = t_s - t_ref_s;
    if dt > HALF_WEEK_S {
        dt -= SECONDS_PER_WEEK;
    } else if dt < -HALF_WEEK_S {
        dt += SECONDS_PER_WEEK;
    }
    dt
}

#[cfg(test)]
mod test {
    use super::{time_from_reference, Ephemeris, RAW_EPHEMERIS_LEN};
    use crate::prelude::{Constellation, Error, SV};
    use rstest::rstest;

    #[test]
    fn raw_record_decoding() {
        let raw: Vec<f64> = (0..21).map(|k| k as f64).collect();
        let sv = SV::new(Constellation::GPS, 7);

        let eph = Ephemeris::decode(sv, &raw).unwrap();

        assert_eq!(eph.sv, sv);
        assert_eq!(eph.semi_major_axis_m, 0.0);
        assert_eq!(eph.eccentricity, 1.0);
        assert_eq!(eph.i0_rad, 2.0);
        assert_eq!(eph.idot_rad_s, 3.0);
        assert_eq!(eph.omega0_rad, 4.0);
        assert_eq!(eph.omega_dot_rad_s, 5.0);
        assert_eq!(eph.omega_rad, 6.0);
        assert_eq!(eph.m0_rad, 7.0);
        assert_eq!(eph.dn_rad_s, 8.0);
        assert_eq!(eph.cus_cuc_rad, (9.0, 10.0));
        assert_eq!(eph.cis_cic_rad, (11.0, 12.0));
        assert_eq!(eph.crs_crc_m, (13.0, 14.0));
        assert_eq!(eph.clock_bias_drift_rate, (15.0, 16.0, 17.0));
        assert_eq!(eph.tgd_s, 18.0);
        assert_eq!(eph.toc_s, 19.0);
        assert_eq!(eph.toe_s, 20.0);
        assert_eq!(eph.reference_time(), 20.0);
    }

    #[rstest]
    #[case(0)]
    #[case(20)]
    #[case(22)]
    fn malformed_raw_record(#[case] len: usize) {
        let raw = vec![0.0_f64; len];
        let sv = SV::new(Constellation::GPS, 1);
        assert_eq!(
            Ephemeris::decode(sv, &raw),
            Err(Error::MalformedEphemeris {
                expected: RAW_EPHEMERIS_LEN,
                found: len,
            }),
        );
    }

    #[rstest]
    #[case(100.0, 90.0, 10.0)]
    #[case(2.0, 604_799.0, 3.0)]
    #[case(604_799.0, 2.0, -3.0)]
    fn weekly_crossover(#[case] t_s: f64, #[case] t_ref_s: f64, #[case] expected: f64) {
        assert_eq!(time_from_reference(t_s, t_ref_s), expected);
    }

    #[test]
    fn clock_polynomial_evaluation() {
        let eph = Ephemeris {
            clock_bias_drift_rate: (1.0E-4, 1.0E-9, 1.0E-12),
            toc_s: 1_000.0,
            ..Default::default()
        };
        let dt = 10.0;
        let expected = 1.0E-4 + 1.0E-9 * dt + 1.0E-12 * dt * dt;
        assert_eq!(eph.clock_polynomial(1_010.0), expected);
    }

    #[test]
    fn record_validity() {
        let eph = Ephemeris {
            toe_s: 518_400.0,
            ..Default::default()
        };
        assert!(eph.is_valid(518_500.0, 14_400.0));
        assert!(!eph.is_valid(540_000.0, 14_400.0));
    }
}
