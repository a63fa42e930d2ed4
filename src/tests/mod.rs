use log::LevelFilter;
use std::sync::Once;

use crate::prelude::{Constellation, Ephemeris, SV};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}

/// G01 broadcast record, 2022-01-01 (week 2190, toe 518400), in the
/// documented raw field order.
pub const GPS_RAW_EPHEMERIS: [f64; 21] = [
    26_561_110.71,      // semi-major axis (m)
    0.00534839148168,   // eccentricity
    0.957537602313,     // i0 (rad)
    5.11807041192E-10,  // idot (rad/s)
    1.03791041521,      // omega0 (rad)
    -8.0467641439E-9,   // omega_dot (rad/s)
    -2.3834050415,      // omega (rad)
    2.30316624652,      // m0 (rad)
    4.42197E-9,         // dn (rad/s)
    6.09830021858E-6,   // cus (rad)
    9.85339283943E-7,   // cuc (rad)
    -1.54599547386E-7,  // cis (rad)
    -1.04308128357E-7,  // cic (rad)
    17.3125,            // crs (m)
    258.34375,          // crc (m)
    4.691234E-4,        // clock bias (s)
    1.0231E-11,         // clock drift (s/s)
    0.0,                // clock drift rate (s/s²)
    4.656E-9,           // tgd (s)
    518_400.0,          // toc (s of week)
    518_400.0,          // toe (s of week)
];

pub fn gps_ephemeris() -> Ephemeris {
    Ephemeris::decode(SV::new(Constellation::GPS, 1), &GPS_RAW_EPHEMERIS)
        .expect("valid broadcast record")
}
