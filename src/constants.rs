/// Earth angular velocity, in WGS84 frame (rad/s)
pub const EARTH_ANGULAR_VEL_RAD_S: f64 = 7.2921151467E-5;

/// WGS84 Earth gravitational constant (m^3 s-2)
pub const EARTH_GRAVITATION_MU_M3_S2: f64 = 3.986005E14;

/// Speed of light in m.s⁻¹
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

/// Relativistic clock constant F = -2√µ/c² in s.m⁻¹ᐟ²
pub const RELATIVISTIC_CLOCK_F_S_SQRT_M: f64 = -4.442807633E-10;

/// GPS week duration (s)
pub const SECONDS_PER_WEEK: f64 = 604_800.0;

/// Half week duration (s), crossover threshold on weekly time differences
pub const HALF_WEEK_S: f64 = 302_400.0;

/// Nominal MEO signal transit time (s): 20 000 km range over c
pub const DEFAULT_TRANSIT_TIME_S: f64 = 20.0E6 / SPEED_OF_LIGHT_M_S;
