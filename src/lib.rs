#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod cfg;
mod constants;
mod ephemeris;
mod error;
mod matrix;
mod observation;
mod solver;

#[cfg(test)]
mod tests;

// pub export
pub use error::Error;

// prelude
pub mod prelude {
    pub use crate::cfg::{Config, Modeling, SolverOpts};
    pub use crate::constants::DEFAULT_TRANSIT_TIME_S;
    pub use crate::ephemeris::{
        time_from_reference, Convergence, Ephemeris, SatelliteState, RAW_EPHEMERIS_LEN,
    };
    pub use crate::error::Error;
    pub use crate::matrix::PseudoRangeMatrix;
    pub use crate::observation::Observation;
    pub use crate::solver::Solver;
    // re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale};
    pub use nalgebra::Vector3;
}
