//! Direct-summation gravitational N-body simulations.
//!
//! Particles live in a structure-of-arrays [`sys::ParticleSystem`]. The
//! softened pairwise accelerations are computed by one of the kernels in
//! [`gravity`], and [`sim::Simulation`] advances the system with a fixed-step
//! kick-drift-kick leapfrog for `ceil(tend / dt)` steps.

#![cfg_attr(feature = "nightly", feature(test))]

#[cfg(all(feature = "nightly", test))]
extern crate test;

#[macro_use]
mod types;

pub mod config;
pub mod error;
pub mod gravity;
pub mod ics;
pub mod sim;
#[cfg(feature = "serde1")]
pub mod snapshot;
pub mod sys;

pub mod real {
    pub use crate::types::*;
}

pub use crate::{
    error::{Error, Result},
    types::{AsSlice, AsSliceMut, Len},
};

// -- end of file --
