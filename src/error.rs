use crate::types::Real;
use std::io;
use thiserror::Error;

/// Failures detected before a run starts, or while loading/storing its inputs.
///
/// Numerical faults inside a run (non-finite values after a zero-softening
/// close encounter) are not errors: they propagate into the final state.
#[derive(Debug, Error)]
pub enum Error {
    #[error("particle count must be positive, got {0}")]
    InvalidParticleCount(usize),

    #[error("time-step must be positive and finite, got {0}")]
    InvalidTimeStep(Real),

    #[error("end time must be non-negative and finite, got {0}")]
    InvalidEndTime(Real),

    #[error("softening must be non-negative and finite, got {0}")]
    InvalidSoftening(Real),

    #[error("total mass must be positive and finite, got {0}")]
    InvalidTotalMass(Real),

    #[error("array lengths differ: {pos} positions, {vel} velocities, {mass} masses")]
    LengthMismatch { pos: usize, vel: usize, mass: usize },

    #[error("expected {expected} particles, found {found}")]
    ParticleCountMismatch { expected: usize, found: usize },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    #[cfg(feature = "serde1")]
    #[error("snapshot: {0}")]
    Snapshot(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

// -- end of file --
