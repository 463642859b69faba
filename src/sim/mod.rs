//! Fixed-step time evolution of a [`ParticleSystem`].

use crate::{
    error::{Error, Result},
    gravity::{Compute, Newton},
    sys::ParticleSystem,
    types::Real,
};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

mod leapfrog;
mod observer;

pub use self::{
    leapfrog::Leapfrog,
    observer::{Observer, Trajectory},
};

/// Immutable run configuration.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Number of particles
    pub npart: usize,
    /// Gravitational constant
    pub g: Real,
    /// Softening length
    pub softening: Real,
    /// Time-step
    pub dt: Real,
    /// End time
    pub tend: Real,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            npart: 100,
            g: 1.0,
            softening: 0.1,
            dt: 0.01,
            tend: 10.0,
        }
    }
}

impl Params {
    pub fn validate(&self) -> Result<()> {
        if self.npart == 0 {
            return Err(Error::InvalidParticleCount(self.npart));
        }
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(Error::InvalidTimeStep(self.dt));
        }
        if !(self.tend >= 0.0 && self.tend.is_finite()) {
            return Err(Error::InvalidEndTime(self.tend));
        }
        if !(self.softening >= 0.0 && self.softening.is_finite()) {
            return Err(Error::InvalidSoftening(self.softening));
        }
        Ok(())
    }

    /// Number of steps, `ceil(tend / dt)`.
    ///
    /// The final time may overshoot `tend` by less than one step.
    pub fn nsteps(&self) -> u64 {
        (self.tend / self.dt).ceil() as u64
    }

    pub fn law(&self) -> Newton {
        Newton::new(self.g, self.softening)
    }
}

/// Mutable state threaded through the integrator.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationState {
    pub psys: ParticleSystem,
    /// Acceleration at the current positions, rewritten by every kernel call.
    pub acc: Vec<[Real; 3]>,
    /// Number of completed steps.
    pub step: u64,
}

impl SimulationState {
    pub fn new(psys: ParticleSystem) -> Self {
        let n = psys.len();
        SimulationState {
            psys,
            acc: vec![[0.0; 3]; n],
            step: 0,
        }
    }

    pub fn time(&self) -> Real {
        self.psys.time
    }
}

pub trait Integrator {
    /// Compute the initial accelerations.
    fn init(&self, state: &mut SimulationState);
    /// Advance the state by a single step.
    fn step(&self, state: &mut SimulationState);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Accelerations computed, no step taken yet.
    Initialized,
    /// At least one step taken, more remaining.
    Stepping,
    /// All steps taken.
    Finished,
}

/// Summary of a completed run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Report {
    pub steps: u64,
    pub time: Real,
    pub elapsed: Duration,
    /// `(ke, pe)` before the first step.
    pub energy0: (Real, Real),
    /// `(ke, pe)` after the last step.
    pub energy1: (Real, Real),
}

impl Report {
    /// Relative change of the total energy over the run, or the absolute
    /// change when the initial energy is exactly zero.
    pub fn energy_error(&self) -> Real {
        let e0 = self.energy0.0 + self.energy0.1;
        let e1 = self.energy1.0 + self.energy1.1;
        if e0 == 0.0 {
            e1 - e0
        } else {
            (e1 - e0) / e0.abs()
        }
    }
}

/// A validated run: parameters, integrator and the state it owns.
#[derive(Debug)]
pub struct Simulation<K> {
    params: Params,
    integrator: Leapfrog<K>,
    state: SimulationState,
    nsteps: u64,
}

impl<K: Compute> Simulation<K> {
    /// Validate the configuration and compute the initial accelerations.
    pub fn new(params: Params, kernel: K, psys: ParticleSystem) -> Result<Self> {
        params.validate()?;
        psys.check_shape()?;
        if psys.len() != params.npart {
            return Err(Error::ParticleCountMismatch {
                expected: params.npart,
                found: psys.len(),
            });
        }

        let integrator = Leapfrog::new(kernel, params.dt);
        let mut state = SimulationState::new(psys);
        integrator.init(&mut state);

        Ok(Simulation {
            params,
            integrator,
            nsteps: params.nsteps(),
            state,
        })
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn into_state(self) -> SimulationState {
        self.state
    }

    pub fn nsteps(&self) -> u64 {
        self.nsteps
    }

    pub fn phase(&self) -> Phase {
        match self.state.step {
            0 if self.nsteps > 0 => Phase::Initialized,
            s if s < self.nsteps => Phase::Stepping,
            _ => Phase::Finished,
        }
    }

    /// Take one step unless the run is finished. Returns whether a step was taken.
    ///
    /// Callers wanting early termination drive the run with this and check
    /// their own condition in between.
    pub fn step(&mut self) -> bool {
        if self.phase() == Phase::Finished {
            return false;
        }
        self.integrator.step(&mut self.state);
        true
    }

    /// Run all remaining steps, handing the state to `observer` before the
    /// first step and after each one, then once more through
    /// [`Observer::finish`].
    pub fn run<O: Observer>(&mut self, observer: &mut O) -> Report {
        let law = self.params.law();
        let energy0 = self.state.psys.energies(law);
        info!(
            "evolving {} particles for {} steps (dt: {:?}, tend: {:?})",
            self.state.psys.len(),
            self.nsteps - self.state.step.min(self.nsteps),
            self.params.dt,
            self.params.tend,
        );

        let nlog = (self.nsteps / 10).max(1);
        let timer = Instant::now();
        observer.observe(&self.state);
        while self.step() {
            observer.observe(&self.state);
            if self.state.step % nlog == 0 {
                debug!("step: {} time: {:?}", self.state.step, self.state.time());
            }
        }
        observer.finish(&self.state);
        let elapsed = timer.elapsed();

        let energy1 = self.state.psys.energies(law);
        if !self.state.psys.is_finite() {
            warn!("non-finite positions or velocities at time {:?}", self.state.time());
        }
        let report = Report {
            steps: self.state.step,
            time: self.state.time(),
            elapsed,
            energy0,
            energy1,
        };
        info!(
            "finished at time {:?} after {:?} (energy error: {:.3e})",
            report.time,
            report.elapsed,
            report.energy_error()
        );
        report
    }
}


// -- end of file --
