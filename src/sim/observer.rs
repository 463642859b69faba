use super::SimulationState;
use crate::types::Real;

/// Read-only hook called by [`Simulation::run`](super::Simulation::run)
/// before the first step and after every step.
pub trait Observer {
    fn observe(&mut self, state: &SimulationState);

    /// Called once with the final state, after the last `observe`.
    fn finish(&mut self, _state: &SimulationState) {}
}

/// Observe nothing.
impl Observer for () {
    fn observe(&mut self, _state: &SimulationState) {}
}

impl<F> Observer for F
where
    F: FnMut(&SimulationState),
{
    fn observe(&mut self, state: &SimulationState) {
        self(state)
    }
}

/// Position history, sampled every `every` steps. The final state is
/// always recorded, even when the step count is not a multiple of `every`.
///
/// Memory grows as O(N * nsteps / every); only attach it when the history
/// is actually needed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    every: u64,
    pub times: Vec<Real>,
    pub frames: Vec<Vec<[Real; 3]>>,
}

impl Trajectory {
    pub fn new(every: u64) -> Self {
        Trajectory {
            every: every.max(1),
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl Trajectory {
    fn record(&mut self, state: &SimulationState) {
        self.times.push(state.time());
        self.frames.push(state.psys.attrs.pos.clone());
    }
}

impl Observer for Trajectory {
    fn observe(&mut self, state: &SimulationState) {
        if state.step % self.every == 0 {
            self.record(state);
        }
    }

    fn finish(&mut self, state: &SimulationState) {
        if state.step % self.every != 0 {
            self.record(state);
        }
    }
}


// -- end of file --
