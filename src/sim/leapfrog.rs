use super::{Integrator, SimulationState};
use crate::{gravity::Compute, types::Real};
use itertools::izip;

/// Kick-drift-kick leapfrog with a fixed time-step.
///
/// Second order, symplectic and time-reversible. One kernel evaluation per
/// step; the acceleration at the end of a step is reused as the opening
/// kick of the next one.
#[derive(Debug)]
pub struct Leapfrog<K> {
    kernel: K,
    dt: Real,
}

impl<K: Compute> Leapfrog<K> {
    pub fn new(kernel: K, dt: Real) -> Self {
        Leapfrog { kernel, dt }
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn dt(&self) -> Real {
        self.dt
    }

    fn kick(&self, state: &mut SimulationState) {
        let h = 0.5 * self.dt;
        for (vel, acc) in izip!(&mut state.psys.attrs.vel, &state.acc) {
            for k in 0..3 {
                vel[k] += acc[k] * h;
            }
        }
    }

    fn drift(&self, state: &mut SimulationState) {
        let h = self.dt;
        for (pos, vel) in izip!(&mut state.psys.attrs.pos, &state.psys.attrs.vel) {
            for k in 0..3 {
                pos[k] += vel[k] * h;
            }
        }
    }

    fn update_acc(&self, state: &mut SimulationState) {
        self.kernel.compute(state.psys.as_slice(), &mut state.acc);
    }
}

impl<K: Compute> Integrator for Leapfrog<K> {
    fn init(&self, state: &mut SimulationState) {
        state.acc.resize(state.psys.len(), [0.0; 3]);
        self.update_acc(state);
    }

    fn step(&self, state: &mut SimulationState) {
        // the order below must not change
        self.kick(state);
        self.drift(state);
        self.update_acc(state);
        self.kick(state);
        state.psys.time += self.dt;
        state.step += 1;
    }
}


// -- end of file --
