//! Softened Newtonian accelerations from a dense pairwise sum.
//!
//! Every kernel computes, for each particle `i`,
//!
//! \\[ a_{i} = G \sum_{j=0}^{N} m_{j} \frac{r_{j} - r_{i}}{(|r_{j} - r_{i}|^{2} + \epsilon^{2})^{3/2}} \\]
//!
//! The self term `j == i` contributes exactly zero, also when \\( \epsilon = 0 \\).
//! The kernels only differ in how the O(N²) sum is laid out and scheduled.

use crate::{
    sys::AttributesSlice,
    types::{Len, Real},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub mod batched;
pub mod blocked;
pub mod energy;
pub mod looped;
pub mod parallel;

pub use self::{
    batched::Batched, blocked::Blocked, energy::Energy, looped::Looped, parallel::Parallel,
};

/// Force law constants: gravitational constant and softening length.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Newton {
    pub g: Real,
    pub softening: Real,
}

impl Newton {
    pub fn new(g: Real, softening: Real) -> Self {
        Newton { g, softening }
    }

    pub fn eps2(&self) -> Real {
        self.softening * self.softening
    }

    /// `(|dr|² + ε²)^(-3/2)`
    #[inline]
    pub(crate) fn inv_r3(&self, dr: &[Real; 3]) -> Real {
        let s = dr[0] * dr[0] + dr[1] * dr[1] + dr[2] * dr[2] + self.eps2();
        let rinv2 = s.recip();
        rinv2 * rinv2.sqrt()
    }

    /// Unscaled (G = 1) acceleration on `pos[i]` from all particles in `src`.
    #[inline]
    pub(crate) fn row(&self, i: usize, src: &AttributesSlice<'_>) -> [Real; 3] {
        let ri = src.pos[i];
        let mut ai = [0.0; 3];
        for (j, (&mj, rj)) in src.mass.iter().zip(src.pos.iter()).enumerate() {
            if j == i {
                continue;
            }
            let dr = [rj[0] - ri[0], rj[1] - ri[1], rj[2] - ri[2]];
            let mj_r3 = mj * self.inv_r3(&dr);
            loop1(3, |k| ai[k] += mj_r3 * dr[k]);
        }
        ai
    }
}

impl Default for Newton {
    fn default() -> Self {
        Newton::new(1.0, 0.1)
    }
}

/// A gravitational acceleration kernel.
///
/// Kernels are stateless: each call recomputes the whole result from the
/// given positions and masses only.
pub trait Compute: Sync {
    /// Overwrite `acc` with the acceleration of every particle in `src`.
    fn compute(&self, src: AttributesSlice<'_>, acc: &mut [[Real; 3]]);

    /// Compute the accelerations into a freshly allocated buffer.
    fn acceleration(&self, src: AttributesSlice<'_>) -> Vec<[Real; 3]> {
        let mut acc = vec![[0.0; 3]; src.len()];
        self.compute(src, &mut acc);
        acc
    }
}

/// How the pairwise sum is evaluated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Sequential double loop.
    Looped,
    /// Dense N×N displacement matrices reduced by a matrix-vector product.
    Batched,
    /// Rows distributed over the rayon thread-pool.
    Parallel,
    /// Recursive triangle/rectangle blocks exploiting pair symmetry.
    Blocked,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Parallel
    }
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Looped,
        Strategy::Batched,
        Strategy::Parallel,
        Strategy::Blocked,
    ];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Looped => "looped",
            Strategy::Batched => "batched",
            Strategy::Parallel => "parallel",
            Strategy::Blocked => "blocked",
        };
        f.write_str(name)
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.to_string() == s.to_ascii_lowercase())
            .ok_or_else(|| format!("unknown kernel strategy `{}`", s))
    }
}

/// Kernel selected at run time from a [`Strategy`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AccKernel {
    pub law: Newton,
    pub strategy: Strategy,
}

impl AccKernel {
    pub fn new(law: Newton, strategy: Strategy) -> Self {
        AccKernel { law, strategy }
    }
}

impl Compute for AccKernel {
    fn compute(&self, src: AttributesSlice<'_>, acc: &mut [[Real; 3]]) {
        match self.strategy {
            Strategy::Looped => Looped::new(self.law).compute(src, acc),
            Strategy::Batched => Batched::new(self.law).compute(src, acc),
            Strategy::Parallel => Parallel::new(self.law).compute(src, acc),
            Strategy::Blocked => Blocked::new(self.law).compute(src, acc),
        }
    }
}

#[inline]
fn loop1<F>(nk: usize, mut f: F)
where
    F: FnMut(usize),
{
    for k in 0..nk {
        f(k);
    }
}

#[inline]
fn loop2<F>(ni: usize, nj: usize, mut f: F)
where
    F: FnMut(usize, usize),
{
    loop1(ni, |i| loop1(nj, |j| f(i, j)));
}


#[cfg(test)]
mod tests {
    use super::{fixtures::*, *};

    #[test]
    fn strategies_agree() {
        let psys = random_system(20, 17);
        let law = Newton::new(1.0, 0.1);
        let reference = Looped::new(law).acceleration(psys.as_slice());
        for &strategy in Strategy::ALL.iter() {
            let acc = AccKernel::new(law, strategy).acceleration(psys.as_slice());
            assert!(
                max_rel_diff(&acc, &reference) < 1.0e-10,
                "{} disagrees with looped",
                strategy
            );
        }
    }

    #[test]
    fn strategies_agree_above_block_threshold() {
        let psys = random_system(300, 3);
        let law = Newton::new(0.5, 0.05);
        let reference = Looped::new(law).acceleration(psys.as_slice());
        for &strategy in Strategy::ALL.iter() {
            let acc = AccKernel::new(law, strategy).acceleration(psys.as_slice());
            assert!(max_rel_diff(&acc, &reference) < 1.0e-10);
        }
    }

    #[test]
    fn empty_input() {
        let psys = random_system(0, 0);
        for &strategy in Strategy::ALL.iter() {
            let acc = AccKernel::new(Newton::default(), strategy).acceleration(psys.as_slice());
            assert!(acc.is_empty());
        }
    }

    #[test]
    fn single_particle_feels_no_force() {
        let psys = random_system(1, 5);
        for &softening in [0.0, 0.1].iter() {
            for &strategy in Strategy::ALL.iter() {
                let kernel = AccKernel::new(Newton::new(3.0, softening), strategy);
                assert_eq!(kernel.acceleration(psys.as_slice()), vec![[0.0; 3]]);
            }
        }
    }

    #[test]
    fn symmetric_pair() {
        let psys = crate::sys::ParticleSystem::from_arrays(
            vec![[0.3, -0.2, 0.7], [-0.3, 0.2, -0.7]],
            vec![[0.0; 3]; 2],
            vec![2.0, 2.0],
        )
        .unwrap();
        for &(g, softening) in [(1.0, 0.0), (1.0, 0.1), (6.674e-11, 1.0e-3)].iter() {
            for &strategy in Strategy::ALL.iter() {
                let kernel = AccKernel::new(Newton::new(g, softening), strategy);
                let acc = kernel.acceleration(psys.as_slice());
                for k in 0..3 {
                    assert_eq!(acc[0][k], -acc[1][k]);
                    // points from particle 0 towards particle 1
                    let dr = psys.attrs.pos[1][k] - psys.attrs.pos[0][k];
                    assert!(acc[0][k] * dr > 0.0);
                }
            }
        }
    }

    #[test]
    fn coincident_particles_without_softening_are_not_finite() {
        let psys = crate::sys::ParticleSystem::from_arrays(
            vec![[1.0, 1.0, 1.0]; 2],
            vec![[0.0; 3]; 2],
            vec![1.0, 1.0],
        )
        .unwrap();
        let acc = Looped::new(Newton::new(1.0, 0.0)).acceleration(psys.as_slice());
        assert!(acc.iter().flatten().any(|a| !a.is_finite()));
    }

    #[test]
    fn strategy_names() {
        for &strategy in Strategy::ALL.iter() {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!("Blocked".parse::<Strategy>(), Ok(Strategy::Blocked));
        assert!("tree".parse::<Strategy>().is_err());
    }
}

// -- end of file --
