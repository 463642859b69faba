use super::Newton;
use crate::{
    sys::AttributesSlice,
    types::{Len, Real},
};
use itertools::izip;
use rayon::prelude::*;

/// Compute the kinetic and potential energies of a system.
///
/// \\[ KE = \frac{1}{2} \sum_{i=0}^{N} m_{i} v_{i}^{2} \\]
///
/// \\[ PE = -G \sum_{i=0}^{N} \sum_{j>i}^{N} \frac{m_{i} m_{j}}{\sqrt{r_{ij}^{2} + \epsilon^{2}}} \\]
///
/// The potential uses the same softening as the acceleration kernels, so
/// `KE + PE` is the quantity a leapfrog run keeps bounded.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Energy {
    law: Newton,
}

impl Energy {
    pub fn new(law: Newton) -> Self {
        Energy { law }
    }

    pub fn kinetic(&self, src: AttributesSlice<'_>) -> Real {
        0.5 * izip!(src.mass, src.vel)
            .map(|(m, v)| m * (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]))
            .sum::<Real>()
    }

    pub fn potential(&self, src: AttributesSlice<'_>) -> Real {
        let eps2 = self.law.eps2();
        let pe = (0..src.len())
            .into_par_iter()
            .map(|i| {
                let ri = src.pos[i];
                let mi = src.mass[i];
                izip!(&src.mass[i + 1..], &src.pos[i + 1..])
                    .map(|(mj, rj)| {
                        let dr = [rj[0] - ri[0], rj[1] - ri[1], rj[2] - ri[2]];
                        let s = dr[0] * dr[0] + dr[1] * dr[1] + dr[2] * dr[2] + eps2;
                        mi * mj / s.sqrt()
                    })
                    .sum::<Real>()
            })
            .sum::<Real>();
        -self.law.g * pe
    }

    /// Returns `(ke, pe)`.
    pub fn energies(&self, src: AttributesSlice<'_>) -> (Real, Real) {
        (self.kinetic(src), self.potential(src))
    }
}


// -- end of file --
