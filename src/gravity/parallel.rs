use super::{loop1, Compute, Newton};
use crate::{
    sys::AttributesSlice,
    types::{Len, Real},
};
use rayon::prelude::*;

/// Rows of the pairwise sum distributed over the rayon thread-pool.
///
/// Each task owns one output row and only reads the shared positions and
/// masses, so no synchronization is needed besides the implicit join.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Parallel {
    law: Newton,
}

impl Parallel {
    pub fn new(law: Newton) -> Self {
        Parallel { law }
    }
}

impl Compute for Parallel {
    fn compute(&self, src: AttributesSlice<'_>, acc: &mut [[Real; 3]]) {
        assert_eq!(src.len(), acc.len());
        let g = self.law.g;
        acc.par_iter_mut().enumerate().for_each(|(i, ai)| {
            let a = self.law.row(i, &src);
            loop1(3, |k| ai[k] = g * a[k]);
        });
    }
}

// -- end of file --
