use super::{loop1, Compute, Newton};
use crate::{
    sys::AttributesSlice,
    types::{Len, Real},
};

/// Sequential double loop over all (i, j) pairs.
///
/// O(N²) time, no scratch memory. This is the reference the other kernels
/// are checked against.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Looped {
    law: Newton,
}

impl Looped {
    pub fn new(law: Newton) -> Self {
        Looped { law }
    }
}

impl Compute for Looped {
    // flop count: 20
    fn compute(&self, src: AttributesSlice<'_>, acc: &mut [[Real; 3]]) {
        assert_eq!(src.len(), acc.len());
        let g = self.law.g;
        for (i, ai) in acc.iter_mut().enumerate() {
            let a = self.law.row(i, &src);
            loop1(3, |k| ai[k] = g * a[k]);
        }
    }
}

// -- end of file --
