use super::{loop1, loop2, Compute, Newton};
use crate::{
    sys::AttributesSlice,
    types::{Len, Real},
};

/// Dense N×N formulation of the pairwise sum.
///
/// Builds the displacement matrices `dr[k][i][j] = r[j][k] - r[i][k]` and the
/// softened `1/r³` matrix, then reduces each axis with a matrix-vector
/// product against the mass vector. O(N²) scratch memory.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Batched {
    law: Newton,
}

impl Batched {
    pub fn new(law: Newton) -> Self {
        Batched { law }
    }
}

/// Row-major square matrix.
struct Matrix {
    n: usize,
    data: Vec<Real>,
}

impl Matrix {
    fn zeros(n: usize) -> Self {
        Matrix {
            n,
            data: vec![0.0; n * n],
        }
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> Real {
        self.data[i * self.n + j]
    }

    #[inline]
    fn at_mut(&mut self, i: usize, j: usize) -> &mut Real {
        &mut self.data[i * self.n + j]
    }

    /// `out = self · v`
    fn mul_vec(&self, v: &[Real], out: &mut [Real]) {
        for (row, o) in self.data.chunks(self.n).zip(out.iter_mut()) {
            *o = row.iter().zip(v).map(|(a, b)| a * b).sum();
        }
    }
}

impl Compute for Batched {
    fn compute(&self, src: AttributesSlice<'_>, acc: &mut [[Real; 3]]) {
        let n = src.len();
        assert_eq!(n, acc.len());
        if n == 0 {
            return;
        }

        let mut dr = [Matrix::zeros(n), Matrix::zeros(n), Matrix::zeros(n)];
        loop1(3, |k| {
            loop2(n, n, |i, j| *dr[k].at_mut(i, j) = src.pos[j][k] - src.pos[i][k]);
        });

        let mut inv_r3 = Matrix::zeros(n);
        loop2(n, n, |i, j| {
            if i != j {
                let d = [dr[0].at(i, j), dr[1].at(i, j), dr[2].at(i, j)];
                *inv_r3.at_mut(i, j) = self.law.inv_r3(&d);
            }
        });

        let mut axis = vec![0.0; n];
        for (k, drk) in dr.iter_mut().enumerate() {
            drk.data
                .iter_mut()
                .zip(inv_r3.data.iter())
                .for_each(|(d, r3)| *d *= self.law.g * r3);
            drk.mul_vec(src.mass, &mut axis);
            acc.iter_mut().zip(axis.iter()).for_each(|(a, &x)| a[k] = x);
        }
    }
}

// -- end of file --
