use super::{loop1, loop2, Compute, Newton};
use crate::{
    sys::AttributesSlice,
    types::{Len, Real},
};

const TILE: usize = 16 / std::mem::size_of::<Real>();

/// Fallback to the sequential leaf kernel for blocks up to this length.
const THRESHOLD: usize = 32 * TILE;

/// Symmetric pairwise sum over recursive triangle/rectangle blocks.
///
/// Each pair is evaluated once and applied to both particles, so the leaf
/// kernel does half the work of a row-wise sum. Disjoint blocks are
/// dispatched with `rayon::join`; two blocks running concurrently never
/// write to the same output rows.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Blocked {
    law: Newton,
}

impl Blocked {
    pub fn new(law: Newton) -> Self {
        Blocked { law }
    }

    /// Parallel triangle kernel
    fn triangle(&self, src: AttributesSlice<'_>, dst: &mut [[Real; 3]]) {
        let len = src.len();
        if len > 1 {
            let mid = len / 2;
            let (src_lo, src_hi) = src.split_at(mid);
            let (dst_lo, dst_hi) = dst.split_at_mut(mid);

            rayon::join(
                || self.triangle(src_lo, dst_lo),
                || self.triangle(src_hi, dst_hi),
            );

            self.rectangle(src_lo, src_hi, dst_lo, dst_hi);
        }
    }

    /// Parallel rectangle kernel
    fn rectangle(
        &self,
        isrc: AttributesSlice<'_>,
        jsrc: AttributesSlice<'_>,
        idst: &mut [[Real; 3]],
        jdst: &mut [[Real; 3]],
    ) {
        let ilen = isrc.len();
        let jlen = jsrc.len();
        if ilen > THRESHOLD || jlen > THRESHOLD {
            let imid = ilen / 2;
            let jmid = jlen / 2;

            let (isrc_lo, isrc_hi) = isrc.split_at(imid);
            let (jsrc_lo, jsrc_hi) = jsrc.split_at(jmid);

            let (idst_lo, idst_hi) = idst.split_at_mut(imid);
            let (jdst_lo, jdst_hi) = jdst.split_at_mut(jmid);

            rayon::join(
                || self.rectangle(isrc_lo, jsrc_hi, idst_lo, jdst_hi),
                || self.rectangle(isrc_hi, jsrc_lo, idst_hi, jdst_lo),
            );
            rayon::join(
                || self.rectangle(isrc_lo, jsrc_lo, idst_lo, jdst_lo),
                || self.rectangle(isrc_hi, jsrc_hi, idst_hi, jdst_hi),
            );
        } else if ilen > 0 && jlen > 0 {
            self.p2p(isrc, jsrc, idst, jdst);
        }
    }

    /// Sequential kernel: mutual interaction between two disjoint blocks,
    /// walked in TILE×TILE sub-blocks.
    fn p2p(
        &self,
        isrc: AttributesSlice<'_>,
        jsrc: AttributesSlice<'_>,
        idst: &mut [[Real; 3]],
        jdst: &mut [[Real; 3]],
    ) {
        let ni = isrc.len();
        let nj = jsrc.len();
        for ii in (0..ni).step_by(TILE) {
            let ti = TILE.min(ni - ii);
            for jj in (0..nj).step_by(TILE) {
                let tj = TILE.min(nj - jj);

                let mut dr: [[[Real; TILE]; TILE]; 3] = Default::default();
                let mut rinv3: [[Real; TILE]; TILE] = Default::default();

                loop2(ti, tj, |i, j| {
                    let ri = &isrc.pos[ii + i];
                    let rj = &jsrc.pos[jj + j];
                    loop1(3, |k| dr[k][i][j] = rj[k] - ri[k]);
                });
                loop2(ti, tj, |i, j| {
                    rinv3[i][j] = self.law.inv_r3(&[dr[0][i][j], dr[1][i][j], dr[2][i][j]]);
                });

                loop2(ti, tj, |i, j| {
                    let mj_r3 = jsrc.mass[jj + j] * rinv3[i][j];
                    loop1(3, |k| idst[ii + i][k] += mj_r3 * dr[k][i][j]);
                });
                loop2(ti, tj, |i, j| {
                    let mi_r3 = isrc.mass[ii + i] * rinv3[i][j];
                    loop1(3, |k| jdst[jj + j][k] -= mi_r3 * dr[k][i][j]);
                });
            }
        }
    }
}

impl Compute for Blocked {
    // flop count: 27 per pair, half the pairs
    fn compute(&self, src: AttributesSlice<'_>, acc: &mut [[Real; 3]]) {
        assert_eq!(src.len(), acc.len());
        acc.iter_mut().for_each(|a| *a = [0.0; 3]);
        self.triangle(src, acc);
        let g = self.law.g;
        acc.iter_mut().flatten().for_each(|a| *a *= g);
    }
}

#[cfg(all(feature = "nightly", test))]
mod bench {
    use super::*;
    use crate::gravity::fixtures::random_system;
    use test::Bencher;

    #[bench]
    fn p2p(b: &mut Bencher) {
        let kernel = Blocked::new(Newton::default());
        let isys = random_system(THRESHOLD, 0);
        let jsys = random_system(THRESHOLD, 1);
        let mut iacc = vec![[0.0; 3]; THRESHOLD];
        let mut jacc = vec![[0.0; 3]; THRESHOLD];
        b.iter(|| kernel.p2p(isys.as_slice(), jsys.as_slice(), &mut iacc, &mut jacc));
    }
}

// -- end of file --
