use crate::types::{consts, Real};
use rand::{
    distributions::{Distribution, Normal, StandardNormal, Uniform},
    Rng,
};

/// Positions and velocities drawn independently from the standard normal
/// distribution, component by component.
#[derive(Copy, Clone, Debug, Default)]
pub struct Gaussian;

impl Gaussian {
    pub fn new() -> Self {
        Gaussian
    }
}

impl Distribution<([Real; 3], [Real; 3])> for Gaussian {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ([Real; 3], [Real; 3]) {
        let mut r = [0.0; 3];
        let mut v = [0.0; 3];
        for x in r.iter_mut().chain(v.iter_mut()) {
            let s: f64 = StandardNormal.sample(rng);
            *x = s as Real;
        }
        (r, v)
    }
}

/// Plummer's stellar-density-profile
pub struct Plummer {
    m_uniform: Uniform<Real>,
}

impl Plummer {
    const R_SCALE_FACTOR: Real = (3.0 * consts::PI) / 16.0;
    const V2_SCALE_FACTOR: Real = 16.0 / (3.0 * consts::PI);

    pub fn new() -> Self {
        Plummer {
            m_uniform: Uniform::new(0.0, 1.0),
        }
    }
}

impl Default for Plummer {
    fn default() -> Self {
        Plummer::new()
    }
}

impl Distribution<([Real; 3], [Real; 3])> for Plummer {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ([Real; 3], [Real; 3]) {
        // avoid the m == 0 singularity of the inverse cumulative mass
        let mut m = 0.0;
        while m == 0.0 {
            m = self.m_uniform.sample(rng);
        }
        let r = 1.0 / (m.powf(-2.0 / 3.0) - 1.0).sqrt();
        let [rx, ry, rz] = to_xyz(r * Self::R_SCALE_FACTOR, rng);

        let sigma2_1d = 1.0 / (6.0 * (1.0 + r * r).sqrt());
        let v_normal = Normal::new(0.0, ((sigma2_1d * Self::V2_SCALE_FACTOR) as f64).sqrt());
        let vx = v_normal.sample(rng) as Real;
        let vy = v_normal.sample(rng) as Real;
        let vz = v_normal.sample(rng) as Real;

        ([rx, ry, rz], [vx, vy, vz])
    }
}

fn to_xyz<R: Rng + ?Sized>(val: Real, rng: &mut R) -> [Real; 3] {
    let theta = rng.gen_range(-1.0 as Real, 1.0).acos();
    let phi = rng.gen_range(0.0 as Real, 2.0 * consts::PI);
    let (st, ct) = theta.sin_cos();
    let (sp, cp) = phi.sin_cos();
    [val * st * cp, val * st * sp, val * ct]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn gaussian_moments() {
        let mut rng = StdRng::from_seed([7; 32]);
        let n = 20_000;
        let samples: Vec<_> = Gaussian.sample_iter(&mut rng).take(n).collect();
        let mean = samples.iter().map(|(r, _)| r[0]).sum::<Real>() / n as Real;
        let var = samples.iter().map(|(_, v)| v[2] * v[2]).sum::<Real>() / n as Real;
        assert!(mean.abs() < 0.05);
        assert!((var - 1.0).abs() < 0.05);
    }

    #[test]
    fn gaussian_is_reproducible() {
        let a: Vec<_> = Gaussian
            .sample_iter(&mut StdRng::from_seed([1; 32]))
            .take(4)
            .collect();
        let b: Vec<_> = Gaussian
            .sample_iter(&mut StdRng::from_seed([1; 32]))
            .take(4)
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn plummer_is_finite() {
        let mut rng = StdRng::from_seed([3; 32]);
        let sdp = Plummer::new();
        for (r, v) in sdp.sample_iter(&mut rng).take(10_000) {
            assert!(r.iter().chain(v.iter()).all(|x| x.is_finite()));
        }
    }

    #[test]
    fn to_xyz_keeps_the_radius() {
        let mut rng = StdRng::from_seed([5; 32]);
        for &val in &[0.0, 0.5, 1.0, 42.0] {
            let [x, y, z] = to_xyz(val, &mut rng);
            let r = (x * x + y * y + z * z).sqrt();
            assert!((r - val).abs() <= 1.0e-6 * (1.0 + val));
        }
    }
}

// -- end of file --
