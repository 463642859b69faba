//! Initial conditions.

pub mod imf;
pub mod sdp;

use crate::{
    sys::{AttributesVec, ParticleSystem},
    types::Real,
};
use rand::{distributions::Distribution, Rng};

/// Draws `npart` particles from an initial-mass-function and a
/// phase-space profile, then rescales the masses to sum to `mtot`.
pub struct Model<IMF, SDP> {
    npart: usize,
    mtot: Real,
    imf: IMF,
    sdp: SDP,
    reset_com: bool,
}

impl<IMF, SDP> Model<IMF, SDP>
where
    IMF: Distribution<Real>,
    SDP: Distribution<([Real; 3], [Real; 3])>,
{
    pub fn new(npart: usize, mtot: Real, imf: IMF, sdp: SDP) -> Self {
        assert!(mtot > 0.0, "Model::new called with `mtot <= 0.0`");
        Model {
            npart,
            mtot,
            imf,
            sdp,
            reset_com: false,
        }
    }

    /// Move the center-of-mass to the origin after sampling.
    pub fn reset_com(mut self, yes: bool) -> Self {
        self.reset_com = yes;
        self
    }

    pub fn build<R: Rng>(&self, rng: &mut R) -> ParticleSystem {
        let mut attrs = AttributesVec::default();
        for _ in 0..self.npart {
            let m = self.imf.sample(rng);
            let (r, v) = self.sdp.sample(rng);
            attrs.mass.push(m);
            attrs.pos.push(r);
            attrs.vel.push(v);
        }

        let mut psys = ParticleSystem { time: 0.0, attrs };
        if !psys.is_empty() {
            let (mtot, _, _) = psys.com_mass_pos_vel();
            psys.scale_mass(self.mtot / mtot);
        }
        if self.reset_com {
            psys.com_to_origin();
        }
        psys
    }
}

#[cfg(test)]
mod tests {
    use super::{imf::EqualMass, sdp::Gaussian, *};
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn equal_masses_sum_to_total() {
        let model = Model::new(100, 20.0, EqualMass::new(1.0), Gaussian);
        let psys = model.build(&mut StdRng::seed_from_u64(17));
        assert_eq!(psys.len(), 100);
        assert!(psys.attrs.is_consistent());
        assert!(psys.attrs.mass.iter().all(|&m| m == 0.2));
        assert_relative_eq!(psys.attrs.mass.iter().sum::<Real>(), 20.0, epsilon = 1.0e-12);
    }

    #[test]
    fn same_seed_same_system() {
        let model = Model::new(10, 1.0, EqualMass::new(1.0), Gaussian);
        let a = model.build(&mut StdRng::seed_from_u64(3));
        let b = model.build(&mut StdRng::seed_from_u64(3));
        let c = model.build(&mut StdRng::seed_from_u64(4));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn com_reset() {
        let model = Model::new(50, 1.0, EqualMass::new(1.0), sdp::Plummer::new()).reset_com(true);
        let psys = model.build(&mut StdRng::seed_from_u64(0));
        let (_, rcom, vcom) = psys.com_mass_pos_vel();
        assert!(rcom.iter().chain(vcom.iter()).all(|x| x.abs() < 1.0e-12));
    }

    #[test]
    fn empty_model() {
        let model = Model::new(0, 1.0, EqualMass::new(1.0), Gaussian);
        assert!(model.build(&mut StdRng::seed_from_u64(0)).is_empty());
    }
}

// -- end of file --
