use crate::types::Real;
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

/// Equal mass initial-mass-function
pub struct EqualMass {
    uniform: Uniform<Real>,
}

impl EqualMass {
    pub fn new(mass: Real) -> Self {
        assert!(mass > 0.0, "EqualMass::new called with `mass <= 0.0`");
        EqualMass {
            uniform: Uniform::new_inclusive(mass, mass),
        }
    }
}

impl Distribution<Real> for EqualMass {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Real {
        self.uniform.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    #[should_panic]
    fn equalmass_new() {
        let _ = EqualMass::new(-1.0);
    }

    #[test]
    fn equalmass_sample() {
        let imf = EqualMass::new(2.5);
        let mut rng = StdRng::from_seed([0; 32]);
        let m: Vec<_> = imf.sample_iter(&mut rng).take(1000).collect();
        assert!(m.iter().all(|&m| m.to_bits() == (2.5 as Real).to_bits()));
    }
}

// -- end of file --
