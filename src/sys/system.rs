use super::{AttributesSlice, AttributesSliceMut, AttributesVec};
use crate::{
    error::{Error, Result},
    gravity::{Energy, Newton},
    types::{AsSlice, AsSliceMut, Len, Real},
};
use itertools::izip;
use serde::{Deserialize, Serialize};

/// Particle set in structure-of-arrays layout, plus the current time.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleSystem {
    pub time: Real,
    pub attrs: AttributesVec,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Default::default()
    }

    /// Build a system from parallel position, velocity and mass arrays.
    pub fn from_arrays(pos: Vec<[Real; 3]>, vel: Vec<[Real; 3]>, mass: Vec<Real>) -> Result<Self> {
        if pos.len() != mass.len() || vel.len() != mass.len() {
            return Err(Error::LengthMismatch {
                pos: pos.len(),
                vel: vel.len(),
                mass: mass.len(),
            });
        }
        Ok(ParticleSystem {
            time: 0.0,
            attrs: AttributesVec { mass, pos, vel },
        })
    }

    /// Fails if the attribute vectors went out of lock-step.
    pub fn check_shape(&self) -> Result<()> {
        if self.attrs.is_consistent() {
            Ok(())
        } else {
            Err(Error::LengthMismatch {
                pos: self.attrs.pos.len(),
                vel: self.attrs.vel.len(),
                mass: self.attrs.mass.len(),
            })
        }
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn as_slice(&self) -> AttributesSlice<'_> {
        self.attrs.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> AttributesSliceMut<'_> {
        self.attrs.as_mut_slice()
    }

    /// True if every position and velocity component is finite.
    pub fn is_finite(&self) -> bool {
        self.attrs
            .pos
            .iter()
            .chain(self.attrs.vel.iter())
            .flatten()
            .all(|x| x.is_finite())
    }

    /// Compute the kinetic and potential energies of the system.
    pub fn energies(&self, law: Newton) -> (Real, Real) {
        Energy::new(law).energies(self.as_slice())
    }
}

/// Methods for center-of-mass determination and adjustment.
impl ParticleSystem {
    /// Total linear momentum.
    pub fn momentum(&self) -> [Real; 3] {
        let mut p = [0.0; 3];
        for (&m, v) in izip!(&self.attrs.mass, &self.attrs.vel) {
            for k in 0..3 {
                p[k] += m * v[k];
            }
        }
        p
    }

    /// Get center-of-mass mass, position and velocity.
    pub fn com_mass_pos_vel(&self) -> (Real, [Real; 3], [Real; 3]) {
        let mut mtot = 0.0;
        let mut rcom = [0.0; 3];
        let mut vcom = [0.0; 3];
        for (&m, r, v) in izip!(&self.attrs.mass, &self.attrs.pos, &self.attrs.vel) {
            for k in 0..3 {
                rcom[k] += m * r[k];
                vcom[k] += m * v[k];
            }
            mtot += m;
        }
        if mtot > 0.0 {
            rcom.iter_mut().for_each(|r| *r /= mtot);
            vcom.iter_mut().for_each(|v| *v /= mtot);
        }
        (mtot, rcom, vcom)
    }

    /// Moves center-of-mass by the given amounts.
    pub fn com_move_by(&mut self, dr: [Real; 3], dv: [Real; 3]) {
        for (r, v) in izip!(&mut self.attrs.pos, &mut self.attrs.vel) {
            for k in 0..3 {
                r[k] += dr[k];
                v[k] += dv[k];
            }
        }
    }

    /// Moves center-of-mass to the origin of coordinates.
    pub fn com_to_origin(&mut self) {
        let (_, [rx, ry, rz], [vx, vy, vz]) = self.com_mass_pos_vel();
        self.com_move_by([-rx, -ry, -rz], [-vx, -vy, -vz]);
    }

    /// Multiply every mass by `m_scale`; returns the new total mass.
    pub fn scale_mass(&mut self, m_scale: Real) -> Real {
        self.attrs.mass.iter_mut().for_each(|m| *m *= m_scale);
        self.attrs.mass.iter().sum()
    }
}


// -- end of file --
