//! Scenario files.
//!
//! A scenario is a small YAML document; every key is optional and falls
//! back to the reference run:
//!
//! ```yaml
//! npart: 100        # number of particles
//! g: 1.0            # gravitational constant
//! softening: 0.1    # softening length
//! dt: 0.01          # time-step
//! tend: 10.0        # end time
//! seed: 17          # initial conditions seed
//! mtot: 20.0        # total mass, split equally
//! profile: gaussian # or "plummer"
//! strategy: parallel # looped | batched | parallel | blocked
//! trajectory: out.txt # write the position history here (optional)
//! trajectory_every: 10 # sample the history every 10 steps (default 1)
//! ```

use crate::{
    error::{Error, Result},
    gravity::{AccKernel, Strategy},
    ics::{
        imf::EqualMass,
        sdp::{Gaussian, Plummer},
        Model,
    },
    sim::Params,
    sys::ParticleSystem,
    types::Real,
};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

/// Phase-space profile of the initial conditions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Gaussian,
    Plummer,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub npart: usize,
    pub g: Real,
    pub softening: Real,
    pub dt: Real,
    pub tend: Real,
    pub seed: u64,
    pub mtot: Real,
    pub profile: Profile,
    pub strategy: Strategy,
    /// Position history output; no history is kept when unset.
    pub trajectory: Option<PathBuf>,
    pub trajectory_every: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        let params = Params::default();
        Config {
            npart: params.npart,
            g: params.g,
            softening: params.softening,
            dt: params.dt,
            tend: params.tend,
            seed: 17,
            mtot: 20.0,
            profile: Profile::Gaussian,
            strategy: Strategy::default(),
            trajectory: None,
            trajectory_every: None,
        }
    }
}

impl Config {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_yaml(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn params(&self) -> Params {
        Params {
            npart: self.npart,
            g: self.g,
            softening: self.softening,
            dt: self.dt,
            tend: self.tend,
        }
    }

    pub fn kernel(&self) -> AccKernel {
        AccKernel::new(self.params().law(), self.strategy)
    }

    /// Sample the initial conditions described by this scenario.
    pub fn initial_conditions(&self) -> Result<ParticleSystem> {
        self.params().validate()?;
        if !(self.mtot > 0.0 && self.mtot.is_finite()) {
            return Err(Error::InvalidTotalMass(self.mtot));
        }
        let mut rng = StdRng::seed_from_u64(self.seed);
        let imf = EqualMass::new(1.0);
        let psys = match self.profile {
            Profile::Gaussian => Model::new(self.npart, self.mtot, imf, Gaussian).build(&mut rng),
            Profile::Plummer => Model::new(self.npart, self.mtot, imf, Plummer::new())
                .reset_com(true)
                .build(&mut rng),
        };
        Ok(psys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_the_reference_run() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.params().nsteps(), 1000);
        assert_eq!(config.seed, 17);
    }

    #[test]
    fn partial_document() {
        let config = Config::from_yaml(
            "npart: 8\nsoftening: 0.05\nprofile: plummer\nstrategy: blocked\ntrajectory_every: 4\n",
        )
        .unwrap();
        assert_eq!(config.npart, 8);
        assert_eq!(config.softening, 0.05);
        assert_eq!(config.profile, Profile::Plummer);
        assert_eq!(config.strategy, Strategy::Blocked);
        assert_eq!(config.trajectory_every, Some(4));
        assert_eq!(config.dt, 0.01);
        assert_eq!(config.initial_conditions().unwrap().len(), 8);
    }

    #[test]
    fn trajectory_output() {
        let config =
            Config::from_yaml("trajectory: run/history.txt\ntrajectory_every: 10\n").unwrap();
        assert_eq!(config.trajectory, Some(PathBuf::from("run/history.txt")));
        assert_eq!(config.trajectory_every, Some(10));
        assert_eq!(Config::default().trajectory, None);
    }

    #[test]
    fn rejects_unknown_keys_and_values() {
        assert!(matches!(Config::from_yaml("nparts: 8"), Err(Error::Config(_))));
        assert!(matches!(Config::from_yaml("strategy: tree"), Err(Error::Config(_))));
    }

    #[test]
    fn invalid_scenario_fails_before_sampling() {
        let config = Config {
            dt: -1.0,
            ..Default::default()
        };
        assert!(matches!(config.initial_conditions(), Err(Error::InvalidTimeStep(_))));
    }

    #[test]
    fn total_mass_must_be_positive() {
        for &mtot in &[0.0, -1.0, Real::NAN, Real::INFINITY] {
            let config = Config {
                mtot,
                ..Default::default()
            };
            assert!(matches!(config.initial_conditions(), Err(Error::InvalidTotalMass(_))));
        }
        for doc in &["mtot: 0.0\nnpart: 4\n", "mtot: .nan\n", "mtot: -2\nprofile: plummer\n"] {
            let config = Config::from_yaml(doc).unwrap();
            assert!(matches!(config.initial_conditions(), Err(Error::InvalidTotalMass(_))));
        }
    }

    #[test]
    fn missing_file() {
        assert!(matches!(Config::from_path("/nonexistent/scenario.yaml"), Err(Error::Io(_))));
    }
}

// -- end of file --
