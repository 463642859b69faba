use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use orbis::{
    config::Config,
    gravity::Strategy,
    real::Real,
    sim::{Simulation, Trajectory},
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Evolve a self-gravitating N-body system with a kick-drift-kick leapfrog.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML scenario file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of particles
    #[arg(short, long)]
    npart: Option<usize>,

    /// Gravitational constant
    #[arg(short, long, allow_negative_numbers = true)]
    g: Option<Real>,

    /// Softening length
    #[arg(long, allow_negative_numbers = true)]
    softening: Option<Real>,

    /// Time-step
    #[arg(long, allow_negative_numbers = true)]
    dt: Option<Real>,

    /// End time
    #[arg(long, allow_negative_numbers = true)]
    tend: Option<Real>,

    /// Initial conditions seed
    #[arg(long)]
    seed: Option<u64>,

    /// Acceleration kernel: looped, batched, parallel or blocked
    #[arg(long)]
    strategy: Option<Strategy>,

    /// Write the position history to this file
    #[arg(long)]
    trajectory: Option<PathBuf>,

    /// Record the position history every this many steps
    #[arg(long)]
    every: Option<u64>,

    /// Write the final particle system to this file
    #[cfg(feature = "serde1")]
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_path(path)
                .with_context(|| format!("failed to load scenario {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(npart) = self.npart {
            config.npart = npart;
        }
        if let Some(g) = self.g {
            config.g = g;
        }
        if let Some(softening) = self.softening {
            config.softening = softening;
        }
        if let Some(dt) = self.dt {
            config.dt = dt;
        }
        if let Some(tend) = self.tend {
            config.tend = tend;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(path) = &self.trajectory {
            config.trajectory = Some(path.clone());
        }
        if let Some(every) = self.every {
            config.trajectory_every = Some(every);
        }
        Ok(config)
    }
}

fn write_trajectory(path: &Path, traj: &Trajectory) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for (time, frame) in traj.times.iter().zip(traj.frames.iter()) {
        for (id, pos) in frame.iter().enumerate() {
            writeln!(&mut writer, "{} {} {} {} {}", time, id, pos[0], pos[1], pos[2])?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.config()?;
    info!("{:?}", config);

    let psys = config.initial_conditions()?;
    let mut sim = Simulation::new(config.params(), config.kernel(), psys)?;

    let report = match &config.trajectory {
        Some(path) => {
            let mut traj = Trajectory::new(config.trajectory_every.unwrap_or(1));
            let report = sim.run(&mut traj);
            write_trajectory(path, &traj)
                .with_context(|| format!("failed to write trajectory {}", path.display()))?;
            report
        }
        None => sim.run(&mut ()),
    };
    println!("Elapsed: {}", report.elapsed.as_secs_f64());

    #[cfg(feature = "serde1")]
    {
        if let Some(path) = &args.snapshot {
            orbis::snapshot::save(path, &sim.state().psys)
                .with_context(|| format!("failed to write snapshot {}", path.display()))?;
        }
    }

    Ok(())
}


// -- end of file --
