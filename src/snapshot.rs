//! Binary snapshots of a particle system.

use crate::{error::Result, sys::ParticleSystem};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

pub fn save<P: AsRef<Path>>(path: P, psys: &ParticleSystem) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(&mut writer, psys)?;
    writer.flush()?;
    Ok(())
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<ParticleSystem> {
    let reader = BufReader::new(File::open(path)?);
    let psys: ParticleSystem = bincode::deserialize_from(reader)?;
    psys.check_shape()?;
    Ok(psys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gravity::fixtures::random_system;

    #[test]
    fn save_then_load() {
        let mut psys = random_system(7, 1);
        psys.time = 0.75;
        let path = std::env::temp_dir().join(format!("orbis-snapshot-{}.bin", std::process::id()));
        save(&path, &psys).unwrap();
        let loaded = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, psys);
    }
}

// -- end of file --
