mod attributes;
mod system;

pub use self::{
    attributes::{AttributesSlice, AttributesSliceMut, AttributesVec},
    system::ParticleSystem,
};

// -- end of file --
