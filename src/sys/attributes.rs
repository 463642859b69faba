use crate::types::{AsSlice, AsSliceMut, Len, Real};
use serde::{Deserialize, Serialize};

impl_struct_of_array!(
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub AttributesVec,
    #[derive(Debug)]
    pub AttributesSlice,
    #[derive(Debug)]
    pub AttributesSliceMut,
    {
        /// Mass
        pub mass: Real,
        /// Position
        pub pos: [Real; 3],
        /// Velocity
        pub vel: [Real; 3],
    }
);


// -- end of file --
