use crate::lump_data::{LumpData, LumpType};
use crate::map_header::FormatVersion;
use crate::read_util::{PrimitiveRead, VectorRead};
use std::io::{Read, Result as IOResult};

/// A BSP tree interior node. A non-negative child is another node index;
/// a negative child `c` refers to leaf `!c`.
#[derive(Clone, Copy, Debug)]
pub struct Node {
    pub plane: i32,
    pub children: [i32; 2],
    pub mins: [i32; 3],
    pub maxs: [i32; 3],
}

impl LumpData for Node {
    fn lump_type() -> LumpType {
        LumpType::Nodes
    }

    fn element_size(_format: FormatVersion) -> usize {
        36
    }

    fn read(reader: &mut dyn Read, _format: FormatVersion) -> IOResult<Self> {
        let plane = reader.read_i32()?;
        let children = [reader.read_i32()?, reader.read_i32()?];
        let mins = reader.read_vec3i()?;
        let maxs = reader.read_vec3i()?;
        Ok(Self {
            plane,
            children,
            mins,
            maxs,
        })
    }
}
