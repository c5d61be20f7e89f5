use crate::lump_data::{LumpData, LumpType};
use crate::map_header::FormatVersion;
use crate::read_util::{PrimitiveRead, VectorRead};
use std::io::{Read, Result as IOResult};

/// A BSP tree leaf. `cluster` is -1 for leaves outside the map (no PVS
/// entry).
#[derive(Clone, Copy, Debug)]
pub struct Leaf {
    pub cluster: i32,
    pub area: i32,
    pub mins: [i32; 3],
    pub maxs: [i32; 3],
    pub first_leaf_face: i32,
    pub num_leaf_faces: i32,
    pub first_leaf_brush: i32,
    pub num_leaf_brushes: i32,
}

impl LumpData for Leaf {
    fn lump_type() -> LumpType {
        LumpType::Leafs
    }

    fn element_size(_format: FormatVersion) -> usize {
        48
    }

    fn read(reader: &mut dyn Read, _format: FormatVersion) -> IOResult<Self> {
        let cluster = reader.read_i32()?;
        let area = reader.read_i32()?;
        let mins = reader.read_vec3i()?;
        let maxs = reader.read_vec3i()?;
        let first_leaf_face = reader.read_i32()?;
        let num_leaf_faces = reader.read_i32()?;
        let first_leaf_brush = reader.read_i32()?;
        let num_leaf_brushes = reader.read_i32()?;
        Ok(Self {
            cluster,
            area,
            mins,
            maxs,
            first_leaf_face,
            num_leaf_faces,
            first_leaf_brush,
            num_leaf_brushes,
        })
    }
}
