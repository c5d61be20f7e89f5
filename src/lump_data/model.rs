use crate::lump_data::{LumpData, LumpType};
use crate::map_header::FormatVersion;
use crate::read_util::{PrimitiveRead, VectorRead};
use nalgebra::Vector3;
use std::io::{Read, Result as IOResult};

/// A rigid sub-model: model 0 is the world, the rest are doors, platforms
/// and other movers.
#[derive(Clone, Debug)]
pub struct Model {
    pub mins: Vector3<f32>,
    pub maxs: Vector3<f32>,
    pub first_face: i32,
    pub num_faces: i32,
    pub first_brush: i32,
    pub num_brushes: i32,
}

impl LumpData for Model {
    fn lump_type() -> LumpType {
        LumpType::Models
    }

    fn element_size(_format: FormatVersion) -> usize {
        40
    }

    fn read(reader: &mut dyn Read, _format: FormatVersion) -> IOResult<Self> {
        let mins = reader.read_vec3()?;
        let maxs = reader.read_vec3()?;
        let first_face = reader.read_i32()?;
        let num_faces = reader.read_i32()?;
        let first_brush = reader.read_i32()?;
        let num_brushes = reader.read_i32()?;
        Ok(Self {
            mins,
            maxs,
            first_face,
            num_faces,
            first_brush,
            num_brushes,
        })
    }
}
