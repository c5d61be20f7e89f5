use crate::lump_data::{LumpData, LumpType};
use crate::map_header::FormatVersion;
use crate::read_util::{PrimitiveRead, VectorRead};
use nalgebra::Vector3;
use std::io::{Read, Result as IOResult};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vector3<f32>,
    pub dist: f32,
}

impl LumpData for Plane {
    fn lump_type() -> LumpType {
        LumpType::Planes
    }

    fn element_size(_format: FormatVersion) -> usize {
        16
    }

    fn read(reader: &mut dyn Read, _format: FormatVersion) -> IOResult<Self> {
        let normal = reader.read_vec3()?;
        let dist = reader.read_f32()?;
        Ok(Self { normal, dist })
    }
}
