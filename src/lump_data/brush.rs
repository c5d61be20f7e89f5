use crate::lump_data::{LumpData, LumpType};
use crate::map_header::FormatVersion;
use crate::read_util::PrimitiveRead;
use std::io::{Read, Result as IOResult};

#[derive(Clone, Copy, Debug)]
pub struct Brush {
    pub first_side: i32,
    pub num_sides: i32,
    pub texture_index: i32,
}

impl LumpData for Brush {
    fn lump_type() -> LumpType {
        LumpType::Brushes
    }

    fn element_size(_format: FormatVersion) -> usize {
        12
    }

    fn read(reader: &mut dyn Read, _format: FormatVersion) -> IOResult<Self> {
        let first_side = reader.read_i32()?;
        let num_sides = reader.read_i32()?;
        let texture_index = reader.read_i32()?;
        Ok(Self {
            first_side,
            num_sides,
            texture_index,
        })
    }
}
