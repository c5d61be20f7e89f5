use crate::lump_data::{read_fixed_name, LumpData, LumpType};
use crate::map_header::FormatVersion;
use crate::read_util::PrimitiveRead;
use std::io::{Read, Result as IOResult};

/// A fog volume ("effect" in older documentation). `brush_index` bounds
/// the volume; `visible_side` is -1 when every side is visible.
#[derive(Clone, Debug)]
pub struct Fog {
    pub name: String,
    pub brush_index: i32,
    pub visible_side: i32,
}

impl LumpData for Fog {
    fn lump_type() -> LumpType {
        LumpType::Fogs
    }

    fn element_size(_format: FormatVersion) -> usize {
        72
    }

    fn read(reader: &mut dyn Read, _format: FormatVersion) -> IOResult<Self> {
        let name = read_fixed_name(reader)?;
        let brush_index = reader.read_i32()?;
        let visible_side = reader.read_i32()?;
        Ok(Self {
            name,
            brush_index,
            visible_side,
        })
    }
}
