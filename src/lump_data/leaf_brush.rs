use crate::lump_data::{LumpData, LumpType};
use crate::map_header::FormatVersion;
use crate::read_util::PrimitiveRead;
use std::io::{Read, Result as IOResult};

#[derive(Clone, Copy, Debug)]
pub struct LeafBrush {
    pub brush: i32,
}

impl LumpData for LeafBrush {
    fn lump_type() -> LumpType {
        LumpType::LeafBrushes
    }

    fn element_size(_format: FormatVersion) -> usize {
        4
    }

    fn read(reader: &mut dyn Read, _format: FormatVersion) -> IOResult<Self> {
        let brush = reader.read_i32()?;
        Ok(Self { brush })
    }
}
