use crate::lump_data::{LumpData, LumpType};
use crate::map_header::FormatVersion;
use crate::read_util::PrimitiveRead;
use std::io::{Read, Result as IOResult};

#[derive(Clone, Copy, Debug)]
pub struct LeafFace {
    pub face: i32,
}

impl LumpData for LeafFace {
    fn lump_type() -> LumpType {
        LumpType::LeafFaces
    }

    fn element_size(_format: FormatVersion) -> usize {
        4
    }

    fn read(reader: &mut dyn Read, _format: FormatVersion) -> IOResult<Self> {
        let face = reader.read_i32()?;
        Ok(Self { face })
    }
}
