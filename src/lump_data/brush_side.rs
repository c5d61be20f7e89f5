use crate::lump_data::{LumpData, LumpType};
use crate::map_header::FormatVersion;
use crate::read_util::PrimitiveRead;
use std::io::{Read, Result as IOResult};

/// One bounding plane of a brush. `draw_surf_index` only exists in the
/// newer generation; legacy records get -1 ("none").
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushSide {
    pub plane: u32,
    pub texture_index: i32,
    pub draw_surf_index: i32,
}

impl LumpData for BrushSide {
    fn lump_type() -> LumpType {
        LumpType::BrushSides
    }

    fn element_size(format: FormatVersion) -> usize {
        match format {
            FormatVersion::IBsp => 8,
            FormatVersion::RBsp => 12,
        }
    }

    fn read(reader: &mut dyn Read, format: FormatVersion) -> IOResult<Self> {
        match format {
            FormatVersion::IBsp => read_legacy(reader),
            FormatVersion::RBsp => read_unified(reader),
        }
    }
}

fn read_legacy(reader: &mut dyn Read) -> IOResult<BrushSide> {
    let plane = reader.read_u32()?;
    let texture_index = reader.read_i32()?;
    Ok(BrushSide {
        plane,
        texture_index,
        draw_surf_index: -1,
    })
}

fn read_unified(reader: &mut dyn Read) -> IOResult<BrushSide> {
    let plane = reader.read_u32()?;
    let texture_index = reader.read_i32()?;
    let draw_surf_index = reader.read_i32()?;
    Ok(BrushSide {
        plane,
        texture_index,
        draw_surf_index,
    })
}
