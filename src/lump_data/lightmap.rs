use crate::lump_data::{LumpData, LumpType};
use crate::map_header::FormatVersion;
use std::io::{Read, Result as IOResult};

/// Edge length of a lightmap image in texels.
pub const LIGHTMAP_SIZE: usize = 128;
/// Wire size of one lightmap: 128×128 RGB8.
pub const LIGHTMAP_BYTES: usize = LIGHTMAP_SIZE * LIGHTMAP_SIZE * 3;

/// One precomputed static-lighting image.
#[derive(Clone)]
pub struct LightMap {
    pub pixels: Box<[u8]>,
}

impl LumpData for LightMap {
    fn lump_type() -> LumpType {
        LumpType::Lightmaps
    }

    fn element_size(_format: FormatVersion) -> usize {
        LIGHTMAP_BYTES
    }

    fn read(reader: &mut dyn Read, _format: FormatVersion) -> IOResult<Self> {
        let mut pixels = vec![0u8; LIGHTMAP_BYTES];
        reader.read_exact(&mut pixels)?;
        Ok(Self {
            pixels: pixels.into_boxed_slice(),
        })
    }
}
