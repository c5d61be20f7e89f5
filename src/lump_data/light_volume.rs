use crate::lump_data::{LumpData, LumpType, MAX_LIGHTMAPS};
use crate::map_header::FormatVersion;
use std::io::{Read, Result as IOResult};

/// One sample of the volumetric light grid: ambient and directional color
/// per lightmap channel plus a packed spherical light direction
/// (phi, theta).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LightVolume {
    pub ambient: [[u8; 3]; MAX_LIGHTMAPS],
    pub directional: [[u8; 3]; MAX_LIGHTMAPS],
    pub styles: [u8; MAX_LIGHTMAPS],
    pub direction: [u8; 2],
}

impl LumpData for LightVolume {
    fn lump_type() -> LumpType {
        LumpType::LightVolumes
    }

    fn element_size(format: FormatVersion) -> usize {
        match format {
            FormatVersion::IBsp => 8,
            FormatVersion::RBsp => 30,
        }
    }

    fn read(reader: &mut dyn Read, format: FormatVersion) -> IOResult<Self> {
        match format {
            FormatVersion::IBsp => read_legacy(reader),
            FormatVersion::RBsp => read_unified(reader),
        }
    }
}

fn read_rgb(reader: &mut dyn Read) -> IOResult<[u8; 3]> {
    let mut rgb = [0u8; 3];
    reader.read_exact(&mut rgb)?;
    Ok(rgb)
}

fn read_direction(reader: &mut dyn Read) -> IOResult<[u8; 2]> {
    let mut direction = [0u8; 2];
    reader.read_exact(&mut direction)?;
    Ok(direction)
}

fn read_legacy(reader: &mut dyn Read) -> IOResult<LightVolume> {
    let mut ambient = [[0u8; 3]; MAX_LIGHTMAPS];
    ambient[0] = read_rgb(reader)?;
    let mut directional = [[0u8; 3]; MAX_LIGHTMAPS];
    directional[0] = read_rgb(reader)?;
    let direction = read_direction(reader)?;
    Ok(LightVolume {
        ambient,
        directional,
        styles: [0; MAX_LIGHTMAPS],
        direction,
    })
}

fn read_unified(reader: &mut dyn Read) -> IOResult<LightVolume> {
    let mut ambient = [[0u8; 3]; MAX_LIGHTMAPS];
    for rgb in ambient.iter_mut() {
        *rgb = read_rgb(reader)?;
    }
    let mut directional = [[0u8; 3]; MAX_LIGHTMAPS];
    for rgb in directional.iter_mut() {
        *rgb = read_rgb(reader)?;
    }
    let mut styles = [0u8; MAX_LIGHTMAPS];
    reader.read_exact(&mut styles)?;
    let direction = read_direction(reader)?;
    Ok(LightVolume {
        ambient,
        directional,
        styles,
        direction,
    })
}
