use crate::lump_data::{read_fixed_name, LumpData, LumpType};
use crate::map_header::FormatVersion;
use crate::read_util::PrimitiveRead;
use bitflags::bitflags;
use std::io::{Read, Result as IOResult};

bitflags! {
    /// Per-surface behavior flags. Unknown bits are retained as-is; their
    /// meaning is a game concern, not a format concern.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SurfaceFlags: u32 {
        const NO_DAMAGE = 0x1;
        const SLICK = 0x2;
        const SKY = 0x4;
        const LADDER = 0x8;
        const NO_IMPACT = 0x10;
        const NO_MARKS = 0x20;
        const FLESH = 0x40;
        const NO_DRAW = 0x80;
        const HINT = 0x100;
        const SKIP = 0x200;
        const NO_LIGHTMAP = 0x400;
        const POINT_LIGHT = 0x800;
        const METAL_STEPS = 0x1000;
        const NO_STEPS = 0x2000;
        const NON_SOLID = 0x4000;
        const LIGHT_FILTER = 0x8000;
        const ALPHA_SHADOW = 0x10000;
        const NO_DLIGHT = 0x20000;
        const DUST = 0x40000;
    }
}

bitflags! {
    /// Brush content classification flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ContentFlags: u32 {
        const SOLID = 0x1;
        const LAVA = 0x8;
        const SLIME = 0x10;
        const WATER = 0x20;
        const FOG = 0x40;
        const AREA_PORTAL = 0x8000;
        const PLAYER_CLIP = 0x10000;
        const MONSTER_CLIP = 0x20000;
        const CLUSTER_PORTAL = 0x100000;
        const DO_NOT_ENTER = 0x200000;
        const BOT_CLIP = 0x400000;
        const ORIGIN = 0x1000000;
        const BODY = 0x2000000;
        const CORPSE = 0x4000000;
        const DETAIL = 0x8000000;
        const STRUCTURAL = 0x10000000;
        const TRANSLUCENT = 0x20000000;
        const TRIGGER = 0x40000000;
        const NO_DROP = 0x80000000;
    }
}

/// A material/shader reference. The name is not resolved against any
/// asset store here.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub name: String,
    pub surface_flags: SurfaceFlags,
    pub content_flags: ContentFlags,
}

impl LumpData for Texture {
    fn lump_type() -> LumpType {
        LumpType::Textures
    }

    fn element_size(_format: FormatVersion) -> usize {
        72
    }

    fn read(reader: &mut dyn Read, _format: FormatVersion) -> IOResult<Self> {
        let name = read_fixed_name(reader)?;
        let surface_flags = SurfaceFlags::from_bits_retain(reader.read_u32()?);
        let content_flags = ContentFlags::from_bits_retain(reader.read_u32()?);
        Ok(Self {
            name,
            surface_flags,
            content_flags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn name_truncates_at_first_nul() {
        let mut data = vec![0u8; 72];
        data[..13].copy_from_slice(b"textures/base");
        data[64] = 0x81; // NO_DAMAGE | NO_DRAW
        data[68] = 0x01; // SOLID
        let texture = Texture::read(&mut Cursor::new(data), FormatVersion::IBsp).unwrap();
        assert_eq!(texture.name, "textures/base");
        assert_eq!(
            texture.surface_flags,
            SurfaceFlags::NO_DAMAGE | SurfaceFlags::NO_DRAW
        );
        assert_eq!(texture.content_flags, ContentFlags::SOLID);
    }
}
