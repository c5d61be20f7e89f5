use crate::map_header::FormatVersion;
use std::io::{Read, Result as IOResult};

pub use self::brush::Brush;
pub use self::brush_side::BrushSide;
pub use self::face::{Face, FaceType, LIGHTMAP_NONE};
pub use self::fog::Fog;
pub use self::leaf::Leaf;
pub use self::leaf_brush::LeafBrush;
pub use self::leaf_face::LeafFace;
pub use self::light_volume::LightVolume;
pub use self::lightmap::{LightMap, LIGHTMAP_BYTES, LIGHTMAP_SIZE};
pub use self::model::Model;
pub use self::node::Node;
pub use self::plane::Plane;
pub use self::texture::{ContentFlags, SurfaceFlags, Texture};
pub use self::vertex::Vertex;

mod brush;
mod brush_side;
mod face;
mod fog;
mod leaf;
mod leaf_brush;
mod leaf_face;
mod light_volume;
mod lightmap;
mod model;
mod node;
mod plane;
mod texture;
mod vertex;

/// Number of lightmap channels ("styles") in the unified record shape.
/// Legacy records carry a single channel, stored as channel 0 after the
/// upgrade.
pub const MAX_LIGHTMAPS: usize = 4;

/// Lump table slots, in on-disk order. Shared by both format generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum LumpType {
    Entities = 0,
    Textures = 1,
    Planes = 2,
    Nodes = 3,
    Leafs = 4,
    LeafFaces = 5,
    LeafBrushes = 6,
    Models = 7,
    Brushes = 8,
    BrushSides = 9,
    Vertices = 10,
    MeshVerts = 11,
    Fogs = 12,
    Faces = 13,
    Lightmaps = 14,
    LightVolumes = 15,
    VisData = 16,
}

/// One fixed-size record type stored in a lump. `element_size` and `read`
/// take the format tag because four record types (brush sides, vertices,
/// faces, light volumes) have a narrower legacy layout; their `read`
/// upgrades legacy records to the unified shape on the fly.
pub(crate) trait LumpData: Sized {
    fn lump_type() -> LumpType;
    fn element_size(format: FormatVersion) -> usize;
    fn read(reader: &mut dyn Read, format: FormatVersion) -> IOResult<Self>;
}

// Mesh verts: face-relative offsets into the vertex array.
impl LumpData for u32 {
    fn lump_type() -> LumpType {
        LumpType::MeshVerts
    }

    fn element_size(_format: FormatVersion) -> usize {
        4
    }

    fn read(reader: &mut dyn Read, _format: FormatVersion) -> IOResult<Self> {
        use crate::read_util::PrimitiveRead;
        reader.read_u32()
    }
}

/// Fixed 64-byte NUL-padded name field used by the Textures and Fogs lumps.
pub(crate) fn read_fixed_name(reader: &mut dyn Read) -> IOResult<String> {
    let mut buffer = [0u8; 64];
    reader.read_exact(&mut buffer)?;
    let len = buffer.iter().position(|&b| b == 0).unwrap_or(buffer.len());
    Ok(String::from_utf8_lossy(&buffer[..len]).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map_header::FormatVersion::{IBsp, RBsp};

    // Wire sizes are load-bearing: `length / element_size` decides record
    // counts and `length % element_size != 0` is structural corruption.
    #[test]
    fn element_sizes_match_wire_layout() {
        assert_eq!(Texture::element_size(IBsp), 72);
        assert_eq!(Texture::element_size(RBsp), 72);
        assert_eq!(Plane::element_size(RBsp), 16);
        assert_eq!(Node::element_size(RBsp), 36);
        assert_eq!(Leaf::element_size(RBsp), 48);
        assert_eq!(LeafFace::element_size(RBsp), 4);
        assert_eq!(LeafBrush::element_size(RBsp), 4);
        assert_eq!(Model::element_size(RBsp), 40);
        assert_eq!(Brush::element_size(RBsp), 12);
        assert_eq!(u32::element_size(RBsp), 4);
        assert_eq!(Fog::element_size(RBsp), 72);
        assert_eq!(LightMap::element_size(RBsp), 49152);
    }

    #[test]
    fn format_divergent_element_sizes() {
        assert_eq!(BrushSide::element_size(IBsp), 8);
        assert_eq!(BrushSide::element_size(RBsp), 12);
        assert_eq!(Vertex::element_size(IBsp), 44);
        assert_eq!(Vertex::element_size(RBsp), 80);
        assert_eq!(Face::element_size(IBsp), 104);
        assert_eq!(Face::element_size(RBsp), 148);
        assert_eq!(LightVolume::element_size(IBsp), 8);
        assert_eq!(LightVolume::element_size(RBsp), 30);
    }
}
