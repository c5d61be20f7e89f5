use crate::lump_data::{LumpData, LumpType, MAX_LIGHTMAPS};
use crate::map_header::FormatVersion;
use crate::read_util::{PrimitiveRead, VectorRead};
use nalgebra::Vector3;
use std::io::{Error as IOError, ErrorKind, Read, Result as IOResult};

/// Sentinel for an unused lightmap channel.
pub const LIGHTMAP_NONE: i32 = -1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceType {
    Polygon = 1,
    Patch = 2,
    Mesh = 3,
    Billboard = 4,
}

impl FaceType {
    pub fn from_i32(value: i32) -> Option<FaceType> {
        match value {
            1 => Some(FaceType::Polygon),
            2 => Some(FaceType::Patch),
            3 => Some(FaceType::Mesh),
            4 => Some(FaceType::Billboard),
            _ => None,
        }
    }
}

/// A drawable surface in the unified shape. `start_vertex_index` /
/// `num_vertices` are a half-open range into the map's vertex array;
/// `start_index` / `num_indices` into the mesh-vert array, whose values
/// are in turn relative to `start_vertex_index`.
///
/// For patch faces the vertex range holds the control grid
/// (`patch_size[0] × patch_size[1]` points) rather than drawable geometry
/// until the face is tessellated.
///
/// The three `lightmap_vecs` carry the lightmap s/t basis in the first two
/// slots; the wire layout is preserved without asserting more about their
/// geometry than that.
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    pub texture_id: i32,
    pub fog_id: i32,
    pub face_type: FaceType,
    pub start_vertex_index: u32,
    pub num_vertices: u32,
    pub start_index: u32,
    pub num_indices: u32,
    pub lightmap_styles: [u8; MAX_LIGHTMAPS],
    pub vertex_styles: [u8; MAX_LIGHTMAPS],
    pub lightmap_ids: [i32; MAX_LIGHTMAPS],
    pub lightmap_x: [i32; MAX_LIGHTMAPS],
    pub lightmap_y: [i32; MAX_LIGHTMAPS],
    pub lightmap_width: i32,
    pub lightmap_height: i32,
    pub lightmap_origin: Vector3<f32>,
    pub lightmap_vecs: [Vector3<f32>; 3],
    pub patch_size: [u32; 2],
}

impl LumpData for Face {
    fn lump_type() -> LumpType {
        LumpType::Faces
    }

    fn element_size(format: FormatVersion) -> usize {
        match format {
            FormatVersion::IBsp => 104,
            FormatVersion::RBsp => 148,
        }
    }

    fn read(reader: &mut dyn Read, format: FormatVersion) -> IOResult<Self> {
        match format {
            FormatVersion::IBsp => read_legacy(reader),
            FormatVersion::RBsp => read_unified(reader),
        }
    }
}

fn read_face_type(reader: &mut dyn Read) -> IOResult<FaceType> {
    FaceType::from_i32(reader.read_i32()?)
        .ok_or_else(|| IOError::new(ErrorKind::InvalidData, "invalid face type"))
}

fn read_styles(reader: &mut dyn Read) -> IOResult<[u8; MAX_LIGHTMAPS]> {
    let mut styles = [0u8; MAX_LIGHTMAPS];
    reader.read_exact(&mut styles)?;
    Ok(styles)
}

fn read_legacy(reader: &mut dyn Read) -> IOResult<Face> {
    let texture_id = reader.read_i32()?;
    let fog_id = reader.read_i32()?;
    let face_type = read_face_type(reader)?;
    let start_vertex_index = reader.read_u32()?;
    let num_vertices = reader.read_u32()?;
    let start_index = reader.read_u32()?;
    let num_indices = reader.read_u32()?;

    // The single legacy lightmap channel becomes channel 0; the other
    // channels get the "no lightmap" sentinel.
    let mut lightmap_ids = [LIGHTMAP_NONE; MAX_LIGHTMAPS];
    lightmap_ids[0] = reader.read_i32()?;
    let mut lightmap_x = [0i32; MAX_LIGHTMAPS];
    lightmap_x[0] = reader.read_i32()?;
    let mut lightmap_y = [0i32; MAX_LIGHTMAPS];
    lightmap_y[0] = reader.read_i32()?;
    let lightmap_width = reader.read_i32()?;
    let lightmap_height = reader.read_i32()?;
    let lightmap_origin = reader.read_vec3()?;
    // Legacy files store the two basis vectors and the face normal as
    // three consecutive vectors, same as the unified layout.
    let lightmap_vecs = [reader.read_vec3()?, reader.read_vec3()?, reader.read_vec3()?];
    let patch_size = [reader.read_u32()?, reader.read_u32()?];

    Ok(Face {
        texture_id,
        fog_id,
        face_type,
        start_vertex_index,
        num_vertices,
        start_index,
        num_indices,
        lightmap_styles: [0; MAX_LIGHTMAPS],
        vertex_styles: [0; MAX_LIGHTMAPS],
        lightmap_ids,
        lightmap_x,
        lightmap_y,
        lightmap_width,
        lightmap_height,
        lightmap_origin,
        lightmap_vecs,
        patch_size,
    })
}

fn read_unified(reader: &mut dyn Read) -> IOResult<Face> {
    let texture_id = reader.read_i32()?;
    let fog_id = reader.read_i32()?;
    let face_type = read_face_type(reader)?;
    let start_vertex_index = reader.read_u32()?;
    let num_vertices = reader.read_u32()?;
    let start_index = reader.read_u32()?;
    let num_indices = reader.read_u32()?;
    let lightmap_styles = read_styles(reader)?;
    let vertex_styles = read_styles(reader)?;
    let mut lightmap_ids = [0i32; MAX_LIGHTMAPS];
    for id in lightmap_ids.iter_mut() {
        *id = reader.read_i32()?;
    }
    let mut lightmap_x = [0i32; MAX_LIGHTMAPS];
    for x in lightmap_x.iter_mut() {
        *x = reader.read_i32()?;
    }
    let mut lightmap_y = [0i32; MAX_LIGHTMAPS];
    for y in lightmap_y.iter_mut() {
        *y = reader.read_i32()?;
    }
    let lightmap_width = reader.read_i32()?;
    let lightmap_height = reader.read_i32()?;
    let lightmap_origin = reader.read_vec3()?;
    let lightmap_vecs = [reader.read_vec3()?, reader.read_vec3()?, reader.read_vec3()?];
    let patch_size = [reader.read_u32()?, reader.read_u32()?];

    Ok(Face {
        texture_id,
        fog_id,
        face_type,
        start_vertex_index,
        num_vertices,
        start_index,
        num_indices,
        lightmap_styles,
        vertex_styles,
        lightmap_ids,
        lightmap_x,
        lightmap_y,
        lightmap_width,
        lightmap_height,
        lightmap_origin,
        lightmap_vecs,
        patch_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn legacy_face_bytes(face_type: i32) -> Vec<u8> {
        let mut data = Vec::new();
        for v in &[5i32, -1, face_type] {
            data.extend_from_slice(&v.to_le_bytes());
        }
        for v in &[100u32, 9, 200, 24] {
            data.extend_from_slice(&v.to_le_bytes());
        }
        data.extend_from_slice(&2i32.to_le_bytes()); // lightmap id
        for v in &[16i32, 32, 128, 64] {
            data.extend_from_slice(&v.to_le_bytes());
        }
        for _ in 0..12 {
            data.extend_from_slice(&0f32.to_le_bytes()); // origin + vecs
        }
        for v in &[3u32, 3] {
            data.extend_from_slice(&v.to_le_bytes());
        }
        data
    }

    #[test]
    fn legacy_lightmap_id_lands_in_channel_zero() {
        let data = legacy_face_bytes(2);
        assert_eq!(data.len(), Face::element_size(FormatVersion::IBsp));
        let face = Face::read(&mut Cursor::new(data), FormatVersion::IBsp).unwrap();
        assert_eq!(face.face_type, FaceType::Patch);
        assert_eq!(face.texture_id, 5);
        assert_eq!(face.fog_id, -1);
        assert_eq!(face.start_vertex_index, 100);
        assert_eq!(face.num_vertices, 9);
        assert_eq!(face.lightmap_ids, [2, LIGHTMAP_NONE, LIGHTMAP_NONE, LIGHTMAP_NONE]);
        assert_eq!(face.lightmap_x, [16, 0, 0, 0]);
        assert_eq!(face.lightmap_y, [32, 0, 0, 0]);
        assert_eq!(face.lightmap_styles, [0; MAX_LIGHTMAPS]);
        assert_eq!(face.patch_size, [3, 3]);
    }

    #[test]
    fn unknown_face_type_is_rejected() {
        let data = legacy_face_bytes(7);
        assert!(Face::read(&mut Cursor::new(data), FormatVersion::IBsp).is_err());
    }
}
