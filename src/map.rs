use crate::error::BspError;
use crate::lump_data::{
    Brush, BrushSide, Face, FaceType, Fog, Leaf, LeafBrush, LeafFace, LightMap, LightVolume,
    LumpData, LumpType, Model, Node, Plane, Texture, Vertex,
};
use crate::map_header::{FormatVersion, MapHeader};
use crate::tessellation::{patch_dimensions, tessellate_patch};
use crate::visibility::VisData;
use log::debug;
use std::io::Cursor;

/// A fully decoded map: every lump materialized into its unified record
/// array, plus the raw entity text and the visibility block.
///
/// All record arrays are index-linked: a `Face` names vertex and
/// mesh-vert ranges, a `Leaf` names leaf-face and leaf-brush ranges, and
/// so on. Decoding validates every such reference, so consumers may index
/// without re-checking.
pub struct Map {
    pub format: FormatVersion,
    pub version: i32,
    pub textures: Vec<Texture>,
    pub planes: Vec<Plane>,
    pub nodes: Vec<Node>,
    pub leafs: Vec<Leaf>,
    pub leaf_faces: Vec<LeafFace>,
    pub leaf_brushes: Vec<LeafBrush>,
    pub models: Vec<Model>,
    pub brushes: Vec<Brush>,
    pub brush_sides: Vec<BrushSide>,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub fogs: Vec<Fog>,
    pub faces: Vec<Face>,
    pub lightmaps: Vec<LightMap>,
    pub light_volumes: Vec<LightVolume>,
    pub entities: String,
    pub visibility: VisData,
}

impl Map {
    /// Decodes a whole file image. The buffer is only borrowed for the
    /// duration of the call; every record is copied out.
    pub fn read(data: &[u8]) -> Result<Map, BspError> {
        let header = MapHeader::read(data)?;
        debug!("format {:?}, version {}", header.format, header.version);

        let map = Map {
            format: header.format,
            version: header.version,
            textures: read_lump(data, &header)?,
            planes: read_lump(data, &header)?,
            nodes: read_lump(data, &header)?,
            leafs: read_lump(data, &header)?,
            leaf_faces: read_lump(data, &header)?,
            leaf_brushes: read_lump(data, &header)?,
            models: read_lump(data, &header)?,
            brushes: read_lump(data, &header)?,
            brush_sides: read_lump(data, &header)?,
            vertices: read_lump(data, &header)?,
            indices: read_lump(data, &header)?,
            fogs: read_lump(data, &header)?,
            faces: read_lump(data, &header)?,
            lightmaps: read_lump(data, &header)?,
            light_volumes: read_lump(data, &header)?,
            entities: read_entities(data, &header)?,
            visibility: VisData::read(
                header
                    .lump(LumpType::VisData)
                    .slice(data, LumpType::VisData)?,
            )?,
        };

        map.validate()?;
        Ok(map)
    }

    /// Replaces this map with a freshly decoded one. The old record set is
    /// discarded in full; on error it is left untouched.
    pub fn load(&mut self, data: &[u8]) -> Result<(), BspError> {
        *self = Map::read(data)?;
        Ok(())
    }

    /// Expands the patch face at `face_index` into the map's own vertex
    /// and index arrays and replaces the stored face with the tessellated
    /// one. Control vertices stay in place; geometry is only appended.
    pub fn tessellate_patch_face(
        &mut self,
        face_index: usize,
        subdivisions: u32,
    ) -> Result<(), BspError> {
        let face = self
            .faces
            .get(face_index)
            .cloned()
            .ok_or(BspError::OutOfBounds {
                lump: LumpType::Faces,
                offset: face_index,
                length: 1,
                available: self.faces.len(),
            })?;
        let (w, h) = patch_dimensions(&face)?;

        let start = face.start_vertex_index as usize;
        let control_count = w * h;
        if start + control_count > self.vertices.len() {
            return Err(BspError::OutOfBounds {
                lump: LumpType::Vertices,
                offset: start,
                length: control_count,
                available: self.vertices.len(),
            });
        }

        // The vertex array grows while it is read, so snapshot the control
        // grid and retarget the face at the copy.
        let controls = self.vertices[start..start + control_count].to_vec();
        let mut local = face;
        local.start_vertex_index = 0;
        let tessellated = tessellate_patch(
            &local,
            &controls,
            &mut self.vertices,
            &mut self.indices,
            subdivisions,
        )?;
        self.faces[face_index] = tessellated;
        Ok(())
    }

    /// Expands every patch face in the map. Non-patch faces are left
    /// alone.
    pub fn tessellate_patches(&mut self, subdivisions: u32) -> Result<(), BspError> {
        for face_index in 0..self.faces.len() {
            if self.faces[face_index].face_type == FaceType::Patch {
                self.tessellate_patch_face(face_index, subdivisions)?;
            }
        }
        Ok(())
    }

    /// Every cross-array reference must land inside its target; a sentinel
    /// of -1 is accepted where the format defines one.
    fn validate(&self) -> Result<(), BspError> {
        for face in &self.faces {
            check_range(
                LumpType::Faces,
                face.start_vertex_index as i64,
                face.num_vertices as i64,
                self.vertices.len(),
            )?;
            check_range(
                LumpType::Faces,
                face.start_index as i64,
                face.num_indices as i64,
                self.indices.len(),
            )?;
            check_optional_index(LumpType::Faces, face.texture_id as i64, self.textures.len())?;
            check_optional_index(LumpType::Faces, face.fog_id as i64, self.fogs.len())?;
            for &id in &face.lightmap_ids {
                // Negative ids cover "none" and the vertex-lit specials.
                if id >= 0 {
                    check_index(LumpType::Faces, id as i64, self.lightmaps.len())?;
                }
            }
            // Mesh verts are offsets relative to the face's vertex range.
            let index_range =
                face.start_index as usize..(face.start_index + face.num_indices) as usize;
            for &mesh_vert in &self.indices[index_range] {
                if mesh_vert >= face.num_vertices {
                    return Err(BspError::OutOfBounds {
                        lump: LumpType::MeshVerts,
                        offset: mesh_vert as usize,
                        length: 1,
                        available: face.num_vertices as usize,
                    });
                }
            }
        }

        for fog in &self.fogs {
            check_optional_index(LumpType::Fogs, fog.brush_index as i64, self.brushes.len())?;
        }

        for leaf in &self.leafs {
            check_range(
                LumpType::Leafs,
                leaf.first_leaf_face as i64,
                leaf.num_leaf_faces as i64,
                self.leaf_faces.len(),
            )?;
            check_range(
                LumpType::Leafs,
                leaf.first_leaf_brush as i64,
                leaf.num_leaf_brushes as i64,
                self.leaf_brushes.len(),
            )?;
        }

        for leaf_face in &self.leaf_faces {
            check_index(LumpType::LeafFaces, leaf_face.face as i64, self.faces.len())?;
        }
        for leaf_brush in &self.leaf_brushes {
            check_index(
                LumpType::LeafBrushes,
                leaf_brush.brush as i64,
                self.brushes.len(),
            )?;
        }

        for model in &self.models {
            check_range(
                LumpType::Models,
                model.first_face as i64,
                model.num_faces as i64,
                self.faces.len(),
            )?;
            check_range(
                LumpType::Models,
                model.first_brush as i64,
                model.num_brushes as i64,
                self.brushes.len(),
            )?;
        }

        for brush in &self.brushes {
            check_range(
                LumpType::Brushes,
                brush.first_side as i64,
                brush.num_sides as i64,
                self.brush_sides.len(),
            )?;
            check_optional_index(LumpType::Brushes, brush.texture_index as i64, self.textures.len())?;
        }

        for side in &self.brush_sides {
            check_index(LumpType::BrushSides, side.plane as i64, self.planes.len())?;
            check_optional_index(
                LumpType::BrushSides,
                side.texture_index as i64,
                self.textures.len(),
            )?;
            check_optional_index(
                LumpType::BrushSides,
                side.draw_surf_index as i64,
                self.faces.len(),
            )?;
        }

        for node in &self.nodes {
            check_index(LumpType::Nodes, node.plane as i64, self.planes.len())?;
            for &child in &node.children {
                if child >= 0 {
                    check_index(LumpType::Nodes, child as i64, self.nodes.len())?;
                } else {
                    check_index(LumpType::Nodes, !child as i64, self.leafs.len())?;
                }
            }
        }

        Ok(())
    }
}

fn read_lump<T: LumpData>(data: &[u8], header: &MapHeader) -> Result<Vec<T>, BspError> {
    let lump_type = T::lump_type();
    let lump = header.lump(lump_type);
    let bytes = lump.slice(data, lump_type)?;

    let element_size = T::element_size(header.format);
    if bytes.len() % element_size != 0 {
        return Err(BspError::MalformedLump {
            lump: lump_type,
            reason: "length is not a multiple of the element size",
        });
    }

    let count = bytes.len() / element_size;
    let mut elements = Vec::with_capacity(count);
    let mut reader = Cursor::new(bytes);
    for _ in 0..count {
        let element = T::read(&mut reader, header.format).map_err(|_| BspError::MalformedLump {
            lump: lump_type,
            reason: "invalid record data",
        })?;
        elements.push(element);
    }
    debug!("{:?}: {} records", lump_type, count);
    Ok(elements)
}

/// The entity lump is a raw text blob, NUL-terminated inside its byte
/// range. It is stored untouched for an external parser.
fn read_entities(data: &[u8], header: &MapHeader) -> Result<String, BspError> {
    let bytes = header
        .lump(LumpType::Entities)
        .slice(data, LumpType::Entities)?;
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    Ok(String::from_utf8_lossy(&bytes[..end]).into_owned())
}

fn check_range(lump: LumpType, start: i64, count: i64, limit: usize) -> Result<(), BspError> {
    if start < 0 || count < 0 || (start + count) as u64 > limit as u64 {
        return Err(BspError::OutOfBounds {
            lump,
            offset: start.max(0) as usize,
            length: count.max(0) as usize,
            available: limit,
        });
    }
    Ok(())
}

fn check_index(lump: LumpType, index: i64, limit: usize) -> Result<(), BspError> {
    check_range(lump, index, 1, limit)
}

/// Like [`check_index`] but accepting -1 as "none".
fn check_optional_index(lump: LumpType, index: i64, limit: usize) -> Result<(), BspError> {
    if index == -1 {
        return Ok(());
    }
    check_index(lump, index, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lump_data::{FaceType, LumpType, LIGHTMAP_NONE};
    use crate::map_header::HEADER_SIZE;
    use nalgebra::Vector3;
    use proptest::prelude::*;

    fn put_i32(data: &mut Vec<u8>, value: i32) {
        data.extend_from_slice(&value.to_le_bytes());
    }

    fn put_u32(data: &mut Vec<u8>, value: u32) {
        data.extend_from_slice(&value.to_le_bytes());
    }

    fn put_f32(data: &mut Vec<u8>, value: f32) {
        data.extend_from_slice(&value.to_le_bytes());
    }

    /// Serializes a file image: header, lump table, then the given lump
    /// payloads packed back to back. Unnamed lumps are empty.
    fn build_file(magic: &[u8; 4], version: i32, lumps: &[(LumpType, Vec<u8>)]) -> Vec<u8> {
        let mut blobs: [Vec<u8>; crate::map_header::LUMP_COUNT] = Default::default();
        for (lump_type, bytes) in lumps {
            blobs[*lump_type as usize] = bytes.clone();
        }

        let mut data = Vec::new();
        data.extend_from_slice(magic);
        put_i32(&mut data, version);
        let mut offset = HEADER_SIZE;
        for blob in &blobs {
            put_u32(&mut data, offset as u32);
            put_u32(&mut data, blob.len() as u32);
            offset += blob.len();
        }
        for blob in &blobs {
            data.extend_from_slice(blob);
        }
        data
    }

    fn texture_bytes(name: &str, surface_flags: i32, content_flags: i32) -> Vec<u8> {
        let mut data = vec![0u8; 64];
        data[..name.len()].copy_from_slice(name.as_bytes());
        put_i32(&mut data, surface_flags);
        put_i32(&mut data, content_flags);
        data
    }

    fn plane_bytes(dist: f32) -> Vec<u8> {
        let mut data = Vec::new();
        for f in &[0.0f32, 0.0, 1.0, dist] {
            put_f32(&mut data, *f);
        }
        data
    }

    fn node_bytes(plane: i32, children: [i32; 2]) -> Vec<u8> {
        let mut data = Vec::new();
        put_i32(&mut data, plane);
        put_i32(&mut data, children[0]);
        put_i32(&mut data, children[1]);
        data.resize(36, 0);
        data
    }

    fn leaf_bytes(first_leaf_face: i32, num_leaf_faces: i32) -> Vec<u8> {
        let mut data = Vec::new();
        put_i32(&mut data, 0); // cluster
        put_i32(&mut data, 0); // area
        data.resize(32, 0); // bounds
        put_i32(&mut data, first_leaf_face);
        put_i32(&mut data, num_leaf_faces);
        put_i32(&mut data, 0);
        put_i32(&mut data, 0);
        data
    }

    fn model_bytes(first_face: i32, num_faces: i32) -> Vec<u8> {
        let mut data = vec![0u8; 24]; // bounds
        put_i32(&mut data, first_face);
        put_i32(&mut data, num_faces);
        put_i32(&mut data, 0);
        put_i32(&mut data, 0);
        data
    }

    fn rbsp_vertex(x: f32, y: f32, z: f32) -> Vec<u8> {
        let mut data = Vec::new();
        for f in &[x, y, z] {
            put_f32(&mut data, *f);
        }
        data.resize(52, 0); // tex + lightmap coords
        for f in &[0.0f32, 0.0, 1.0] {
            put_f32(&mut data, *f);
        }
        data.extend_from_slice(&[255u8; 16]); // colors
        data
    }

    fn rbsp_face(
        face_type: FaceType,
        start_vertex: u32,
        num_vertices: u32,
        start_index: u32,
        num_indices: u32,
        patch_size: [u32; 2],
    ) -> Vec<u8> {
        let mut data = Vec::new();
        put_i32(&mut data, -1); // texture
        put_i32(&mut data, -1); // fog
        put_i32(&mut data, face_type as i32);
        for v in &[start_vertex, num_vertices, start_index, num_indices] {
            put_u32(&mut data, *v);
        }
        data.extend_from_slice(&[0u8; 8]); // styles
        for _ in 0..crate::lump_data::MAX_LIGHTMAPS {
            put_i32(&mut data, LIGHTMAP_NONE);
        }
        data.resize(data.len() + 32 + 8 + 48, 0); // x/y, extents, origin + vecs
        put_u32(&mut data, patch_size[0]);
        put_u32(&mut data, patch_size[1]);
        data
    }

    fn patch_map_bytes() -> Vec<u8> {
        // A single 3×3 patch face over a flat control grid.
        let mut vertices = Vec::new();
        for y in 0..3 {
            for x in 0..3 {
                vertices.extend_from_slice(&rbsp_vertex(x as f32, y as f32, 0.0));
            }
        }
        build_file(
            b"RBSP",
            1,
            &[
                (LumpType::Vertices, vertices),
                (LumpType::Faces, rbsp_face(FaceType::Patch, 0, 9, 0, 0, [3, 3])),
            ],
        )
    }

    #[test]
    fn empty_lumps_decode_to_empty_map() {
        let data = build_file(b"RBSP", 1, &[]);
        let map = Map::read(&data).unwrap();
        assert_eq!(map.format, FormatVersion::RBsp);
        assert_eq!(map.version, 1);
        assert!(map.textures.is_empty());
        assert!(map.vertices.is_empty());
        assert!(map.faces.is_empty());
        assert!(map.entities.is_empty());
        assert!(map.visibility.bits.is_empty());
        assert!(map.visibility.cluster_visible(0, 0));
    }

    #[test]
    fn decodes_cross_linked_records() {
        let mut vertices = Vec::new();
        for x in 0..3 {
            vertices.extend_from_slice(&rbsp_vertex(x as f32, 0.0, 0.0));
        }
        let mut mesh_verts = Vec::new();
        for i in &[0u32, 1, 2] {
            put_u32(&mut mesh_verts, *i);
        }
        let mut vis = Vec::new();
        put_u32(&mut vis, 1);
        put_u32(&mut vis, 1);
        vis.push(0b0000_0001);

        let data = build_file(
            b"RBSP",
            1,
            &[
                (
                    LumpType::Entities,
                    b"{ \"classname\" \"worldspawn\" }\0junk after nul".to_vec(),
                ),
                (LumpType::Textures, texture_bytes("textures/base/wall", 0x4, 1)),
                (LumpType::Planes, plane_bytes(32.0)),
                (LumpType::Nodes, node_bytes(0, [-1, -1])),
                (LumpType::Leafs, leaf_bytes(0, 1)),
                (LumpType::LeafFaces, 0i32.to_le_bytes().to_vec()),
                (LumpType::Models, model_bytes(0, 1)),
                (LumpType::Vertices, vertices),
                (LumpType::MeshVerts, mesh_verts),
                (LumpType::Faces, rbsp_face(FaceType::Polygon, 0, 3, 0, 3, [0, 0])),
                (LumpType::VisData, vis),
            ],
        );

        let map = Map::read(&data).unwrap();
        assert_eq!(map.entities, "{ \"classname\" \"worldspawn\" }");
        assert_eq!(map.textures.len(), 1);
        assert_eq!(map.textures[0].name, "textures/base/wall");
        assert_eq!(map.planes.len(), 1);
        assert_eq!(map.nodes.len(), 1);
        assert_eq!(map.leafs.len(), 1);
        assert_eq!(map.leaf_faces.len(), 1);
        assert_eq!(map.models.len(), 1);
        assert_eq!(map.vertices.len(), 3);
        assert_eq!(map.indices, vec![0, 1, 2]);
        assert_eq!(map.faces.len(), 1);
        assert_eq!(map.faces[0].face_type, FaceType::Polygon);
        assert_eq!(map.visibility.num_clusters, 1);
        assert!(map.visibility.cluster_visible(0, 0));
    }

    #[test]
    fn legacy_file_upgrades_to_unified_shape() {
        let mut vertex = Vec::new();
        for f in &[1.0f32, 2.0, 3.0] {
            put_f32(&mut vertex, *f);
        }
        vertex.resize(28, 0); // tex + lightmap coords
        for f in &[0.0f32, 0.0, 1.0] {
            put_f32(&mut vertex, *f);
        }
        vertex.extend_from_slice(&[9, 9, 9, 9]); // color

        let mut side = Vec::new();
        put_u32(&mut side, 0);
        put_i32(&mut side, -1);

        let data = build_file(
            b"IBSP",
            46,
            &[
                (LumpType::Planes, plane_bytes(0.0)),
                (LumpType::BrushSides, side),
                (LumpType::Vertices, vertex),
            ],
        );

        let map = Map::read(&data).unwrap();
        assert_eq!(map.format, FormatVersion::IBsp);
        assert_eq!(map.version, 46);
        assert_eq!(map.vertices.len(), 1);
        assert_eq!(map.vertices[0].position, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(map.vertices[0].colors[0], [9, 9, 9, 9]);
        assert_eq!(map.vertices[0].colors[1], [0, 0, 0, 0]);
        assert_eq!(map.brush_sides.len(), 1);
        assert_eq!(map.brush_sides[0].draw_surf_index, -1);
    }

    #[test]
    fn bad_magic_is_unsupported() {
        let data = build_file(b"FBSP", 1, &[]);
        assert!(matches!(
            Map::read(&data),
            Err(BspError::UnsupportedFormat { magic, .. }) if &magic == b"FBSP"
        ));
    }

    #[test]
    fn lump_range_past_buffer_is_rejected() {
        let mut data = build_file(b"RBSP", 1, &[(LumpType::Textures, texture_bytes("t", 0, 0))]);
        data.truncate(data.len() - 1);
        assert!(matches!(
            Map::read(&data),
            Err(BspError::OutOfBounds {
                lump: LumpType::Textures,
                ..
            })
        ));
    }

    #[test]
    fn misaligned_lump_is_malformed() {
        let data = build_file(b"RBSP", 1, &[(LumpType::Planes, vec![0u8; 15])]);
        assert!(matches!(
            Map::read(&data),
            Err(BspError::MalformedLump {
                lump: LumpType::Planes,
                ..
            })
        ));
    }

    #[test]
    fn dangling_face_vertex_range_is_rejected() {
        let data = build_file(
            b"RBSP",
            1,
            &[(LumpType::Faces, rbsp_face(FaceType::Polygon, 0, 3, 0, 0, [0, 0]))],
        );
        assert!(matches!(
            Map::read(&data),
            Err(BspError::OutOfBounds {
                lump: LumpType::Faces,
                ..
            })
        ));
    }

    fn fog_bytes(name: &str, brush_index: i32, visible_side: i32) -> Vec<u8> {
        let mut data = vec![0u8; 64];
        data[..name.len()].copy_from_slice(name.as_bytes());
        put_i32(&mut data, brush_index);
        put_i32(&mut data, visible_side);
        data
    }

    #[test]
    fn dangling_fog_brush_is_rejected() {
        let data = build_file(b"RBSP", 1, &[(LumpType::Fogs, fog_bytes("fogs/basic", 5, -1))]);
        assert!(matches!(
            Map::read(&data),
            Err(BspError::OutOfBounds {
                lump: LumpType::Fogs,
                ..
            })
        ));
    }

    #[test]
    fn fog_without_brush_is_accepted() {
        let data = build_file(b"RBSP", 1, &[(LumpType::Fogs, fog_bytes("fogs/basic", -1, -1))]);
        let map = Map::read(&data).unwrap();
        assert_eq!(map.fogs.len(), 1);
        assert_eq!(map.fogs[0].name, "fogs/basic");
        assert_eq!(map.fogs[0].brush_index, -1);
    }

    #[test]
    fn mesh_vert_past_face_vertex_range_is_rejected() {
        let mut vertices = Vec::new();
        for x in 0..3 {
            vertices.extend_from_slice(&rbsp_vertex(x as f32, 0.0, 0.0));
        }
        let mut mesh_verts = Vec::new();
        for i in &[0u32, 1, 3] {
            put_u32(&mut mesh_verts, *i);
        }
        let data = build_file(
            b"RBSP",
            1,
            &[
                (LumpType::Vertices, vertices),
                (LumpType::MeshVerts, mesh_verts),
                (LumpType::Faces, rbsp_face(FaceType::Polygon, 0, 3, 0, 3, [0, 0])),
            ],
        );
        assert!(matches!(
            Map::read(&data),
            Err(BspError::OutOfBounds {
                lump: LumpType::MeshVerts,
                ..
            })
        ));
    }

    #[test]
    fn load_replaces_previous_records() {
        let mut map = Map::read(&patch_map_bytes()).unwrap();
        assert_eq!(map.vertices.len(), 9);
        assert_eq!(map.faces.len(), 1);

        map.load(&build_file(b"RBSP", 1, &[])).unwrap();
        assert!(map.vertices.is_empty());
        assert!(map.faces.is_empty());
        assert!(map.entities.is_empty());
        assert!(map.visibility.bits.is_empty());
    }

    #[test]
    fn failed_load_keeps_the_previous_map() {
        let mut map = Map::read(&patch_map_bytes()).unwrap();
        assert!(map.load(&build_file(b"FBSP", 1, &[])).is_err());
        assert_eq!(map.vertices.len(), 9);
        assert_eq!(map.faces.len(), 1);
    }

    #[test]
    fn tessellating_a_patch_face_appends_geometry() {
        let mut map = Map::read(&patch_map_bytes()).unwrap();
        map.tessellate_patch_face(0, 1).unwrap();

        // The control grid stays; the expanded quad is appended after it.
        assert_eq!(map.vertices.len(), 9 + 4);
        assert_eq!(map.indices.len(), 6);
        assert_eq!(map.vertices[0].position, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(map.vertices[9].position, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(map.vertices[12].position, Vector3::new(2.0, 2.0, 0.0));

        let face = &map.faces[0];
        assert_eq!(face.face_type, FaceType::Polygon);
        assert_eq!(face.start_vertex_index, 9);
        assert_eq!(face.num_vertices, 4);
        assert_eq!(face.start_index, 0);
        assert_eq!(face.num_indices, 6);
    }

    #[test]
    fn tessellate_patches_leaves_other_faces_alone() {
        let mut vertices = Vec::new();
        for y in 0..3 {
            for x in 0..3 {
                vertices.extend_from_slice(&rbsp_vertex(x as f32, y as f32, 0.0));
            }
        }
        let mut faces = rbsp_face(FaceType::Polygon, 0, 3, 0, 0, [0, 0]);
        faces.extend_from_slice(&rbsp_face(FaceType::Patch, 0, 9, 0, 0, [3, 3]));
        let data = build_file(
            b"RBSP",
            1,
            &[(LumpType::Vertices, vertices), (LumpType::Faces, faces)],
        );

        let mut map = Map::read(&data).unwrap();
        map.tessellate_patches(2).unwrap();
        assert_eq!(map.faces[0].face_type, FaceType::Polygon);
        assert_eq!(map.faces[0].start_vertex_index, 0);
        assert_eq!(map.faces[0].num_vertices, 3);
        assert_eq!(map.faces[1].face_type, FaceType::Polygon);
        assert_eq!(map.faces[1].num_vertices, 9);
        assert_eq!(map.faces[1].num_indices, 24);
    }

    #[test]
    fn tessellating_a_missing_face_is_out_of_bounds() {
        let mut map = Map::read(&build_file(b"RBSP", 1, &[])).unwrap();
        assert!(matches!(
            map.tessellate_patch_face(0, 1),
            Err(BspError::OutOfBounds {
                lump: LumpType::Faces,
                ..
            })
        ));
    }

    proptest! {
        #[test]
        fn plane_count_follows_lump_length(count in 0usize..64) {
            let mut planes = Vec::new();
            for i in 0..count {
                planes.extend_from_slice(&plane_bytes(i as f32));
            }
            let data = build_file(b"RBSP", 1, &[(LumpType::Planes, planes)]);
            let map = Map::read(&data).unwrap();
            prop_assert_eq!(map.planes.len(), count);
        }

        #[test]
        fn visibility_matrix_follows_header_counts(
            clusters in 0u32..16,
            stride in 1u32..8,
        ) {
            let mut vis = Vec::new();
            put_u32(&mut vis, clusters);
            put_u32(&mut vis, stride);
            vis.resize(8 + (clusters * stride) as usize, 0);
            let data = build_file(b"RBSP", 1, &[(LumpType::VisData, vis)]);
            let map = Map::read(&data).unwrap();
            prop_assert_eq!(map.visibility.num_clusters, clusters);
            prop_assert_eq!(map.visibility.bits.len(), (clusters * stride) as usize);
        }
    }
}
