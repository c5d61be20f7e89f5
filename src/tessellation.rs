//! Quadratic Bezier patch tessellation.
//!
//! A patch face's vertex range holds a `w × h` grid of control points
//! (both dimensions odd, at least 3). The grid decomposes into
//! `(w-1)/2 * (h-1)/2` independent 3x3-control-point sub-patches; each is
//! expanded into an `(n+1)²` vertex grid and `2n²` triangles at
//! subdivision level `n`.

use crate::error::BspError;
use crate::lump_data::{Face, FaceType, LumpType, Vertex};

/// Validates a patch face's control grid dimensions. Must run before any
/// indexing into the source vertex array.
pub(crate) fn patch_dimensions(face: &Face) -> Result<(usize, usize), BspError> {
    if face.face_type != FaceType::Patch {
        return Err(BspError::InvalidArgument {
            reason: "face is not a patch",
        });
    }
    let [w, h] = face.patch_size;
    if w < 3 || h < 3 || w % 2 == 0 || h % 2 == 0 {
        return Err(BspError::InvalidArgument {
            reason: "patch control grid dimensions must be odd and at least 3",
        });
    }
    Ok((w as usize, h as usize))
}

/// Expands a patch face into triangles at subdivision level `subdivisions`
/// and appends the result to `out_vertices` / `out_indices`.
///
/// This is a pure transformation: the input face is left untouched and the
/// returned face describes exactly the appended vertex and index ranges,
/// with `face_type` rewritten to [`FaceType::Polygon`]. Emitted indices
/// follow the mesh-vert convention, relative to the returned face's
/// `start_vertex_index`.
///
/// The output buffers may belong to the same map the source vertices came
/// from; see [`crate::Map::tessellate_patch_face`] for that arrangement.
pub fn tessellate_patch(
    face: &Face,
    source_vertices: &[Vertex],
    out_vertices: &mut Vec<Vertex>,
    out_indices: &mut Vec<u32>,
    subdivisions: u32,
) -> Result<Face, BspError> {
    if subdivisions == 0 {
        return Err(BspError::InvalidArgument {
            reason: "subdivision level must be at least 1",
        });
    }
    let (w, h) = patch_dimensions(face)?;

    let start = face.start_vertex_index as usize;
    let control_count = w * h;
    if start + control_count > source_vertices.len() {
        return Err(BspError::OutOfBounds {
            lump: LumpType::Vertices,
            offset: start,
            length: control_count,
            available: source_vertices.len(),
        });
    }

    let start_vertex = out_vertices.len() as u32;
    let start_index = out_indices.len() as u32;

    let sub_patches_x = (w - 1) / 2;
    let sub_patches_y = (h - 1) / 2;

    let mut index_offset = 0u32;
    for j in 0..sub_patches_y {
        for i in 0..sub_patches_x {
            // Top-left control point of this sub-patch; rows are `w` apart.
            let row0 = start + j * 2 * w + i * 2;
            let rows = [row0, row0 + w, row0 + 2 * w];
            index_offset += tessellate_sub_patch(
                source_vertices,
                rows,
                out_vertices,
                out_indices,
                subdivisions,
                index_offset,
            );
        }
    }

    let mut tessellated = face.clone();
    tessellated.start_vertex_index = start_vertex;
    tessellated.num_vertices = out_vertices.len() as u32 - start_vertex;
    tessellated.start_index = start_index;
    tessellated.num_indices = out_indices.len() as u32 - start_index;
    tessellated.face_type = FaceType::Polygon;
    Ok(tessellated)
}

fn quadratic_bezier(p0: &Vertex, p1: &Vertex, p2: &Vertex, a: f32) -> Vertex {
    let b = 1.0 - a;
    p0.scaled(b * b)
        .added(&p1.scaled(2.0 * b * a))
        .added(&p2.scaled(a * a))
}

/// Tensor-product evaluation of one 3×3 sub-patch. `rows` are the source
/// offsets of the three control rows; each row holds 3 consecutive
/// vertices. Returns the number of vertices emitted.
fn tessellate_sub_patch(
    source: &[Vertex],
    rows: [usize; 3],
    vertices: &mut Vec<Vertex>,
    indices: &mut Vec<u32>,
    subdivisions: u32,
    index_offset: u32,
) -> u32 {
    let n = subdivisions as usize;
    let stride = subdivisions + 1;

    for i in 0..=n {
        let a = i as f32 / subdivisions as f32;
        let column = [
            quadratic_bezier(&source[rows[0]], &source[rows[0] + 1], &source[rows[0] + 2], a),
            quadratic_bezier(&source[rows[1]], &source[rows[1] + 1], &source[rows[1] + 2], a),
            quadratic_bezier(&source[rows[2]], &source[rows[2] + 1], &source[rows[2] + 2], a),
        ];
        for j in 0..=n {
            let a = j as f32 / subdivisions as f32;
            vertices.push(quadratic_bezier(&column[0], &column[1], &column[2], a));
        }
    }

    for i in 0..subdivisions {
        for j in 0..subdivisions {
            indices.push(index_offset + i * stride + j);
            indices.push(index_offset + i * stride + j + 1);
            indices.push(index_offset + (i + 1) * stride + j + 1);

            indices.push(index_offset + (i + 1) * stride + j + 1);
            indices.push(index_offset + (i + 1) * stride + j);
            indices.push(index_offset + i * stride + j);
        }
    }

    stride * stride
}
