use crate::lump_data::{LumpData, LumpType, MAX_LIGHTMAPS};
use crate::map_header::FormatVersion;
use crate::read_util::VectorRead;
use nalgebra::{Vector2, Vector3};
use std::io::{Read, Result as IOResult};

/// A draw vertex in the unified shape. Legacy records carry one lightmap
/// coordinate pair and one color; those become channel 0 and the rest stay
/// zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vertex {
    pub position: Vector3<f32>,
    pub tex_coord: Vector2<f32>,
    pub lightmap_coords: [Vector2<f32>; MAX_LIGHTMAPS],
    pub normal: Vector3<f32>,
    pub colors: [[u8; 4]; MAX_LIGHTMAPS],
}

impl Vertex {
    /// Uniform scale of every interpolated field. Color is deliberately
    /// not part of vertex algebra and is left zero.
    pub fn scaled(&self, factor: f32) -> Vertex {
        Vertex {
            position: self.position * factor,
            tex_coord: self.tex_coord * factor,
            lightmap_coords: self.lightmap_coords.map(|c| c * factor),
            normal: self.normal * factor,
            colors: [[0; 4]; MAX_LIGHTMAPS],
        }
    }

    /// Componentwise sum of every interpolated field; see [`Vertex::scaled`]
    /// for the color asymmetry.
    pub fn added(&self, other: &Vertex) -> Vertex {
        let mut lightmap_coords = [Vector2::zeros(); MAX_LIGHTMAPS];
        for (i, coords) in lightmap_coords.iter_mut().enumerate() {
            *coords = self.lightmap_coords[i] + other.lightmap_coords[i];
        }
        Vertex {
            position: self.position + other.position,
            tex_coord: self.tex_coord + other.tex_coord,
            lightmap_coords,
            normal: self.normal + other.normal,
            colors: [[0; 4]; MAX_LIGHTMAPS],
        }
    }
}

impl LumpData for Vertex {
    fn lump_type() -> LumpType {
        LumpType::Vertices
    }

    fn element_size(format: FormatVersion) -> usize {
        match format {
            FormatVersion::IBsp => 44,
            FormatVersion::RBsp => 80,
        }
    }

    fn read(reader: &mut dyn Read, format: FormatVersion) -> IOResult<Self> {
        match format {
            FormatVersion::IBsp => read_legacy(reader),
            FormatVersion::RBsp => read_unified(reader),
        }
    }
}

fn read_color(reader: &mut dyn Read) -> IOResult<[u8; 4]> {
    let mut color = [0u8; 4];
    reader.read_exact(&mut color)?;
    Ok(color)
}

fn read_legacy(reader: &mut dyn Read) -> IOResult<Vertex> {
    let position = reader.read_vec3()?;
    let tex_coord = reader.read_vec2()?;
    let mut lightmap_coords = [Vector2::zeros(); MAX_LIGHTMAPS];
    lightmap_coords[0] = reader.read_vec2()?;
    let normal = reader.read_vec3()?;
    let mut colors = [[0u8; 4]; MAX_LIGHTMAPS];
    colors[0] = read_color(reader)?;
    Ok(Vertex {
        position,
        tex_coord,
        lightmap_coords,
        normal,
        colors,
    })
}

fn read_unified(reader: &mut dyn Read) -> IOResult<Vertex> {
    let position = reader.read_vec3()?;
    let tex_coord = reader.read_vec2()?;
    let mut lightmap_coords = [Vector2::zeros(); MAX_LIGHTMAPS];
    for coords in lightmap_coords.iter_mut() {
        *coords = reader.read_vec2()?;
    }
    let normal = reader.read_vec3()?;
    let mut colors = [[0u8; 4]; MAX_LIGHTMAPS];
    for color in colors.iter_mut() {
        *color = read_color(reader)?;
    }
    Ok(Vertex {
        position,
        tex_coord,
        lightmap_coords,
        normal,
        colors,
    })
}
