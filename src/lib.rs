//! Decoder for idTech3 BSP map files.
//!
//! Reads both historical format generations, `IBSP` (Quake III Arena) and
//! `RBSP` (Raven titles), and normalizes them into one set of in-memory
//! record arrays. Curved-surface patch faces can then be expanded into
//! triangle meshes with [`tessellate_patch`] or the [`Map`] convenience
//! methods.

pub mod lump;
pub mod lump_data;

mod error;
mod map;
mod map_header;
mod read_util;
mod tessellation;
mod visibility;

pub use self::error::BspError;
pub use self::lump::Lump;
pub use self::lump_data::*;
pub use self::map::Map;
pub use self::map_header::{FormatVersion, MapHeader, HEADER_SIZE, LUMP_COUNT};
pub use self::read_util::{PrimitiveRead, VectorRead};
pub use self::tessellation::tessellate_patch;
pub use self::visibility::VisData;
