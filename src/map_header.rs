use crate::error::BspError;
use crate::lump::Lump;
use crate::lump_data::LumpType;
use crate::read_util::PrimitiveRead;
use std::io::Read;

pub const LUMP_COUNT: usize = 17;
pub const HEADER_SIZE: usize = 8 + LUMP_COUNT * 8;

const IBSP_MAGIC: [u8; 4] = *b"IBSP";
const RBSP_MAGIC: [u8; 4] = *b"RBSP";

/// The two on-disk generations this crate reads. `IBsp` records are
/// upgraded to the unified (`RBsp`) shape during decode; the legacy
/// layouts never appear in the public API.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormatVersion {
    IBsp,
    RBsp,
}

#[derive(Debug)]
pub struct MapHeader {
    pub format: FormatVersion,
    pub version: i32,
    pub lumps: [Lump; LUMP_COUNT],
}

impl MapHeader {
    /// Decodes the fixed-size header and lump table from the start of the
    /// file image. Individual lump offsets and lengths are validated by
    /// their consumers, not here; a lump legitimately may be empty.
    pub fn read(data: &[u8]) -> Result<MapHeader, BspError> {
        if data.len() < HEADER_SIZE {
            return Err(BspError::TruncatedBuffer {
                needed: HEADER_SIZE,
                available: data.len(),
            });
        }
        // Length is pre-checked, so reads within the header cannot fail.
        let truncated = |_| BspError::TruncatedBuffer {
            needed: HEADER_SIZE,
            available: data.len(),
        };

        let mut reader: &[u8] = data;
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic).map_err(truncated)?;
        let version = reader.read_i32().map_err(truncated)?;

        let format = match magic {
            IBSP_MAGIC => FormatVersion::IBsp,
            RBSP_MAGIC => FormatVersion::RBsp,
            _ => return Err(BspError::UnsupportedFormat { magic, version }),
        };

        let mut lumps = [Lump::default(); LUMP_COUNT];
        for lump in lumps.iter_mut() {
            *lump = Lump::read(&mut reader).map_err(truncated)?;
        }

        Ok(MapHeader {
            format,
            version,
            lumps,
        })
    }

    pub fn lump(&self, lump_type: LumpType) -> Lump {
        self.lumps[lump_type as usize]
    }
}
