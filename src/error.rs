use crate::lump_data::LumpType;
use std::error::Error;
use std::fmt;

/// Everything that can go wrong while decoding a map or tessellating a
/// patch. All failures are terminal for the call that produced them; a
/// failed decode never replaces previously loaded data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BspError {
    /// The buffer is too small to hold the header and lump table.
    TruncatedBuffer { needed: usize, available: usize },
    /// The header magic does not name a known format generation.
    UnsupportedFormat { magic: [u8; 4], version: i32 },
    /// A lump's contents contradict its record layout.
    MalformedLump {
        lump: LumpType,
        reason: &'static str,
    },
    /// A lump byte range, index or record range points outside its target.
    OutOfBounds {
        lump: LumpType,
        offset: usize,
        length: usize,
        available: usize,
    },
    /// A caller-supplied argument violates an operation's contract.
    InvalidArgument { reason: &'static str },
}

impl fmt::Display for BspError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BspError::TruncatedBuffer { needed, available } => write!(
                f,
                "buffer truncated: need {} bytes for header and lump table, have {}",
                needed, available
            ),
            BspError::UnsupportedFormat { magic, version } => write!(
                f,
                "unsupported format: magic {:?}, version {}",
                String::from_utf8_lossy(magic),
                version
            ),
            BspError::MalformedLump { lump, reason } => {
                write!(f, "malformed {:?} lump: {}", lump, reason)
            }
            BspError::OutOfBounds {
                lump,
                offset,
                length,
                available,
            } => write!(
                f,
                "{:?} lump range out of bounds: {}..{} exceeds {}",
                lump,
                offset,
                offset.saturating_add(*length),
                available
            ),
            BspError::InvalidArgument { reason } => write!(f, "invalid argument: {}", reason),
        }
    }
}

impl Error for BspError {}
