use crate::error::BspError;
use crate::lump_data::LumpType;
use crate::read_util::PrimitiveRead;
use std::io::{Read, Result as IOResult};

/// A lump descriptor from the header table: one byte range in the file
/// image holding one homogeneous record array. A `length` of zero means
/// the lump is absent, which is valid.
#[derive(Copy, Clone, Debug, Default)]
pub struct Lump {
    pub offset: u32,
    pub length: u32,
}

impl Lump {
    pub fn read(reader: &mut dyn Read) -> IOResult<Self> {
        let offset = reader.read_u32()?;
        let length = reader.read_u32()?;

        Ok(Self { offset, length })
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The lump's byte range within `data`, checked against the buffer
    /// length. Consumers never read outside the returned slice. An empty
    /// lump slices empty no matter where its offset points; writers park
    /// absent lumps at arbitrary offsets.
    pub fn slice<'a>(&self, data: &'a [u8], lump_type: LumpType) -> Result<&'a [u8], BspError> {
        if self.is_empty() {
            return Ok(&[]);
        }
        let offset = self.offset as usize;
        let length = self.length as usize;
        let out_of_bounds = BspError::OutOfBounds {
            lump: lump_type,
            offset,
            length,
            available: data.len(),
        };
        let end = offset.checked_add(length).ok_or_else(|| out_of_bounds.clone())?;
        if end > data.len() {
            return Err(out_of_bounds);
        }
        Ok(&data[offset..end])
    }
}
