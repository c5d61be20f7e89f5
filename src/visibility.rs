use crate::error::BspError;
use crate::lump_data::LumpType;
use crate::read_util::PrimitiveRead;

/// The potential-visibility-set bitmap: one `bytes_per_cluster`-wide bit
/// row per cluster. An absent lump (zero length) is valid and common for
/// maps without precomputed visibility.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisData {
    pub num_clusters: u32,
    pub bytes_per_cluster: u32,
    pub bits: Box<[u8]>,
}

impl VisData {
    pub(crate) fn read(bytes: &[u8]) -> Result<VisData, BspError> {
        if bytes.is_empty() {
            return Ok(VisData::default());
        }

        let short_lump = |needed: usize| BspError::OutOfBounds {
            lump: LumpType::VisData,
            offset: 8,
            length: needed,
            available: bytes.len(),
        };

        let mut reader: &[u8] = bytes;
        let num_clusters = reader.read_u32().map_err(|_| short_lump(0))?;
        let bytes_per_cluster = reader.read_u32().map_err(|_| short_lump(0))?;

        let matrix_len = (num_clusters as usize)
            .checked_mul(bytes_per_cluster as usize)
            .ok_or_else(|| short_lump(usize::MAX))?;
        if reader.len() < matrix_len {
            return Err(short_lump(matrix_len));
        }

        Ok(VisData {
            num_clusters,
            bytes_per_cluster,
            bits: reader[..matrix_len].to_vec().into_boxed_slice(),
        })
    }

    /// Whether cluster `to` is visible from cluster `from`. With no PVS
    /// data everything is visible; out-of-range clusters are not.
    pub fn cluster_visible(&self, from: u32, to: u32) -> bool {
        if self.bits.is_empty() {
            return true;
        }
        if from >= self.num_clusters || to >= self.num_clusters {
            return false;
        }
        let index = (from * self.bytes_per_cluster + (to >> 3)) as usize;
        self.bits[index] & (1 << (to & 7)) != 0
    }
}
