use nalgebra::{Vector2, Vector3};
use std::io::{Read, Result as IOResult};

/// Little-endian primitive reads, the wire encoding of every BSP lump.
pub trait PrimitiveRead {
    fn read_u8(&mut self) -> IOResult<u8>;
    fn read_u32(&mut self) -> IOResult<u32>;
    fn read_i32(&mut self) -> IOResult<i32>;
    fn read_f32(&mut self) -> IOResult<f32>;
}

impl<T: Read + ?Sized> PrimitiveRead for T {
    fn read_u8(&mut self) -> IOResult<u8> {
        let mut buffer = [0u8; 1];
        self.read_exact(&mut buffer)?;
        Ok(buffer[0])
    }

    fn read_u32(&mut self) -> IOResult<u32> {
        let mut buffer = [0u8; 4];
        self.read_exact(&mut buffer)?;
        Ok(u32::from_le_bytes(buffer))
    }

    fn read_i32(&mut self) -> IOResult<i32> {
        let mut buffer = [0u8; 4];
        self.read_exact(&mut buffer)?;
        Ok(i32::from_le_bytes(buffer))
    }

    fn read_f32(&mut self) -> IOResult<f32> {
        let mut buffer = [0u8; 4];
        self.read_exact(&mut buffer)?;
        Ok(f32::from_le_bytes(buffer))
    }
}

/// Composite vector reads on top of [`PrimitiveRead`].
pub trait VectorRead {
    fn read_vec2(&mut self) -> IOResult<Vector2<f32>>;
    fn read_vec3(&mut self) -> IOResult<Vector3<f32>>;
    fn read_vec3i(&mut self) -> IOResult<[i32; 3]>;
}

impl<T: Read + ?Sized> VectorRead for T {
    fn read_vec2(&mut self) -> IOResult<Vector2<f32>> {
        Ok(Vector2::new(self.read_f32()?, self.read_f32()?))
    }

    fn read_vec3(&mut self) -> IOResult<Vector3<f32>> {
        Ok(Vector3::new(
            self.read_f32()?,
            self.read_f32()?,
            self.read_f32()?,
        ))
    }

    fn read_vec3i(&mut self) -> IOResult<[i32; 3]> {
        Ok([self.read_i32()?, self.read_i32()?, self.read_i32()?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_are_little_endian() {
        let data = [0x01u8, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff];
        let mut reader: &[u8] = &data;
        assert_eq!(reader.read_u32().unwrap(), 1);
        assert_eq!(reader.read_i32().unwrap(), -1);
    }

    #[test]
    fn vec3_reads_three_floats() {
        let mut data = Vec::new();
        for f in &[1.0f32, 2.0, 3.0] {
            data.extend_from_slice(&f.to_le_bytes());
        }
        let mut reader: &[u8] = &data;
        let v = reader.read_vec3().unwrap();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    }
}
