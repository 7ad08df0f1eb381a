use super::error::AmqpCodecError;
use super::method::MethodId;

/// Big-endian reader over a caller-owned slice. Offsets are absolute
/// positions within `data`.
pub(crate) struct ReadBuffer<'buffer> {
    data: &'buffer [u8],
    offset: usize,
    method: Option<MethodId>,
}

impl<'buffer> ReadBuffer<'buffer> {
    pub fn new(data: &'buffer [u8], offset: usize) -> ReadBuffer<'buffer> {
        Self { data, offset, method: None }
    }

    pub fn for_method(data: &'buffer [u8], offset: usize, method: MethodId) -> ReadBuffer<'buffer> {
        Self { data, offset, method: Some(method) }
    }

    pub fn position(&self) -> usize {
        self.offset
    }

    pub fn method(&self) -> Option<MethodId> {
        self.method
    }

    pub fn bytes_available(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// Reader over the next `length` bytes; the outer reader is not advanced.
    pub fn limited(&self, length: usize) -> Result<ReadBuffer<'buffer>, AmqpCodecError> {
        self.check(length)?;
        Ok(ReadBuffer {
            data: &self.data[..self.offset + length],
            offset: self.offset,
            method: self.method,
        })
    }

    pub fn skip(&mut self, length: usize) -> Result<(), AmqpCodecError> {
        self.check(length)?;
        self.offset += length;
        Ok(())
    }

    fn check(&self, needed: usize) -> Result<(), AmqpCodecError> {
        let available = self.bytes_available();
        if available < needed {
            return Err(AmqpCodecError::BufferTooShort {
                method: self.method,
                offset: self.offset,
                needed,
                available,
            });
        }

        Ok(())
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], AmqpCodecError> {
        self.check(N)?;

        let mut buffer: [u8; N] = [0; N];
        buffer.copy_from_slice(&self.data[self.offset..self.offset + N]);
        self.offset += N;

        Ok(buffer)
    }

    pub fn read_u8(&mut self) -> Result<u8, AmqpCodecError> {
        Ok(u8::from_be_bytes(self.take()?))
    }

    pub fn read_i8(&mut self) -> Result<i8, AmqpCodecError> {
        Ok(i8::from_be_bytes(self.take()?))
    }

    pub fn read_u16(&mut self) -> Result<u16, AmqpCodecError> {
        Ok(u16::from_be_bytes(self.take()?))
    }

    pub fn read_i16(&mut self) -> Result<i16, AmqpCodecError> {
        Ok(i16::from_be_bytes(self.take()?))
    }

    pub fn read_u32(&mut self) -> Result<u32, AmqpCodecError> {
        Ok(u32::from_be_bytes(self.take()?))
    }

    pub fn read_i32(&mut self) -> Result<i32, AmqpCodecError> {
        Ok(i32::from_be_bytes(self.take()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, AmqpCodecError> {
        Ok(u64::from_be_bytes(self.take()?))
    }

    pub fn read_i64(&mut self) -> Result<i64, AmqpCodecError> {
        Ok(i64::from_be_bytes(self.take()?))
    }

    pub fn read_f32(&mut self) -> Result<f32, AmqpCodecError> {
        Ok(f32::from_be_bytes(self.take()?))
    }

    pub fn read_f64(&mut self) -> Result<f64, AmqpCodecError> {
        Ok(f64::from_be_bytes(self.take()?))
    }

    pub fn read_bytes(&mut self, length: usize) -> Result<&'buffer [u8], AmqpCodecError> {
        self.check(length)?;

        let data = self.data;
        let result = &data[self.offset..self.offset + length];
        self.offset += length;

        Ok(result)
    }

    pub fn read_short_string(&mut self) -> Result<String, AmqpCodecError> {
        let length = self.read_u8()? as usize;
        let start = self.offset;
        let bytes = self.read_bytes(length)?;

        String::from_utf8(bytes.to_vec())
            .map_err(|_| AmqpCodecError::InvalidString { method: self.method, offset: start })
    }

    pub fn read_long_bytes(&mut self) -> Result<Vec<u8>, AmqpCodecError> {
        let length = self.read_u32()? as usize;
        Ok(self.read_bytes(length)?.to_vec())
    }
}

/// Big-endian writer into a caller-owned slice, starting at `offset`.
pub(crate) struct WriteBuffer<'buffer> {
    data: &'buffer mut [u8],
    offset: usize,
}

impl<'buffer> WriteBuffer<'buffer> {
    pub fn new(data: &'buffer mut [u8], offset: usize) -> WriteBuffer<'buffer> {
        Self { data, offset }
    }

    pub fn position(&self) -> usize {
        self.offset
    }

    fn check(&self, needed: usize) -> Result<(), AmqpCodecError> {
        let available = self.data.len().saturating_sub(self.offset);
        if available < needed {
            return Err(AmqpCodecError::BufferTooShort {
                method: None,
                offset: self.offset,
                needed,
                available,
            });
        }

        Ok(())
    }

    pub fn write_bytes(&mut self, value: &[u8]) -> Result<(), AmqpCodecError> {
        self.check(value.len())?;

        self.data[self.offset..self.offset + value.len()].copy_from_slice(value);
        self.offset += value.len();

        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), AmqpCodecError> {
        self.write_bytes(&value.to_be_bytes())
    }

    pub fn write_i8(&mut self, value: i8) -> Result<(), AmqpCodecError> {
        self.write_bytes(&value.to_be_bytes())
    }

    pub fn write_u16(&mut self, value: u16) -> Result<(), AmqpCodecError> {
        self.write_bytes(&value.to_be_bytes())
    }

    pub fn write_i16(&mut self, value: i16) -> Result<(), AmqpCodecError> {
        self.write_bytes(&value.to_be_bytes())
    }

    pub fn write_u32(&mut self, value: u32) -> Result<(), AmqpCodecError> {
        self.write_bytes(&value.to_be_bytes())
    }

    pub fn write_i32(&mut self, value: i32) -> Result<(), AmqpCodecError> {
        self.write_bytes(&value.to_be_bytes())
    }

    pub fn write_u64(&mut self, value: u64) -> Result<(), AmqpCodecError> {
        self.write_bytes(&value.to_be_bytes())
    }

    pub fn write_i64(&mut self, value: i64) -> Result<(), AmqpCodecError> {
        self.write_bytes(&value.to_be_bytes())
    }

    pub fn write_f32(&mut self, value: f32) -> Result<(), AmqpCodecError> {
        self.write_bytes(&value.to_be_bytes())
    }

    pub fn write_f64(&mut self, value: f64) -> Result<(), AmqpCodecError> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Length must already be validated to fit in one octet.
    pub fn write_short_string(&mut self, value: &str) -> Result<(), AmqpCodecError> {
        self.write_u8(value.len() as u8)?;
        self.write_bytes(value.as_bytes())
    }

    /// Length must already be validated to fit in four octets.
    pub fn write_long_bytes(&mut self, value: &[u8]) -> Result<(), AmqpCodecError> {
        self.write_u32(value.len() as u32)?;
        self.write_bytes(value)
    }

    /// Overwrites four bytes at `offset` with `value`, used to fill in
    /// length placeholders.
    pub fn patch_u32(&mut self, offset: usize, value: u32) {
        self.data[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_network_order() {
        let data = [0x00, 0x3C, 0x00, 0x00, 0x00, 0x05];
        let mut reader = ReadBuffer::new(&data, 0);

        assert_eq!(reader.read_u16().unwrap(), 60);
        assert_eq!(reader.read_u32().unwrap(), 5);
        assert_eq!(reader.bytes_available(), 0);
    }

    #[test]
    fn read_past_end_reports_offset() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = ReadBuffer::new(&data, 1);

        let error = reader.read_u32().unwrap_err();
        assert_eq!(error, AmqpCodecError::BufferTooShort { method: None, offset: 1, needed: 4, available: 2 });
    }

    #[test]
    fn read_short_string_rejects_bad_utf8() {
        let data = [0x02, 0xC3, 0x28];
        let mut reader = ReadBuffer::for_method(&data, 0, MethodId::new(60, 31));

        let error = reader.read_short_string().unwrap_err();
        assert_eq!(error, AmqpCodecError::InvalidString { method: Some(MethodId::new(60, 31)), offset: 1 });
    }

    #[test]
    fn limited_reader_stops_at_boundary() {
        let data = [0x00, 0x01, 0x00, 0x02];
        let reader = ReadBuffer::new(&data, 0);
        let mut limited = reader.limited(2).unwrap();

        assert_eq!(limited.read_u16().unwrap(), 1);
        assert!(limited.read_u8().is_err());
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn write_and_patch() {
        let mut data = [0u8; 8];
        let mut writer = WriteBuffer::new(&mut data, 2);

        writer.write_u32(0).unwrap();
        writer.write_u16(0xABCD).unwrap();
        writer.patch_u32(2, 7);

        assert_eq!(writer.position(), 8);
        assert!(writer.write_u8(1).is_err());
        assert_eq!(data, [0, 0, 0, 0, 0, 7, 0xAB, 0xCD]);
    }
}
