use super::buffer::{ReadBuffer, WriteBuffer};
use super::config::CodecConfig;
use super::defines::*;
use super::error::AmqpCodecError;

#[derive(Debug, Clone, PartialEq)]
pub enum AmqpValue {
    Void,
    Bool(bool),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    Float(f32),
    Double(f64),
    Decimal(u8, u32),                               // scale, value
    LongString(Vec<u8>),
    ByteArray(Vec<u8>),
    FieldArray(Vec<AmqpValue>),
    Timestamp(u64),
    FieldTable(FieldTable),
}

impl AmqpValue {
    pub fn type_tag(&self) -> u8 {
        match self {
            AmqpValue::Void => AMQP_TYPE_VOID,
            AmqpValue::Bool(_) => AMQP_TYPE_BOOL,
            AmqpValue::I8(_) => AMQP_TYPE_I8,
            AmqpValue::U8(_) => AMQP_TYPE_U8,
            AmqpValue::I16(_) => AMQP_TYPE_I16,
            AmqpValue::U16(_) => AMQP_TYPE_U16,
            AmqpValue::I32(_) => AMQP_TYPE_I32,
            AmqpValue::U32(_) => AMQP_TYPE_U32,
            AmqpValue::I64(_) => AMQP_TYPE_I64,
            AmqpValue::Float(_) => AMQP_TYPE_FLOAT,
            AmqpValue::Double(_) => AMQP_TYPE_DOUBLE,
            AmqpValue::Decimal(_, _) => AMQP_TYPE_DECIMAL,
            AmqpValue::LongString(_) => AMQP_TYPE_LONG_STRING,
            AmqpValue::ByteArray(_) => AMQP_TYPE_BYTE_ARRAY,
            AmqpValue::FieldArray(_) => AMQP_TYPE_FIELD_ARRAY,
            AmqpValue::Timestamp(_) => AMQP_TYPE_TIMESTAMP,
            AmqpValue::FieldTable(_) => AMQP_TYPE_FIELD_TABLE,
        }
    }

    /// Encoded size of the value, excluding the type tag.
    pub(crate) fn measure(&self) -> Result<usize, String> {
        match self {
            AmqpValue::Void => Ok(0),
            AmqpValue::Bool(_) | AmqpValue::I8(_) | AmqpValue::U8(_) => Ok(1),
            AmqpValue::I16(_) | AmqpValue::U16(_) => Ok(2),
            AmqpValue::I32(_) | AmqpValue::U32(_) | AmqpValue::Float(_) => Ok(4),
            AmqpValue::I64(_) | AmqpValue::Double(_) | AmqpValue::Timestamp(_) => Ok(8),
            AmqpValue::Decimal(_, _) => Ok(5),
            AmqpValue::LongString(value) | AmqpValue::ByteArray(value) => long_size(value.len()),
            AmqpValue::FieldArray(values) => {
                let mut size = 0usize;
                for value in values {
                    size += 1 + value.measure()?;
                }
                long_size(size)
            },
            AmqpValue::FieldTable(table) => table.measure(),
        }
    }

    fn write(&self, target: &mut WriteBuffer) -> Result<(), AmqpCodecError> {
        target.write_u8(self.type_tag())?;

        match self {
            AmqpValue::Void => Ok(()),
            AmqpValue::Bool(value) => target.write_u8(*value as u8),
            AmqpValue::I8(value) => target.write_i8(*value),
            AmqpValue::U8(value) => target.write_u8(*value),
            AmqpValue::I16(value) => target.write_i16(*value),
            AmqpValue::U16(value) => target.write_u16(*value),
            AmqpValue::I32(value) => target.write_i32(*value),
            AmqpValue::U32(value) => target.write_u32(*value),
            AmqpValue::I64(value) => target.write_i64(*value),
            AmqpValue::Float(value) => target.write_f32(*value),
            AmqpValue::Double(value) => target.write_f64(*value),
            AmqpValue::Decimal(scale, value) => {
                target.write_u8(*scale)?;
                target.write_u32(*value)
            },
            AmqpValue::LongString(value) | AmqpValue::ByteArray(value) => target.write_long_bytes(value),
            AmqpValue::Timestamp(value) => target.write_u64(*value),
            AmqpValue::FieldArray(values) => {
                // size placeholder, to be filled later
                let size_offset = target.position();
                target.write_u32(0)?;

                for value in values {
                    value.write(target)?;
                }

                let payload_size = (target.position() - size_offset - 4) as u32;
                target.patch_u32(size_offset, payload_size);
                Ok(())
            },
            AmqpValue::FieldTable(table) => table.write(target),
        }
    }

    fn read(source: &mut ReadBuffer, tag: u8, config: &CodecConfig, depth: usize) -> Result<AmqpValue, AmqpCodecError> {
        match tag {
            AMQP_TYPE_VOID => Ok(AmqpValue::Void),
            AMQP_TYPE_BOOL => Ok(AmqpValue::Bool(source.read_u8()? > 0)),
            AMQP_TYPE_I8 => Ok(AmqpValue::I8(source.read_i8()?)),
            AMQP_TYPE_U8 => Ok(AmqpValue::U8(source.read_u8()?)),
            AMQP_TYPE_I16 => Ok(AmqpValue::I16(source.read_i16()?)),
            AMQP_TYPE_U16 => Ok(AmqpValue::U16(source.read_u16()?)),
            AMQP_TYPE_I32 => Ok(AmqpValue::I32(source.read_i32()?)),
            AMQP_TYPE_U32 => Ok(AmqpValue::U32(source.read_u32()?)),
            AMQP_TYPE_I64 => Ok(AmqpValue::I64(source.read_i64()?)),
            AMQP_TYPE_FLOAT => Ok(AmqpValue::Float(source.read_f32()?)),
            AMQP_TYPE_DOUBLE => Ok(AmqpValue::Double(source.read_f64()?)),
            AMQP_TYPE_DECIMAL => {
                let scale = source.read_u8()?;
                let value = source.read_u32()?;
                Ok(AmqpValue::Decimal(scale, value))
            },
            AMQP_TYPE_LONG_STRING => Ok(AmqpValue::LongString(source.read_long_bytes()?)),
            AMQP_TYPE_BYTE_ARRAY => Ok(AmqpValue::ByteArray(source.read_long_bytes()?)),
            AMQP_TYPE_TIMESTAMP => Ok(AmqpValue::Timestamp(source.read_u64()?)),
            AMQP_TYPE_FIELD_ARRAY => Ok(AmqpValue::FieldArray(read_array(source, config, depth + 1)?)),
            AMQP_TYPE_FIELD_TABLE => Ok(AmqpValue::FieldTable(FieldTable::read(source, config, depth + 1)?)),
            _ => Err(AmqpCodecError::InvalidFieldType {
                method: source.method(),
                offset: source.position() - 1,
                tag,
            }),
        }
    }
}

impl From<bool> for AmqpValue {
    fn from(value: bool) -> Self {
        AmqpValue::Bool(value)
    }
}

impl From<i32> for AmqpValue {
    fn from(value: i32) -> Self {
        AmqpValue::I32(value)
    }
}

impl From<i64> for AmqpValue {
    fn from(value: i64) -> Self {
        AmqpValue::I64(value)
    }
}

impl From<&str> for AmqpValue {
    fn from(value: &str) -> Self {
        AmqpValue::LongString(value.as_bytes().to_vec())
    }
}

impl From<String> for AmqpValue {
    fn from(value: String) -> Self {
        AmqpValue::LongString(value.into_bytes())
    }
}

impl From<FieldTable> for AmqpValue {
    fn from(value: FieldTable) -> Self {
        AmqpValue::FieldTable(value)
    }
}

impl From<Vec<AmqpValue>> for AmqpValue {
    fn from(value: Vec<AmqpValue>) -> Self {
        AmqpValue::FieldArray(value)
    }
}

/// AMQP field table. Entries keep insertion order so encoding is reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldTable {
    entries: Vec<(String, AmqpValue)>,
}

impl FieldTable {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Inserts or replaces `key`. A replaced entry keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AmqpValue>) -> Option<AmqpValue> {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&AmqpValue> {
        self.entries.iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn remove(&mut self, key: &str) -> Option<AmqpValue> {
        let index = self.entries.iter().position(|(existing, _)| existing == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AmqpValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Total encoded size, including the 4-byte length prefix.
    pub fn encoded_size(&self) -> Result<usize, AmqpCodecError> {
        self.measure().map_err(|reason| AmqpCodecError::FieldEncoding {
            method: "field-table",
            field: "-",
            reason,
        })
    }

    pub fn encode(&self) -> Result<Vec<u8>, AmqpCodecError> {
        let mut result = vec![0u8; self.encoded_size()?];
        let mut target = WriteBuffer::new(&mut result, 0);
        self.write(&mut target)?;

        Ok(result)
    }

    /// Decodes a table starting at `offset`, returning it with the number of
    /// bytes consumed (length prefix included).
    pub fn decode(bytes: &[u8], offset: usize) -> Result<(FieldTable, usize), AmqpCodecError> {
        FieldTable::decode_with(bytes, offset, &CodecConfig::default())
    }

    pub fn decode_with(bytes: &[u8], offset: usize, config: &CodecConfig) -> Result<(FieldTable, usize), AmqpCodecError> {
        let mut source = ReadBuffer::new(bytes, offset);
        let table = FieldTable::read(&mut source, config, 0)?;

        Ok((table, source.position() - offset))
    }

    pub(crate) fn measure(&self) -> Result<usize, String> {
        let mut size = 0usize;
        for (key, value) in &self.entries {
            if key.len() > u8::MAX as usize {
                return Err(format!("table key of {} bytes exceeds 255", key.len()));
            }

            size += 1 + key.len() + 1 + value.measure()?;
        }

        long_size(size)
    }

    pub(crate) fn write(&self, target: &mut WriteBuffer) -> Result<(), AmqpCodecError> {
        // size placeholder, to be filled later
        let size_offset = target.position();
        target.write_u32(0)?;

        for (key, value) in &self.entries {
            target.write_short_string(key)?;
            value.write(target)?;
        }

        // fill the real size
        let payload_size = (target.position() - size_offset - 4) as u32;
        target.patch_u32(size_offset, payload_size);

        Ok(())
    }

    pub(crate) fn read(source: &mut ReadBuffer, config: &CodecConfig, depth: usize) -> Result<FieldTable, AmqpCodecError> {
        let start = source.position();
        if depth > config.max_table_depth {
            return Err(malformed(source, start, format!("nesting exceeds {} levels", config.max_table_depth)));
        }

        let bytes_to_read = source.read_u32()? as usize;
        let mut entries = source.limited(bytes_to_read).map_err(|_| {
            malformed(source, start, format!("declared length {} exceeds {} available bytes", bytes_to_read, source.bytes_available()))
        })?;

        let mut result = FieldTable::new();
        while entries.bytes_available() > 0 {
            let key = entries.read_short_string().map_err(overrun)?;
            let value_type = entries.read_u8().map_err(overrun)?;
            let value = AmqpValue::read(&mut entries, value_type, config, depth).map_err(overrun)?;

            result.entries.push((key, value));
        }

        source.skip(bytes_to_read)?;
        Ok(result)
    }
}

impl<K: Into<String>, V: Into<AmqpValue>> FromIterator<(K, V)> for FieldTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut result = FieldTable::new();
        for (key, value) in iter {
            result.insert(key, value);
        }

        result
    }
}

fn read_array(source: &mut ReadBuffer, config: &CodecConfig, depth: usize) -> Result<Vec<AmqpValue>, AmqpCodecError> {
    let start = source.position();
    if depth > config.max_table_depth {
        return Err(malformed(source, start, format!("nesting exceeds {} levels", config.max_table_depth)));
    }

    let bytes_to_read = source.read_u32()? as usize;
    let mut values = source.limited(bytes_to_read).map_err(|_| {
        malformed(source, start, format!("declared array length {} exceeds {} available bytes", bytes_to_read, source.bytes_available()))
    })?;

    let mut result = Vec::new();
    while values.bytes_available() > 0 {
        let value_type = values.read_u8().map_err(overrun)?;
        result.push(AmqpValue::read(&mut values, value_type, config, depth).map_err(overrun)?);
    }

    source.skip(bytes_to_read)?;
    Ok(result)
}

fn long_size(size: usize) -> Result<usize, String> {
    if size > u32::MAX as usize {
        return Err(format!("{} bytes do not fit a 32-bit length", size));
    }

    Ok(4 + size)
}

fn malformed(source: &ReadBuffer, offset: usize, reason: String) -> AmqpCodecError {
    AmqpCodecError::MalformedTable { method: source.method(), offset, reason }
}

// A short read inside a length-delimited region means the entry crossed the
// declared boundary.
fn overrun(error: AmqpCodecError) -> AmqpCodecError {
    match error {
        AmqpCodecError::BufferTooShort { method, offset, needed, available } => AmqpCodecError::MalformedTable {
            method,
            offset,
            reason: format!("entry needs {} bytes but only {} remain before the declared end", needed, available),
        },
        other => other,
    }
}
