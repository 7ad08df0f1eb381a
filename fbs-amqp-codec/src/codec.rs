//! Descriptor driven pack/unpack shared by every method type.

use tracing::trace;

use super::bits::BitPacker;
use super::buffer::{ReadBuffer, WriteBuffer};
use super::config::CodecConfig;
use super::defines::AMQP_METHOD_HEADER_SIZE;
use super::error::AmqpCodecError;
use super::field::{FieldRef, FieldSpec, FieldValue, WireType};
use super::method::{MethodId, MethodSpec};
use super::table::FieldTable;

/// Exact payload size, class/method header included. Also validates every
/// value against its declared wire type.
pub(crate) fn payload_size(spec: &MethodSpec, fields: &[FieldRef]) -> Result<usize, AmqpCodecError> {
    check_shape(spec, fields)?;

    let mut size = AMQP_METHOD_HEADER_SIZE;
    let mut bit_run = 0;

    for (field, value) in spec.fields.iter().zip(fields) {
        if let FieldRef::Bit(_) = value {
            bit_run += 1;
            continue;
        }

        size += BitPacker::packed_len(bit_run);
        bit_run = 0;
        size += field_size(spec, field, value)?;
    }

    Ok(size + BitPacker::packed_len(bit_run))
}

/// Writes the payload into `buffer` at `offset`. Nothing is written unless
/// every value is valid and the whole payload fits.
pub(crate) fn pack(spec: &MethodSpec, fields: &[FieldRef], buffer: &mut [u8], offset: usize) -> Result<usize, AmqpCodecError> {
    let size = payload_size(spec, fields)?;

    let available = buffer.len().saturating_sub(offset);
    if available < size {
        return Err(AmqpCodecError::BufferTooShort {
            method: Some(spec.id),
            offset,
            needed: size,
            available,
        });
    }

    let mut target = WriteBuffer::new(buffer, offset);
    target.write_u16(spec.id.class_id)?;
    target.write_u16(spec.id.method_id)?;

    let mut bits = Vec::new();
    for value in fields {
        if let FieldRef::Bit(bit) = value {
            bits.push(*bit);
            continue;
        }

        flush_bits(&mut target, &mut bits)?;
        write_field(&mut target, value)?;
    }
    flush_bits(&mut target, &mut bits)?;

    trace!(method = spec.name, size, "packed method");
    Ok(target.position())
}

/// Decoded field values, each with the payload offset it was read from.
/// Bits of one run share the offset of their octet run.
pub(crate) struct Unpacked {
    pub values: Vec<FieldValue>,
    pub offsets: Vec<usize>,
}

/// Payload offset of `field`, falling back to the start of the arguments.
pub(crate) fn field_offset(spec: &MethodSpec, offsets: &[usize], field: &str) -> usize {
    spec.fields.iter()
        .position(|candidate| candidate.name == field)
        .and_then(|index| offsets.get(index).copied())
        .unwrap_or(AMQP_METHOD_HEADER_SIZE)
}

/// Decodes the fields of `spec` from a payload whose first four bytes are
/// the class/method header.
pub(crate) fn unpack(spec: &MethodSpec, buffer: &[u8], config: &CodecConfig) -> Result<Unpacked, AmqpCodecError> {
    let mut source = ReadBuffer::for_method(buffer, 0, spec.id);

    let id = MethodId::new(source.read_u16()?, source.read_u16()?);
    if id != spec.id {
        return Err(AmqpCodecError::UnknownMethod {
            class_id: id.class_id,
            method_id: id.method_id,
            offset: 0,
        });
    }

    let mut result = Vec::with_capacity(spec.fields.len());
    let mut offsets = Vec::with_capacity(spec.fields.len());
    let mut index = 0;

    while index < spec.fields.len() {
        let field = &spec.fields[index];

        if field.wire_type == WireType::Bit {
            let bit_run = spec.fields[index..].iter()
                .take_while(|field| field.wire_type == WireType::Bit)
                .count();

            let start = source.position();
            let needed = BitPacker::packed_len(bit_run);
            let packed = source.read_bytes(needed)?;
            let bits = BitPacker::unpack_all(packed, bit_run).ok_or(AmqpCodecError::BufferTooShort {
                method: Some(spec.id),
                offset: start,
                needed,
                available: packed.len(),
            })?;
            result.extend(bits.into_iter().map(FieldValue::Bit));
            offsets.resize(offsets.len() + bit_run, start);

            index += bit_run;
            continue;
        }

        offsets.push(source.position());
        result.push(read_field(&mut source, field.wire_type, config)?);
        index += 1;
    }

    trace!(method = spec.name, size = source.position(), "unpacked method");
    Ok(Unpacked { values: result, offsets })
}

fn check_shape(spec: &MethodSpec, fields: &[FieldRef]) -> Result<(), AmqpCodecError> {
    if fields.len() != spec.fields.len() {
        return Err(AmqpCodecError::FieldEncoding {
            method: spec.name,
            field: "-",
            reason: format!("expected {} fields, got {}", spec.fields.len(), fields.len()),
        });
    }

    for (field, value) in spec.fields.iter().zip(fields) {
        if field.wire_type != value.wire_type() {
            return Err(AmqpCodecError::FieldEncoding {
                method: spec.name,
                field: field.name,
                reason: format!("expected {}, got {}", field.wire_type, value.wire_type()),
            });
        }
    }

    Ok(())
}

fn field_size(spec: &MethodSpec, field: &FieldSpec, value: &FieldRef) -> Result<usize, AmqpCodecError> {
    let invalid = |reason: String| AmqpCodecError::FieldEncoding {
        method: spec.name,
        field: field.name,
        reason,
    };

    match value {
        FieldRef::Bit(_) => Ok(1),
        FieldRef::Octet(_) => Ok(1),
        FieldRef::Short(_) => Ok(2),
        FieldRef::Long(_) => Ok(4),
        FieldRef::LongLong(_) => Ok(8),
        FieldRef::ShortStr(value) => {
            if value.len() > u8::MAX as usize {
                return Err(invalid(format!("shortstr of {} bytes exceeds 255", value.len())));
            }
            Ok(1 + value.len())
        },
        FieldRef::LongStr(value) => {
            if value.len() > u32::MAX as usize {
                return Err(invalid(format!("longstr of {} bytes exceeds 32-bit length", value.len())));
            }
            Ok(4 + value.len())
        },
        FieldRef::Table(table) => table.measure().map_err(invalid),
    }
}

fn flush_bits(target: &mut WriteBuffer, bits: &mut Vec<bool>) -> Result<(), AmqpCodecError> {
    if bits.is_empty() {
        return Ok(());
    }

    target.write_bytes(&BitPacker::pack(bits))?;
    bits.clear();

    Ok(())
}

fn write_field(target: &mut WriteBuffer, value: &FieldRef) -> Result<(), AmqpCodecError> {
    match value {
        FieldRef::Bit(value) => target.write_bytes(&BitPacker::pack(&[*value])),
        FieldRef::Octet(value) => target.write_u8(*value),
        FieldRef::Short(value) => target.write_u16(*value),
        FieldRef::Long(value) => target.write_u32(*value),
        FieldRef::LongLong(value) => target.write_u64(*value),
        FieldRef::ShortStr(value) => target.write_short_string(value),
        FieldRef::LongStr(value) => target.write_long_bytes(value),
        FieldRef::Table(table) => table.write(target),
    }
}

fn read_field(source: &mut ReadBuffer, wire_type: WireType, config: &CodecConfig) -> Result<FieldValue, AmqpCodecError> {
    match wire_type {
        WireType::Bit => Ok(FieldValue::Bit(source.read_u8()? & 1 != 0)),
        WireType::Octet => Ok(FieldValue::Octet(source.read_u8()?)),
        WireType::Short => Ok(FieldValue::Short(source.read_u16()?)),
        WireType::Long => Ok(FieldValue::Long(source.read_u32()?)),
        WireType::LongLong => Ok(FieldValue::LongLong(source.read_u64()?)),
        WireType::ShortStr => Ok(FieldValue::ShortStr(source.read_short_string()?)),
        WireType::LongStr => Ok(FieldValue::LongStr(source.read_long_bytes()?)),
        WireType::Table => Ok(FieldValue::Table(FieldTable::read(source, config, 0)?)),
    }
}
