use tracing::trace;

use super::buffer::{ReadBuffer, WriteBuffer};
use super::config::CodecConfig;
use super::defines::*;
use super::error::AmqpCodecError;
use super::method::Method;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub frame_type: u8,
    pub channel: u16,
    pub size: u32,
}

impl FrameHeader {
    pub fn parse(bytes: &[u8]) -> Result<FrameHeader, AmqpCodecError> {
        let mut source = ReadBuffer::new(bytes, 0);

        Ok(FrameHeader {
            frame_type: source.read_u8()?,
            channel: source.read_u16()?,
            size: source.read_u32()?,
        })
    }
}

/// A method together with the channel it travels on.
#[derive(Debug, Clone)]
pub struct MethodFrame {
    pub channel: u16,
    pub method: Box<dyn Method>,
}

impl MethodFrame {
    pub fn new(channel: u16, method: impl Method) -> Self {
        Self { channel, method: Box::new(method) }
    }

    pub fn downcast_ref<T: Method>(&self) -> Option<&T> {
        self.method.downcast_ref::<T>()
    }

    /// Full frame: type, channel, size, payload and the end octet.
    pub fn encode(&self, config: &CodecConfig) -> Result<Vec<u8>, AmqpCodecError> {
        let payload_size = self.method.payload_size()?;
        let frame_size = payload_size + AMQP_FRAME_OVERHEAD;

        if payload_size > u32::MAX as usize || (config.frame_max != 0 && frame_size > config.frame_max as usize) {
            return Err(AmqpCodecError::FieldEncoding {
                method: self.method.name(),
                field: "-",
                reason: format!("frame of {} bytes exceeds frame-max {}", frame_size, config.frame_max),
            });
        }

        let mut result = vec![0u8; frame_size];

        let mut target = WriteBuffer::new(&mut result, 0);
        target.write_u8(AMQP_FRAME_TYPE_METHOD)?;
        target.write_u16(self.channel)?;
        target.write_u32(payload_size as u32)?;

        let end = self.method.pack(&mut result, AMQP_FRAME_HEADER_SIZE)?;
        result[end] = AMQP_FRAME_END;

        trace!(method = self.method.name(), channel = self.channel, frame_size, "encoded method frame");
        Ok(result)
    }
}

impl PartialEq for MethodFrame {
    fn eq(&self, other: &Self) -> bool {
        self.channel == other.channel && *self.method == *other.method
    }
}
