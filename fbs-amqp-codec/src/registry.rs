use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use tracing::{debug, trace, warn};

use super::buffer::ReadBuffer;
use super::config::CodecConfig;
use super::defines::*;
use super::error::AmqpCodecError;
use super::frame::{FrameHeader, MethodFrame};
use super::method::{Method, MethodDecode, MethodId, MethodSpec};
use super::methods::AMQP_0_9_1_METHODS;

/// Decodes a full method payload (class/method header included).
pub type MethodFactory = fn(&[u8], &CodecConfig) -> Result<Box<dyn Method>, AmqpCodecError>;

#[derive(Clone, Copy)]
pub struct MethodEntry {
    pub spec: &'static MethodSpec,
    pub factory: MethodFactory,
}

impl MethodEntry {
    pub const fn of<M: MethodDecode>() -> Self {
        Self { spec: M::SPEC, factory: unpack_boxed::<M> }
    }
}

fn unpack_boxed<M: MethodDecode>(buffer: &[u8], config: &CodecConfig) -> Result<Box<dyn Method>, AmqpCodecError> {
    Ok(Box::new(M::unpack_with(buffer, config)?))
}

#[derive(Clone, Copy)]
struct RegisteredMethod {
    spec: Option<&'static MethodSpec>,
    factory: MethodFactory,
}

/// Dispatch table from class/method id to decoder. Built once, then only
/// read, so it can be shared between threads freely.
#[derive(Clone)]
pub struct MethodRegistry {
    methods: HashMap<MethodId, RegisteredMethod>,
    config: CodecConfig,
}

impl MethodRegistry {
    pub fn new() -> Self {
        MethodRegistry::with_config(CodecConfig::default())
    }

    pub fn with_config(config: CodecConfig) -> Self {
        Self { methods: HashMap::new(), config }
    }

    /// Registry holding every built-in AMQP 0-9-1 method.
    pub fn amqp_0_9_1() -> Self {
        MethodRegistry::amqp_0_9_1_with_config(CodecConfig::default())
    }

    pub fn amqp_0_9_1_with_config(config: CodecConfig) -> Self {
        let mut registry = MethodRegistry::with_config(config);
        for entry in AMQP_0_9_1_METHODS {
            registry.insert(entry.spec.id, Some(entry.spec), entry.factory);
        }

        debug!(methods = registry.len(), "built amqp 0-9-1 method registry");
        registry
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn register(&mut self, class_id: u16, method_id: u16, factory: MethodFactory) -> Result<(), AmqpCodecError> {
        self.try_insert(MethodId::new(class_id, method_id), None, factory)
    }

    pub fn register_method<M: MethodDecode>(&mut self) -> Result<(), AmqpCodecError> {
        let entry = MethodEntry::of::<M>();
        self.try_insert(entry.spec.id, Some(entry.spec), entry.factory)
    }

    fn try_insert(&mut self, id: MethodId, spec: Option<&'static MethodSpec>, factory: MethodFactory) -> Result<(), AmqpCodecError> {
        if self.methods.contains_key(&id) {
            return Err(AmqpCodecError::DuplicateMethod { class_id: id.class_id, method_id: id.method_id });
        }

        self.insert(id, spec, factory);
        debug!(%id, name = spec.map(|spec| spec.name), "registered method");

        Ok(())
    }

    fn insert(&mut self, id: MethodId, spec: Option<&'static MethodSpec>, factory: MethodFactory) {
        self.methods.insert(id, RegisteredMethod { spec, factory });
    }

    pub fn contains(&self, id: MethodId) -> bool {
        self.methods.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Descriptor of a method registered through `register_method` or the
    /// built-in table.
    pub fn spec_of(&self, id: MethodId) -> Option<&'static MethodSpec> {
        self.methods.get(&id).and_then(|method| method.spec)
    }

    /// Decodes a method payload received on `channel`.
    pub fn decode(&self, channel: u16, buffer: &[u8]) -> Result<MethodFrame, AmqpCodecError> {
        let mut source = ReadBuffer::new(buffer, 0);
        let id = MethodId::new(source.read_u16()?, source.read_u16()?);

        let method = match self.methods.get(&id) {
            Some(method) => method,
            None => {
                warn!(%id, channel, "received unknown method");
                return Err(AmqpCodecError::UnknownMethod { class_id: id.class_id, method_id: id.method_id, offset: 0 });
            }
        };

        let decoded = (method.factory)(buffer, &self.config)?;
        trace!(method = decoded.name(), channel, size = buffer.len(), "decoded method");

        Ok(MethodFrame { channel, method: decoded })
    }

    /// Decodes one method frame from the start of `bytes`, returning it with
    /// the number of bytes consumed. Error offsets are relative to `bytes`.
    pub fn decode_frame(&self, bytes: &[u8]) -> Result<(MethodFrame, usize), AmqpCodecError> {
        let header = FrameHeader::parse(bytes)?;
        if header.frame_type != AMQP_FRAME_TYPE_METHOD {
            return Err(AmqpCodecError::InvalidFrameType { frame_type: header.frame_type });
        }

        let end = AMQP_FRAME_HEADER_SIZE + header.size as usize;
        let available = bytes.len() - AMQP_FRAME_HEADER_SIZE;
        if available < header.size as usize + 1 {
            return Err(AmqpCodecError::BufferTooShort {
                method: None,
                offset: AMQP_FRAME_HEADER_SIZE,
                needed: header.size as usize + 1,
                available,
            });
        }

        if bytes[end] != AMQP_FRAME_END {
            return Err(AmqpCodecError::InvalidFrameEnd { offset: end, found: bytes[end] });
        }

        let frame = self.decode(header.channel, &bytes[AMQP_FRAME_HEADER_SIZE..end])
            .map_err(|error| error.shifted(AMQP_FRAME_HEADER_SIZE))?;

        Ok((frame, end + 1))
    }

    pub fn responses_for(&self, method: &dyn Method) -> &'static [MethodId] {
        method.response_types()
    }

    /// Checks that `received` is an acceptable reply to the synchronous
    /// method `sent`.
    pub fn verify_response(&self, sent: &dyn Method, received: &dyn Method) -> Result<(), AmqpCodecError> {
        if sent.spec().accepts(received.id()) {
            return Ok(());
        }

        warn!(request = sent.name(), received = received.name(), "unexpected response");
        Err(AmqpCodecError::UnexpectedResponse { request: sent.id(), received: received.id() })
    }
}

impl Debug for MethodRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<&MethodId> = self.methods.keys().collect();
        ids.sort();

        f.debug_struct("MethodRegistry")
            .field("methods", &ids)
            .field("config", &self.config)
            .finish()
    }
}

impl Default for MethodRegistry {
    fn default() -> Self {
        MethodRegistry::new()
    }
}
