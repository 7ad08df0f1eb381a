use std::any::Any;
use std::fmt::{Debug, Display, Formatter};

use super::codec;
use super::config::CodecConfig;
use super::error::AmqpCodecError;
use super::field::{FieldRef, FieldSpec, FieldValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodId {
    pub class_id: u16,
    pub method_id: u16,
}

impl MethodId {
    pub const fn new(class_id: u16, method_id: u16) -> Self {
        Self { class_id, method_id }
    }
}

impl Display for MethodId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.class_id, self.method_id)
    }
}

/// Static description of a method: identity, field layout and reply rules.
#[derive(Debug)]
pub struct MethodSpec {
    pub name: &'static str,
    pub id: MethodId,
    pub synchronous: bool,
    pub fields: &'static [FieldSpec],
    pub responses: &'static [MethodId],
}

impl MethodSpec {
    pub fn accepts(&self, response: MethodId) -> bool {
        self.responses.contains(&response)
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}

pub trait Method: Debug + Send + Sync + 'static {
    fn spec(&self) -> &'static MethodSpec;

    /// Field values in declaration order.
    fn fields(&self) -> Vec<FieldRef<'_>>;

    fn as_any(&self) -> &dyn Any;

    fn clone_boxed(&self) -> Box<dyn Method>;

    /// False for synchronous methods sent with `no-wait` set.
    fn expects_reply(&self) -> bool {
        self.spec().synchronous
    }

    fn id(&self) -> MethodId {
        self.spec().id
    }

    fn name(&self) -> &'static str {
        self.spec().name
    }

    fn is_synchronous(&self) -> bool {
        self.spec().synchronous
    }

    fn response_types(&self) -> &'static [MethodId] {
        self.spec().responses
    }

    fn payload_size(&self) -> Result<usize, AmqpCodecError> {
        codec::payload_size(self.spec(), &self.fields())
    }

    /// Writes the payload at `offset` and returns the offset past it.
    fn pack(&self, buffer: &mut [u8], offset: usize) -> Result<usize, AmqpCodecError> {
        codec::pack(self.spec(), &self.fields(), buffer, offset)
    }

    fn to_payload(&self) -> Result<Vec<u8>, AmqpCodecError> {
        let fields = self.fields();
        let mut result = vec![0u8; codec::payload_size(self.spec(), &fields)?];
        codec::pack(self.spec(), &fields, &mut result, 0)?;

        Ok(result)
    }
}

pub trait MethodDecode: Method + Sized {
    const SPEC: &'static MethodSpec;

    /// Builds the method from values in declaration order. Fails with the
    /// name of the first field whose value is missing or mistyped.
    fn from_fields(values: Vec<FieldValue>) -> Result<Self, &'static str>;

    fn unpack(buffer: &[u8]) -> Result<Self, AmqpCodecError> {
        Self::unpack_with(buffer, &CodecConfig::default())
    }

    fn unpack_with(buffer: &[u8], config: &CodecConfig) -> Result<Self, AmqpCodecError> {
        let codec::Unpacked { values, offsets } = codec::unpack(Self::SPEC, buffer, config)?;

        Self::from_fields(values).map_err(|field| AmqpCodecError::FieldDecoding {
            method: Self::SPEC.id,
            field,
            offset: codec::field_offset(Self::SPEC, &offsets, field),
        })
    }
}

impl dyn Method {
    pub fn is<T: Method>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Method>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl PartialEq for dyn Method {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id() && self.fields() == other.fields()
    }
}

impl Clone for Box<dyn Method> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}
