use std::fmt::{Display, Formatter};

use super::table::FieldTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Bit,
    Octet,
    Short,
    Long,
    LongLong,
    ShortStr,
    LongStr,
    Table,
}

impl Display for WireType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WireType::Bit => "bit",
            WireType::Octet => "octet",
            WireType::Short => "short",
            WireType::Long => "long",
            WireType::LongLong => "longlong",
            WireType::ShortStr => "shortstr",
            WireType::LongStr => "longstr",
            WireType::Table => "table",
        };

        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub wire_type: WireType,
}

/// Borrowed field value handed to the encoder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRef<'a> {
    Bit(bool),
    Octet(u8),
    Short(u16),
    Long(u32),
    LongLong(u64),
    ShortStr(&'a str),
    LongStr(&'a [u8]),
    Table(&'a FieldTable),
}

impl<'a> FieldRef<'a> {
    pub fn wire_type(&self) -> WireType {
        match self {
            FieldRef::Bit(_) => WireType::Bit,
            FieldRef::Octet(_) => WireType::Octet,
            FieldRef::Short(_) => WireType::Short,
            FieldRef::Long(_) => WireType::Long,
            FieldRef::LongLong(_) => WireType::LongLong,
            FieldRef::ShortStr(_) => WireType::ShortStr,
            FieldRef::LongStr(_) => WireType::LongStr,
            FieldRef::Table(_) => WireType::Table,
        }
    }
}

/// Owned field value produced by the decoder.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bit(bool),
    Octet(u8),
    Short(u16),
    Long(u32),
    LongLong(u64),
    ShortStr(String),
    LongStr(Vec<u8>),
    Table(FieldTable),
}

impl FieldValue {
    pub fn wire_type(&self) -> WireType {
        self.as_ref().wire_type()
    }

    pub fn as_ref(&self) -> FieldRef<'_> {
        match self {
            FieldValue::Bit(value) => FieldRef::Bit(*value),
            FieldValue::Octet(value) => FieldRef::Octet(*value),
            FieldValue::Short(value) => FieldRef::Short(*value),
            FieldValue::Long(value) => FieldRef::Long(*value),
            FieldValue::LongLong(value) => FieldRef::LongLong(*value),
            FieldValue::ShortStr(value) => FieldRef::ShortStr(value),
            FieldValue::LongStr(value) => FieldRef::LongStr(value),
            FieldValue::Table(value) => FieldRef::Table(value),
        }
    }
}

/// Opaque `longstr` payload. Used for SASL responses, locales and other
/// fields that are not guaranteed to be UTF-8.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LongString(pub Vec<u8>);

impl LongString {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<&str> for LongString {
    fn from(value: &str) -> Self {
        LongString(value.as_bytes().to_vec())
    }
}

impl From<String> for LongString {
    fn from(value: String) -> Self {
        LongString(value.into_bytes())
    }
}

impl From<Vec<u8>> for LongString {
    fn from(value: Vec<u8>) -> Self {
        LongString(value)
    }
}

/// Maps a Rust field type onto its AMQP wire type.
pub trait FieldKind: Sized {
    const WIRE_TYPE: WireType;

    fn as_field(&self) -> FieldRef<'_>;
    fn from_field(value: FieldValue) -> Option<Self>;
}

impl FieldKind for bool {
    const WIRE_TYPE: WireType = WireType::Bit;

    fn as_field(&self) -> FieldRef<'_> {
        FieldRef::Bit(*self)
    }

    fn from_field(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Bit(value) => Some(value),
            _ => None,
        }
    }
}

impl FieldKind for u8 {
    const WIRE_TYPE: WireType = WireType::Octet;

    fn as_field(&self) -> FieldRef<'_> {
        FieldRef::Octet(*self)
    }

    fn from_field(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Octet(value) => Some(value),
            _ => None,
        }
    }
}

impl FieldKind for u16 {
    const WIRE_TYPE: WireType = WireType::Short;

    fn as_field(&self) -> FieldRef<'_> {
        FieldRef::Short(*self)
    }

    fn from_field(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Short(value) => Some(value),
            _ => None,
        }
    }
}

impl FieldKind for u32 {
    const WIRE_TYPE: WireType = WireType::Long;

    fn as_field(&self) -> FieldRef<'_> {
        FieldRef::Long(*self)
    }

    fn from_field(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Long(value) => Some(value),
            _ => None,
        }
    }
}

impl FieldKind for u64 {
    const WIRE_TYPE: WireType = WireType::LongLong;

    fn as_field(&self) -> FieldRef<'_> {
        FieldRef::LongLong(*self)
    }

    fn from_field(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::LongLong(value) => Some(value),
            _ => None,
        }
    }
}

impl FieldKind for String {
    const WIRE_TYPE: WireType = WireType::ShortStr;

    fn as_field(&self) -> FieldRef<'_> {
        FieldRef::ShortStr(self)
    }

    fn from_field(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::ShortStr(value) => Some(value),
            _ => None,
        }
    }
}

impl FieldKind for LongString {
    const WIRE_TYPE: WireType = WireType::LongStr;

    fn as_field(&self) -> FieldRef<'_> {
        FieldRef::LongStr(&self.0)
    }

    fn from_field(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::LongStr(value) => Some(LongString(value)),
            _ => None,
        }
    }
}

impl FieldKind for FieldTable {
    const WIRE_TYPE: WireType = WireType::Table;

    fn as_field(&self) -> FieldRef<'_> {
        FieldRef::Table(self)
    }

    fn from_field(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Table(value) => Some(value),
            _ => None,
        }
    }
}
