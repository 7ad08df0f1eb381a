#[macro_use]
mod macros;

pub mod defines;
pub mod methods;

mod bits;
mod buffer;
mod codec;
mod config;
mod error;
mod field;
mod frame;
mod method;
mod registry;
mod table;

pub use bits::BitPacker;
pub use config::CodecConfig;
pub use error::AmqpCodecError;
pub use field::{FieldKind, FieldRef, FieldSpec, FieldValue, LongString, WireType};
pub use frame::{FrameHeader, MethodFrame};
pub use method::{Method, MethodDecode, MethodId, MethodSpec};
pub use registry::{MethodEntry, MethodFactory, MethodRegistry};
pub use table::{AmqpValue, FieldTable};
