use thiserror::Error;

use super::method::MethodId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AmqpCodecError {
    #[error("Unknown class/method - {class_id}/{method_id} at offset {offset}")]
    UnknownMethod { class_id: u16, method_id: u16, offset: usize },
    #[error("Malformed field table in {} at offset {offset} - {reason}", context(.method))]
    MalformedTable { method: Option<MethodId>, offset: usize, reason: String },
    #[error("Class/method {class_id}/{method_id} already registered")]
    DuplicateMethod { class_id: u16, method_id: u16 },
    #[error("Cannot encode {method}.{field} - {reason}")]
    FieldEncoding { method: &'static str, field: &'static str, reason: String },
    #[error("Buffer too short in {} at offset {offset} - need {needed}, have {available}", context(.method))]
    BufferTooShort { method: Option<MethodId>, offset: usize, needed: usize, available: usize },
    #[error("Invalid string utf-8 format in {} at offset {offset}", context(.method))]
    InvalidString { method: Option<MethodId>, offset: usize },
    #[error("Invalid field type - {tag:#04x} in {} at offset {offset}", context(.method))]
    InvalidFieldType { method: Option<MethodId>, offset: usize, tag: u8 },
    #[error("Invalid frame type - {frame_type}")]
    InvalidFrameType { frame_type: u8 },
    #[error("Invalid frame end - {found:#04x} at offset {offset}")]
    InvalidFrameEnd { offset: usize, found: u8 },
    #[error("Decoded value for {method}.{field} at offset {offset} does not match its declared type")]
    FieldDecoding { method: MethodId, field: &'static str, offset: usize },
    #[error("Unexpected response {received} to {request}")]
    UnexpectedResponse { request: MethodId, received: MethodId },
}

impl AmqpCodecError {
    /// Offset of the offending byte, for errors raised while decoding.
    pub fn offset(&self) -> Option<usize> {
        match self {
            AmqpCodecError::UnknownMethod { offset, .. } => Some(*offset),
            AmqpCodecError::MalformedTable { offset, .. } => Some(*offset),
            AmqpCodecError::BufferTooShort { offset, .. } => Some(*offset),
            AmqpCodecError::InvalidString { offset, .. } => Some(*offset),
            AmqpCodecError::InvalidFieldType { offset, .. } => Some(*offset),
            AmqpCodecError::InvalidFrameEnd { offset, .. } => Some(*offset),
            AmqpCodecError::FieldDecoding { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// Rebases a payload-relative offset onto the enclosing frame.
    pub(crate) fn shifted(mut self, by: usize) -> Self {
        match &mut self {
            AmqpCodecError::UnknownMethod { offset, .. }
            | AmqpCodecError::MalformedTable { offset, .. }
            | AmqpCodecError::BufferTooShort { offset, .. }
            | AmqpCodecError::InvalidString { offset, .. }
            | AmqpCodecError::InvalidFieldType { offset, .. }
            | AmqpCodecError::InvalidFrameEnd { offset, .. }
            | AmqpCodecError::FieldDecoding { offset, .. } => *offset += by,
            _ => (),
        }

        self
    }
}

fn context(method: &Option<MethodId>) -> String {
    match method {
        Some(id) => id.to_string(),
        None => "-".to_string(),
    }
}
