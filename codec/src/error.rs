use thiserror::Error;

use crate::MessageType;

pub type Result<T, E = CodecError> = core::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: MessageType,
        found: MessageType,
    },
    #[error("Field {field} is {len} bytes, at most 32 allowed")]
    FieldTooLong { field: &'static str, len: usize },
    #[error("Unknown message tag {0:#04x}")]
    UnknownTag(u8),
    #[error("Truncated message: expected {expected} bytes, got {actual}")]
    TruncatedMessage { expected: usize, actual: usize },
    #[error("Trailing bytes: expected {expected} bytes, got {actual}")]
    TrailingBytes { expected: usize, actual: usize },
}
