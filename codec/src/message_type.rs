use core::fmt;

use crate::{
    constants::{DETAILS_LEN, REQUEST_DETAILS_LEN, TOKEN_ID_LEN, TRANSFER_LEN},
    CodecError,
};

/// Leading tag byte of a bridge message.
///
/// `TokenId` and `Message` are reserved: token ids are encoded untagged and
/// composed messages carry no tag of their own, so neither value ever leads
/// an encoding produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MessageType {
    Invalid = 0,
    TokenId = 1,
    Message = 2,
    Transfer = 3,
    Details = 4,
    RequestDetails = 5,
}

impl MessageType {
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Fixed length of this variant's encoding, tag included.
    ///
    /// `None` for `Invalid` (never encoded) and `Message` (variable length).
    pub const fn encoded_len(self) -> Option<usize> {
        match self {
            MessageType::TokenId => Some(TOKEN_ID_LEN),
            MessageType::Transfer => Some(TRANSFER_LEN),
            MessageType::Details => Some(DETAILS_LEN),
            MessageType::RequestDetails => Some(REQUEST_DETAILS_LEN),
            MessageType::Invalid | MessageType::Message => None,
        }
    }

    /// Whether this tag leads an action payload.
    pub const fn is_action(self) -> bool {
        matches!(
            self,
            MessageType::Transfer | MessageType::Details | MessageType::RequestDetails
        )
    }
}

impl TryFrom<u8> for MessageType {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MessageType::Invalid),
            1 => Ok(MessageType::TokenId),
            2 => Ok(MessageType::Message),
            3 => Ok(MessageType::Transfer),
            4 => Ok(MessageType::Details),
            5 => Ok(MessageType::RequestDetails),
            other => Err(CodecError::UnknownTag(other)),
        }
    }
}

impl From<MessageType> for u8 {
    fn from(value: MessageType) -> Self {
        value.as_byte()
    }
}

/// Renders the tag as a single hex byte, e.g. `0x03`.
impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.as_byte())
    }
}
