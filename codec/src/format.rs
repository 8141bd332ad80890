//! Byte-level entry points mirroring the packed layouts, for callers that
//! hold raw fields rather than typed messages.
//!
//! The `serialize_*` functions accept an [`Action`] whose variant is only
//! known at runtime and refuse to encode it as anything else.

use alloy_primitives::U256;
use tracing::debug;

use crate::{
    Action, CodecError, DetailsMessage, MessageType, RequestDetailsMessage, Result, TokenId,
    TransferMessage,
};

/// 0x03 | recipient[32] | amount_be[32]
pub fn encode_transfer(recipient: &[u8], amount: U256) -> Result<Vec<u8>> {
    Ok(TransferMessage::from_slice(recipient, amount)?.encode())
}

/// 0x04 | name[32] | symbol[32] | decimals[1]
pub fn encode_details(name: &[u8], symbol: &[u8], decimals: u8) -> Result<Vec<u8>> {
    Ok(DetailsMessage::from_slices(name, symbol, decimals)?.encode())
}

/// 0x05
pub fn encode_request_details() -> Vec<u8> {
    RequestDetailsMessage.encode()
}

/// domain_be[4] | id[32]
pub fn encode_token_id(domain: u32, id: &[u8]) -> Result<Vec<u8>> {
    Ok(TokenId::from_slice(domain, id)?.encode())
}

fn mismatch(expected: MessageType, action: &Action) -> CodecError {
    let found = action.message_type();
    debug!(%expected, %found, "refusing to serialize action as another variant");
    CodecError::TypeMismatch { expected, found }
}

pub fn serialize_transfer(action: &Action) -> Result<Vec<u8>> {
    match action {
        Action::Transfer(transfer) => Ok(transfer.encode()),
        other => Err(mismatch(MessageType::Transfer, other)),
    }
}

pub fn serialize_details(action: &Action) -> Result<Vec<u8>> {
    match action {
        Action::Details(details) => Ok(details.encode()),
        other => Err(mismatch(MessageType::Details, other)),
    }
}

pub fn serialize_request_details(action: &Action) -> Result<Vec<u8>> {
    match action {
        Action::RequestDetails(request) => Ok(request.encode()),
        other => Err(mismatch(MessageType::RequestDetails, other)),
    }
}
