use tracing::{debug, trace};

use crate::{constants::TOKEN_ID_LEN, internal::hex_prefix, Action, CodecError, Result, TokenId};

/// The unit handed to the transport: a token id followed by one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BridgeMessage {
    pub token_id: TokenId,
    pub action: Action,
}

impl BridgeMessage {
    pub fn new(token_id: TokenId, action: impl Into<Action>) -> Self {
        Self {
            token_id,
            action: action.into(),
        }
    }

    pub const fn encoded_len(&self) -> usize {
        TOKEN_ID_LEN + self.action.encoded_len()
    }

    /// token_id[36] | action
    pub fn encode(&self) -> Vec<u8> {
        let encoded = compose_message(&self.token_id.encode(), &self.action.encode());

        trace!(
            token_id = %self.token_id,
            message_type = %self.action.message_type(),
            len = encoded.len(),
            "encoded bridge message"
        );
        encoded
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let (token_id, action) = split_message(bytes)?;

        Ok(Self {
            token_id: TokenId::decode(token_id)?,
            action: Action::decode(action)?,
        })
    }
}

/// Concatenates an encoded token id and an encoded action.
pub fn compose_message(token_id: &[u8], action: &[u8]) -> Vec<u8> {
    let mut message = Vec::with_capacity(token_id.len() + action.len());
    message.extend_from_slice(token_id);
    message.extend_from_slice(action);
    message
}

/// Splits a composed message into its token id and action halves without
/// decoding either.
///
/// Fails with `TruncatedMessage` when there is no room for a token id
/// followed by at least a tag byte.
pub fn split_message(bytes: &[u8]) -> Result<(&[u8], &[u8])> {
    if bytes.len() <= TOKEN_ID_LEN {
        debug!(
            len = bytes.len(),
            prefix = %hex_prefix(bytes),
            "rejecting message without an action"
        );
        return Err(CodecError::TruncatedMessage {
            expected: TOKEN_ID_LEN + 1,
            actual: bytes.len(),
        });
    }

    Ok(bytes.split_at(TOKEN_ID_LEN))
}
