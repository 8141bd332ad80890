//! Packed binary encoding of cross-chain token bridge messages.
//!
//! A bridge message is a [`TokenId`] (origin domain and 32-byte id) followed
//! by one tagged [`Action`]:
//!
//! ```text
//! TransferMessage:       0x03 | recipient[32] | amount[32]
//! DetailsMessage:        0x04 | name[32]      | symbol[32] | decimals[1]
//! RequestDetailsMessage: 0x05
//! TokenId:               domain[4]            | id[32]
//! ```
//!
//! All integers are big-endian. 32-byte fields are left-padded with zeros.

pub mod constants;
pub mod format;

mod action;
mod error;
mod internal;
mod message;
mod message_type;
mod token_id;

pub use action::{Action, DetailsMessage, RequestDetailsMessage, TransferMessage};
pub use error::{CodecError, Result};
pub use format::{
    encode_details, encode_request_details, encode_token_id, encode_transfer,
    serialize_details, serialize_request_details, serialize_transfer,
};
pub use message::{compose_message, split_message, BridgeMessage};
pub use message_type::MessageType;
pub use token_id::TokenId;

pub use alloy_primitives::{B256, U256};
