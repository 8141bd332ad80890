use core::fmt;

use alloy_primitives::B256;
use tracing::trace;

use crate::{
    constants::TOKEN_ID_LEN,
    internal::{pad_field, Reader},
    Result,
};

/// A token identified by its origin domain and its 32-byte id on that domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId {
    pub domain: u32,
    pub id: B256,
}

impl TokenId {
    pub const fn new(domain: u32, id: B256) -> Self {
        Self { domain, id }
    }

    /// Builds a token id from an id of at most 32 bytes, left-padded.
    pub fn from_slice(domain: u32, id: &[u8]) -> Result<Self> {
        Ok(Self::new(domain, pad_field("id", id)?))
    }

    /// domain_be[4] | id[32]
    pub fn encode(&self) -> Vec<u8> {
        let mut encoded = Vec::with_capacity(TOKEN_ID_LEN);
        encoded.extend_from_slice(&self.domain.to_be_bytes());
        encoded.extend_from_slice(self.id.as_slice());

        trace!(domain = self.domain, len = encoded.len(), "encoded token id");
        encoded
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let mut reader = Reader::exact(bytes, TOKEN_ID_LEN)?;
        let domain = u32::from_be_bytes(reader.read_array());
        let id = reader.read_field();

        trace!(domain, "decoded token id");
        Ok(Self { domain, id })
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.domain, self.id)
    }
}
