use core::cmp::Ordering;

use alloy_primitives::B256;
use tracing::debug;

use crate::{constants::FIELD_LEN, CodecError, Result};

/// Number of leading bytes included in rejection logs.
const LOG_PREFIX_LEN: usize = 8;

/// Left-pads `data` with zero bytes into a 32-byte field (right-aligned, as
/// the EVM does for `address`-like values).
///
/// Exactly 32 bytes pass through untouched. Longer input is rejected rather
/// than truncated.
pub fn pad_field(field: &'static str, data: &[u8]) -> Result<B256> {
    let len = data.len();
    if len > FIELD_LEN {
        debug!(field, len, "field exceeds 32 bytes");
        return Err(CodecError::FieldTooLong { field, len });
    }

    let mut padded = [0u8; FIELD_LEN];
    padded[FIELD_LEN - len..].copy_from_slice(data);
    Ok(B256::from(padded))
}

/// Strips the zero bytes that `pad_field` put in front of a value.
pub fn unpad_field(field: &B256) -> &[u8] {
    let start = field
        .iter()
        .position(|byte| *byte != 0)
        .unwrap_or(FIELD_LEN);
    &field[start..]
}

/// Ensures `bytes` is exactly `expected` long.
pub fn check_len(bytes: &[u8], expected: usize) -> Result<()> {
    let actual = bytes.len();
    let err = match actual.cmp(&expected) {
        Ordering::Equal => return Ok(()),
        Ordering::Less => CodecError::TruncatedMessage { expected, actual },
        Ordering::Greater => CodecError::TrailingBytes { expected, actual },
    };

    debug!(
        expected,
        actual,
        prefix = %hex_prefix(bytes),
        "rejecting message of wrong length"
    );
    Err(err)
}

/// Hex rendering of the first few bytes of a message for log fields.
pub fn hex_prefix(bytes: &[u8]) -> String {
    let end = bytes.len().min(LOG_PREFIX_LEN);
    hex::encode(&bytes[..end])
}

/// Sequential reader over a buffer whose length has already been checked.
pub struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    /// Creates a reader over `bytes` after checking it is exactly `expected`
    /// bytes long, so subsequent reads cannot run past the end.
    pub fn exact(bytes: &'a [u8], expected: usize) -> Result<Self> {
        check_len(bytes, expected)?;
        Ok(Self { bytes, offset: 0 })
    }

    pub fn read_u8(&mut self) -> u8 {
        let [byte] = self.read_array::<1>();
        byte
    }

    pub fn read_array<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.bytes[self.offset..self.offset + N]);
        self.offset += N;
        out
    }

    pub fn read_field(&mut self) -> B256 {
        B256::from(self.read_array::<FIELD_LEN>())
    }
}
