use alloy_primitives::{B256, U256};
use tracing::{debug, trace};

use crate::{
    constants::{AMOUNT_LEN, DETAILS_LEN, REQUEST_DETAILS_LEN, TRANSFER_LEN},
    internal::{check_len, hex_prefix, pad_field, unpad_field, Reader},
    CodecError, MessageType, Result,
};

/// Moves `amount` of the token to `recipient` on the destination domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransferMessage {
    pub recipient: B256,
    pub amount: U256,
}

/// Token metadata sent in response to a `RequestDetailsMessage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DetailsMessage {
    pub name: B256,
    pub symbol: B256,
    pub decimals: u8,
}

/// Asks the origin domain to send back a `DetailsMessage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RequestDetailsMessage;

/// The action half of a bridge message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Transfer(TransferMessage),
    Details(DetailsMessage),
    RequestDetails(RequestDetailsMessage),
}

/// Reads the tag of an action payload and checks it against `expected`.
fn expect_tag(bytes: &[u8], expected: MessageType) -> Result<()> {
    let Some(&tag) = bytes.first() else {
        return Err(CodecError::TruncatedMessage {
            expected: REQUEST_DETAILS_LEN,
            actual: 0,
        });
    };

    let found = MessageType::try_from(tag)?;
    if !found.is_action() {
        debug!(tag, %expected, "rejecting non-action tag");
        return Err(CodecError::UnknownTag(tag));
    }
    if found != expected {
        debug!(%expected, %found, "unexpected message tag");
        return Err(CodecError::TypeMismatch { expected, found });
    }

    Ok(())
}

impl TransferMessage {
    pub const fn new(recipient: B256, amount: U256) -> Self {
        Self { recipient, amount }
    }

    /// Builds a transfer to a recipient of at most 32 bytes (e.g. a 20-byte
    /// EVM address), left-padded.
    pub fn from_slice(recipient: &[u8], amount: U256) -> Result<Self> {
        Ok(Self::new(pad_field("recipient", recipient)?, amount))
    }

    /// 0x03 | recipient[32] | amount_be[32]
    pub fn encode(&self) -> Vec<u8> {
        let mut encoded = Vec::with_capacity(TRANSFER_LEN);
        encoded.push(MessageType::Transfer.as_byte());
        encoded.extend_from_slice(self.recipient.as_slice());
        encoded.extend_from_slice(&self.amount.to_be_bytes::<AMOUNT_LEN>());
        encoded
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        expect_tag(bytes, MessageType::Transfer)?;

        let mut reader = Reader::exact(bytes, TRANSFER_LEN)?;
        reader.read_u8();
        let recipient = reader.read_field();
        let amount = U256::from_be_bytes(reader.read_array::<AMOUNT_LEN>());

        Ok(Self { recipient, amount })
    }
}

impl DetailsMessage {
    pub const fn new(name: B256, symbol: B256, decimals: u8) -> Self {
        Self {
            name,
            symbol,
            decimals,
        }
    }

    /// Builds details from raw name and symbol bytes of at most 32 bytes each.
    pub fn from_slices(name: &[u8], symbol: &[u8], decimals: u8) -> Result<Self> {
        Ok(Self::new(
            pad_field("name", name)?,
            pad_field("symbol", symbol)?,
            decimals,
        ))
    }

    pub fn from_strs(name: &str, symbol: &str, decimals: u8) -> Result<Self> {
        Self::from_slices(name.as_bytes(), symbol.as_bytes(), decimals)
    }

    /// The name with its zero padding stripped.
    pub fn name_str(&self) -> String {
        String::from_utf8_lossy(unpad_field(&self.name)).into_owned()
    }

    /// The symbol with its zero padding stripped.
    pub fn symbol_str(&self) -> String {
        String::from_utf8_lossy(unpad_field(&self.symbol)).into_owned()
    }

    /// 0x04 | name[32] | symbol[32] | decimals[1]
    pub fn encode(&self) -> Vec<u8> {
        let mut encoded = Vec::with_capacity(DETAILS_LEN);
        encoded.push(MessageType::Details.as_byte());
        encoded.extend_from_slice(self.name.as_slice());
        encoded.extend_from_slice(self.symbol.as_slice());
        encoded.push(self.decimals);
        encoded
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        expect_tag(bytes, MessageType::Details)?;

        let mut reader = Reader::exact(bytes, DETAILS_LEN)?;
        reader.read_u8();
        let name = reader.read_field();
        let symbol = reader.read_field();
        let decimals = reader.read_u8();

        Ok(Self {
            name,
            symbol,
            decimals,
        })
    }
}

impl RequestDetailsMessage {
    /// 0x05
    pub fn encode(&self) -> Vec<u8> {
        vec![MessageType::RequestDetails.as_byte()]
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        expect_tag(bytes, MessageType::RequestDetails)?;
        check_len(bytes, REQUEST_DETAILS_LEN)?;
        Ok(Self)
    }
}

impl Action {
    pub const fn message_type(&self) -> MessageType {
        match self {
            Action::Transfer(_) => MessageType::Transfer,
            Action::Details(_) => MessageType::Details,
            Action::RequestDetails(_) => MessageType::RequestDetails,
        }
    }

    pub const fn encoded_len(&self) -> usize {
        match self {
            Action::Transfer(_) => TRANSFER_LEN,
            Action::Details(_) => DETAILS_LEN,
            Action::RequestDetails(_) => REQUEST_DETAILS_LEN,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let encoded = match self {
            Action::Transfer(transfer) => transfer.encode(),
            Action::Details(details) => details.encode(),
            Action::RequestDetails(request) => request.encode(),
        };

        trace!(
            message_type = %self.message_type(),
            len = encoded.len(),
            "encoded action"
        );
        encoded
    }

    /// Decodes an action by dispatching on its leading tag.
    ///
    /// Only `Transfer`, `Details` and `RequestDetails` lead an action; any
    /// other byte, including the reserved `TokenId` and `Message` tags, is
    /// rejected as `UnknownTag`.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let Some(&tag) = bytes.first() else {
            debug!("rejecting empty action");
            return Err(CodecError::TruncatedMessage {
                expected: REQUEST_DETAILS_LEN,
                actual: 0,
            });
        };

        let action = match MessageType::try_from(tag) {
            Ok(MessageType::Transfer) => Action::Transfer(TransferMessage::decode(bytes)?),
            Ok(MessageType::Details) => Action::Details(DetailsMessage::decode(bytes)?),
            Ok(MessageType::RequestDetails) => {
                Action::RequestDetails(RequestDetailsMessage::decode(bytes)?)
            }
            _ => {
                debug!(tag, prefix = %hex_prefix(bytes), "rejecting unknown action tag");
                return Err(CodecError::UnknownTag(tag));
            }
        };

        trace!(message_type = %action.message_type(), "decoded action");
        Ok(action)
    }
}

impl From<TransferMessage> for Action {
    fn from(value: TransferMessage) -> Self {
        Action::Transfer(value)
    }
}

impl From<DetailsMessage> for Action {
    fn from(value: DetailsMessage) -> Self {
        Action::Details(value)
    }
}

impl From<RequestDetailsMessage> for Action {
    fn from(value: RequestDetailsMessage) -> Self {
        Action::RequestDetails(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use hex_literal::hex;

    fn usdc_details() -> DetailsMessage {
        DetailsMessage::from_strs("USD Coin", "USDC", 6).unwrap()
    }

    #[test]
    fn test_encode_transfer_vector() {
        let transfer = TransferMessage::new(B256::repeat_byte(0xaa), U256::from(1u64));
        let encoded = transfer.encode();

        assert_eq!(encoded.len(), TRANSFER_LEN);
        assert_eq!(encoded[0], 0x03);
        assert_eq!(encoded[1..33], [0xaau8; 32]);
        assert_eq!(
            encoded[33..],
            hex!("0000000000000000000000000000000000000000000000000000000000000001")
        );
    }

    #[test]
    fn test_encode_transfer_max_amount() {
        let transfer = TransferMessage::new(B256::ZERO, U256::MAX);
        assert_eq!(transfer.encode()[33..], [0xffu8; 32]);
    }

    #[test]
    fn test_transfer_from_evm_address() {
        let to = hex!("C7ae1af5aFd9ED2E65495BFdF4639FbDB3a2ab57");
        let transfer = TransferMessage::from_slice(&to, U256::from(1_000_000u64)).unwrap();

        assert_eq!(transfer.recipient[..12], [0u8; 12]);
        assert_eq!(transfer.recipient[12..], to);
    }

    #[test]
    fn test_encode_details_layout() {
        let details = usdc_details();
        let encoded = details.encode();

        assert_eq!(encoded.len(), DETAILS_LEN);
        assert_eq!(encoded[0], 0x04);
        assert_eq!(encoded[1..25], [0u8; 24]);
        assert_eq!(&encoded[25..33], b"USD Coin");
        assert_eq!(encoded[33..61], [0u8; 28]);
        assert_eq!(&encoded[61..65], b"USDC");
        assert_eq!(encoded[65], 6);
    }

    #[test]
    fn test_details_strings() {
        let details = usdc_details();
        assert_eq!(details.name_str(), "USD Coin");
        assert_eq!(details.symbol_str(), "USDC");
    }

    #[test]
    fn test_details_rejects_long_name() {
        let name = "A token name that is longer than 32 bytes";
        assert_eq!(
            DetailsMessage::from_strs(name, "TKN", 18),
            Err(CodecError::FieldTooLong {
                field: "name",
                len: name.len()
            })
        );
    }

    #[test]
    fn test_encode_request_details() {
        assert_eq!(RequestDetailsMessage.encode(), vec![0x05]);
    }

    #[test]
    fn test_decode_each_variant() {
        let transfer = TransferMessage::new(B256::repeat_byte(0x11), U256::from(42u64));
        let details = usdc_details();

        assert_eq!(
            Action::decode(&transfer.encode()).unwrap(),
            Action::Transfer(transfer)
        );
        assert_eq!(
            Action::decode(&details.encode()).unwrap(),
            Action::Details(details)
        );
        assert_eq!(
            Action::decode(&[0x05]).unwrap(),
            Action::RequestDetails(RequestDetailsMessage)
        );
    }

    #[test]
    fn test_decode_unknown_tags() {
        for tag in [0x00, 0x01, 0x02, 0x06, 0xff] {
            assert_eq!(
                Action::decode(&[tag; 66]),
                Err(CodecError::UnknownTag(tag))
            );
        }
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(
            Action::decode(&[]),
            Err(CodecError::TruncatedMessage {
                expected: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn test_decode_truncated_transfer() {
        let encoded = TransferMessage::new(B256::ZERO, U256::from(7u64)).encode();

        assert_eq!(
            Action::decode(&encoded[..64]),
            Err(CodecError::TruncatedMessage {
                expected: 65,
                actual: 64
            })
        );
    }

    #[test]
    fn test_decode_trailing_bytes() {
        assert_eq!(
            Action::decode(&[0x05, 0x00]),
            Err(CodecError::TrailingBytes {
                expected: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn test_variant_decode_rejects_non_action_tags() {
        assert_eq!(
            TransferMessage::decode(&[0x00; 65]),
            Err(CodecError::UnknownTag(0x00))
        );
        assert_eq!(
            DetailsMessage::decode(&[0x01; 66]),
            Err(CodecError::UnknownTag(0x01))
        );
        assert_eq!(
            RequestDetailsMessage::decode(&[0x02]),
            Err(CodecError::UnknownTag(0x02))
        );
    }

    #[test]
    fn test_variant_decode_type_mismatch() {
        let encoded = usdc_details().encode();

        assert_eq!(
            TransferMessage::decode(&encoded),
            Err(CodecError::TypeMismatch {
                expected: MessageType::Transfer,
                found: MessageType::Details,
            })
        );
        assert_eq!(
            RequestDetailsMessage::decode(&encoded),
            Err(CodecError::TypeMismatch {
                expected: MessageType::RequestDetails,
                found: MessageType::Details,
            })
        );
    }

    #[test]
    fn test_action_metadata() {
        let action = Action::from(usdc_details());
        assert_eq!(action.message_type(), MessageType::Details);
        assert_eq!(action.encoded_len(), action.encode().len());
    }
}
