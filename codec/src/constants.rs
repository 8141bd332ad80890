/// Size of the leading type tag of an action message.
pub const IDENTIFIER_LEN: usize = 1;

/// Size of every fixed-width identifier or string field (`bytes32`).
pub const FIELD_LEN: usize = 32;

/// Size of the big-endian domain prefix of a token id (`uint32`).
pub const DOMAIN_LEN: usize = 4;

/// Size of a big-endian amount (`uint256`).
pub const AMOUNT_LEN: usize = 32;

/// domain[4] | id[32]
pub const TOKEN_ID_LEN: usize = DOMAIN_LEN + FIELD_LEN;

/// 0x03 | recipient[32] | amount[32]
pub const TRANSFER_LEN: usize = IDENTIFIER_LEN + FIELD_LEN + AMOUNT_LEN;

/// 0x04 | name[32] | symbol[32] | decimals[1]
pub const DETAILS_LEN: usize = IDENTIFIER_LEN + FIELD_LEN + FIELD_LEN + 1;

/// 0x05
pub const REQUEST_DETAILS_LEN: usize = IDENTIFIER_LEN;
