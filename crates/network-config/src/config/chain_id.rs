use crate::error::{ValidationError, ValidationResult};
use crate::value::ConfigValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One-byte network discriminator used in transaction signing.
///
/// This is the canonical binary form. Text (`"2a"`) and raw bytes
/// (`[0x2a]`) are both parsed into it at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(u8);

impl ChainId {
    pub const fn new(byte: u8) -> Self {
        Self(byte)
    }

    pub fn as_byte(&self) -> u8 {
        self.0
    }

    /// Lowercase two-character hex form
    pub fn to_hex(&self) -> String {
        hex::encode([self.0])
    }

    /// Parse the textual form: exactly two hex characters, any case.
    pub fn from_hex(text: &str) -> ValidationResult<Self> {
        if !is_chain_hex(text) {
            return Err(ValidationError::InvalidChainId);
        }

        let decoded = hex::decode(text).map_err(|_| ValidationError::InvalidChainId)?;
        match decoded.as_slice() {
            [byte] => Ok(Self(*byte)),
            _ => Err(ValidationError::InvalidChainId),
        }
    }

    /// Parse the binary form. The bytes are accepted when their lowercase
    /// hex rendering passes the same check as the textual form.
    pub fn from_bytes(bytes: &[u8]) -> ValidationResult<Self> {
        Self::from_hex(&hex::encode(bytes))
    }
}

/// Whether `text` is exactly two characters from `[0-9a-fA-F]`
pub(crate) fn is_chain_hex(text: &str) -> bool {
    text.len() == 2 && text.bytes().all(|b| b.is_ascii_hexdigit())
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}

impl From<u8> for ChainId {
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}

impl From<ChainId> for ConfigValue {
    fn from(chain_id: ChainId) -> Self {
        ConfigValue::Bytes(vec![chain_id.0])
    }
}
