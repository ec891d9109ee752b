use super::Validator;
use crate::config::ChainId;
use crate::error::{ValidationError, ValidationResult};
use crate::value::ConfigValue;

/// Textual chain id: exactly two hex characters, any case
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainIdTextValidator;

impl Validator for ChainIdTextValidator {
    type Output = ChainId;

    fn validate(&self, value: &ConfigValue) -> ValidationResult<ChainId> {
        match value {
            ConfigValue::Text(text) => ChainId::from_hex(text),
            _ => Err(ValidationError::InvalidChainId),
        }
    }
}

/// Binary chain id: bytes whose lowercase hex rendering is two hex characters
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainIdBytesValidator;

impl Validator for ChainIdBytesValidator {
    type Output = ChainId;

    fn validate(&self, value: &ConfigValue) -> ValidationResult<ChainId> {
        match value {
            ConfigValue::Bytes(bytes) => ChainId::from_bytes(bytes),
            _ => Err(ValidationError::InvalidChainId),
        }
    }
}

/// Chain id in either representation, normalized to binary
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainIdValidator;

impl Validator for ChainIdValidator {
    type Output = ChainId;

    fn validate(&self, value: &ConfigValue) -> ValidationResult<ChainId> {
        ChainIdTextValidator
            .validate(value)
            .or_else(|_| ChainIdBytesValidator.validate(value))
    }
}

/// Parse a bare chain id given as text or bytes
pub fn parse_chain_id(value: &ConfigValue) -> ValidationResult<ChainId> {
    ChainIdValidator.validate(value)
}
