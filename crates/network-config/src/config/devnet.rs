use super::{fields, ChainId, FeeConfig};
use crate::error::{ValidationError, ValidationResult};
use crate::validation::{DevnetOptionsValidator, Validator};
use crate::value::ConfigValue;
use serde::{Deserialize, Serialize};

/// Input used to assemble a custom Devnet configuration.
///
/// Deserialization goes through [`DevnetOptionsValidator`], so the chain id
/// may be two hex characters or a single byte there as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigValue", into = "ConfigValue")]
pub struct DevnetOptions {
    pub fee_config: FeeConfig,
    pub chain_hex_id: ChainId,
}

impl DevnetOptions {
    pub fn new(fee_config: FeeConfig, chain_hex_id: ChainId) -> Self {
        Self {
            fee_config,
            chain_hex_id,
        }
    }

    /// Validate untyped Devnet options. The chain id may be given as two
    /// hex characters or as a single byte.
    pub fn parse(value: &ConfigValue) -> ValidationResult<Self> {
        DevnetOptionsValidator.validate(value)
    }

    pub fn parse_optional(value: Option<&ConfigValue>) -> ValidationResult<Option<Self>> {
        DevnetOptionsValidator.validate_optional(value)
    }
}

impl From<&DevnetOptions> for ConfigValue {
    fn from(options: &DevnetOptions) -> Self {
        ConfigValue::record([
            (fields::FEE_CONFIG, ConfigValue::from(&options.fee_config)),
            (fields::CHAIN_HEX_ID, ConfigValue::from(options.chain_hex_id)),
        ])
    }
}

impl From<DevnetOptions> for ConfigValue {
    fn from(options: DevnetOptions) -> Self {
        ConfigValue::from(&options)
    }
}

impl TryFrom<ConfigValue> for DevnetOptions {
    type Error = ValidationError;

    fn try_from(value: ConfigValue) -> Result<Self, Self::Error> {
        DevnetOptions::parse(&value.with_binary_field(fields::CHAIN_HEX_ID))
    }
}
