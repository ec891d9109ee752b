use super::{expect_exact_shape, required_field, ChainIdValidator, FeeConfigValidator, Validator};
use crate::config::{fields, DevnetOptions};
use crate::error::ValidationResult;
use crate::value::ConfigValue;

/// Validates the options used to build a custom Devnet.
///
/// Unlike a stored network config, the chain id may be text or bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevnetOptionsValidator;

impl Validator for DevnetOptionsValidator {
    type Output = DevnetOptions;

    fn validate(&self, value: &ConfigValue) -> ValidationResult<DevnetOptions> {
        let result = expect_exact_shape(value, &[fields::FEE_CONFIG, fields::CHAIN_HEX_ID])
            .and_then(|record| {
                let fee_config =
                    FeeConfigValidator.validate(required_field(record, fields::FEE_CONFIG)?)?;
                let chain_hex_id =
                    ChainIdValidator.validate(required_field(record, fields::CHAIN_HEX_ID)?)?;
                Ok(DevnetOptions::new(fee_config, chain_hex_id))
            });

        if let Err(e) = &result {
            tracing::debug!("Rejected Devnet options: {}", e);
        }
        result
    }
}
