use super::{
    expect_exact_shape, non_empty_text, required_field, ChainIdBytesValidator,
    FeeConfigValidator, NetworkTagValidator, Validator,
};
use crate::config::{fields, NetworkConfig, NetworkParams};
use crate::error::{ValidationError, ValidationResult};
use crate::networks::Network;
use crate::value::ConfigValue;

const NETWORK_CONFIG_FIELDS: [&str; 5] = [
    fields::NAME,
    fields::CHAIN_HEX_ID,
    fields::ADDRESS_PREFIX,
    fields::BIP44_PATH,
    fields::FEE_CONFIG,
];

/// Exact-shape validator for one network variant.
///
/// Beyond the field set and per-field checks, the `name` field must equal
/// this validator's network tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantValidator {
    pub network: Network,
}

impl VariantValidator {
    pub const fn new(network: Network) -> Self {
        Self { network }
    }
}

impl Validator for VariantValidator {
    type Output = NetworkConfig;

    fn validate(&self, value: &ConfigValue) -> ValidationResult<NetworkConfig> {
        let record = expect_exact_shape(value, &NETWORK_CONFIG_FIELDS)?;

        let name = NetworkTagValidator.validate(required_field(record, fields::NAME)?)?;

        // Stored configs carry the chain id as bytes only; text is accepted
        // at the Devnet options boundary, not here.
        let chain_hex_id = required_field(record, fields::CHAIN_HEX_ID)?;
        if chain_hex_id.as_bytes().is_none() {
            return Err(ValidationError::InvalidFieldType {
                field: fields::CHAIN_HEX_ID.to_string(),
                expected: "bytes",
                found: chain_hex_id.kind(),
            });
        }
        let chain_hex_id = ChainIdBytesValidator.validate(chain_hex_id)?;

        let address_prefix = non_empty_text(record, fields::ADDRESS_PREFIX)?;
        let bip44_path = non_empty_text(record, fields::BIP44_PATH)?;
        let fee_config = FeeConfigValidator.validate(required_field(record, fields::FEE_CONFIG)?)?;

        if name != self.network {
            return Err(ValidationError::TagInconsistent {
                expected: self.network,
            });
        }

        let params = NetworkParams::new(chain_hex_id, address_prefix, bip44_path, fee_config)?;
        Ok(NetworkConfig::new(name, params))
    }
}

/// Top-level network configuration validator.
///
/// Tries the Mainnet, Testnet and Devnet variants in order and accepts the
/// first that matches. When none does, the failure of every branch is
/// returned in [`ValidationError::NoVariantMatched`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkConfigValidator;

impl Validator for NetworkConfigValidator {
    type Output = NetworkConfig;

    fn validate(&self, value: &ConfigValue) -> ValidationResult<NetworkConfig> {
        let mut failures = Vec::with_capacity(Network::ALL.len());

        for network in Network::ALL {
            match VariantValidator::new(network).validate(value) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::trace!("Network config did not match {}: {}", network, e);
                    failures.push((network, e));
                }
            }
        }

        let err = ValidationError::NoVariantMatched { failures };
        tracing::debug!("Rejected network config: {}", err);
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::networks::mainnet_config;

    fn mainnet_value() -> ConfigValue {
        ConfigValue::from(&mainnet_config())
    }

    #[test]
    fn test_variant_accepts_own_tag_only() {
        let value = mainnet_value();
        assert_eq!(
            VariantValidator::new(Network::Mainnet).validate(&value),
            Ok(mainnet_config())
        );
        assert_eq!(
            VariantValidator::new(Network::Devnet).validate(&value),
            Err(ValidationError::TagInconsistent {
                expected: Network::Devnet
            })
        );
    }

    #[test]
    fn test_text_chain_id_is_not_accepted() {
        let value = mainnet_value().with_field("chainHexId", ConfigValue::text("2a"));
        assert_eq!(
            VariantValidator::new(Network::Mainnet).validate(&value),
            Err(ValidationError::InvalidFieldType {
                field: "chainHexId".to_string(),
                expected: "bytes",
                found: "text",
            })
        );
    }

    #[test]
    fn test_top_level_reports_every_branch() {
        let value = mainnet_value().with_field("extra", ConfigValue::Integer(1));
        match NetworkConfigValidator.validate(&value) {
            Err(ValidationError::NoVariantMatched { failures }) => {
                let networks: Vec<Network> = failures.iter().map(|(n, _)| *n).collect();
                assert_eq!(networks, Network::ALL.to_vec());
                assert!(failures
                    .iter()
                    .all(|(_, e)| matches!(e, ValidationError::ShapeMismatch { .. })));
            }
            other => panic!("expected NoVariantMatched, got {:?}", other),
        }
    }
}
