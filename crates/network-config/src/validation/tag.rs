use super::Validator;
use crate::error::{ValidationError, ValidationResult};
use crate::networks::Network;
use crate::value::ConfigValue;

/// Accepts exactly the text `Mainnet`, `Testnet` or `Devnet`
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkTagValidator;

impl Validator for NetworkTagValidator {
    type Output = Network;

    fn validate(&self, value: &ConfigValue) -> ValidationResult<Network> {
        match value {
            ConfigValue::Text(text) => text.parse(),
            other => Err(ValidationError::InvalidTag {
                found: format!("<{}>", other.kind()),
            }),
        }
    }
}

/// Whether `text` is one of the recognized network tags
pub fn is_network_tag(text: &str) -> bool {
    text.parse::<Network>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(
            NetworkTagValidator.validate(&ConfigValue::text("Testnet")),
            Ok(Network::Testnet)
        );
        assert!(is_network_tag("Devnet"));
        assert!(!is_network_tag("devnet"));
        assert!(!is_network_tag("Regtest"));
    }

    #[test]
    fn test_non_text_is_rejected() {
        assert_eq!(
            NetworkTagValidator.validate(&ConfigValue::bytes(b"Mainnet".to_vec())),
            Err(ValidationError::InvalidTag {
                found: "<bytes>".to_string()
            })
        );
        assert!(NetworkTagValidator.validate(&ConfigValue::Integer(0)).is_err());
    }
}
