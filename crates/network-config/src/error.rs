use crate::networks::Network;
use thiserror::Error;

/// Reasons a candidate configuration value is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `found` is the rejected text, or `<kind>` for a non-text value
    #[error("Expected value to be one of the network variants (Mainnet, Testnet, Devnet)")]
    InvalidTag { found: String },

    #[error("Expected exact shape: missing fields [{}], unexpected fields [{}]", .missing.join(", "), .unexpected.join(", "))]
    ShapeMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("Expected network name to be {expected}")]
    TagInconsistent { expected: Network },

    #[error("Expected value to be two hex characters of chain Id")]
    InvalidChainId,

    #[error("Invalid fee configuration: {0}")]
    InvalidFeeConfig(String),

    #[error("Expected value to be a network configuration of one of the network variants (Mainnet, Testnet, Devnet): {}", format_failures(.failures))]
    NoVariantMatched {
        failures: Vec<(Network, ValidationError)>,
    },

    #[error("Expected value to be a record, got {found}")]
    NotARecord { found: &'static str },

    #[error("Expected `{field}` to be {expected}, got {found}")]
    InvalidFieldType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Expected `{0}` to be non-empty")]
    EmptyField(String),

    #[error("Devnet configuration requires Devnet options")]
    MissingDevnetOptions,
}

fn format_failures(failures: &[(Network, ValidationError)]) -> String {
    failures
        .iter()
        .map(|(network, err)| format!("{}: {}", network, err))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result of validating a single candidate
pub type ValidationResult<T> = Result<T, ValidationError>;
