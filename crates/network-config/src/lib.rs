//! Network Configuration Validation
//!
//! This crate models the network a client targets (Mainnet, Testnet or a
//! custom Devnet) and validates untyped configuration values into that
//! model before they reach signing, transaction-building or networking code.

pub mod config;
pub mod error;
pub mod networks;
pub mod validation;
pub mod value;

// Re-exports for convenience
pub use config::{ChainId, DevnetOptions, FeeAlgorithm, FeeConfig, NetworkConfig, NetworkParams};
pub use validation::{
    expect_exact_shape, is_network_tag, parse_chain_id, ChainIdBytesValidator,
    ChainIdTextValidator, ChainIdValidator, DevnetOptionsValidator, FeeConfigValidator,
    NetworkConfigValidator, NetworkTagValidator, Validator, VariantValidator,
};
pub use value::ConfigValue;

// Re-export main types
pub use error::{ValidationError, ValidationResult};

// Re-export network presets
pub use networks::{devnet_config, mainnet_config, testnet_config, Network};
