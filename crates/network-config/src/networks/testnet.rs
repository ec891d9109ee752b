use super::{Network, LINEAR_FEE_COEFFICIENT, LINEAR_FEE_CONSTANT, TEST_BIP44_PATH};
use crate::config::{ChainId, FeeConfig, NetworkConfig, NetworkParams};

/// Create test network configuration
pub fn testnet_config() -> NetworkConfig {
    NetworkConfig::new(
        Network::Testnet,
        NetworkParams::new_unchecked(
            ChainId::new(0x42),
            "tcro",
            TEST_BIP44_PATH,
            FeeConfig::linear_unchecked(LINEAR_FEE_CONSTANT, LINEAR_FEE_COEFFICIENT),
        ),
    )
}
