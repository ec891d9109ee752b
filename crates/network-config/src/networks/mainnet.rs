use super::{Network, LINEAR_FEE_COEFFICIENT, LINEAR_FEE_CONSTANT};
use crate::config::{ChainId, FeeConfig, NetworkConfig, NetworkParams};

/// Create main network configuration
pub fn mainnet_config() -> NetworkConfig {
    NetworkConfig::new(
        Network::Mainnet,
        NetworkParams::new_unchecked(
            ChainId::new(0x2a),
            "cro",
            "m/44'/394'/0'/0/0",
            FeeConfig::linear_unchecked(LINEAR_FEE_CONSTANT, LINEAR_FEE_COEFFICIENT),
        ),
    )
}
