use super::{Network, TEST_BIP44_PATH};
use crate::config::{DevnetOptions, NetworkConfig, NetworkParams};

/// Create a custom development network configuration.
///
/// The chain id and fee policy come from `options`; the address prefix and
/// derivation path are fixed for every Devnet.
pub fn devnet_config(options: DevnetOptions) -> NetworkConfig {
    NetworkConfig::new(
        Network::Devnet,
        NetworkParams::new_unchecked(
            options.chain_hex_id,
            "dcro",
            TEST_BIP44_PATH,
            options.fee_config,
        ),
    )
}
