//! Typed network configuration values
pub mod chain_id;
pub mod devnet;
pub mod fee;
pub mod network;

pub use chain_id::ChainId;
pub use devnet::DevnetOptions;
pub use fee::{FeeAlgorithm, FeeConfig};
pub use network::{NetworkConfig, NetworkParams};

/// Field names as they appear on untyped records
pub(crate) mod fields {
    pub const NAME: &str = "name";
    pub const CHAIN_HEX_ID: &str = "chainHexId";
    pub const ADDRESS_PREFIX: &str = "addressPrefix";
    pub const BIP44_PATH: &str = "bip44Path";
    pub const FEE_CONFIG: &str = "feeConfig";

    pub const ALGORITHM: &str = "algorithm";
    pub const CONSTANT: &str = "constant";
    pub const COEFFICIENT: &str = "coefficient";
}
