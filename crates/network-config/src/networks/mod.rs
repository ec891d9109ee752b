//! Network tags and network-specific configuration presets

pub mod devnet;
pub mod mainnet;
pub mod testnet;

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The networks a client can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    Mainnet,
    Testnet,
    Devnet,
}

impl Network {
    /// Variants in the order the top-level validator tries them
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Testnet, Network::Devnet];

    /// The exact tag text carried in the `name` field
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Testnet => "Testnet",
            Network::Devnet => "Devnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Network {
    type Err = ValidationError;

    // Tags are matched exactly: no case folding, no trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mainnet" => Ok(Network::Mainnet),
            "Testnet" => Ok(Network::Testnet),
            "Devnet" => Ok(Network::Devnet),
            _ => Err(ValidationError::InvalidTag {
                found: s.to_string(),
            }),
        }
    }
}

// Values shared by more than one preset
pub(crate) const LINEAR_FEE_CONSTANT: &str = "1.1";
pub(crate) const LINEAR_FEE_COEFFICIENT: &str = "1.25";
pub(crate) const TEST_BIP44_PATH: &str = "m/44'/1'/0'/0/0";

// Re-export network configurations
pub use devnet::devnet_config;
pub use mainnet::mainnet_config;
pub use testnet::testnet_config;
