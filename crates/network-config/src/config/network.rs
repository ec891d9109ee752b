use super::{fields, ChainId, DevnetOptions, FeeConfig};
use crate::error::{ValidationError, ValidationResult};
use crate::networks::{self, Network};
use crate::validation::{NetworkConfigValidator, Validator};
use crate::value::ConfigValue;
use serde::{Deserialize, Serialize};

/// Settings every network variant carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkParams {
    /// One-byte chain identifier, always stored in binary form
    chain_hex_id: ChainId,

    /// Bech32 human-readable prefix for addresses
    address_prefix: String,

    /// HD derivation path for this network
    bip44_path: String,

    /// Default fee policy
    fee_config: FeeConfig,
}

impl NetworkParams {
    /// Both text settings must be non-empty.
    pub fn new(
        chain_hex_id: ChainId,
        address_prefix: impl Into<String>,
        bip44_path: impl Into<String>,
        fee_config: FeeConfig,
    ) -> ValidationResult<Self> {
        let address_prefix = non_empty(fields::ADDRESS_PREFIX, address_prefix.into())?;
        let bip44_path = non_empty(fields::BIP44_PATH, bip44_path.into())?;
        Ok(Self {
            chain_hex_id,
            address_prefix,
            bip44_path,
            fee_config,
        })
    }

    /// Callers must pass non-empty text settings.
    pub(crate) fn new_unchecked(
        chain_hex_id: ChainId,
        address_prefix: &str,
        bip44_path: &str,
        fee_config: FeeConfig,
    ) -> Self {
        Self {
            chain_hex_id,
            address_prefix: address_prefix.to_string(),
            bip44_path: bip44_path.to_string(),
            fee_config,
        }
    }

    pub fn chain_hex_id(&self) -> ChainId {
        self.chain_hex_id
    }

    pub fn address_prefix(&self) -> &str {
        &self.address_prefix
    }

    pub fn bip44_path(&self) -> &str {
        &self.bip44_path
    }

    pub fn fee_config(&self) -> &FeeConfig {
        &self.fee_config
    }
}

fn non_empty(field: &str, text: String) -> ValidationResult<String> {
    if text.is_empty() {
        return Err(ValidationError::EmptyField(field.to_string()));
    }
    Ok(text)
}

/// Configuration of the network a client targets.
///
/// The variant is the network tag, so a value can never carry a name that
/// disagrees with its shape. Deserialization goes through
/// [`NetworkConfigValidator`], so serialized input gets the same checks as
/// any other untyped value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigValue", into = "ConfigValue")]
pub enum NetworkConfig {
    Mainnet(NetworkParams),
    Testnet(NetworkParams),
    Devnet(NetworkParams),
}

impl NetworkConfig {
    pub fn new(network: Network, params: NetworkParams) -> Self {
        match network {
            Network::Mainnet => NetworkConfig::Mainnet(params),
            Network::Testnet => NetworkConfig::Testnet(params),
            Network::Devnet => NetworkConfig::Devnet(params),
        }
    }

    /// Preset configuration for a network. Devnet has no fixed chain id or
    /// fee policy, so it is built from `devnet_options`.
    pub fn for_network(
        network: Network,
        devnet_options: Option<DevnetOptions>,
    ) -> ValidationResult<Self> {
        match network {
            Network::Mainnet => Ok(networks::mainnet_config()),
            Network::Testnet => Ok(networks::testnet_config()),
            Network::Devnet => devnet_options
                .map(networks::devnet_config)
                .ok_or(ValidationError::MissingDevnetOptions),
        }
    }

    /// Validate an untyped value into a network configuration
    pub fn parse(value: &ConfigValue) -> ValidationResult<Self> {
        NetworkConfigValidator.validate(value)
    }

    /// Like [`NetworkConfig::parse`], but an absent value is accepted
    pub fn parse_optional(value: Option<&ConfigValue>) -> ValidationResult<Option<Self>> {
        NetworkConfigValidator.validate_optional(value)
    }

    pub fn name(&self) -> Network {
        match self {
            NetworkConfig::Mainnet(_) => Network::Mainnet,
            NetworkConfig::Testnet(_) => Network::Testnet,
            NetworkConfig::Devnet(_) => Network::Devnet,
        }
    }

    pub fn params(&self) -> &NetworkParams {
        match self {
            NetworkConfig::Mainnet(params)
            | NetworkConfig::Testnet(params)
            | NetworkConfig::Devnet(params) => params,
        }
    }

    pub fn into_params(self) -> NetworkParams {
        match self {
            NetworkConfig::Mainnet(params)
            | NetworkConfig::Testnet(params)
            | NetworkConfig::Devnet(params) => params,
        }
    }

    pub fn chain_hex_id(&self) -> ChainId {
        self.params().chain_hex_id()
    }

    pub fn address_prefix(&self) -> &str {
        self.params().address_prefix()
    }

    pub fn bip44_path(&self) -> &str {
        self.params().bip44_path()
    }

    pub fn fee_config(&self) -> &FeeConfig {
        self.params().fee_config()
    }
}

impl From<&NetworkConfig> for ConfigValue {
    fn from(config: &NetworkConfig) -> Self {
        let params = config.params();
        ConfigValue::record([
            (fields::NAME, ConfigValue::text(config.name().as_str())),
            (fields::CHAIN_HEX_ID, ConfigValue::from(params.chain_hex_id)),
            (fields::ADDRESS_PREFIX, ConfigValue::text(params.address_prefix.clone())),
            (fields::BIP44_PATH, ConfigValue::text(params.bip44_path.clone())),
            (fields::FEE_CONFIG, ConfigValue::from(&params.fee_config)),
        ])
    }
}

impl From<NetworkConfig> for ConfigValue {
    fn from(config: NetworkConfig) -> Self {
        ConfigValue::from(&config)
    }
}

impl TryFrom<ConfigValue> for NetworkConfig {
    type Error = ValidationError;

    fn try_from(value: ConfigValue) -> Result<Self, Self::Error> {
        NetworkConfig::parse(&value.with_binary_field(fields::CHAIN_HEX_ID))
    }
}
