use network_config::{
    devnet_config, parse_chain_id, ChainId, ChainIdTextValidator, ConfigValue, DevnetOptions,
    FeeConfig, Network, NetworkConfig, NetworkParams, ValidationError, Validator,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn chain_id_text_of_wrong_length_is_rejected(text in "[0-9a-fA-F]{0,1}|[0-9a-fA-F]{3,8}") {
        prop_assert_eq!(
            ChainIdTextValidator.validate(&ConfigValue::text(text)),
            Err(ValidationError::InvalidChainId)
        );
    }

    #[test]
    fn chain_id_text_with_non_hex_char_is_rejected(text in "[g-zG-Z][0-9a-f]|[0-9a-f][g-zG-Z]") {
        prop_assert_eq!(
            parse_chain_id(&ConfigValue::text(text)),
            Err(ValidationError::InvalidChainId)
        );
    }

    #[test]
    fn chain_id_bytes_other_than_one_byte_are_rejected(
        bytes in prop::collection::vec(any::<u8>(), 0..16).prop_filter("not one byte", |b| b.len() != 1)
    ) {
        prop_assert_eq!(
            parse_chain_id(&ConfigValue::bytes(bytes)),
            Err(ValidationError::InvalidChainId)
        );
    }

    #[test]
    fn devnet_options_accept_either_form(byte in any::<u8>(), upper in any::<bool>()) {
        let text = if upper {
            hex::encode_upper([byte])
        } else {
            hex::encode([byte])
        };
        let options = |chain_hex_id: ConfigValue| {
            ConfigValue::record([
                ("feeConfig", ConfigValue::from(&FeeConfig::linear("1", "1").unwrap())),
                ("chainHexId", chain_hex_id),
            ])
        };

        let from_text = DevnetOptions::parse(&options(ConfigValue::text(text))).unwrap();
        let from_bytes = DevnetOptions::parse(&options(ConfigValue::bytes(vec![byte]))).unwrap();
        prop_assert_eq!(&from_text, &from_bytes);
        prop_assert_eq!(from_text.chain_hex_id, ChainId::new(byte));
    }

    #[test]
    fn constructed_configs_survive_validation(
        byte in any::<u8>(),
        constant in "[0-9]{1,4}(\\.[0-9]{1,4})?",
        coefficient in "[0-9]{1,4}(\\.[0-9]{1,4})?",
        address_prefix in "[a-z]{1,8}",
        bip44_path in "m(/[0-9]{1,3}'?){1,5}",
        network in prop::sample::select(Network::ALL.to_vec()),
    ) {
        let fee = FeeConfig::linear(constant, coefficient).unwrap();
        prop_assert_eq!(
            FeeConfig::try_from(ConfigValue::from(&fee)),
            Ok(fee.clone())
        );

        let options = DevnetOptions::new(fee.clone(), ChainId::new(byte));
        prop_assert_eq!(DevnetOptions::parse(&ConfigValue::from(&options)), Ok(options.clone()));

        let devnet = devnet_config(options);
        prop_assert_eq!(NetworkConfig::parse(&ConfigValue::from(&devnet)), Ok(devnet.clone()));

        let params = NetworkParams::new(ChainId::new(byte), address_prefix, bip44_path, fee).unwrap();
        let config = NetworkConfig::new(network, params);
        prop_assert_eq!(NetworkConfig::parse(&ConfigValue::from(&config)), Ok(config.clone()));

        let json = serde_json::to_string(&config).unwrap();
        prop_assert_eq!(serde_json::from_str::<NetworkConfig>(&json).unwrap(), config);
    }

    #[test]
    fn invalid_fee_terms_cannot_be_constructed(term in "-[0-9]{1,3}|[0-9]*[a-z][0-9a-z]*|\\.[0-9]{1,3}") {
        prop_assert!(FeeConfig::linear(term.clone(), "1").is_err());
        prop_assert!(FeeConfig::linear("1", term).is_err());
    }
}
