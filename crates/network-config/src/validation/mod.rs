//! Validators that turn untyped [`ConfigValue`]s into typed configuration.
//!
//! Every validator is stateless: a call either returns the typed value or
//! the error naming the violated constraint. Callers must not proceed on
//! error.

pub mod chain_id;
pub mod devnet;
pub mod fee;
pub mod network;
pub mod tag;

pub use chain_id::{parse_chain_id, ChainIdBytesValidator, ChainIdTextValidator, ChainIdValidator};
pub use devnet::DevnetOptionsValidator;
pub use fee::FeeConfigValidator;
pub use network::{NetworkConfigValidator, VariantValidator};
pub use tag::{is_network_tag, NetworkTagValidator};

use crate::error::{ValidationError, ValidationResult};
use crate::value::ConfigValue;
use std::collections::BTreeMap;

/// A runtime check that converts an untyped value into `Output`
pub trait Validator {
    type Output;

    fn validate(&self, value: &ConfigValue) -> ValidationResult<Self::Output>;

    /// Optional-value variant: an absent value is valid and yields `None`,
    /// a present value is checked exactly as by [`Validator::validate`].
    fn validate_optional(
        &self,
        value: Option<&ConfigValue>,
    ) -> ValidationResult<Option<Self::Output>> {
        value.map(|v| self.validate(v)).transpose()
    }
}

/// Require `value` to be a record whose field set is exactly `required`.
pub fn expect_exact_shape<'a>(
    value: &'a ConfigValue,
    required: &[&str],
) -> ValidationResult<&'a BTreeMap<String, ConfigValue>> {
    let record = value.as_record().ok_or(ValidationError::NotARecord {
        found: value.kind(),
    })?;

    let mut missing: Vec<String> = required
        .iter()
        .filter(|field| !record.contains_key(**field))
        .map(|field| field.to_string())
        .collect();
    missing.sort();

    let unexpected: Vec<String> = record
        .keys()
        .filter(|key| !required.contains(&key.as_str()))
        .cloned()
        .collect();

    if missing.is_empty() && unexpected.is_empty() {
        Ok(record)
    } else {
        Err(ValidationError::ShapeMismatch {
            missing,
            unexpected,
        })
    }
}

pub(crate) fn required_field<'a>(
    record: &'a BTreeMap<String, ConfigValue>,
    field: &str,
) -> ValidationResult<&'a ConfigValue> {
    record.get(field).ok_or_else(|| ValidationError::ShapeMismatch {
        missing: vec![field.to_string()],
        unexpected: Vec::new(),
    })
}

pub(crate) fn non_empty_text(
    record: &BTreeMap<String, ConfigValue>,
    field: &str,
) -> ValidationResult<String> {
    let value = required_field(record, field)?;
    let text = value.as_text().ok_or(ValidationError::InvalidFieldType {
        field: field.to_string(),
        expected: "text",
        found: value.kind(),
    })?;

    if text.is_empty() {
        return Err(ValidationError::EmptyField(field.to_string()));
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_shape_accepts_exact_field_set() {
        let value = ConfigValue::record([
            ("a", ConfigValue::from(1i64)),
            ("b", ConfigValue::from(2i64)),
        ]);
        let record = expect_exact_shape(&value, &["b", "a"]).unwrap();
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_exact_shape_reports_missing_and_unexpected() {
        let value = ConfigValue::record([
            ("a", ConfigValue::from(1i64)),
            ("z", ConfigValue::from(2i64)),
            ("y", ConfigValue::from(3i64)),
        ]);
        let err = expect_exact_shape(&value, &["c", "a", "b"]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ShapeMismatch {
                missing: vec!["b".to_string(), "c".to_string()],
                unexpected: vec!["y".to_string(), "z".to_string()],
            }
        );
    }

    #[test]
    fn test_exact_shape_requires_record() {
        let err = expect_exact_shape(&ConfigValue::text("a"), &["a"]).unwrap_err();
        assert_eq!(err, ValidationError::NotARecord { found: "text" });
    }

    #[test]
    fn test_non_empty_text() {
        let value = ConfigValue::record([
            ("ok", ConfigValue::from("cro")),
            ("empty", ConfigValue::from("")),
            ("bytes", ConfigValue::from(vec![1u8])),
        ]);
        let record = value.as_record().unwrap();

        assert_eq!(non_empty_text(record, "ok").unwrap(), "cro");
        assert_eq!(
            non_empty_text(record, "empty"),
            Err(ValidationError::EmptyField("empty".to_string()))
        );
        assert!(matches!(
            non_empty_text(record, "bytes"),
            Err(ValidationError::InvalidFieldType { found: "bytes", .. })
        ));
    }

    #[test]
    fn test_optional_variant_accepts_absent() {
        assert_eq!(NetworkTagValidator.validate_optional(None), Ok(None));
        assert_eq!(ChainIdValidator.validate_optional(None), Ok(None));
        assert_eq!(
            NetworkTagValidator.validate_optional(Some(&ConfigValue::text("Devnet"))),
            Ok(Some(crate::Network::Devnet))
        );
        assert!(ChainIdValidator
            .validate_optional(Some(&ConfigValue::text("abc")))
            .is_err());
    }
}
