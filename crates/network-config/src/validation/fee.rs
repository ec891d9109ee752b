use super::{expect_exact_shape, non_empty_text, required_field, Validator};
use crate::config::fields;
use crate::config::fee;
use crate::config::{FeeAlgorithm, FeeConfig};
use crate::error::{ValidationError, ValidationResult};
use crate::value::ConfigValue;

/// Validates a fee policy record.
///
/// Every failure is reported as [`ValidationError::InvalidFeeConfig`] so
/// embedding validators can pass it through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeeConfigValidator;

impl Validator for FeeConfigValidator {
    type Output = FeeConfig;

    fn validate(&self, value: &ConfigValue) -> ValidationResult<FeeConfig> {
        parse_fee_config(value).map_err(|e| match e {
            ValidationError::InvalidFeeConfig(_) => e,
            other => ValidationError::InvalidFeeConfig(other.to_string()),
        })
    }
}

fn parse_fee_config(value: &ConfigValue) -> ValidationResult<FeeConfig> {
    let record = expect_exact_shape(
        value,
        &[fields::ALGORITHM, fields::CONSTANT, fields::COEFFICIENT],
    )?;

    let algorithm = required_field(record, fields::ALGORITHM)?;
    let algorithm: FeeAlgorithm = algorithm
        .as_text()
        .ok_or(ValidationError::InvalidFieldType {
            field: fields::ALGORITHM.to_string(),
            expected: "text",
            found: algorithm.kind(),
        })?
        .parse()?;

    let constant = decimal(record, fields::CONSTANT)?;
    let coefficient = decimal(record, fields::COEFFICIENT)?;
    match algorithm {
        FeeAlgorithm::LinearFee => Ok(FeeConfig::linear_unchecked(constant, coefficient)),
    }
}

fn decimal(
    record: &std::collections::BTreeMap<String, ConfigValue>,
    field: &str,
) -> ValidationResult<String> {
    fee::decimal(field, non_empty_text(record, field)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fee(algorithm: &str, constant: &str, coefficient: &str) -> ConfigValue {
        ConfigValue::record([
            ("algorithm", ConfigValue::text(algorithm)),
            ("constant", ConfigValue::text(constant)),
            ("coefficient", ConfigValue::text(coefficient)),
        ])
    }

    #[test]
    fn test_linear_fee() {
        let parsed = FeeConfigValidator.validate(&fee("LinearFee", "1.1", "1.25")).unwrap();
        assert_eq!(parsed, FeeConfig::linear("1.1", "1.25").unwrap());
    }

    #[test]
    fn test_every_failure_is_a_fee_error() {
        let cases = vec![
            fee("QuadraticFee", "1", "1"),
            fee("LinearFee", "-1", "1"),
            fee("LinearFee", "1", ""),
            fee("LinearFee", "1", "1").with_field("extra", ConfigValue::Bool(true)),
            fee("LinearFee", "1", "1").without_field("constant"),
            ConfigValue::text("LinearFee"),
        ];

        for case in cases {
            assert!(matches!(
                FeeConfigValidator.validate(&case),
                Err(ValidationError::InvalidFeeConfig(_))
            ));
        }
    }
}
