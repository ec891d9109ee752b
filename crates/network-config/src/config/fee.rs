//! Fee policy carried by a network configuration.
//!
//! Network validators treat this as an opaque value: they only ask
//! [`crate::validation::FeeConfigValidator`] whether it is acceptable.

use super::fields;
use crate::error::{ValidationError, ValidationResult};
use crate::validation::{FeeConfigValidator, Validator};
use crate::value::ConfigValue;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeAlgorithm {
    LinearFee,
}

impl FeeAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeAlgorithm::LinearFee => "LinearFee",
        }
    }
}

impl fmt::Display for FeeAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FeeAlgorithm {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LinearFee" => Ok(FeeAlgorithm::LinearFee),
            _ => Err(ValidationError::InvalidFeeConfig(format!(
                "Unknown fee algorithm: {}",
                s
            ))),
        }
    }
}

/// Fee policy: `fee = constant + coefficient * size`.
///
/// Both terms are non-negative decimal strings. Values only come from
/// [`FeeConfig::linear`] or the fee validator, so every `FeeConfig` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigValue", into = "ConfigValue")]
pub struct FeeConfig {
    algorithm: FeeAlgorithm,
    constant: String,
    coefficient: String,
}

impl FeeConfig {
    pub fn linear(
        constant: impl Into<String>,
        coefficient: impl Into<String>,
    ) -> ValidationResult<Self> {
        let constant = decimal(fields::CONSTANT, constant.into())?;
        let coefficient = decimal(fields::COEFFICIENT, coefficient.into())?;
        Ok(Self::linear_unchecked(constant, coefficient))
    }

    /// Callers must have checked both terms with [`is_decimal`].
    pub(crate) fn linear_unchecked(constant: impl Into<String>, coefficient: impl Into<String>) -> Self {
        Self {
            algorithm: FeeAlgorithm::LinearFee,
            constant: constant.into(),
            coefficient: coefficient.into(),
        }
    }

    pub fn algorithm(&self) -> FeeAlgorithm {
        self.algorithm
    }

    pub fn constant(&self) -> &str {
        &self.constant
    }

    pub fn coefficient(&self) -> &str {
        &self.coefficient
    }
}

pub(crate) fn decimal(field: &str, text: String) -> ValidationResult<String> {
    if !is_decimal(&text) {
        return Err(ValidationError::InvalidFeeConfig(format!(
            "Expected `{}` to be a non-negative decimal, got `{}`",
            field, text
        )));
    }
    Ok(text)
}

// Digits with at most one interior point: "1", "1.25", "0.001".
pub(crate) fn is_decimal(text: &str) -> bool {
    let mut parts = text.splitn(2, '.');
    let digits = |part: Option<&str>| {
        part.map_or(false, |p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
    };

    let whole = digits(parts.next());
    match parts.next() {
        None => whole,
        fraction => whole && digits(fraction),
    }
}

impl From<&FeeConfig> for ConfigValue {
    fn from(fee: &FeeConfig) -> Self {
        ConfigValue::record([
            (fields::ALGORITHM, ConfigValue::text(fee.algorithm.as_str())),
            (fields::CONSTANT, ConfigValue::text(fee.constant.clone())),
            (fields::COEFFICIENT, ConfigValue::text(fee.coefficient.clone())),
        ])
    }
}

impl From<FeeConfig> for ConfigValue {
    fn from(fee: FeeConfig) -> Self {
        ConfigValue::from(&fee)
    }
}

impl TryFrom<ConfigValue> for FeeConfig {
    type Error = ValidationError;

    fn try_from(value: ConfigValue) -> Result<Self, Self::Error> {
        FeeConfigValidator.validate(&value)
    }
}
