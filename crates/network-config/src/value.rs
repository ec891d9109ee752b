//! Untyped configuration values
//!
//! Configuration arrives from user input or deserialized data before it has
//! been checked. `ConfigValue` is that unchecked form; the validators in
//! [`crate::validation`] turn it into the typed model.

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An unchecked configuration value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Bool(bool),
    Integer(i64),
    Text(String),
    Bytes(Vec<u8>),
    List(Vec<ConfigValue>),
    Record(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    pub fn text(value: impl Into<String>) -> Self {
        ConfigValue::Text(value.into())
    }

    pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
        ConfigValue::Bytes(value.into())
    }

    /// Build a record from key/value pairs. Later keys overwrite earlier ones.
    pub fn record<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ConfigValue)>,
    {
        ConfigValue::Record(
            fields
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Short type name used in rejection messages
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Bool(_) => "bool",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Text(_) => "text",
            ConfigValue::Bytes(_) => "bytes",
            ConfigValue::List(_) => "list",
            ConfigValue::Record(_) => "record",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ConfigValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&BTreeMap<String, ConfigValue>> {
        match self {
            ConfigValue::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// Look up a field on a record value.
    pub fn get(&self, field: &str) -> Option<&ConfigValue> {
        self.as_record().and_then(|fields| fields.get(field))
    }

    /// Return a copy of this record with `field` set to `value`.
    /// Non-record values are returned unchanged.
    pub fn with_field(&self, field: &str, value: ConfigValue) -> Self {
        let mut copy = self.clone();
        if let ConfigValue::Record(fields) = &mut copy {
            fields.insert(field.to_string(), value);
        }
        copy
    }

    /// Serde formats without a bytes type (JSON among them) carry a byte as
    /// an integer and a byte string as a list of integers. Turn `field` back
    /// into `Bytes` when it has one of those shapes.
    pub fn with_binary_field(mut self, field: &str) -> Self {
        if let ConfigValue::Record(fields) = &mut self {
            if let Some(bytes) = fields.get(field).and_then(serde_bytes_of) {
                fields.insert(field.to_string(), ConfigValue::Bytes(bytes));
            }
        }
        self
    }

    /// Return a copy of this record without `field`.
    pub fn without_field(&self, field: &str) -> Self {
        let mut copy = self.clone();
        if let ConfigValue::Record(fields) = &mut copy {
            fields.remove(field);
        }
        copy
    }
}

fn serde_bytes_of(value: &ConfigValue) -> Option<Vec<u8>> {
    let byte = |value: &ConfigValue| match value {
        ConfigValue::Integer(i) => u8::try_from(*i).ok(),
        _ => None,
    };

    match value {
        ConfigValue::Integer(_) => byte(value).map(|b| vec![b]),
        ConfigValue::List(items) => items.iter().map(byte).collect(),
        _ => None,
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConfigValue::Bool(b) => serializer.serialize_bool(*b),
            ConfigValue::Integer(i) => serializer.serialize_i64(*i),
            ConfigValue::Text(s) => serializer.serialize_str(s),
            ConfigValue::Bytes(bytes) => serializer.serialize_bytes(bytes),
            ConfigValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ConfigValue::Record(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

struct ConfigValueVisitor;

impl<'de> Visitor<'de> for ConfigValueVisitor {
    type Value = ConfigValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a bool, integer, string, byte string, list or map")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ConfigValue, E> {
        i64::try_from(v)
            .map(ConfigValue::Integer)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Text(v))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Bytes(v.to_vec()))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Bytes(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ConfigValue, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(ConfigValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ConfigValue, A::Error> {
        let mut fields = BTreeMap::new();
        while let Some((key, value)) = map.next_entry::<String, ConfigValue>()? {
            fields.insert(key, value);
        }
        Ok(ConfigValue::Record(fields))
    }
}

impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ConfigValueVisitor)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Text(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Text(s)
    }
}

impl From<Vec<u8>> for ConfigValue {
    fn from(bytes: Vec<u8>) -> Self {
        ConfigValue::Bytes(bytes)
    }
}

impl From<&[u8]> for ConfigValue {
    fn from(bytes: &[u8]) -> Self {
        ConfigValue::Bytes(bytes.to_vec())
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Integer(i)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}
