use crate::codec::value_kind;
use crate::error::{Error, Result};
use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use serde_json::Value;

const TRUTHY: [&str; 4] = ["Yes", "yes", "True", "true"];
const FALSY: [&str; 4] = ["No", "no", "False", "false"];

/// A boolean that remembers whether it was provided at all.
///
/// Ansible hands module booleans over as native JSON booleans, as
/// `"yes"`/`"no"` style strings, or not at all. `Unset` keeps "not provided"
/// apart from an explicit `false`.
///
/// Fields of this type need `#[serde(default)]` so a missing key decodes to
/// `Unset`, and usually `#[serde(skip_serializing_if = "Bool::is_unset")]`
/// because the encoder always writes a plain boolean.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Bool {
    #[default]
    Unset,
    Set(bool),
}

impl Bool {
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Bool::Unset),
            Value::Bool(flag) => Ok(Bool::Set(*flag)),
            Value::String(literal) => Self::from_literal(literal),
            other => Err(Error::type_mismatch(format!(
                "Invalid value, needs to be a boolean or a truthy/falsy string, was {}",
                value_kind(other)
            ))),
        }
    }

    pub fn from_literal(literal: &str) -> Result<Self> {
        if TRUTHY.contains(&literal) {
            Ok(Bool::Set(true))
        } else if FALSY.contains(&literal) {
            Ok(Bool::Set(false))
        } else if literal.is_empty() {
            Ok(Bool::Unset)
        } else {
            Err(Error::invalid_value(format!(
                "Invalid value, needs to be truthy or falsy: {literal}"
            )))
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Bool::Set(_))
    }

    pub fn is_unset(&self) -> bool {
        !self.is_set()
    }

    pub fn get(self) -> Option<bool> {
        match self {
            Bool::Set(flag) => Some(flag),
            Bool::Unset => None,
        }
    }

    /// The encoded value: `false` when unset.
    pub fn value(self) -> bool {
        self.unwrap_or(false)
    }

    pub fn unwrap_or(self, default: bool) -> bool {
        self.get().unwrap_or(default)
    }

    pub fn is_true(self) -> bool {
        self == Bool::Set(true)
    }
}

impl From<bool> for Bool {
    fn from(flag: bool) -> Self {
        Bool::Set(flag)
    }
}

impl From<Option<bool>> for Bool {
    fn from(flag: Option<bool>) -> Self {
        flag.map_or(Bool::Unset, Bool::Set)
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.value())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Bool::from_value(&value).map_err(de::Error::custom)
    }
}
