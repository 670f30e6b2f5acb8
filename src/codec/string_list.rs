use crate::codec::value_kind;
use crate::error::{Error, Result};
use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::ops::Deref;

/// A list of strings that Ansible may also send as a single bare string.
///
/// Encoding mirrors Ansible's habit of emitting scalars for single values:
/// no elements become `""`, one element becomes that string, anything longer
/// stays an array.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct StringList(Vec<String>);

impl StringList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::String(item) => Ok(Self(vec![item.clone()])),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(text) => Ok(text.clone()),
                    other => Err(Error::type_mismatch(format!(
                        "List element was not a string, was {}",
                        value_kind(other)
                    ))),
                })
                .collect::<Result<Vec<_>>>()
                .map(Self),
            other => Err(Error::type_mismatch(format!(
                "Input should be string or list of strings, was {}",
                value_kind(other)
            ))),
        }
    }

    pub fn to_value(&self) -> Value {
        match self.0.as_slice() {
            [] => Value::String(String::new()),
            [single] => Value::String(single.clone()),
            items => Value::Array(items.iter().cloned().map(Value::String).collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, item: impl Into<String>) {
        self.0.push(item.into());
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Deref for StringList {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for StringList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

impl From<&str> for StringList {
    fn from(item: &str) -> Self {
        Self(vec![item.to_string()])
    }
}

impl FromIterator<String> for StringList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for StringList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StringList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for StringList {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0.as_slice() {
            [] => serializer.serialize_str(""),
            [single] => serializer.serialize_str(single),
            items => items.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for StringList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        StringList::from_value(&value).map_err(de::Error::custom)
    }
}
