use crate::codec::value_kind;
use crate::error::{Error, Result};
use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

const PRESENT: &str = "present";
const ABSENT: &str = "absent";

/// The `state: present|absent` convention, as a boolean (present is `true`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum State {
    Present,
    Absent,
}

impl State {
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(literal) => Self::from_literal(literal),
            other => Err(Error::type_mismatch(format!(
                "State should be a string, was {}",
                value_kind(other)
            ))),
        }
    }

    pub fn from_literal(literal: &str) -> Result<Self> {
        match literal {
            PRESENT => Ok(State::Present),
            ABSENT => Ok(State::Absent),
            _ => Err(Error::invalid_value(format!(
                "State should be absent or present, was {literal}"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            State::Present => PRESENT,
            State::Absent => ABSENT,
        }
    }

    pub fn is_present(self) -> bool {
        self == State::Present
    }
}

impl From<bool> for State {
    fn from(present: bool) -> Self {
        if present {
            State::Present
        } else {
            State::Absent
        }
    }
}

impl From<State> for bool {
    fn from(state: State) -> Self {
        state.is_present()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for State {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for State {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        State::from_value(&value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::State;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn decodes_both_tokens() {
        assert!(bool::from(State::from_value(&json!("present")).unwrap()));
        assert!(!bool::from(State::from_value(&json!("absent")).unwrap()));
    }

    #[test]
    fn rejects_other_tokens() {
        for literal in ["gugus", "", "Present", "ABSENT"] {
            let err = State::from_value(&json!(literal)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidValue);
            assert_eq!(
                err.to_string(),
                format!("State should be absent or present, was {literal}")
            );
        }
    }

    #[test]
    fn rejects_non_strings() {
        let err = State::from_value(&json!(true)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn bool_round_trip() {
        for flag in [true, false] {
            let encoded = serde_json::to_value(State::from(flag)).unwrap();
            let decoded: State = serde_json::from_value(encoded).unwrap();
            assert_eq!(bool::from(decoded), flag);
        }
    }

    #[test]
    fn token_round_trip() {
        for token in ["present", "absent"] {
            let decoded: State = serde_json::from_value(json!(token)).unwrap();
            assert_eq!(serde_json::to_value(decoded).unwrap(), json!(token));
            assert_eq!(decoded.to_string(), token);
        }
    }
}
