//! Purpose: Minimal playbook document for driving a module through `ansible-playbook`.
//! Exports: `Playbook`, `task`.
//! Role: Test-harness helper; builds a localhost play that calls one or more modules.
//! Invariants: Keys match the playbook schema, `become` included.
//! Invariants: Rendered output is a one-play list, valid as both JSON and YAML.
use crate::error::{Error, ErrorKind, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Playbook {
    pub name: String,
    pub connection: String,
    pub hosts: String,
    pub tasks: Value,
    #[serde(default)]
    pub environment: Map<String, Value>,
    #[serde(default)]
    pub r#become: bool,
}

impl Playbook {
    /// A play against `localhost` over the local connection.
    pub fn local(name: impl Into<String>, tasks: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            connection: "local".to_string(),
            hosts: "localhost".to_string(),
            tasks: Value::Array(tasks),
            environment: Map::new(),
            r#become: false,
        }
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.environment.insert(key.into(), value.into());
        self
    }

    pub fn with_become(mut self, escalate: bool) -> Self {
        self.r#become = escalate;
        self
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&[self]).map_err(|err| {
            Error::new(ErrorKind::Serialization)
                .with_message("could not render playbook")
                .with_source(err)
        })
    }
}

/// One task calling `module` with `args`.
pub fn task(module: &str, args: Value) -> Value {
    let mut map = Map::new();
    map.insert("name".to_string(), json!(format!("run {module}")));
    map.insert(module.to_string(), args);
    Value::Object(map)
}
