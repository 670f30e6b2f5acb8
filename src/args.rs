//! Purpose: Typed view over an Ansible argument file.
//! Exports: `AnsibleArgs`, `ModuleArgs`, `parse_args`, `echo_args`, `RESERVED_PREFIX`.
//! Exports: `parse_value`, `args_from_value`, `echo_value` for callers that decode once.
//! Role: Splits one flat JSON object into the reserved `_ansible_*` namespace and
//! the module's own parameters; builds the echo for `invocation.module_args`.
//! Invariants: Every reserved field is optional and omitted when unset on re-encode.
//! Invariants: The socket handle is an opaque passthrough with no validation.
use crate::codec::{StringList, value_kind};
use crate::error::{Error, ErrorKind, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key prefix Ansible uses for the fields it injects into every argument file.
pub const RESERVED_PREFIX: &str = "_ansible_";

fn is_false(flag: &bool) -> bool {
    !*flag
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

/// Reserved arguments Ansible passes when invoking a module.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnsibleArgs {
    #[serde(rename = "_ansible_check_mode", skip_serializing_if = "is_false")]
    pub check_mode: bool,
    #[serde(rename = "_ansible_no_log", skip_serializing_if = "is_false")]
    pub no_log: bool,
    #[serde(rename = "_ansible_debug", skip_serializing_if = "is_false")]
    pub debug: bool,
    #[serde(rename = "_ansible_diff", skip_serializing_if = "is_false")]
    pub diff: bool,
    #[serde(rename = "_ansible_verbosity", skip_serializing_if = "is_zero")]
    pub verbosity: u32,
    #[serde(rename = "_ansible_version", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(
        rename = "_ansible_module_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub module_name: Option<String>,
    #[serde(
        rename = "_ansible_syslog_facility",
        skip_serializing_if = "Option::is_none"
    )]
    pub syslog_facility: Option<String>,
    #[serde(
        rename = "_ansible_se_linux_special_fs",
        alias = "_ansible_selinux_special_fs",
        skip_serializing_if = "StringList::is_empty"
    )]
    pub selinux_special_fs: StringList,
    #[serde(
        rename = "_ansible_string_conversion_action",
        skip_serializing_if = "Option::is_none"
    )]
    pub string_conversion_action: Option<String>,
    #[serde(rename = "_ansible_socket", skip_serializing_if = "Option::is_none")]
    pub socket: Option<Value>,
    #[serde(
        rename = "_ansible_shell_executable",
        skip_serializing_if = "Option::is_none"
    )]
    pub shell_executable: Option<String>,
    #[serde(
        rename = "_ansible_keep_remote_files",
        skip_serializing_if = "is_false"
    )]
    pub keep_remote_files: bool,
    #[serde(
        rename = "_ansible_tmp_dir",
        alias = "_ansible_tmpdir",
        skip_serializing_if = "Option::is_none"
    )]
    pub tmp_dir: Option<String>,
    #[serde(
        rename = "_ansible_remote_tmp",
        skip_serializing_if = "Option::is_none"
    )]
    pub remote_tmp: Option<String>,
}

impl AnsibleArgs {
    /// Whether module arguments may be echoed back in the response.
    pub fn echo_allowed(&self) -> bool {
        !self.no_log
    }
}

/// Reserved arguments plus the module's own parameters, decoded from the same object.
///
/// `P` is the module-defined parameter struct. Its fields use the codecs in
/// [`crate::codec`] for values Ansible may send loosely typed. Unknown keys are
/// ignored, so `P` does not see the reserved namespace.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleArgs<P> {
    #[serde(flatten)]
    pub ansible: AnsibleArgs,
    #[serde(flatten)]
    pub params: P,
}

/// Decode an argument file into reserved arguments and module parameters.
pub fn parse_args<P: DeserializeOwned>(input: &[u8]) -> Result<ModuleArgs<P>> {
    args_from_value(&parse_value(input)?)
}

/// The argument object with every reserved key removed.
pub fn echo_args(input: &[u8]) -> Result<Value> {
    echo_value(&parse_value(input)?)
}

/// Parse the argument file as untyped JSON.
pub fn parse_value(input: &[u8]) -> Result<Value> {
    serde_json::from_slice(input).map_err(map_decode_error)
}

/// Typed arguments from an already parsed argument file.
pub fn args_from_value<P: DeserializeOwned>(value: &Value) -> Result<ModuleArgs<P>> {
    ModuleArgs::deserialize(value).map_err(map_decode_error)
}

pub fn echo_value(value: &Value) -> Result<Value> {
    match value {
        Value::Object(map) => {
            let mut echo = map.clone();
            echo.retain(|key, _| !key.starts_with(RESERVED_PREFIX));
            Ok(Value::Object(echo))
        }
        other => Err(Error::type_mismatch(format!(
            "argument file should contain an object, was {}",
            value_kind(other)
        ))),
    }
}

fn map_decode_error(err: serde_json::Error) -> Error {
    match err.classify() {
        serde_json::error::Category::Data => Error::new(ErrorKind::InvalidValue)
            .with_message("invalid module arguments")
            .with_source(err),
        _ => Error::new(ErrorKind::Parse)
            .with_message("argument file is not valid JSON")
            .with_source(err),
    }
}
