//! Purpose: Serde codecs for the loosely typed values Ansible writes into argument files.
//! Exports: `Bool`, `StringList`, `State`, `value_kind`.
//! Role: Each codec exposes an explicit `from_value` decoder over `serde_json::Value`;
//! the serde impls delegate to it so struct fields decode the same way.
//! Invariants: Decoding never coerces silently; unknown literals and wrong JSON kinds are errors.
//! Invariants: Encoding is total and never fails.
use serde_json::Value;

mod flex_bool;
mod state;
mod string_list;

pub use flex_bool::Bool;
pub use state::State;
pub use string_list::StringList;

/// Name of the JSON kind of `value`, as used in type mismatch messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::value_kind;
    use serde_json::json;

    #[test]
    fn value_kind_names_every_variant() {
        let cases = [
            (json!(null), "null"),
            (json!(true), "boolean"),
            (json!(1.5), "number"),
            (json!("x"), "string"),
            (json!([1]), "array"),
            (json!({"a": 1}), "object"),
        ];
        for (value, kind) in cases {
            assert_eq!(value_kind(&value), kind);
        }
    }
}
