use crate::{error::RuntimeError, interpreter::value::core::Value};

/// A hash-map key.
///
/// Only integers, booleans and strings are hashable; every other value is
/// rejected at insertion or lookup time. Keys of different kinds never
/// collide: `1` and `"1"` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    /// An integer key.
    Integer(i64),
    /// A boolean key.
    Boolean(bool),
    /// A string key.
    String(String),
}

impl TryFrom<&Value> for HashKey {
    type Error = RuntimeError;

    /// Converts a runtime value into a hash-map key, or fails with the
    /// unusable-as-hash-key error for values that are not hashable.
    fn try_from(value: &Value) -> Result<Self, RuntimeError> {
        match value {
            Value::Integer(value) => Ok(Self::Integer(*value)),
            Value::Boolean(value) => Ok(Self::Boolean(*value)),
            Value::String(value) => Ok(Self::String(value.clone())),
            other => Err(RuntimeError::UnusableAsHashKey {
                kind: other.type_name(),
            }),
        }
    }
}
