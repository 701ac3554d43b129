use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            core::{HashPair, Value},
            hash_key::HashKey,
        },
    },
};

/// Evaluates an index expression against already-evaluated operands.
///
/// Arrays are indexed by integers, hash maps by any hashable value. Every
/// other target type rejects the index operator.
pub(crate) fn eval_index_expression(left: &Value, index: &Value) -> EvalResult<Value> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(index)) => {
            Ok(eval_array_index(elements, *index))
        }
        (Value::Hash(pairs), index) => eval_hash_index(pairs, index),
        (other, _) => Err(RuntimeError::IndexNotSupported {
            kind: other.type_name(),
        }),
    }
}

/// Array indexing. Out-of-bounds access (negative or past the end) yields
/// `Null` rather than an error.
fn eval_array_index(elements: &[Value], index: i64) -> Value {
    usize::try_from(index)
        .ok()
        .and_then(|index| elements.get(index))
        .cloned()
        .unwrap_or(Value::Null)
}

/// Hash-map lookup. The index value must be hashable; a missing key yields
/// `Null`.
fn eval_hash_index(pairs: &HashMap<HashKey, HashPair>, index: &Value) -> EvalResult<Value> {
    let key = HashKey::try_from(index)?;

    Ok(pairs
        .get(&key)
        .map_or(Value::Null, |pair| pair.value.clone()))
}
