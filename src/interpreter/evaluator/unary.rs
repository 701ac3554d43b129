use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a prefix operator applied to an already-evaluated operand.
pub(crate) fn eval_prefix_expression(
    operator: PrefixOperator,
    right: &Value,
) -> EvalResult<Value> {
    match operator {
        PrefixOperator::Not => Ok(eval_not_operator(right)),
        PrefixOperator::Negate => eval_negate_operator(right),
    }
}

/// Logical negation, defined for every value: the two booleans invert,
/// `null` negates to `true`, and everything else is truthy and negates to
/// `false`.
fn eval_not_operator(value: &Value) -> Value {
    match value {
        Value::Boolean(value) => Value::Boolean(!value),
        Value::Null => Value::Boolean(true),
        _ => Value::Boolean(false),
    }
}

/// Arithmetic negation, defined only for integers.
fn eval_negate_operator(value: &Value) -> EvalResult<Value> {
    match value {
        Value::Integer(value) => Ok(Value::Integer(-value)),
        other => Err(RuntimeError::UnknownPrefixOperator {
            operator: PrefixOperator::Negate,
            operand: other.type_name(),
        }),
    }
}
