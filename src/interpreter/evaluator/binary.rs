use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates an infix operator against two already-evaluated operands.
///
/// Dispatch is type-directed: two integers support the full operator set,
/// two strings support concatenation, and booleans and `null` compare with
/// `==`/`!=` by value. Any other pairing fails, as a type mismatch when the
/// operand types differ and as an unknown operator when they agree.
pub(crate) fn eval_infix_expression(
    operator: InfixOperator,
    left: Value,
    right: Value,
) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(left), Value::Integer(right)) => {
            eval_integer_infix_expression(operator, left, right)
        }
        (Value::String(left), Value::String(right)) => {
            eval_string_infix_expression(operator, &left, &right)
        }
        (left, right) => {
            let by_value = matches!(
                (&left, &right),
                (Value::Boolean(_) | Value::Null, Value::Boolean(_) | Value::Null)
            );

            match operator {
                InfixOperator::Eq if by_value => Ok(Value::Boolean(left == right)),
                InfixOperator::NotEq if by_value => Ok(Value::Boolean(left != right)),
                _ if left.type_name() != right.type_name() => Err(RuntimeError::TypeMismatch {
                    left: left.type_name(),
                    operator,
                    right: right.type_name(),
                }),
                _ => Err(RuntimeError::UnknownInfixOperator {
                    left: left.type_name(),
                    operator,
                    right: right.type_name(),
                }),
            }
        }
    }
}

/// Integer arithmetic and comparison. `+ - *` use host 64-bit semantics;
/// division truncates toward zero and checks the divisor.
fn eval_integer_infix_expression(
    operator: InfixOperator,
    left: i64,
    right: i64,
) -> EvalResult<Value> {
    match operator {
        InfixOperator::Add => Ok(Value::Integer(left + right)),
        InfixOperator::Sub => Ok(Value::Integer(left - right)),
        InfixOperator::Mul => Ok(Value::Integer(left * right)),
        InfixOperator::Div => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(Value::Integer(left / right))
            }
        }
        InfixOperator::Lt => Ok(Value::Boolean(left < right)),
        InfixOperator::Gt => Ok(Value::Boolean(left > right)),
        InfixOperator::Eq => Ok(Value::Boolean(left == right)),
        InfixOperator::NotEq => Ok(Value::Boolean(left != right)),
    }
}

/// Strings support `+` (concatenation) and nothing else.
fn eval_string_infix_expression(
    operator: InfixOperator,
    left: &str,
    right: &str,
) -> EvalResult<Value> {
    match operator {
        InfixOperator::Add => Ok(Value::String(format!("{left}{right}"))),
        _ => Err(RuntimeError::UnknownInfixOperator {
            left: "STRING",
            operator,
            right: "STRING",
        }),
    }
}
