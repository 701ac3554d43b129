/// Built-in functions reachable from every scope: `len`, `first`, `last`,
/// `rest`, `push` and `puts`.
pub mod builtin;

use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        environment::{Env, Environment},
        evaluator::core::{EvalResult, eval_block_statement, eval_expression, eval_expressions},
        value::core::{Function, Value},
    },
};

/// Evaluates a call expression: the callee first, then the arguments left
/// to right, then the application. An error in any argument aborts the
/// call before anything is applied.
pub(crate) fn eval_call_expression(
    function: &Expression,
    arguments: &[Expression],
    env: &Env,
) -> EvalResult<Value> {
    let function = eval_expression(function, env)?;
    let arguments = eval_expressions(arguments, env)?;

    apply_function(&function, arguments)
}

/// Applies a callable value to already-evaluated arguments.
///
/// User-defined functions run their body in a fresh environment enclosed by
/// the environment captured at definition time; that is the whole closure
/// mechanism. One `return` wrapper layer is unwrapped at this boundary.
/// Builtins receive the argument slice directly.
pub(crate) fn apply_function(function: &Value, arguments: Vec<Value>) -> EvalResult<Value> {
    match function {
        Value::Function(function) => {
            let env = extended_function_env(function, arguments);
            let result = eval_block_statement(&function.body, &env)?;
            Ok(unwrap_return(result))
        }
        Value::Builtin(builtin) => builtin.call(&arguments),
        other => Err(RuntimeError::NotAFunction {
            kind: other.type_name(),
        }),
    }
}

/// Creates the per-call environment: a child of the captured environment
/// with parameters bound positionally to the arguments.
fn extended_function_env(function: &Function, arguments: Vec<Value>) -> Env {
    let env = Environment::new_enclosed(function.env.clone());

    for (parameter, argument) in function.parameters.iter().zip(arguments) {
        env.borrow_mut().set(parameter.clone(), argument);
    }

    env
}

/// Strips one `return` wrapper, leaving every other value untouched.
fn unwrap_return(value: Value) -> Value {
    match value {
        Value::Return(value) => *value,
        value => value,
    }
}
