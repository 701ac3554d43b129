use std::collections::HashMap;
use std::rc::Rc;

use crate::{
    ast::{BlockStatement, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::{binary, function, index, unary},
        value::{
            core::{Function, HashPair, Value},
            hash_key::HashKey,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure. Errors propagate with `?`
/// through every frame; nothing in the language intercepts them.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program in the given environment.
///
/// Statements run in order. A `return` at the top level (or propagated out
/// of a nested block) stops execution and yields the returned value; the
/// first runtime error stops execution likewise. An empty program yields
/// `Null`.
pub fn eval_program(program: &Program, env: &Env) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &program.statements {
        result = eval_statement(statement, env)?;

        if let Value::Return(value) = result {
            return Ok(*value);
        }
    }

    Ok(result)
}

/// Evaluates the statements of a block.
///
/// Like [`eval_program`], but a `return` is *not* unwrapped here: the
/// wrapper travels outward through arbitrarily nested blocks until a
/// function boundary (or the program top level) unwraps it. This is what
/// makes `return` inside a nested `if` leave the whole function.
pub(crate) fn eval_block_statement(block: &BlockStatement, env: &Env) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;

        if matches!(result, Value::Return(_)) {
            return Ok(result);
        }
    }

    Ok(result)
}

/// Evaluates a single statement. `let` binds into the innermost
/// environment frame and yields `Null`; `return` wraps its value for the
/// nearest function boundary to unwrap.
fn eval_statement(statement: &Statement, env: &Env) -> EvalResult<Value> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name.clone(), value);
            Ok(Value::Null)
        }
        Statement::Return { value } => {
            let value = eval_expression(value, env)?;
            Ok(Value::Return(Box::new(value)))
        }
        Statement::Expression { expression } => eval_expression(expression, env),
    }
}

/// Evaluates an expression and returns the resulting value.
///
/// This is the main dispatch point of the evaluator: literals map directly
/// to values, identifiers are resolved against the environment chain, and
/// compound forms delegate to the operator, index and function modules.
pub(crate) fn eval_expression(expression: &Expression, env: &Env) -> EvalResult<Value> {
    match expression {
        Expression::IntegerLiteral(value) => Ok(Value::Integer(*value)),
        Expression::BooleanLiteral(value) => Ok(Value::Boolean(*value)),
        Expression::StringLiteral(value) => Ok(Value::String(value.clone())),
        Expression::Identifier(name) => eval_identifier(name, env),
        Expression::Prefix { operator, right } => {
            let right = eval_expression(right, env)?;
            unary::eval_prefix_expression(*operator, &right)
        }
        Expression::Infix {
            left,
            operator,
            right,
        } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            binary::eval_infix_expression(*operator, left, right)
        }
        Expression::If {
            condition,
            consequence,
            alternative,
        } => eval_if_expression(condition, consequence, alternative.as_ref(), env),
        Expression::FunctionLiteral { parameters, body } => Ok(Value::Function(Function {
            parameters: Rc::new(parameters.clone()),
            body: Rc::new(body.clone()),
            env: env.clone(),
        })),
        Expression::Call {
            function,
            arguments,
        } => function::eval_call_expression(function, arguments, env),
        Expression::ArrayLiteral { elements } => {
            let elements = eval_expressions(elements, env)?;
            Ok(Value::Array(Rc::new(elements)))
        }
        Expression::Index { left, index } => {
            let left = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            index::eval_index_expression(&left, &index)
        }
        Expression::HashLiteral { pairs } => eval_hash_literal(pairs, env),
    }
}

/// Resolves a name: the environment chain first, then the builtin table.
/// Builtins can therefore be shadowed by `let` without being lost for
/// enclosing scopes.
fn eval_identifier(name: &str, env: &Env) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }
    if let Some(builtin) = function::builtin::lookup(name) {
        return Ok(builtin);
    }

    Err(RuntimeError::IdentifierNotFound {
        name: name.to_string(),
    })
}

/// Evaluates a conditional expression.
///
/// A falsy condition without an `else` branch yields `Null`.
fn eval_if_expression(
    condition: &Expression,
    consequence: &BlockStatement,
    alternative: Option<&BlockStatement>,
    env: &Env,
) -> EvalResult<Value> {
    let condition = eval_expression(condition, env)?;

    if is_truthy(&condition) {
        eval_block_statement(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block_statement(alternative, env)
    } else {
        Ok(Value::Null)
    }
}

/// The truthiness rule: `false` and `null` are falsy; everything else,
/// including the integer `0` and the empty string, is truthy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Boolean(false) | Value::Null)
}

/// Evaluates a list of expressions left to right, stopping at the first
/// error. Shared by array literals and call argument lists.
pub(crate) fn eval_expressions(expressions: &[Expression], env: &Env) -> EvalResult<Vec<Value>> {
    expressions
        .iter()
        .map(|expression| eval_expression(expression, env))
        .collect()
}

/// Evaluates a hash literal: keys and values in source order, with each
/// key checked for hashability before its value runs. Duplicate keys keep
/// the last written value.
fn eval_hash_literal(pairs: &[(Expression, Expression)], env: &Env) -> EvalResult<Value> {
    let mut map = HashMap::new();

    for (key_expression, value_expression) in pairs {
        let key = eval_expression(key_expression, env)?;
        let hash_key = HashKey::try_from(&key)?;
        let value = eval_expression(value_expression, env)?;

        map.insert(hash_key, HashPair { key, value });
    }

    Ok(Value::Hash(Rc::new(map)))
}
