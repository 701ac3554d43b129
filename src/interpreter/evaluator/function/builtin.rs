use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Builtin, Value},
    },
};

/// The table of builtin functions, searched after environment lookup
/// fails. A `let` binding of the same name therefore shadows a builtin.
static BUILTIN_TABLE: &[Builtin] = &[
    Builtin {
        name: "len",
        func: len,
    },
    Builtin {
        name: "first",
        func: first,
    },
    Builtin {
        name: "last",
        func: last,
    },
    Builtin {
        name: "rest",
        func: rest,
    },
    Builtin {
        name: "push",
        func: push,
    },
    Builtin {
        name: "puts",
        func: puts,
    },
];

/// Looks up a builtin by name.
pub(crate) fn lookup(name: &str) -> Option<Value> {
    BUILTIN_TABLE
        .iter()
        .find(|builtin| builtin.name == name)
        .copied()
        .map(Value::Builtin)
}

/// Checks that a builtin received exactly the expected number of
/// arguments.
const fn check_arity(args: &[Value], want: usize) -> EvalResult<()> {
    if args.len() == want {
        Ok(())
    } else {
        Err(RuntimeError::WrongNumberOfArguments {
            got: args.len(),
            want,
        })
    }
}

/// `len(x)`: the byte length of a string or the element count of an array.
fn len(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    match &args[0] {
        Value::String(value) => Ok(Value::Integer(value.len() as i64)),
        Value::Array(elements) => Ok(Value::Integer(elements.len() as i64)),
        other => Err(RuntimeError::UnsupportedArgument {
            function: "len",
            kind: other.type_name(),
        }),
    }
}

/// `first(arr)`: the first element of an array, or `null` when empty.
fn first(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    match &args[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::WrongArgumentType {
            function: "first",
            kind: other.type_name(),
        }),
    }
}

/// `last(arr)`: the last element of an array, or `null` when empty.
fn last(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    match &args[0] {
        Value::Array(elements) => Ok(elements.last().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::WrongArgumentType {
            function: "last",
            kind: other.type_name(),
        }),
    }
}

/// `rest(arr)`: a new array holding all but the first element, or `null`
/// when the array is empty. The source array is never modified.
fn rest(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Ok(Value::Null)
            } else {
                Ok(Value::Array(Rc::new(elements[1..].to_vec())))
            }
        }
        other => Err(RuntimeError::WrongArgumentType {
            function: "rest",
            kind: other.type_name(),
        }),
    }
}

/// `push(arr, value)`: a new array with the value appended. The source
/// array is never modified; arrays behave as values.
fn push(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 2)?;

    match &args[0] {
        Value::Array(elements) => {
            let mut elements = elements.as_ref().clone();
            elements.push(args[1].clone());
            Ok(Value::Array(Rc::new(elements)))
        }
        other => Err(RuntimeError::WrongArgumentType {
            function: "push",
            kind: other.type_name(),
        }),
    }
}

/// `puts(...)`: prints each argument's display form on its own line and
/// returns `null`. Variadic.
fn puts(args: &[Value]) -> EvalResult<Value> {
    for value in args {
        println!("{value}");
    }

    Ok(Value::Null)
}
