use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::{
    ast::BlockStatement,
    interpreter::{environment::Env, evaluator::core::EvalResult, value::hash_key::HashKey},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the types that can appear in expressions, bindings,
/// function returns and conditions. The evaluator dispatches on the variant
/// tag; [`Value::type_name`] provides the fixed tag names used in error
/// messages.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value. Equality on booleans is by value, so `true` compares
    /// equal to every other `true` the program produces.
    Boolean(bool),
    /// A string of bytes. Displayed raw, without quotes.
    String(String),
    /// The absence of a value: the result of a falsy `if` without `else`,
    /// of a `let` statement, or of an out-of-bounds index.
    Null,
    /// Wrapper used to propagate `return` through nested blocks. It is
    /// unwrapped at function-call boundaries and at the top level of a
    /// program, and never reaches user-visible bindings.
    Return(Box<Value>),
    /// A user-defined function bundled with its defining environment.
    Function(Function),
    /// A native built-in function such as `len` or `push`.
    Builtin(Builtin),
    /// An array of values.
    Array(Rc<Vec<Value>>),
    /// A hash map. Each entry keeps the original key value alongside the
    /// stored value so that the map can display its contents.
    Hash(Rc<HashMap<HashKey, HashPair>>),
}

/// A user-defined function value: parameter names, body, and the
/// environment captured at the point the `fn` literal was evaluated.
///
/// Name lookup during application starts from a fresh child of the captured
/// environment, which is what makes closures work. Two function values
/// compare equal only if they share the same parameters, body and
/// environment allocations.
#[derive(Debug, Clone)]
pub struct Function {
    /// Parameter names in declaration order.
    pub parameters: Rc<Vec<String>>,
    /// The function body.
    pub body: Rc<BlockStatement>,
    /// The environment the function was created in.
    pub env: Env,
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.parameters, &other.parameters)
            && Rc::ptr_eq(&self.body, &other.body)
            && Rc::ptr_eq(&self.env, &other.env)
    }
}

/// Signature shared by all builtin functions: evaluated arguments in, value
/// or runtime error out.
pub type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// A native built-in function and its name (kept for display and equality).
#[derive(Clone, Copy)]
pub struct Builtin {
    /// The name the builtin is reachable under.
    pub name: &'static str,
    /// The native implementation.
    pub func: BuiltinFn,
}

impl Builtin {
    /// Invokes the builtin with already-evaluated arguments.
    pub fn call(&self, arguments: &[Value]) -> EvalResult<Value> {
        (self.func)(arguments)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// A key/value entry of a hash map. The original key value is retained so
/// hash maps can print their entries.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as written by the program.
    pub key: Value,
    /// The stored value.
    pub value: Value,
}

impl Value {
    /// Returns the fixed type tag of this value, as used in error messages.
    ///
    /// # Example
    /// ```
    /// use simia::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::String(_) => "STRING",
            Self::Null => "NULL",
            Self::Return(_) => "RETURN_VALUE",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::Return(value) => write!(f, "{value}"),
            Self::Function(function) => {
                write!(
                    f,
                    "fn({}) {{\n{}\n}}",
                    function.parameters.join(", "),
                    function.body
                )
            }
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            }
            Self::Hash(pairs) => {
                write!(f, "{{")?;
                for (index, pair) in pairs.values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            }
        }
    }
}
