use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// A `RuntimeError` aborts evaluation of the whole program: every evaluation
/// function propagates it outward with `?` and nothing in the language can
/// intercept it. The `Display` form of each variant is the exact message
/// reported to the user. Type names in messages use the fixed runtime tags
/// (`INTEGER`, `BOOLEAN`, `STRING`, ...).
pub enum RuntimeError {
    /// An infix operator was applied to operands of two different types.
    TypeMismatch {
        /// Type tag of the left operand.
        left: &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type tag of the right operand.
        right: &'static str,
    },
    /// A prefix operator was applied to an operand it is not defined for.
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Type tag of the operand.
        operand: &'static str,
    },
    /// An infix operator was applied to same-typed operands it is not
    /// defined for.
    UnknownInfixOperator {
        /// Type tag of the left operand.
        left: &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type tag of the right operand.
        right: &'static str,
    },
    /// A name was neither bound in any enclosing environment nor a builtin.
    IdentifierNotFound {
        /// The name that failed to resolve.
        name: String,
    },
    /// Something other than a function or builtin was called.
    NotAFunction {
        /// Type tag of the called value.
        kind: &'static str,
    },
    /// A value that is not an integer, boolean or string was used as a
    /// hash-map key.
    UnusableAsHashKey {
        /// Type tag of the offending key.
        kind: &'static str,
    },
    /// The index operator was applied to a value that supports no indexing.
    IndexNotSupported {
        /// Type tag of the indexed value.
        kind: &'static str,
    },
    /// A builtin function received the wrong number of arguments.
    WrongNumberOfArguments {
        /// How many arguments were supplied.
        got: usize,
        /// How many arguments the builtin requires.
        want: usize,
    },
    /// A builtin received an argument type it has no behavior for.
    UnsupportedArgument {
        /// Name of the builtin.
        function: &'static str,
        /// Type tag of the offending argument.
        kind: &'static str,
    },
    /// A builtin that operates on arrays received something else.
    WrongArgumentType {
        /// Name of the builtin.
        function: &'static str,
        /// Type tag of the offending argument.
        kind: &'static str,
    },
    /// Attempted integer division by zero.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch {
                left,
                operator,
                right,
            } => write!(f, "type mismatch: {left} {operator} {right}"),

            Self::UnknownPrefixOperator { operator, operand } => {
                write!(f, "unknown operator: {operator}{operand}")
            }

            Self::UnknownInfixOperator {
                left,
                operator,
                right,
            } => write!(f, "unknown operator: {left} {operator} {right}"),

            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),

            Self::NotAFunction { kind } => write!(f, "not a function: {kind}"),

            Self::UnusableAsHashKey { kind } => write!(f, "unusable as hash key: {kind}"),

            Self::IndexNotSupported { kind } => {
                write!(f, "index operator not supported: {kind}")
            }

            Self::WrongNumberOfArguments { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            }

            Self::UnsupportedArgument { function, kind } => {
                write!(f, "argument to \"{function}\" not supported, got {kind}")
            }

            Self::WrongArgumentType { function, kind } => {
                write!(f, "argument to \"{function}\" must be ARRAY, got {kind}")
            }

            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}
