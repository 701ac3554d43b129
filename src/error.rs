/// Parsing errors.
///
/// Defines the error type accumulated by the parser. Parse errors cover
/// unexpected tokens, tokens that cannot begin an expression, and integer
/// literals that overflow.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error type produced during evaluation: type mismatches,
/// undefined operators, unresolved identifiers, bad hash keys, builtin
/// misuse, and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The combined error type returned by [`run`](crate::run).
///
/// Parsing and evaluation fail differently: the parser accumulates a list
/// of messages while producing as much of the tree as it can, whereas the
/// evaluator stops at the first runtime error. `Error` carries either
/// outcome to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// One or more parse errors; evaluation never ran.
    Parse(Vec<ParseError>),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(errors) => {
                writeln!(f, "parser errors:")?;
                for error in errors {
                    writeln!(f, "\t{error}")?;
                }
                Ok(())
            }
            Self::Runtime(error) => write!(f, "ERROR: {error}"),
        }
    }
}

impl std::error::Error for Error {}
