#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing.
///
/// The parser never aborts on the first problem; it accumulates one
/// `ParseError` per mismatched expectation and produces as much of the
/// syntax tree as it can. The `Display` form of each variant is the exact
/// message reported to the user.
pub enum ParseError {
    /// The token following the current one was not the expected kind.
    UnexpectedToken {
        /// Display name of the expected token kind.
        want: &'static str,
        /// Display name of the token kind actually found.
        got: &'static str,
    },
    /// No expression can start with the current token.
    NoPrefixParseFn {
        /// Display name of the offending token kind.
        kind: &'static str,
    },
    /// An integer literal did not fit into a 64-bit signed integer.
    InvalidIntegerLiteral {
        /// The literal text as written in the source.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { want, got } => {
                write!(f, "expected next token to be {want}, got {got} instead")
            }

            Self::NoPrefixParseFn { kind } => {
                write!(f, "no prefix parse function for {kind} found")
            }

            Self::InvalidIntegerLiteral { literal } => {
                write!(f, "could not parse \"{literal}\" as integer")
            }
        }
    }
}

impl std::error::Error for ParseError {}
