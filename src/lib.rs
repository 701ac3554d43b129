//! # simia
//!
//! simia is a small, dynamically-typed, expression-oriented scripting
//! language written in Rust. Source text flows through a three-stage
//! pipeline: the lexer turns characters into tokens, the parser builds an
//! abstract syntax tree driven by operator precedence, and the evaluator
//! walks that tree to produce runtime values. The language has first-class
//! functions with lexical closures, integers, booleans, strings, arrays and
//! hash maps.

#![warn(
    clippy::redundant_clone,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic
)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::cast_possible_wrap
)]

use crate::{
    error::Error,
    interpreter::{
        environment::Env,
        evaluator::core::eval_program,
        lexer::Lexer,
        parser::Parser,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expression` enums and related
/// types that represent the syntactic structure of source code as a tree.
/// The AST is built by the parser and traversed by the evaluator; every
/// node re-prints a source form through `Display`.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating code, along with the combined error type returned by
/// [`run`]. Parse errors accumulate; runtime errors abort evaluation.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and environments to provide a complete runtime for
/// source code evaluation.
pub mod interpreter;

/// Parses and evaluates a piece of source text in the given environment.
///
/// The environment is created by the caller and survives across calls, so a
/// REPL can retain bindings from line to line. Parse errors are returned as
/// a batch without evaluating anything; a runtime error aborts evaluation
/// at the point of failure. Otherwise the value of the last statement (or
/// of an explicit `return`) is produced.
///
/// # Errors
/// Returns [`Error::Parse`] when the source does not parse, and
/// [`Error::Runtime`] when evaluation fails.
///
/// # Examples
/// ```
/// use simia::{interpreter::environment::Environment, run};
///
/// let env = Environment::new();
///
/// let value = run("let double = fn(x) { x * 2 }; double(21)", &env).unwrap();
/// assert_eq!(value.to_string(), "42");
///
/// // Bindings persist in the environment across calls.
/// let value = run("double(5)", &env).unwrap();
/// assert_eq!(value.to_string(), "10");
/// ```
pub fn run(source: &str, env: &Env) -> Result<Value, Error> {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return Err(Error::Parse(parser.into_errors()));
    }

    eval_program(&program, env).map_err(Error::Runtime)
}
