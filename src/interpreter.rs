/// Nested name-to-value mappings for lexical scope.
///
/// Declares the `Environment` type: a per-frame map of bindings with a
/// shared back-link to the enclosing environment. Function values capture
/// their defining environment through this module's shared handle type.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// applies operators, binds names, calls functions and builtins, and
/// produces runtime values. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Implements closures: each call runs in a fresh child of the captured
///   environment.
/// - Propagates `return` through nested blocks and unwraps it at function
///   boundaries.
/// - Reports runtime errors such as type mismatches or unresolved names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// integers, identifiers, operators, delimiters, and keywords. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens on demand.
/// - Handles integer and string literals, identifiers, and operators.
/// - Never fails: unrecognized characters become illegal tokens.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of expressions
/// and statements, driven by operator precedence.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Enforces operator precedence and left-associativity.
/// - Accumulates syntax errors while producing as much tree as possible.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation:
/// integers, booleans, strings, arrays, hash maps, functions and builtins.
/// It also provides the fixed type tags used in error messages and the
/// display forms used for output.
pub mod value;
