/// Infix operators.
///
/// Type-directed dispatch for binary operations: integer arithmetic and
/// comparison, string concatenation, boolean/null equality, and the
/// type-mismatch and unknown-operator failure paths.
pub mod binary;
/// Core evaluation dispatch.
///
/// Evaluates programs, blocks, statements and expressions, including
/// literals, identifiers, conditionals and the truthiness rule.
pub mod core;
/// Function application.
///
/// Evaluates call expressions, binds arguments in a fresh environment
/// enclosed by the captured one, and unwraps returned values at the call
/// boundary. Builtin dispatch lives in the nested `builtin` module.
pub mod function;
/// Index expressions.
///
/// Array indexing with out-of-bounds tolerance and hash-map lookup with
/// hashability checking.
pub mod index;
/// Prefix operators.
///
/// The logical `!` operator (defined for every value through truthiness)
/// and arithmetic negation (defined only for integers).
pub mod unary;
