/// Core runtime values.
///
/// Declares the `Value` enum and its supporting types: user-defined function
/// values (parameters, body and captured environment), builtin function
/// values, and hash-map pairs. Also provides the fixed type tags used in
/// error messages and the display forms used by `puts` and the REPL.
pub mod core;
/// Hash-map keys.
///
/// Only integers, booleans and strings can be used as hash-map keys; this
/// module defines the key type and the fallible conversion from a runtime
/// value.
pub mod hash_key;
