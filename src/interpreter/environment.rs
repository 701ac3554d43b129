use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::interpreter::value::core::Value;

/// Shared handle to an [`Environment`].
///
/// Environments are shared: the global environment is held by the caller of
/// [`run`](crate::run), every function value keeps a handle to the
/// environment it was created in, and each call creates a child environment
/// pointing back at the captured one. `Rc<RefCell<_>>` gives the shared
/// ownership and interior mutability this requires.
pub type Env = Rc<RefCell<Environment>>;

/// A lexical environment: a mapping from names to values plus an optional
/// reference to the enclosing environment.
///
/// Lookup walks outward through the chain of enclosing environments;
/// assignment always writes into the innermost frame. Blocks do not create
/// environments; only function application does.
///
/// # Example
/// ```
/// use simia::interpreter::{environment::Environment, value::core::Value};
///
/// let global = Environment::new();
/// global.borrow_mut().set("x".to_string(), Value::Integer(10));
///
/// let local = Environment::new_enclosed(global.clone());
/// local.borrow_mut().set("y".to_string(), Value::Integer(20));
///
/// assert_eq!(local.borrow().get("x"), Some(Value::Integer(10)));
/// assert_eq!(local.borrow().get("y"), Some(Value::Integer(20)));
/// assert_eq!(global.borrow().get("y"), None);
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates a new, top-level environment.
    #[must_use]
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates a new environment enclosed within an outer one. Used for
    /// every function call: parameters are bound in the fresh frame while
    /// lookups still reach the captured environment.
    #[must_use]
    pub fn new_enclosed(outer: Env) -> Env {
        Rc::new(RefCell::new(Self {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    /// Looks up a name, checking this environment first and then walking the
    /// chain of enclosing environments.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        self.outer
            .as_ref()
            .and_then(|outer| outer.borrow().get(name))
    }

    /// Binds a name in this environment. Existing bindings of the same name
    /// in this frame are replaced; bindings in enclosing environments are
    /// shadowed, never modified.
    pub fn set(&mut self, name: String, value: Value) {
        self.store.insert(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_and_get_global() {
        let env = Environment::new();
        env.borrow_mut().set("x".to_string(), Value::Integer(10));

        assert_eq!(env.borrow().get("x"), Some(Value::Integer(10)));
        assert_eq!(env.borrow().get("y"), None);
    }

    #[test]
    fn get_walks_outer_chain() {
        let global = Environment::new();
        global.borrow_mut().set("x".to_string(), Value::Integer(10));

        let middle = Environment::new_enclosed(global.clone());
        let inner = Environment::new_enclosed(middle);

        assert_eq!(inner.borrow().get("x"), Some(Value::Integer(10)));
    }

    #[test]
    fn set_writes_innermost_frame_only() {
        let global = Environment::new();
        global.borrow_mut().set("x".to_string(), Value::Integer(10));

        let local = Environment::new_enclosed(global.clone());
        local.borrow_mut().set("x".to_string(), Value::Integer(50));

        assert_eq!(local.borrow().get("x"), Some(Value::Integer(50)));
        assert_eq!(global.borrow().get("x"), Some(Value::Integer(10)));
    }

    #[test]
    fn shadowing_is_per_frame() {
        let global = Environment::new();
        global.borrow_mut().set("x".to_string(), Value::Integer(1));

        let local = Environment::new_enclosed(global.clone());
        local.borrow_mut().set("x".to_string(), Value::Integer(2));
        let inner = Environment::new_enclosed(local.clone());

        assert_eq!(inner.borrow().get("x"), Some(Value::Integer(2)));
        assert_eq!(local.borrow().get("x"), Some(Value::Integer(2)));
        assert_eq!(global.borrow().get("x"), Some(Value::Integer(1)));
    }
}
