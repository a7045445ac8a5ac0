use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Shared handle to a scope.
///
/// A scope is owned jointly by the frame executing in it and by every
/// closure declared inside it, so writes through any handle are seen by all.
pub type EnvRef = Rc<RefCell<Environment>>;

/// One scope in the chain: its own bindings plus the enclosing scope.
#[derive(Default)]
pub struct Environment {
    values:    HashMap<String, Value>,
    enclosing: Option<EnvRef>,
}

impl Environment {
    /// Creates the outermost scope.
    #[must_use]
    pub fn new_global() -> EnvRef {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an empty scope nested inside `enclosing`.
    #[must_use]
    pub fn new_enclosed(enclosing: &EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Self { values:    HashMap::new(),
                                    enclosing: Some(Rc::clone(enclosing)), }))
    }

    /// Binds `name` in this scope, replacing any binding it already holds
    /// here. Outer scopes are never touched.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Looks `name` up in this scope and then outward.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedVariable` if no scope in the chain defines it.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let globals = Environment::new_global();
    /// globals.borrow_mut().define("a", Value::Number(1.0));
    ///
    /// let inner = Environment::new_enclosed(&globals);
    /// assert_eq!(inner.borrow().get("a", 1).unwrap(), Value::Number(1.0));
    /// assert!(inner.borrow().get("b", 1).is_err());
    /// ```
    pub fn get(&self, name: &str, line: usize) -> EvalResult<Value> {
        if let Some(value) = self.values.get(name) {
            return Ok(value.clone());
        }

        match &self.enclosing {
            Some(enclosing) => enclosing.borrow().get(name, line),
            None => Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                          line }),
        }
    }

    /// Rebinds `name` in the nearest scope that defines it.
    ///
    /// Unlike [`Environment::define`], this never creates a binding.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedVariable` if no scope in the chain defines it.
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
            return Ok(());
        }

        match &self.enclosing {
            Some(enclosing) => enclosing.borrow_mut().assign(name, value, line),
            None => Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                          line }),
        }
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values may hold closures over this scope; list names only.
        let mut names: Vec<&String> = self.values.keys().collect();
        names.sort();
        f.debug_struct("Environment")
         .field("names", &names)
         .field("enclosing", &self.enclosing.is_some())
         .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_shadows_without_touching_outer_scope() {
        let globals = Environment::new_global();
        globals.borrow_mut().define("a", Value::Number(1.0));

        let inner = Environment::new_enclosed(&globals);
        inner.borrow_mut().define("a", Value::Number(2.0));

        assert_eq!(inner.borrow().get("a", 1).unwrap(), Value::Number(2.0));
        assert_eq!(globals.borrow().get("a", 1).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn assign_writes_to_nearest_defining_scope() {
        let globals = Environment::new_global();
        globals.borrow_mut().define("a", Value::Number(1.0));
        let middle = Environment::new_enclosed(&globals);
        let inner = Environment::new_enclosed(&middle);

        inner.borrow_mut().assign("a", Value::Bool(true), 3).unwrap();

        assert_eq!(globals.borrow().get("a", 3).unwrap(), Value::Bool(true));
        assert!(middle.borrow().values.is_empty());
        assert!(inner.borrow().values.is_empty());
    }

    #[test]
    fn assign_to_unknown_name_does_not_create_it() {
        let globals = Environment::new_global();
        let err = globals.borrow_mut().assign("ghost", Value::Nil, 7).unwrap_err();

        assert_eq!(err.to_string(), "Undefined variable 'ghost'.\n[line 7]");
        assert!(globals.borrow().get("ghost", 7).is_err());
    }

    #[test]
    fn writes_are_visible_through_every_handle() {
        let globals = Environment::new_global();
        let captured = Rc::clone(&globals);
        globals.borrow_mut().define("n", Value::Number(0.0));

        captured.borrow_mut().assign("n", Value::Number(5.0), 1).unwrap();

        assert_eq!(globals.borrow().get("n", 1).unwrap(), Value::Number(5.0));
    }
}
