use std::{fmt, rc::Rc};

use crate::{
    ast::FunctionDecl,
    interpreter::{environment::EnvRef, value::core::Value},
};

/// Signature shared by every native built-in.
///
/// A native receives its already arity-checked arguments and cannot fail.
pub type NativeFn = fn(&[Value]) -> Value;

/// A built-in function implemented by the host.
#[derive(Debug, Clone, Copy)]
pub struct NativeFunction {
    /// The global name the built-in is registered under.
    pub name:  &'static str,
    /// The exact number of arguments the built-in accepts.
    pub arity: usize,
    /// The implementation.
    pub func:  NativeFn,
}

/// A function declared in the guest program, paired with the environment
/// that was active where it was declared.
#[derive(Clone)]
pub struct UserFunction {
    /// The shared declaration.
    pub declaration: Rc<FunctionDecl>,
    /// The defining scope. Calls create their scope as a child of this one.
    pub closure:     EnvRef,
}

impl fmt::Debug for UserFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The closure may refer back to this function; print the name only.
        f.debug_struct("UserFunction")
         .field("name", &self.declaration.name)
         .field("params", &self.declaration.params)
         .finish_non_exhaustive()
    }
}

/// Anything that can appear in call position.
#[derive(Debug, Clone)]
pub enum Callable {
    /// A closure over a user-defined declaration.
    User(UserFunction),
    /// A host built-in.
    Native(NativeFunction),
}

impl Callable {
    /// The exact number of arguments a call must supply.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::User(function) => function.declaration.params.len(),
            Self::Native(native) => native.arity,
        }
    }

    /// The name the callable was declared or registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::User(function) => &function.declaration.name,
            Self::Native(native) => native.name,
        }
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(function) => write!(f, "<fn {}>", function.declaration.name),
            Self::Native(_) => write!(f, "<native fn>"),
        }
    }
}
