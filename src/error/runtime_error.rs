use thiserror::Error;

/// Represents all errors that can occur during evaluation.
///
/// The `Display` output is the exact report written to standard error: the
/// message followed by the offending line on its own line.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A unary operator needed a numeric operand.
    #[error("Operand must be a number.\n[line {line}]")]
    OperandMustBeNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An arithmetic or comparison operator needed numeric operands.
    #[error("Operands must be numbers.\n[line {line}]")]
    OperandsMustBeNumbers {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `+` applied to anything but two numbers or two strings.
    #[error("Operands must be two numbers or two strings.\n[line {line}]")]
    OperandsMustBeNumbersOrStrings {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to read or assign a name no enclosing scope defines.
    #[error("Undefined variable '{name}'.\n[line {line}]")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a value that is not a function.
    #[error("Can only call functions and classes.\n[line {line}]")]
    NotCallable {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Expected {expected} arguments but got {found}.\n[line {line}]")]
    ArgumentCountMismatch {
        /// The declared arity.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// User function calls nested deeper than the interpreter allows.
    #[error("Stack overflow.\n[line {line}]")]
    StackOverflow {
        /// Line of the call that would have gone one level too deep.
        line: usize,
    },
    /// Writing `print` output failed.
    #[error("Could not write output: {source}\n[line {line}]")]
    Output {
        /// The underlying I/O failure.
        source: std::io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Flushing buffered output after the program finished failed.
    #[error("Could not flush output: {source}")]
    Flush {
        /// The underlying I/O failure.
        source: std::io::Error,
    },
}

impl RuntimeError {
    /// The source line the error refers to, if it belongs to one.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::OperandMustBeNumber { line }
            | Self::OperandsMustBeNumbers { line }
            | Self::OperandsMustBeNumbersOrStrings { line }
            | Self::UndefinedVariable { line, .. }
            | Self::NotCallable { line }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::StackOverflow { line }
            | Self::Output { line, .. } => Some(*line),
            Self::Flush { .. } => None,
        }
    }
}
