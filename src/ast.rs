use std::{fmt, rc::Rc};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code: `nil`, booleans, numbers and strings.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The `nil` literal.
    Nil,
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A 64-bit floating-point literal.
    Number(f64),
    /// A string literal, without its quotes.
    Str(Rc<str>),
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

/// An abstract syntax tree node representing an expression.
///
/// Each variant models a distinct syntactic construct. Variants that can fail
/// at runtime carry the line of the token that caused them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean or nil).
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// A parenthesized expression.
    Grouping {
        /// The inner expression.
        expr: Box<Self>,
    },
    /// A unary operation (`-x`, `!x`).
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line of the operator token.
        line: usize,
    },
    /// An arithmetic, comparison or equality operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line of the operator token.
        line:  usize,
    },
    /// A short-circuiting `and` / `or`.
    Logical {
        /// Left operand, always evaluated.
        left:  Box<Self>,
        /// The operator.
        op:    LogicalOperator,
        /// Right operand, evaluated only when the left does not decide.
        right: Box<Self>,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Assignment to an existing variable.
    Assign {
        /// Name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Box<Self>,
        /// Line of the assigned name.
        line:  usize,
    },
    /// Function call expression (e.g. `add(1, 2)`).
    Call {
        /// The expression producing the function.
        callee:    Box<Self>,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line of the closing parenthesis.
        line:      usize,
    },
}

/// A user-defined function declaration.
///
/// Declarations are shared behind an `Rc` so that every closure created from
/// them can refer to the body without copying it.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The statements of the body.
    pub body:   Vec<Stmt>,
    /// Line of the function name.
    pub line:   usize,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
    /// `print expr;`
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Line of the `print` keyword.
        line: usize,
    },
    /// `var name = init;`
    Var {
        /// The name of the variable.
        name:        String,
        /// The optional initializer; the variable is `nil` without one.
        initializer: Option<Expr>,
    },
    /// `{ ... }`
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
    },
    /// `if (cond) then else otherwise`
    If {
        /// The condition expression.
        condition:   Expr,
        /// Statement executed if the condition is truthy.
        then_branch: Box<Self>,
        /// Statement executed otherwise.
        else_branch: Option<Box<Self>>,
    },
    /// `while (cond) body`; `for` loops are desugared into this form.
    While {
        /// The loop condition.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
    },
    /// `fun name(params) { body }`
    Function(Rc<FunctionDecl>),
    /// `return value;`
    Return {
        /// The returned expression, `nil` when absent.
        value: Option<Expr>,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a short-circuiting logical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

/// Renders an expression in fully parenthesized prefix notation.
///
/// # Example
/// ```
/// use treelox::ast::{BinaryOperator, Expr, UnaryOperator};
///
/// let expr = Expr::Binary { left:  Box::new(Expr::Unary { op:   UnaryOperator::Negate,
///                                                         expr: Box::new(Expr::Literal { value: 123.0.into() }),
///                                                         line: 1, }),
///                           op:    BinaryOperator::Mul,
///                           right: Box::new(Expr::Grouping { expr: Box::new(Expr::Literal { value: 45.67.into() }) }),
///                           line:  1, };
///
/// assert_eq!(expr.to_string(), "(* (- 123) (group 45.67))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::Grouping { expr } => write!(f, "(group {expr})"),
            Self::Unary { op, expr, .. } => write!(f, "({op} {expr})"),
            Self::Binary { left, op, right, .. } => write!(f, "({op} {left} {right})"),
            Self::Logical { left, op, right } => write!(f, "({op} {left} {right})"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::Assign { name, value, .. } => write!(f, "(= {name} {value})"),
            Self::Call { callee, arguments, .. } => {
                write!(f, "(call {callee}")?;
                for argument in arguments {
                    write!(f, " {argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Renders a statement in the same parenthesized prefix notation as
/// expressions, e.g. `(var x 1)` or `(while (< i 3) (block ...))`.
impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression { expr } => write!(f, "(; {expr})"),
            Self::Print { expr, .. } => write!(f, "(print {expr})"),
            Self::Var { name, initializer: Some(init) } => write!(f, "(var {name} {init})"),
            Self::Var { name, initializer: None } => write!(f, "(var {name})"),
            Self::Block { statements } => {
                write!(f, "(block")?;
                for statement in statements {
                    write!(f, " {statement}")?;
                }
                write!(f, ")")
            },
            Self::If { condition,
                       then_branch,
                       else_branch, } => match else_branch {
                Some(otherwise) => write!(f, "(if {condition} {then_branch} {otherwise})"),
                None => write!(f, "(if {condition} {then_branch})"),
            },
            Self::While { condition, body } => write!(f, "(while {condition} {body})"),
            Self::Function(decl) => {
                write!(f, "(fun {} ({})", decl.name, decl.params.join(" "))?;
                for statement in &decl.body {
                    write!(f, " {statement}")?;
                }
                write!(f, ")")
            },
            Self::Return { value: Some(value) } => write!(f, "(return {value})"),
            Self::Return { value: None } => write!(f, "(return)"),
        }
    }
}
