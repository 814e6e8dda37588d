use ariadne::Fmt;
use exact_attrs::ErrorKind;
use exact_error::EXPR;

/// A parenthesis was opened but never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing closing parenthesis",
    labels = ["this parenthesis is never closed"],
    help = format!("add a closing parenthesis {} at the end of the group", ")".fg(EXPR)),
)]
pub struct UnclosedParenthesis;

/// A closing parenthesis appeared without a matching opening parenthesis.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected closing parenthesis",
    labels = ["this parenthesis does not close anything"],
)]
pub struct UnexpectedCloseParenthesis;

/// An angle bracket around a logarithm base or root index was opened but never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing closing angle bracket",
    labels = ["this angle bracket is never closed"],
    help = format!("bases and indices are written like {}", "log<2>(x)".fg(EXPR)),
)]
pub struct UnclosedAngleBracket;

/// There was nothing to parse where an expression was expected.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected an expression",
    labels = [format!("I expected to see an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyExpression;

/// A term was not an integer, the variable, a parenthesized expression, or a function.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unrecognized term `{}`", term),
    labels = ["I could not understand this term"],
    help = format!(
        "terms can be integers, the variable {}, parenthesized expressions, or one of the functions {}",
        "x".fg(EXPR),
        "sqrt, cbrt, root, log".fg(EXPR),
    ),
)]
pub struct UnrecognizedTerm {
    /// The term that was not recognized.
    pub term: String,
}

/// A function was called with arguments that do not match its syntax.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid arguments to `{}`", name),
    labels = ["this function call is malformed"],
    help = format!("write it like {}", usage.fg(EXPR)),
)]
pub struct MalformedFunction {
    /// The name of the function.
    pub name: &'static str,

    /// An example of correct usage of the function.
    pub usage: &'static str,
}

/// An operator is missing a value on one of its sides.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing operand",
    labels = [format!("this operator needs an {} on both sides", "expression".fg(EXPR))],
)]
pub struct MissingOperand;

/// Two terms were written next to each other without an operator between them.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected an operator",
    labels = ["add an operator before this term"],
)]
pub struct ExpectedOperator;

/// An integer literal does not fit in a 64-bit signed integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "integer literal is too large",
    labels = ["this integer is out of range"],
    help = format!("integers must be between {} and {}", i64::MIN, i64::MAX),
)]
pub struct IntegerOverflow;

/// The expression is nested more deeply than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = ["this group is too deep"],
    note = format!("at most {} levels of nesting are allowed", limit),
)]
pub struct NestingTooDeep {
    /// The maximum nesting depth.
    pub limit: usize,
}

/// A chain of operations produces an expression tree deeper than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is too long",
    labels = ["this expression"],
    help = "split the expression into smaller parts",
    note = format!("expressions can be at most {} operations deep", limit),
)]
pub struct ExpressionTooDeep {
    /// The maximum depth of the expression tree.
    pub limit: usize,
}
