use ariadne::Fmt;
use exact_attrs::ErrorKind;
use exact_error::EXPR;

/// Attempted to divide by zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this expression is zero"],
    help = "the result of dividing by zero is undefined",
)]
pub struct DivisionByZero;

/// Attempted to raise zero to the power of zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("{} is undefined", "0^0".fg(EXPR)),
    labels = ["this power"],
)]
pub struct ZeroToTheZero;

/// A logarithm has an integer base that is less than two.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid logarithm base `{}`", base),
    labels = ["this base"],
    help = format!("integer bases must be at least {}", "2".fg(EXPR)),
)]
pub struct InvalidLogBase {
    /// The base of the logarithm.
    pub base: i64,
}

/// A logarithm has an integer argument that is not positive.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the logarithm of `{}` is undefined", argument),
    labels = ["this argument"],
    help = "logarithms are only defined for positive arguments",
)]
pub struct InvalidLogArgument {
    /// The argument of the logarithm.
    pub argument: i64,
}

/// A root has an integer index that is not positive.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid root index `{}`", index),
    labels = ["this index"],
    help = format!("the index of a root must be at least {}", "1".fg(EXPR)),
)]
pub struct InvalidRootIndex {
    /// The index of the root.
    pub index: i64,
}

/// An expression containing the variable was evaluated without a value for the variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("{} has no value", "x".fg(EXPR)),
    labels = ["this variable"],
    help = "provide a value for the variable, or solve for it instead",
)]
pub struct UnboundVariable;

/// The equation solver could not isolate the variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot solve for the variable",
    labels = ["this expression"],
    note = format!("I could not isolate {} in `{}`", "x".fg(EXPR), equation),
)]
pub struct CannotSolve {
    /// The equation that could not be reduced further.
    pub equation: String,
}

/// Simplification or solving recursed too deeply.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is too complex",
    labels = ["this expression"],
    note = format!("the limit of {} nested steps was reached", limit),
)]
pub struct RecursionLimit {
    /// The maximum recursion depth.
    pub limit: usize,
}
