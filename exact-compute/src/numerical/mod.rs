//! Numerical evaluation of expressions.

pub mod eval;

pub use eval::eval;
