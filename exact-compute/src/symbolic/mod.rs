//! Algebraic manipulation of expressions.
//!
//! # Simplification
//!
//! The [`simplify()`] function rewrites an expression into a canonical form, by applying
//! rewriting rules bottom-up until no more rules apply. Rational numbers are evaluated exactly,
//! and operations that are undefined (division by zero, `0^0`, invalid logarithms and roots) are
//! reported as errors instead of being evaluated.
//!
//! ```
//! use exact_compute::symbolic::simplify;
//! use exact_parser::parser::{ast::Expr, parse};
//!
//! let expr = parse("log<4>(64) / log<243>(27)").unwrap();
//! assert_eq!(simplify(&expr).unwrap(), Expr::from(5));
//! ```
//!
//! The rules that were applied can be recorded with [`simplify_with_steps`]. For more
//! information, see the [`mod@simplify`] module.
//!
//! # Solving
//!
//! The [`solve()`] function isolates the variable in the equation `expr = y`, returning the
//! solutions in terms of `y`. See the [`mod@solve`] module.

pub mod simplify;
pub mod solve;
pub mod step_collector;

pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use solve::{solve, solve_with_steps, Equation};
pub use step_collector::StepCollector;
