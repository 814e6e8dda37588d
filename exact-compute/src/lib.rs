//! Exact simplification, numerical evaluation, and equation solving for expressions produced by
//! [`exact_parser`].
//!
//! - [`symbolic`] rewrites expressions into a canonical form, keeping rational numbers exact, and
//!   isolates the variable in equations.
//! - [`numerical`] evaluates expressions to floating-point values.
//! - [`primitive`] contains the exact integer arithmetic both rely on.

pub mod error;
pub mod numerical;
pub mod primitive;
pub mod symbolic;
