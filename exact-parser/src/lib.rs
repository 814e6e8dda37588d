//! Parser for algebraic expressions in the single variable `x`.
//!
//! Parsing happens in two stages. The [`normalizer`] first rewrites the raw input into a
//! canonical, whitespace-delimited form (explicit multiplication, explicit subtraction for unary
//! minus, canonical function syntax), and the [`parser`] then combines the terms of that form into
//! an [`Expr`] tree.
//!
//! ```
//! use exact_parser::parser::{ast::Expr, parse};
//!
//! let expr = parse("2x + 1").unwrap();
//! assert_eq!(expr, Expr::from(2) * Expr::Var + Expr::from(1));
//! ```
//!
//! [`Expr`]: parser::ast::Expr

pub mod normalizer;
pub mod parser;
pub mod tokenizer;
