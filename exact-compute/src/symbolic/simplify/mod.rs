//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression into a
//! semantically equivalent, canonical form. Simplification works bottom-up: the operands of a
//! node are simplified first, then the rules of the node's operation (see [`rules`]) are tried in
//! order, and the first rule that applies rewrites the node. The rewritten node is simplified
//! again, until no rule applies.
//!
//! Since a node is only returned once no rule applies to it or to any of its operands,
//! simplification is idempotent: simplifying an already simplified expression returns it
//! unchanged.
//!
//! ```
//! use exact_compute::symbolic::simplify;
//! use exact_parser::parser::{ast::Expr, parse};
//!
//! let expr = parse("x + x + 10/4").unwrap();
//! let simplified = simplify(&expr).unwrap();
//!
//! // `x + x + 10/4 = (4x + 5)/2`
//! assert_eq!(simplified, (Expr::from(4) * Expr::Var + Expr::from(5)) / Expr::from(2));
//! ```
//!
//! Operations that are undefined for their simplified operands, such as division by zero, are
//! reported as errors.

pub mod fraction;
pub mod rules;
pub mod step;

use crate::error::{kind::RecursionLimit, Error};
use crate::symbolic::step_collector::StepCollector;
use exact_parser::parser::ast::Expr;
use log::trace;
use step::Step;

/// The maximum number of nested simplification calls, counting both descents into operands and
/// re-simplifications of rewritten nodes.
pub const MAX_RECURSION_DEPTH: usize = 256;

/// Creates a node of the same operation as `expr`, with the given operands.
fn rebuild(expr: &Expr, lhs: Expr, rhs: Expr) -> Expr {
    let (lhs, rhs) = (Box::new(lhs), Box::new(rhs));
    match expr {
        Expr::Add(..) => Expr::Add(lhs, rhs),
        Expr::Sub(..) => Expr::Sub(lhs, rhs),
        Expr::Mul(..) => Expr::Mul(lhs, rhs),
        Expr::Div(..) => Expr::Div(lhs, rhs),
        Expr::Exp(..) => Expr::Exp(lhs, rhs),
        Expr::Log(..) => Expr::Log(lhs, rhs),
        Expr::Root(..) => Expr::Root(lhs, rhs),
        Expr::Number(_) | Expr::Var => expr.clone(),
    }
}

/// Base implementation of the simplification algorithm.
fn inner_simplify_with(
    expr: &Expr,
    depth: usize,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    if depth > MAX_RECURSION_DEPTH {
        return Err(Error::spanless(RecursionLimit { limit: MAX_RECURSION_DEPTH }));
    }

    let node = match expr.operands() {
        Some((lhs, rhs)) => {
            let lhs = inner_simplify_with(lhs, depth + 1, step_collector)?;
            let rhs = inner_simplify_with(rhs, depth + 1, step_collector)?;
            rebuild(expr, lhs, rhs)
        },
        None => return Ok(expr.clone()),
    };

    // steps are only kept if the rewrite changes the node
    let mut steps = Vec::new();
    match rules::all(&node, &mut steps)? {
        Some(new_expr) if new_expr != node => {
            for step in steps {
                trace!("{:?}: {} => {}", step, node, new_expr);
                step_collector.push(step);
            }
            inner_simplify_with(&new_expr, depth + 1, step_collector)
        },
        _ => Ok(node),
    }
}

/// Simplify the given expression.
pub fn simplify(expr: &Expr) -> Result<Expr, Error> {
    inner_simplify_with(expr, 0, &mut ())
}

/// Simplify the given expression, reporting every rewrite to the given step collector.
pub fn simplify_with(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Expr, Error> {
    inner_simplify_with(expr, 0, step_collector)
}

/// Simplify the given expression. The steps taken by the simplifier will also be collected and
/// returned. This is useful for debugging, and also for displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let expr = inner_simplify_with(expr, 0, &mut steps)?;
    Ok((expr, steps))
}
