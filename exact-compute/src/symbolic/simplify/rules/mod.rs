//! Implementation of the simplification rules.
//!
//! Rules are grouped by the operation they apply to. Each rule is a function that takes the
//! already-simplified operands of a node, and returns `Some(expr)` with the rewritten node if the
//! rule applies, or `None` if it does not. The rules of an operation are tried in a fixed order and
//! the first one that applies wins, so the order of the rules in each `all` function matters:
//! earlier rules take priority over later, more general ones.
//!
//! Operations that can be undefined (division, powers, logarithms, and roots) also have a `check`
//! function, which is run before any rule and reports domain errors.

pub mod add;
pub mod divide;
pub mod log;
pub mod multiply;
pub mod power;
pub mod root;
pub mod subtract;

use crate::error::Error;
use crate::symbolic::step_collector::StepCollector;
use exact_parser::parser::ast::Expr;
use super::step::Step;

/// Returns both orderings of the factors of a multiplication, `(a, b)` and `(b, a)`. Returns
/// nothing if the expression is not a multiplication.
pub(crate) fn factor_pairs(expr: &Expr) -> impl Iterator<Item = (&Expr, &Expr)> + '_ {
    expr.as_mul().into_iter().flat_map(|(a, b)| [(a, b), (b, a)])
}

/// Returns both orderings of the terms of an addition.
pub(crate) fn term_pairs(expr: &Expr) -> impl Iterator<Item = (&Expr, &Expr)> + '_ {
    expr.as_add().into_iter().flat_map(|(a, b)| [(a, b), (b, a)])
}

/// Returns the base and exponent of the expression, treating anything that is not a power as
/// being raised to the first power.
pub(crate) fn as_power(expr: &Expr) -> (&Expr, Expr) {
    match expr.as_exp() {
        Some((base, exp)) => (base, exp.clone()),
        None => (expr, Expr::from(1)),
    }
}

/// If the expression is `1 / y`, returns `y`.
pub(crate) fn reciprocal_of(expr: &Expr) -> Option<&Expr> {
    expr.as_div().filter(|(num, _)| num.is_int(1)).map(|(_, den)| den)
}

/// Applies the rules of the operation at the root of the expression, whose operands must already
/// be simplified.
///
/// Returns an error if the operation is undefined for its operands.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    Ok(match expr {
        Expr::Add(lhs, rhs) => add::all(lhs, rhs, step_collector),
        Expr::Sub(lhs, rhs) => subtract::all(lhs, rhs, step_collector),
        Expr::Mul(lhs, rhs) => multiply::all(lhs, rhs, step_collector),
        Expr::Div(lhs, rhs) => {
            divide::check(lhs, rhs)?;
            divide::all(lhs, rhs, step_collector)
        },
        Expr::Exp(lhs, rhs) => {
            power::check(lhs, rhs)?;
            power::all(lhs, rhs, step_collector)
        },
        Expr::Log(lhs, rhs) => {
            log::check(lhs, rhs)?;
            log::all(lhs, rhs, step_collector)
        },
        Expr::Root(lhs, rhs) => {
            root::check(lhs, rhs)?;
            root::all(lhs, rhs, step_collector)
        },
        Expr::Number(_) | Expr::Var => None,
    })
}
