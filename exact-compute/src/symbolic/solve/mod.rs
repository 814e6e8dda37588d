//! Solving for the variable.
//!
//! The solver treats an expression `f` as the equation `f = y`, and isolates `x` by repeatedly
//! applying the inverse of the outermost operation of the left-hand side to both sides. For
//! example, `2x + 1 = y` becomes `2x = y - 1`, then `x = (y - 1) / 2`.
//!
//! Some inverses have more than one value: `x^2 = y` has the solutions `x = √y` and `x = -√y`. In
//! that case, the solver follows every branch, and returns one solution per branch, in the order
//! the branches were created.
//!
//! ```
//! use exact_compute::symbolic::solve;
//! use exact_parser::parser::{ast::Expr, parse};
//!
//! let solutions = solve(&parse("x^2").unwrap()).unwrap();
//! assert_eq!(solutions, Some(vec![
//!     Expr::root(2, Expr::Var),
//!     -Expr::root(2, Expr::Var),
//! ]));
//! ```

pub mod equation;

use crate::error::{kind::{CannotSolve, RecursionLimit}, Error};
use crate::symbolic::{simplify::simplify, step_collector::StepCollector};
use exact_parser::parser::ast::Expr;
use log::debug;

pub use equation::Equation;

/// The maximum number of inverse operations applied along a single branch.
pub const MAX_SOLVE_STEPS: usize = 64;

/// Returns true if the expression does not contain the variable.
fn is_constant(expr: &Expr) -> bool {
    !expr.contains_var()
}

/// Applies the inverse of the outermost operation of the left-hand side to both sides of the
/// equation.
///
/// Returns the resulting equations (one per branch), or [`None`] if no inverse applies.
fn invert(equation: &Equation) -> Option<Vec<Equation>> {
    let Equation { lhs, rhs } = equation;
    let branch = |lhs: Expr, rhs: Expr| Some(vec![Equation { lhs, rhs }]);

    match lhs {
        // a^log_b(c) = y  =>  log_b(c) * log_b(a) = log_b(y)
        Expr::Exp(a, exp) => {
            if let Some((b, c)) = exp.as_log().filter(|(b, _)| is_constant(b)) {
                return branch(
                    Expr::log(b.clone(), c.clone()) * Expr::log(b.clone(), (**a).clone()),
                    Expr::log(b.clone(), rhs.clone()),
                );
            }

            // a^(m * log_b(c)) = y  =>  m * log_b(c) * log_b(a) = log_b(y)
            let scaled_log = exp.as_mul()
                .into_iter()
                .flat_map(|(m, log)| [(m, log), (log, m)])
                .find_map(|(m, log)| {
                    let (b, c) = log.as_log().filter(|(b, _)| is_constant(b))?;
                    Some((m, b, c))
                });
            if let Some((m, b, c)) = scaled_log {
                return branch(
                    m.clone() * Expr::log(b.clone(), c.clone()) * Expr::log(b.clone(), (**a).clone()),
                    Expr::log(b.clone(), rhs.clone()),
                );
            }

            // a^n = y  =>  a = root(n, y), and a = -root(n, y) if n is even
            if let Some(n) = exp.as_number() {
                let root = Expr::root(n, rhs.clone());
                let mut equations = vec![Equation { lhs: (**a).clone(), rhs: root.clone() }];
                if n % 2 == 0 {
                    equations.push(Equation { lhs: (**a).clone(), rhs: -root });
                }
                return Some(equations);
            }

            // a^b = y  =>  b * log_2(a) = log_2(y)
            branch(
                (**exp).clone() * Expr::log(2, (**a).clone()),
                Expr::log(2, rhs.clone()),
            )
        },

        // root(a, b) = y  =>  b = y^a
        Expr::Root(a, b) if is_constant(a) => branch((**b).clone(), rhs.clone().pow((**a).clone())),

        // log_b(x) = y  =>  x = b^y
        Expr::Log(b, x) if is_constant(b) => branch((**x).clone(), (**b).clone().pow(rhs.clone())),

        // log_b(x) = y  =>  b = x^(1/y)
        Expr::Log(b, x) if is_constant(x) => {
            branch((**b).clone(), (**x).clone().pow(Expr::from(1) / rhs.clone()))
        },

        // a * b = y  =>  b = y / a
        Expr::Mul(a, b) if is_constant(a) => branch((**b).clone(), rhs.clone() / (**a).clone()),
        Expr::Mul(b, a) if is_constant(a) => branch((**b).clone(), rhs.clone() / (**a).clone()),

        // a / b = y  =>  b = a / y
        Expr::Div(a, b) if is_constant(a) => branch((**b).clone(), (**a).clone() / rhs.clone()),

        // a / b = y  =>  a = y * b
        Expr::Div(a, b) if is_constant(b) => branch((**a).clone(), rhs.clone() * (**b).clone()),

        // a + b = y  =>  a = y - b
        Expr::Add(a, b) if is_constant(b) => branch((**a).clone(), rhs.clone() - (**b).clone()),
        Expr::Add(b, a) if is_constant(b) => branch((**a).clone(), rhs.clone() - (**b).clone()),

        // a - b = y  =>  b = a - y
        Expr::Sub(a, b) if is_constant(a) => branch((**b).clone(), (**a).clone() - rhs.clone()),

        // a - b = y  =>  a = y + b
        Expr::Sub(a, b) if is_constant(b) => branch((**a).clone(), rhs.clone() + (**b).clone()),

        _ => None,
    }
}

/// Base implementation of the solver, isolating the variable along every branch starting from
/// the given equation.
fn isolate(
    equation: Equation,
    depth: usize,
    step_collector: &mut dyn StepCollector<Equation>,
    solutions: &mut Vec<Expr>,
) -> Result<(), Error> {
    if depth > MAX_SOLVE_STEPS {
        return Err(Error::spanless(RecursionLimit { limit: MAX_SOLVE_STEPS }));
    }

    debug!("{}", equation);
    if equation.is_solved() {
        debug!("branch solved: x = {}", equation.rhs);
        solutions.push(equation.rhs.clone());
        step_collector.push(equation);
        return Ok(());
    }

    let Some(branches) = invert(&equation) else {
        debug!("branch failed: no inverse for `{}`", equation.lhs);
        return Err(Error::spanless(CannotSolve { equation: equation.to_string() }));
    };
    step_collector.push(equation);

    for branch in branches {
        isolate(branch.simplified()?, depth + 1, step_collector, solutions)?;
    }
    Ok(())
}

/// Base implementation of [`solve`] and [`solve_with_steps`].
fn inner_solve(expr: &Expr, step_collector: &mut dyn StepCollector<Equation>) -> Result<Option<Vec<Expr>>, Error> {
    if !expr.contains_var() {
        return Ok(None);
    }

    let equation = Equation::new(simplify(expr)?);
    let mut solutions = Vec::new();
    isolate(equation, 0, step_collector, &mut solutions)?;
    Ok(Some(solutions))
}

/// Solves the equation `expr = y` for `x`, returning every solution in terms of `y` (represented
/// by [`Expr::Var`]).
///
/// Returns `Ok(None)` if the expression does not contain the variable, and a [`CannotSolve`]
/// error if the variable could not be isolated along some branch.
pub fn solve(expr: &Expr) -> Result<Option<Vec<Expr>>, Error> {
    inner_solve(expr, &mut ())
}

/// Solves the equation `expr = y` for `x`, also returning every equation visited along the way.
pub fn solve_with_steps(expr: &Expr) -> Result<(Option<Vec<Expr>>, Vec<Equation>), Error> {
    let mut steps = Vec::new();
    let solutions = inner_solve(expr, &mut steps)?;
    Ok((solutions, steps))
}

#[cfg(test)]
mod tests {
    use exact_parser::parser::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn solved(input: &str) -> Option<Vec<Expr>> {
        solve(&parse(input).unwrap()).unwrap()
    }

    #[test]
    fn no_variable() {
        assert_eq!(solved("2 + 3"), None);
    }

    #[test]
    fn linear() {
        assert_eq!(
            solved("2x + 1"),
            Some(vec![(Expr::Var - Expr::from(1)) / Expr::from(2)]),
        );
        assert_eq!(solved("5 - x"), Some(vec![Expr::from(5) - Expr::Var]));
        assert_eq!(solved("x - 5"), Some(vec![Expr::Var + Expr::from(5)]));
    }

    #[test]
    fn division() {
        assert_eq!(solved("6 / x"), Some(vec![Expr::from(6) / Expr::Var]));
        assert_eq!(solved("x / 3"), Some(vec![Expr::Var * Expr::from(3)]));
    }

    #[test]
    fn even_power() {
        assert_eq!(
            solved("x^2"),
            Some(vec![Expr::root(2, Expr::Var), -Expr::root(2, Expr::Var)]),
        );
        assert_eq!(solved("x^3"), Some(vec![Expr::root(3, Expr::Var)]));
    }

    #[test]
    fn logs_and_exponentials() {
        assert_eq!(solved("log<3>(x)"), Some(vec![Expr::from(3).pow(Expr::Var)]));
        assert_eq!(solved("2^x"), Some(vec![Expr::log(2, Expr::Var)]));
        assert_eq!(solved("sqrt(x)"), Some(vec![Expr::Var.pow(2)]));
    }

    #[test]
    fn cannot_solve() {
        let err = solve(&parse("x^x").unwrap()).unwrap_err();
        assert!(err.is::<CannotSolve>());
        let err = solve(&parse("x + log<2>(x)").unwrap()).unwrap_err();
        assert!(err.is::<CannotSolve>());
    }

    #[test]
    fn steps() {
        let (solutions, steps) = solve_with_steps(&parse("3x").unwrap()).unwrap();
        assert_eq!(solutions, Some(vec![Expr::Var / Expr::from(3)]));
        let steps = steps.iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(steps, vec!["3x = y", "x = y / 3"]);
    }
}
