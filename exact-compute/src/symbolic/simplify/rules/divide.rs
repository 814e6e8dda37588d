//! Simplification rules for division.

use crate::error::{kind::DivisionByZero, Error};
use crate::symbolic::{
    simplify::{
        fraction::{fold_rationals, RationalOp},
        rules::{as_power, factor_pairs},
        step::Step,
    },
    step_collector::StepCollector,
};
use exact_parser::parser::ast::Expr;
use super::multiply::log_exact;

/// Reports division by zero.
pub fn check(_: &Expr, rhs: &Expr) -> Result<(), Error> {
    if rhs.is_int(0) {
        return Err(Error::spanless(DivisionByZero));
    }
    Ok(())
}

/// `10 / 4 = 5/2`
/// `(1/2) / 3 = 1/6`
fn divide_rationals(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = fold_rationals(RationalOp::Div, lhs, rhs)?;
    step_collector.push(Step::Evaluate);
    Some(opt)
}

/// `0 / a = 0`
fn divide_zero(lhs: &Expr, _: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !lhs.is_int(0) {
        return None;
    }

    step_collector.push(Step::Absorb);
    Some(Expr::from(0))
}

/// `a / 1 = a`
/// `a / -1 = -a`
fn divide_unit(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if rhs.is_int(1) {
        step_collector.push(Step::Identity);
        Some(lhs.clone())
    } else if rhs.is_int(-1) {
        step_collector.push(Step::Negate);
        Some(-lhs.clone())
    } else {
        None
    }
}

/// `a / a = 1`
/// `(a*y) / a = y`
/// `a / (a/y) = y`
fn cancel_factor(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = if lhs == rhs {
        Expr::from(1)
    } else if let Some((_, y)) = factor_pairs(lhs).find(|(x, _)| *x == rhs) {
        y.clone()
    } else if let Some((_, y)) = rhs.as_div().filter(|(x, _)| *x == lhs) {
        y.clone()
    } else {
        return None;
    };

    step_collector.push(Step::Cancel);
    Some(opt)
}

/// `(a/b) / c = a / (b*c)`
/// `a / (x/y) = a * (y/x)`
fn nested_fractions(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = if let Some((a, b)) = lhs.as_div() {
        a.clone() / (b.clone() * rhs.clone())
    } else if let Some((x, y)) = rhs.as_div() {
        lhs.clone() * (y.clone() / x.clone())
    } else {
        return None;
    };

    step_collector.push(Step::Fraction);
    Some(opt)
}

/// `(a*x) / (b*x) = a/b`, for every ordering of the factors
/// `a / (a*y) = 1/y`
fn cancel_common_factor(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let common = factor_pairs(lhs)
        .find_map(|(a, x1)| {
            factor_pairs(rhs)
                .find(|(_, x2)| x1 == *x2)
                .map(|(b, _)| a.clone() / b.clone())
        });

    let opt = if let Some(expr) = common {
        expr
    } else if let Some((_, y)) = factor_pairs(rhs).find(|(a, _)| *a == lhs) {
        Expr::from(1) / y.clone()
    } else {
        return None;
    };

    step_collector.push(Step::Cancel);
    Some(opt)
}

/// Returns the coefficient of `x` in `term`: `a` if `term` is `a*x` in either order, or `1` if
/// `term` is `x` itself.
fn coefficient_of(term: &Expr, x: &Expr) -> Option<Expr> {
    if term == x {
        Some(Expr::from(1))
    } else {
        factor_pairs(term).find(|(_, t)| *t == x).map(|(a, _)| a.clone())
    }
}

/// `(a*x + b*x) / x = a + b`
/// `(a*x - b*x) / x = a - b`
/// `(a*x + b*x) / (c*x) = (a + b)/c`
/// `(a*x - b*x) / (c*x) = (a - b)/c`
fn divide_common_sum(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let divisors = std::iter::once((None, rhs))
        .chain(factor_pairs(rhs).map(|(c, x)| (Some(c), x)));

    let opt = divisors
        .filter(|(_, x)| !x.is_number())
        .find_map(|(c, x)| {
            let quotient = if let Some((s, t)) = lhs.as_add() {
                coefficient_of(s, x)? + coefficient_of(t, x)?
            } else {
                let (s, t) = lhs.as_sub()?;
                coefficient_of(s, x)? - coefficient_of(t, x)?
            };
            Some(match c {
                Some(c) => quotient / c.clone(),
                None => quotient,
            })
        })?;

    step_collector.push(Step::CollectLikeTerms);
    Some(opt)
}

/// Splits a term into an optional coefficient and a factor, trying each ordering of the factors of
/// a multiplication.
fn coefficient_and_factor(expr: &Expr) -> impl Iterator<Item = (Option<&Expr>, &Expr)> + '_ {
    std::iter::once((None, expr))
        .chain(factor_pairs(expr).map(|(c, p)| (Some(c), p)))
}

/// Divides powers of the same base.
///
/// `x^y / x = x^(y - 1)`
/// `x / x^y = x^(1 - y)`
/// `x^a / x^b = x^(a - b)`
/// `(p * x^a) / x^b = p * x^(a - b)`
/// `x^a / (q * x^b) = x^(a - b) / q`
/// `(p * x^a) / (q * x^b) = (p/q) * x^(a - b)`
///
/// Any factor that is not a power counts as a power with exponent one, but at least one of the
/// two factors must be a power; `(a*x) / (b*x)` is handled by [`cancel_common_factor`].
fn divide_powers(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = coefficient_and_factor(lhs)
        .find_map(|(p, xa)| {
            coefficient_and_factor(rhs).find_map(|(q, xb)| {
                if !matches!(xa, Expr::Exp(..)) && !matches!(xb, Expr::Exp(..)) {
                    return None;
                }
                let ((x1, a), (x2, b)) = (as_power(xa), as_power(xb));
                if x1 != x2 {
                    return None;
                }

                let power = x1.clone().pow(a - b);
                Some(match (p, q) {
                    (None, None) => power,
                    (Some(p), None) => p.clone() * power,
                    (None, Some(q)) => power / q.clone(),
                    (Some(p), Some(q)) => (p.clone() / q.clone()) * power,
                })
            })
        })?;

    step_collector.push(Step::CombinePowers);
    Some(opt)
}

/// `a / b^c = b^(k - c)`, where `a` and `b` are integers and `a = b^k`
/// `b^c / a = b^(c - k)`
fn divide_integer_power(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = match (lhs.as_number(), rhs.as_number()) {
        (Some(a), None) => {
            let (b, c) = rhs.as_exp()?;
            let k = log_exact(a, b.as_number()?)?;
            b.clone().pow(Expr::from(k) - c.clone())
        },
        (None, Some(a)) => {
            let (b, c) = lhs.as_exp()?;
            let k = log_exact(a, b.as_number()?)?;
            b.clone().pow(c.clone() - Expr::from(k))
        },
        _ => return None,
    };

    step_collector.push(Step::PerfectPower);
    Some(opt)
}

/// Divides logarithms.
///
/// `log_a(b) / log_a(c) = log_c(b)`
/// `(m * log_a(b)) / log_a(c) = m * log_c(b)`
/// `log_a(b) / (n * log_a(c)) = log_c(b) / n`
/// `(m * log_a(b)) / (n * log_a(c)) = (m/n) * log_c(b)`
fn change_of_base(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = coefficient_and_factor(lhs)
        .find_map(|(m, num)| {
            coefficient_and_factor(rhs).find_map(|(n, den)| {
                let ((a1, b), (a2, c)) = (num.as_log()?, den.as_log()?);
                if a1 != a2 {
                    return None;
                }

                let log = Expr::log(c.clone(), b.clone());
                Some(match (m, n) {
                    (None, None) => log,
                    (Some(m), None) => m.clone() * log,
                    (None, Some(n)) => log / n.clone(),
                    (Some(m), Some(n)) => (m.clone() / n.clone()) * log,
                })
            })
        })?;

    step_collector.push(Step::ChangeOfBase);
    Some(opt)
}

/// `(a * log_x(y)) / b = (a/b) * log_x(y)`, where `b` is an integer
fn divide_log_coefficient(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_number() {
        return None;
    }
    let (a, log) = factor_pairs(lhs).find(|(_, log)| log.is_log())?;

    step_collector.push(Step::Fraction);
    Some((a.clone() / rhs.clone()) * log.clone())
}

/// `a / log_x(y) = a * log_y(x)`
fn divide_by_log(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (x, y) = rhs.as_log()?;
    step_collector.push(Step::ChangeOfBase);
    Some(lhs.clone() * Expr::log(y.clone(), x.clone()))
}

/// Applies all division rules.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    divide_rationals(lhs, rhs, step_collector)
        .or_else(|| divide_zero(lhs, rhs, step_collector))
        .or_else(|| divide_unit(lhs, rhs, step_collector))
        .or_else(|| cancel_factor(lhs, rhs, step_collector))
        .or_else(|| nested_fractions(lhs, rhs, step_collector))
        .or_else(|| cancel_common_factor(lhs, rhs, step_collector))
        .or_else(|| divide_common_sum(lhs, rhs, step_collector))
        .or_else(|| divide_powers(lhs, rhs, step_collector))
        .or_else(|| divide_integer_power(lhs, rhs, step_collector))
        .or_else(|| change_of_base(lhs, rhs, step_collector))
        .or_else(|| divide_log_coefficient(lhs, rhs, step_collector))
        .or_else(|| divide_by_log(lhs, rhs, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn apply(lhs: Expr, rhs: Expr) -> Option<Expr> {
        all(&lhs, &rhs, &mut ())
    }

    #[test]
    fn division_by_zero() {
        let err = check(&Expr::from(1), &Expr::from(0)).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert!(check(&Expr::from(0), &Expr::Var).is_ok());
    }

    #[test]
    fn reduce_rationals() {
        assert_eq!(apply(Expr::from(10), Expr::from(4)), Some(Expr::from(5) / Expr::from(2)));
        assert_eq!(apply(Expr::from(12), Expr::from(-4)), Some(Expr::from(-3)));
    }

    #[test]
    fn cancel() {
        assert_eq!(apply(Expr::Var, Expr::Var), Some(Expr::from(1)));
        assert_eq!(apply(Expr::from(3) * Expr::Var, Expr::Var), Some(Expr::from(3)));
        assert_eq!(
            apply(Expr::from(3) * Expr::Var, Expr::Var * Expr::from(6)),
            Some(Expr::from(3) / Expr::from(6)),
        );
    }

    #[test]
    fn common_sum() {
        let numerator = Expr::from(2) * Expr::Var + Expr::Var * Expr::from(4);
        assert_eq!(
            apply(numerator, Expr::from(3) * Expr::Var),
            Some((Expr::from(2) + Expr::from(4)) / Expr::from(3)),
        );
    }

    #[test]
    fn powers() {
        assert_eq!(
            apply(Expr::Var.pow(5), Expr::Var),
            Some(Expr::Var.pow(Expr::from(5) - Expr::from(1))),
        );
        assert_eq!(
            apply(Expr::Var, Expr::from(2) * Expr::Var.pow(3)),
            Some(Expr::Var.pow(Expr::from(1) - Expr::from(3)) / Expr::from(2)),
        );
        assert_eq!(
            apply(Expr::from(6) * Expr::Var.pow(4), Expr::from(3) * Expr::Var.pow(2)),
            Some((Expr::from(6) / Expr::from(3)) * Expr::Var.pow(Expr::from(4) - Expr::from(2))),
        );
        assert_eq!(
            apply(Expr::from(2).pow(Expr::Var), Expr::from(8)),
            Some(Expr::from(2).pow(Expr::Var - Expr::from(3))),
        );
    }

    #[test]
    fn logs() {
        assert_eq!(
            apply(Expr::log(2, Expr::Var), Expr::log(2, 5)),
            Some(Expr::log(5, Expr::Var)),
        );
        assert_eq!(
            apply(Expr::from(3) * Expr::log(2, 5), Expr::from(6)),
            Some((Expr::from(3) / Expr::from(6)) * Expr::log(2, 5)),
        );
        assert_eq!(
            apply(Expr::Var, Expr::log(2, 5)),
            Some(Expr::Var * Expr::log(5, 2)),
        );
    }
}
