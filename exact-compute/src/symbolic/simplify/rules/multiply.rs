//! Simplification rules for multiplication.

use crate::symbolic::{
    simplify::{
        fraction::{common_divisor, fold_rationals, RationalOp},
        rules::{as_power, factor_pairs, reciprocal_of},
        step::Step,
    },
    step_collector::StepCollector,
};
use exact_parser::parser::ast::Expr;

/// `2 * 3 = 6`
/// `2/3 * 3/4 = 1/2`
fn multiply_rationals(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = fold_rationals(RationalOp::Mul, lhs, rhs)?;
    step_collector.push(Step::Evaluate);
    Some(opt)
}

/// `0 * a = 0`
/// `a * 0 = 0`
fn multiply_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if lhs.is_int(0) || rhs.is_int(0) {
        step_collector.push(Step::Absorb);
        Some(Expr::from(0))
    } else {
        None
    }
}

/// `1 * a = a`
/// `a * 1 = a`
fn multiply_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = if lhs.is_int(1) {
        rhs.clone()
    } else if rhs.is_int(1) {
        lhs.clone()
    } else {
        return None;
    };

    step_collector.push(Step::Identity);
    Some(opt)
}

/// `-1 * a = -a`
/// `a * -1 = -a`
fn multiply_negative_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = if lhs.is_int(-1) {
        -rhs.clone()
    } else if rhs.is_int(-1) {
        -lhs.clone()
    } else {
        return None;
    };

    step_collector.push(Step::Negate);
    Some(opt)
}

/// `a * a = a^2`
fn multiply_same(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if lhs != rhs {
        return None;
    }

    step_collector.push(Step::CombinePowers);
    Some(lhs.clone().pow(2))
}

/// `a * (b * x) = (a*b) * x`, where `a` and `b` are integers, in every ordering
fn multiply_coefficients(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (a, other) = match (lhs.as_number(), rhs.as_number()) {
        (Some(a), None) => (a, rhs),
        (None, Some(a)) => (a, lhs),
        _ => return None,
    };
    let (b, x) = factor_pairs(other).find_map(|(b, x)| Some((b.as_number()?, x)))?;
    let product = a.checked_mul(b)?;

    step_collector.push(Step::Evaluate);
    Some(Expr::from(product) * x.clone())
}

/// `b * (a/b) = a`
/// `(a/b) * b = a`
fn cancel_denominator(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = match (lhs.as_div(), rhs.as_div()) {
        (_, Some((a, b))) if b == lhs => a.clone(),
        (Some((a, b)), _) if b == rhs => a.clone(),
        _ => return None,
    };

    step_collector.push(Step::Cancel);
    Some(opt)
}

/// `n * (a/m) = ((n/g) * a) / (m/g)`, where `n` and `m` are integers with a common divisor `g`
/// greater than one
fn reduce_coefficient(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (n, (a, m)) = match (lhs.as_number(), rhs.as_number()) {
        (Some(n), None) => (n, rhs.as_div()?),
        (None, Some(n)) => (n, lhs.as_div()?),
        _ => return None,
    };
    let m = m.as_number()?;
    let g = common_divisor(n, m).filter(|g| *g > 1)?;

    step_collector.push(Step::Fraction);
    Some((Expr::from(n / g) * a.clone()) / Expr::from(m / g))
}

/// `x * x^y = x^(y + 1)`
/// `x^y * x = x^(y + 1)`
fn multiply_by_base(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = match (lhs.as_exp(), rhs.as_exp()) {
        (None, Some((x, y))) if x == lhs => x.clone().pow(y.clone() + Expr::from(1)),
        (Some((x, y)), None) if x == rhs => x.clone().pow(y.clone() + Expr::from(1)),
        _ => return None,
    };

    step_collector.push(Step::CombinePowers);
    Some(opt)
}

/// `(1/y) * x = x/y`
/// `(-1/y) * x = (-x)/y`
///
/// Also applies when the factors are swapped.
fn multiply_reciprocal(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = [(lhs, rhs), (rhs, lhs)].into_iter()
        .find_map(|(frac, x)| {
            if let Some(y) = reciprocal_of(frac) {
                return Some(x.clone() / y.clone());
            }
            let (num, y) = frac.as_div()?;
            num.is_int(-1).then(|| -x.clone() / y.clone())
        })?;

    step_collector.push(Step::Fraction);
    Some(opt)
}

/// `(x/y) * (y/x) = 1`
fn multiply_inverses(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let ((x1, y1), (y2, x2)) = (lhs.as_div()?, rhs.as_div()?);
    if x1 != x2 || y1 != y2 {
        return None;
    }

    step_collector.push(Step::Cancel);
    Some(Expr::from(1))
}

/// `(n/b) * (x/n) = x/b`
/// `(a/n) * (n/y) = a/y`
fn cross_cancel(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let ((a, b), (x, y)) = (lhs.as_div()?, rhs.as_div()?);
    let opt = if a == y {
        x.clone() / b.clone()
    } else if b == x {
        a.clone() / y.clone()
    } else {
        return None;
    };

    step_collector.push(Step::Cancel);
    Some(opt)
}

/// `(a/b) * (c/d) = (a*c) / (b*d)`
fn multiply_fractions(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let ((a, b), (c, d)) = (lhs.as_div()?, rhs.as_div()?);
    step_collector.push(Step::Fraction);
    Some((a.clone() * c.clone()) / (b.clone() * d.clone()))
}

/// `a * (x/y) = (a*x) / y`
/// `(x/y) * a = (a*x) / y`
///
/// Logarithms are left as coefficients of fractions, so that `(1/2) * log_2(3)` is not rewritten.
fn multiply_into_fraction(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (a, (x, y)) = match (lhs.as_div(), rhs.as_div()) {
        (None, Some(frac)) => (lhs, frac),
        (Some(frac), None) => (rhs, frac),
        _ => return None,
    };
    if a.is_log() {
        return None;
    }

    step_collector.push(Step::Fraction);
    Some((a.clone() * x.clone()) / y.clone())
}

/// Combines powers of the same base.
///
/// `x^a * x^b = x^(a + b)`
/// `x^a * (p * x^b) = p * x^(a + b)`
/// `(p * x^a) * (q * x^b) = (p*q) * x^(a + b)`
///
/// Any factor that is not a power counts as a power with exponent one.
fn combine_powers(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let same_base = |a: &Expr, b: &Expr| {
        let ((x1, e1), (x2, e2)) = (as_power(a), as_power(b));
        (x1 == x2).then(|| x1.clone().pow(e1 + e2))
    };

    let opt = if let Some(expr) = same_base(lhs, rhs) {
        expr
    } else if let Some(expr) = factor_pairs(rhs).find_map(|(p, xb)| Some(p.clone() * same_base(lhs, xb)?)) {
        expr
    } else if let Some(expr) = factor_pairs(lhs).find_map(|(p, xa)| Some(p.clone() * same_base(xa, rhs)?)) {
        expr
    } else {
        factor_pairs(lhs)
            .find_map(|(p, xa)| {
                factor_pairs(rhs)
                    .find_map(|(q, xb)| Some((p.clone() * q.clone()) * same_base(xa, xb)?))
            })?
    };

    step_collector.push(Step::CombinePowers);
    Some(opt)
}

/// `a * b^c = b^(k + c)`, where `a` and `b` are integers and `a = b^k`
/// `b^c * a = b^(k + c)`
fn multiply_integer_power(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (a, (b, c)) = match (lhs.as_number(), rhs.as_number()) {
        (Some(a), None) => (a, rhs.as_exp()?),
        (None, Some(a)) => (a, lhs.as_exp()?),
        _ => return None,
    };
    let k = log_exact(a, b.as_number()?)?;

    step_collector.push(Step::PerfectPower);
    Some(b.clone().pow(Expr::from(k) + c.clone()))
}

/// Returns `k` such that `base^k = n`, if one exists.
pub(crate) fn log_exact(mut n: i64, base: i64) -> Option<i64> {
    if base.unsigned_abs() < 2 || n == 0 {
        return None;
    }

    let mut k = 0;
    while n % base == 0 {
        n /= base;
        k += 1;
    }
    (n == 1 && k > 0).then_some(k)
}

/// `log_x(a) * log_a(y) = log_x(y)`
/// `log_a(y) * log_x(a) = log_x(y)`
fn chain_logs(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let ((b1, a1), (b2, a2)) = (lhs.as_log()?, rhs.as_log()?);
    let opt = if a1 == b2 {
        Expr::log(b1.clone(), a2.clone())
    } else if a2 == b1 {
        Expr::log(b2.clone(), a1.clone())
    } else {
        return None;
    };

    step_collector.push(Step::ChangeOfBase);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_rationals(lhs, rhs, step_collector)
        .or_else(|| multiply_zero(lhs, rhs, step_collector))
        .or_else(|| multiply_one(lhs, rhs, step_collector))
        .or_else(|| multiply_negative_one(lhs, rhs, step_collector))
        .or_else(|| multiply_same(lhs, rhs, step_collector))
        .or_else(|| multiply_coefficients(lhs, rhs, step_collector))
        .or_else(|| cancel_denominator(lhs, rhs, step_collector))
        .or_else(|| reduce_coefficient(lhs, rhs, step_collector))
        .or_else(|| multiply_by_base(lhs, rhs, step_collector))
        .or_else(|| multiply_reciprocal(lhs, rhs, step_collector))
        .or_else(|| multiply_inverses(lhs, rhs, step_collector))
        .or_else(|| cross_cancel(lhs, rhs, step_collector))
        .or_else(|| multiply_fractions(lhs, rhs, step_collector))
        .or_else(|| multiply_into_fraction(lhs, rhs, step_collector))
        .or_else(|| combine_powers(lhs, rhs, step_collector))
        .or_else(|| multiply_integer_power(lhs, rhs, step_collector))
        .or_else(|| chain_logs(lhs, rhs, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn apply(lhs: Expr, rhs: Expr) -> Option<Expr> {
        all(&lhs, &rhs, &mut ())
    }

    #[test]
    fn identities() {
        assert_eq!(apply(Expr::Var, Expr::from(0)), Some(Expr::from(0)));
        assert_eq!(apply(Expr::from(1), Expr::Var), Some(Expr::Var));
        assert_eq!(apply(Expr::Var, Expr::from(-1)), Some(Expr::from(0) - Expr::Var));
        assert_eq!(apply(Expr::Var, Expr::Var), Some(Expr::Var.pow(2)));
    }

    #[test]
    fn coefficients() {
        assert_eq!(
            apply(Expr::from(2), Expr::Var * Expr::from(3)),
            Some(Expr::from(6) * Expr::Var),
        );
        assert_eq!(
            apply(Expr::from(6), Expr::Var / Expr::from(4)),
            Some((Expr::from(3) * Expr::Var) / Expr::from(2)),
        );
    }

    #[test]
    fn powers() {
        assert_eq!(
            apply(Expr::Var, Expr::Var.pow(3)),
            Some(Expr::Var.pow(Expr::from(3) + Expr::from(1))),
        );
        assert_eq!(
            apply(Expr::Var.pow(2), Expr::from(5) * Expr::Var.pow(3)),
            Some(Expr::from(5) * Expr::Var.pow(Expr::from(2) + Expr::from(3))),
        );
        assert_eq!(
            apply(Expr::from(8), Expr::from(2).pow(Expr::Var)),
            Some(Expr::from(2).pow(Expr::from(3) + Expr::Var)),
        );
    }

    #[test]
    fn fractions() {
        let lhs = Expr::Var / Expr::log(2, 3);
        let rhs = Expr::log(2, 3) / Expr::Var;
        assert_eq!(apply(lhs, rhs), Some(Expr::from(1)));
        assert_eq!(
            apply(Expr::from(1) / Expr::from(3), Expr::Var),
            Some(Expr::Var / Expr::from(3)),
        );
        assert_eq!(apply(Expr::log(2, 3), Expr::Var / Expr::from(2)), None);
    }

    #[test]
    fn chained_logs() {
        assert_eq!(
            apply(Expr::log(2, 5), Expr::log(5, Expr::Var)),
            Some(Expr::log(2, Expr::Var)),
        );
    }

    #[test]
    fn exact_logs() {
        assert_eq!(log_exact(8, 2), Some(3));
        assert_eq!(log_exact(12, 2), None);
        assert_eq!(log_exact(1, 2), None);
    }
}
