//! Simplification rules for powers.

use crate::error::{kind::{DivisionByZero, ZeroToTheZero}, Error};
use crate::primitive::perfect_power;
use crate::symbolic::{
    simplify::{
        fraction::{as_rational, pow_rational},
        rules::{factor_pairs, reciprocal_of},
        step::Step,
    },
    step_collector::StepCollector,
};
use exact_parser::parser::ast::Expr;

/// Reports `0^0`, and zero raised to a negative power.
pub fn check(lhs: &Expr, rhs: &Expr) -> Result<(), Error> {
    if !lhs.is_int(0) {
        return Ok(());
    }

    match as_rational(rhs) {
        Some((0, _)) => Err(Error::spanless(ZeroToTheZero)),
        Some((n, _)) if n < 0 => Err(Error::spanless(DivisionByZero)),
        _ => Ok(()),
    }
}

/// `2^3 = 8`
/// `(2/3)^-2 = (3/2)^2`
///
/// Canonical powers of fractions, such as `(2/3)^2`, evaluate to themselves and are left alone.
fn power_rationals(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = pow_rational(lhs, rhs.as_number()?)?;
    if opt.as_exp() == Some((lhs, rhs)) {
        return None;
    }

    step_collector.push(Step::Evaluate);
    Some(opt)
}

/// `a^0 = 1`
/// `0^a = 0`
/// `a^1 = a`
/// `1^a = 1`
fn power_identities(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (opt, step) = if rhs.is_int(0) {
        (Expr::from(1), Step::Absorb)
    } else if lhs.is_int(0) {
        (Expr::from(0), Step::Absorb)
    } else if rhs.is_int(1) {
        (lhs.clone(), Step::Identity)
    } else if lhs.is_int(1) {
        (Expr::from(1), Step::Absorb)
    } else {
        return None;
    };

    step_collector.push(step);
    Some(opt)
}

/// `(x/y)^-e = (y/x)^e`
/// `a^-b = 1/a^b`
fn negative_exponent(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_negative() {
        return None;
    }

    let exp = -rhs.clone();
    let opt = match lhs.as_div() {
        Some((x, y)) => (y.clone() / x.clone()).pow(exp),
        None => Expr::from(1) / lhs.clone().pow(exp),
    };

    step_collector.push(Step::Power);
    Some(opt)
}

/// `a^(1/n) = root(n, a)`
fn fractional_exponent(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let n = reciprocal_of(rhs)?;
    step_collector.push(Step::Root);
    Some(Expr::root(n.clone(), lhs.clone()))
}

/// `root(n, a)^n = a`
fn cancel_root(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (_, a) = lhs.as_root().filter(|(n, _)| *n == rhs)?;
    step_collector.push(Step::Root);
    Some(a.clone())
}

/// `b^log_b(y) = y`
/// `b^(a * log_b(y)) = y^a`, for either ordering of the factors
fn cancel_log(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let inverse_log = |expr: &Expr| {
        expr.as_log()
            .filter(|(b, _)| *b == lhs)
            .map(|(_, y)| y.clone())
    };

    let opt = if let Some(y) = inverse_log(rhs) {
        y
    } else {
        factor_pairs(rhs)
            .find_map(|(a, log)| Some(inverse_log(log)?.pow(a.clone())))?
    };

    step_collector.push(Step::Log);
    Some(opt)
}

/// `(a^b)^c = a^(b*c)`
fn power_of_power(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (a, b) = lhs.as_exp()?;
    step_collector.push(Step::Power);
    Some(a.clone().pow(b.clone() * rhs.clone()))
}

/// `n^y = b^(e*y)`, where `n` is a positive integer equal to `b^e`
fn perfect_power_base(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let n = lhs.as_number().filter(|n| *n > 0)?;
    let (base, exp) = perfect_power(n)?;

    step_collector.push(Step::PerfectPower);
    Some(Expr::from(base).pow(Expr::from(i64::from(exp)) * rhs.clone()))
}

/// Applies all power rules.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    power_rationals(lhs, rhs, step_collector)
        .or_else(|| power_identities(lhs, rhs, step_collector))
        .or_else(|| negative_exponent(lhs, rhs, step_collector))
        .or_else(|| fractional_exponent(lhs, rhs, step_collector))
        .or_else(|| cancel_root(lhs, rhs, step_collector))
        .or_else(|| cancel_log(lhs, rhs, step_collector))
        .or_else(|| power_of_power(lhs, rhs, step_collector))
        .or_else(|| perfect_power_base(lhs, rhs, step_collector))
}
