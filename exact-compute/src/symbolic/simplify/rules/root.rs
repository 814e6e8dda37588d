//! Simplification rules for roots.
//!
//! A root is written `root(n, a)`, with the index `n` first.

use crate::error::{kind::InvalidRootIndex, Error};
use crate::primitive::{checked_pow, integer_root, prime_factorization};
use crate::symbolic::{
    simplify::{fraction::{as_rational, make_fraction}, step::Step},
    step_collector::StepCollector,
};
use exact_parser::parser::ast::Expr;

/// Integer radicands at least this large are not factored.
const FACTORIZATION_LIMIT: u64 = 1 << 40;

/// Reports integer indices that are not positive.
pub fn check(index: &Expr, _: &Expr) -> Result<(), Error> {
    if let Some(index) = index.as_number().filter(|n| *n <= 0) {
        return Err(Error::spanless(InvalidRootIndex { index }));
    }
    Ok(())
}

/// `root(1, a) = a`
/// `root(n, 1) = 1`
/// `root(n, 0) = 0`
fn root_identities(index: &Expr, radicand: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (opt, step) = if index.is_int(1) {
        (radicand.clone(), Step::Identity)
    } else if radicand.is_int(1) || radicand.is_int(0) {
        (radicand.clone(), Step::Absorb)
    } else {
        return None;
    };

    step_collector.push(step);
    Some(opt)
}

/// `root(3, 8) = 2`
/// `root(2, 4/9) = 2/3`
fn exact_root(index: &Expr, radicand: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let n = u32::try_from(index.as_number()?).ok()?;
    let (num, den) = as_rational(radicand)?;
    let opt = make_fraction(integer_root(num, n)?, integer_root(den, n)?)?;

    step_collector.push(Step::Evaluate);
    Some(opt)
}

/// Moves perfect powers out of an integer radicand.
///
/// `root(2, 12) = 2 * root(2, 3)`
/// `root(3, -54) = 3 * root(3, -2)`
fn extract_factors(index: &Expr, radicand: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let n = u32::try_from(index.as_number()?).ok()?;
    let value = radicand.as_number()?;
    if value < 0 && n % 2 == 0 {
        return None;
    }
    let magnitude = value.unsigned_abs();
    if magnitude >= FACTORIZATION_LIMIT {
        return None;
    }

    let (mut outside, mut inside) = (1i64, 1i64);
    for (prime, multiplicity) in prime_factorization(magnitude) {
        let prime = i64::try_from(prime).ok()?;
        outside = outside.checked_mul(checked_pow(prime, i64::from(multiplicity / n))?)?;
        inside = inside.checked_mul(checked_pow(prime, i64::from(multiplicity % n))?)?;
    }
    if outside == 1 {
        return None;
    }
    if value < 0 {
        inside = -inside;
    }

    step_collector.push(Step::Root);
    Some(Expr::from(outside) * Expr::root(index.clone(), inside))
}

/// `root(n, y^n) = y`
///
/// Unless `n` is an odd integer, this only holds when `y` is not negative (`√((x - 1)^2)` is
/// `|x - 1|`), so the rule then requires `y` to be a non-negative rational number.
fn cancel_power(index: &Expr, radicand: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (y, _) = radicand.as_exp().filter(|(_, n)| *n == index)?;
    let odd_index = index.as_number().map_or(false, |n| n % 2 != 0);
    let non_negative = as_rational(y).map_or(false, |(num, _)| num >= 0);
    if !odd_index && !non_negative {
        return None;
    }
    step_collector.push(Step::Root);
    Some(y.clone())
}

/// Applies all root rules.
pub fn all(index: &Expr, radicand: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    root_identities(index, radicand, step_collector)
        .or_else(|| exact_root(index, radicand, step_collector))
        .or_else(|| extract_factors(index, radicand, step_collector))
        .or_else(|| cancel_power(index, radicand, step_collector))
}
