//! Tools to help manipulate exact rational numbers.
//!
//! Rational numbers have no node of their own in an [`Expr`]. An integer is a [`Expr::Number`],
//! and any other rational number is a [`Expr::Div`] of two integers in lowest terms, with a
//! positive denominator. When the denominator is a perfect power, and the numerator is the same
//! power of an integer, the fraction is written as a power of a simpler fraction instead:
//! `4/9 = (2/3)^2`.

use crate::primitive::{checked_pow, gcd, integer_root, perfect_power, reduce_fraction};
use exact_parser::parser::ast::Expr;

/// Returns the numerator and denominator of the rational number represented by the expression.
///
/// Recognizes integers, fractions of two integers, and integer powers of such fractions.
pub(crate) fn as_rational(expr: &Expr) -> Option<(i64, i64)> {
    match expr {
        Expr::Number(n) => Some((*n, 1)),
        Expr::Div(num, den) => {
            let den = den.as_number().filter(|den| *den != 0)?;
            Some((num.as_number()?, den))
        },
        Expr::Exp(base, exp) if matches!(**base, Expr::Div(..)) => {
            let (num, den) = as_rational(base)?;
            let exp = exp.as_number().filter(|exp| *exp > 1)?;
            Some((checked_pow(num, exp)?, checked_pow(den, exp)?))
        },
        _ => None,
    }
}

/// Create an [`Expr`] representing the rational number `numerator / denominator` in its canonical
/// form.
///
/// Returns [`None`] if the denominator is zero, or if the reduced fraction does not fit in an
/// [`i64`].
pub(crate) fn make_fraction(numerator: i64, denominator: i64) -> Option<Expr> {
    let (num, den) = reduce_fraction(numerator, denominator)?;
    if den == 1 {
        return Some(Expr::from(num));
    }

    // `1 / 4` stays as it is; writing it as `(1/2)^2` gains nothing
    if num != 1 && num != -1 {
        if let Some((_, max_exp)) = perfect_power(den) {
            let common_exp = (2..=max_exp).rev()
                .filter(|exp| max_exp % exp == 0)
                .find_map(|exp| Some((integer_root(num, exp)?, integer_root(den, exp)?, exp)));
            if let Some((num_root, den_root, exp)) = common_exp {
                return Some((Expr::from(num_root) / Expr::from(den_root)).pow(i64::from(exp)));
            }
        }
    }

    Some(Expr::from(num) / Expr::from(den))
}

/// Like [`make_fraction`], but accepts the wider intermediate results of rational arithmetic.
pub(crate) fn make_fraction_wide(numerator: i128, denominator: i128) -> Option<Expr> {
    if denominator == 0 {
        return None;
    }

    let g = gcd_wide(numerator, denominator);
    let numerator = i64::try_from(numerator / g).ok()?;
    let denominator = i64::try_from(denominator / g).ok()?;
    make_fraction(numerator, denominator)
}

fn gcd_wide(a: i128, b: i128) -> i128 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    // the denominator is non-zero, so the gcd is at least one
    i128::try_from(a).unwrap_or(1).max(1)
}

/// An arithmetic operation on two rational numbers, each given as `(numerator, denominator)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RationalOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Applies the operation to two expressions if both are rational numbers, returning the result in
/// canonical form.
///
/// Returns [`None`] if either expression is not a rational number, or if the result cannot be
/// represented exactly (division by zero, or overflow).
pub(crate) fn fold_rationals(op: RationalOp, lhs: &Expr, rhs: &Expr) -> Option<Expr> {
    let (a, b) = as_rational(lhs)?;
    let (c, d) = as_rational(rhs)?;
    let (a, b, c, d) = (i128::from(a), i128::from(b), i128::from(c), i128::from(d));

    let (num, den) = match op {
        RationalOp::Add => ((a * d).checked_add(c * b)?, b * d),
        RationalOp::Sub => ((a * d).checked_sub(c * b)?, b * d),
        RationalOp::Mul => (a * c, b * d),
        RationalOp::Div => (a * d, b * c),
    };
    make_fraction_wide(num, den)
}

/// Raises a rational number to an integer power, returning the result in canonical form.
pub(crate) fn pow_rational(base: &Expr, exp: i64) -> Option<Expr> {
    let (num, den) = as_rational(base)?;
    let (num, den) = if exp < 0 { (den, num) } else { (num, den) };
    let exp = exp.checked_abs()?;
    make_fraction(checked_pow(num, exp)?, checked_pow(den, exp)?)
}

/// Returns the greatest common divisor of `a` and `b` as an [`i64`], if it fits.
pub(crate) fn common_divisor(a: i64, b: i64) -> Option<i64> {
    i64::try_from(gcd(a, b)).ok().filter(|g| *g != 0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn frac(num: i64, den: i64) -> Expr {
        Expr::from(num) / Expr::from(den)
    }

    #[test]
    fn canonical_fractions() {
        assert_eq!(make_fraction(10, 4), Some(frac(5, 2)));
        assert_eq!(make_fraction(6, -3), Some(Expr::from(-2)));
        assert_eq!(make_fraction(1, 4), Some(frac(1, 4)));
        assert_eq!(make_fraction(3, 4), Some(frac(3, 4)));
        assert_eq!(make_fraction(1, 0), None);
    }

    #[test]
    fn perfect_power_fractions() {
        assert_eq!(make_fraction(4, 9), Some(frac(2, 3).pow(2)));
        assert_eq!(make_fraction(-8, 27), Some(frac(-2, 3).pow(3)));
        assert_eq!(make_fraction(9, 16), Some(frac(3, 4).pow(2)));
        assert_eq!(make_fraction(-4, 9), Some(frac(-4, 9)));
    }

    #[test]
    fn rational_values() {
        assert_eq!(as_rational(&frac(2, 3).pow(2)), Some((4, 9)));
        assert_eq!(as_rational(&Expr::from(7)), Some((7, 1)));
        assert_eq!(as_rational(&(Expr::Var / Expr::from(2))), None);
    }

    #[test]
    fn arithmetic() {
        let half = frac(1, 2);
        let third = frac(1, 3);
        assert_eq!(fold_rationals(RationalOp::Add, &half, &third), Some(frac(5, 6)));
        assert_eq!(fold_rationals(RationalOp::Sub, &half, &half), Some(Expr::from(0)));
        assert_eq!(fold_rationals(RationalOp::Div, &third, &half), Some(frac(2, 3)));
        assert_eq!(fold_rationals(RationalOp::Mul, &frac(2, 3), &frac(2, 3)), Some(frac(2, 3).pow(2)));
        assert_eq!(fold_rationals(RationalOp::Div, &half, &Expr::from(0)), None);
    }

    #[test]
    fn powers() {
        assert_eq!(pow_rational(&Expr::from(2), -2), Some(frac(1, 4)));
        assert_eq!(pow_rational(&frac(2, 3), -2), Some(frac(3, 2).pow(2)));
        assert_eq!(pow_rational(&frac(1, 2), 2), Some(frac(1, 4)));
        assert_eq!(pow_rational(&Expr::from(2), 64), None);
    }
}
