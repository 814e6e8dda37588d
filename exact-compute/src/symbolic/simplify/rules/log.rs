//! Simplification rules for logarithms.
//!
//! A logarithm is written `log_b(x)`, with the base `b` first.

use crate::error::{kind::{InvalidLogArgument, InvalidLogBase}, Error};
use crate::primitive::perfect_power;
use crate::symbolic::{
    simplify::{
        fraction::make_fraction,
        rules::{factor_pairs, reciprocal_of},
        step::Step,
    },
    step_collector::StepCollector,
};
use exact_parser::parser::ast::Expr;

/// Reports integer bases less than two, and integer arguments that are not positive.
pub fn check(base: &Expr, argument: &Expr) -> Result<(), Error> {
    if let Some(base) = base.as_number().filter(|b| *b < 2) {
        return Err(Error::spanless(InvalidLogBase { base }));
    }
    if let Some(argument) = argument.as_number().filter(|a| *a <= 0) {
        return Err(Error::spanless(InvalidLogArgument { argument }));
    }
    Ok(())
}

/// `log_b(1) = 0`
/// `log_b(b) = 1`
fn log_identities(base: &Expr, argument: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (opt, step) = if argument.is_int(1) {
        (Expr::from(0), Step::Absorb)
    } else if base == argument {
        (Expr::from(1), Step::Cancel)
    } else {
        return None;
    };

    step_collector.push(step);
    Some(opt)
}

/// `log_root(n, y)(y) = n`
/// `log_(1/root(n, y))(1/y) = n`
/// `log_root(n, y)(1/y) = -n`
/// `log_(1/root(n, y))(y) = -n`
fn log_root_base(base: &Expr, argument: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (base_inverted, root) = match reciprocal_of(base) {
        Some(den) => (true, den),
        None => (false, base),
    };
    let (n, y) = root.as_root()?;
    let (argument_inverted, argument) = match reciprocal_of(argument) {
        Some(den) => (true, den),
        None => (false, argument),
    };
    if argument != y {
        return None;
    }

    step_collector.push(Step::Log);
    if base_inverted == argument_inverted {
        Some(n.clone())
    } else {
        Some(-n.clone())
    }
}

/// `log_(1/a)(1/b) = log_a(b)`
/// `log_(1/a)(b) = -log_a(b)`
/// `log_a(1/b) = -log_a(b)`
fn log_reciprocals(base: &Expr, argument: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = match (reciprocal_of(base), reciprocal_of(argument)) {
        (Some(a), Some(b)) => Expr::log(a.clone(), b.clone()),
        (Some(a), None) => -Expr::log(a.clone(), argument.clone()),
        (None, Some(b)) => -Expr::log(base.clone(), b.clone()),
        (None, None) => return None,
    };

    step_collector.push(Step::Log);
    Some(opt)
}

/// Moves exponents out of logarithms.
///
/// `log_(a^x)(b^x) = log_a(b)`
/// `log_(a^y)(b^x) = (x/y) * log_a(b)`
/// `log_b(x^y) = y * log_b(x)`
/// `log_root(y, b)(x) = y * log_b(x)`
/// `log_(b^y)(x) = (1/y) * log_b(x)`
fn log_powers(base: &Expr, argument: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = match (base.as_exp(), argument.as_exp()) {
        (Some((a, y)), Some((b, x))) if x == y => Expr::log(a.clone(), b.clone()),
        (Some((a, y)), Some((b, x))) => (x.clone() / y.clone()) * Expr::log(a.clone(), b.clone()),
        (None, Some((x, y))) => y.clone() * Expr::log(base.clone(), x.clone()),
        (Some((b, y)), None) => (Expr::from(1) / y.clone()) * Expr::log(b.clone(), argument.clone()),
        (None, None) => {
            let (y, b) = base.as_root()?;
            y.clone() * Expr::log(b.clone(), argument.clone())
        },
    };

    step_collector.push(Step::Log);
    Some(opt)
}

/// `log_x(x*y) = 1 + log_x(y)`, for either ordering of the factors
/// `log_x(x/y) = 1 - log_x(y)`
fn log_product(base: &Expr, argument: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = if let Some((_, y)) = factor_pairs(argument).find(|(x, _)| *x == base) {
        Expr::from(1) + Expr::log(base.clone(), y.clone())
    } else if let Some((_, y)) = argument.as_div().filter(|(x, _)| *x == base) {
        Expr::from(1) - Expr::log(base.clone(), y.clone())
    } else {
        return None;
    };

    step_collector.push(Step::Log);
    Some(opt)
}

/// Rewrites integer bases and arguments that are perfect powers.
///
/// `log_(a^m)(b^n) = (n/m) * log_a(b)`
/// `log_(a^m)(y) = (1/m) * log_a(y)`
/// `log_x(b^n) = n * log_x(b)`
fn log_perfect_powers(base: &Expr, argument: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let base_power = base.as_number().and_then(perfect_power);
    let argument_power = argument.as_number().and_then(perfect_power);

    let opt = match (base_power, argument_power) {
        (Some((bx, ex)), Some((by, ey))) if ex == ey => Expr::log(bx, by),
        (Some((bx, ex)), Some((by, ey))) => {
            make_fraction(i64::from(ey), i64::from(ex))? * Expr::log(bx, by)
        },
        (Some((bx, ex)), None) => {
            (Expr::from(1) / Expr::from(i64::from(ex))) * Expr::log(bx, argument.clone())
        },
        (None, Some((by, ey))) => Expr::from(i64::from(ey)) * Expr::log(base.clone(), by),
        (None, None) => return None,
    };

    step_collector.push(Step::PerfectPower);
    Some(opt)
}

/// Applies all logarithm rules.
pub fn all(base: &Expr, argument: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    log_identities(base, argument, step_collector)
        .or_else(|| log_root_base(base, argument, step_collector))
        .or_else(|| log_reciprocals(base, argument, step_collector))
        .or_else(|| log_powers(base, argument, step_collector))
        .or_else(|| log_product(base, argument, step_collector))
        .or_else(|| log_perfect_powers(base, argument, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn apply(base: impl Into<Expr>, argument: impl Into<Expr>) -> Option<Expr> {
        all(&base.into(), &argument.into(), &mut ())
    }

    #[test]
    fn domain_errors() {
        let err = check(&Expr::from(1), &Expr::Var).unwrap_err();
        assert_eq!(err.downcast_ref::<InvalidLogBase>(), Some(&InvalidLogBase { base: 1 }));
        let err = check(&Expr::from(2), &Expr::from(-3)).unwrap_err();
        assert_eq!(err.downcast_ref::<InvalidLogArgument>(), Some(&InvalidLogArgument { argument: -3 }));
        assert!(check(&(Expr::from(1) / Expr::from(2)), &Expr::Var).is_ok());
    }

    #[test]
    fn identities() {
        assert_eq!(apply(Expr::Var, 1), Some(Expr::from(0)));
        assert_eq!(apply(7, 7), Some(Expr::from(1)));
    }

    #[test]
    fn root_bases() {
        let root = || Expr::root(3, Expr::Var);
        assert_eq!(apply(root(), Expr::Var), Some(Expr::from(3)));
        assert_eq!(apply(root(), Expr::from(1) / Expr::Var), Some(Expr::from(-3)));
        assert_eq!(apply(Expr::from(1) / root(), Expr::Var), Some(Expr::from(-3)));
    }

    #[test]
    fn reciprocals() {
        let half = || Expr::from(1) / Expr::from(2);
        assert_eq!(apply(half(), Expr::Var), Some(-Expr::log(2, Expr::Var)));
        assert_eq!(apply(half(), Expr::from(1) / Expr::Var), Some(Expr::log(2, Expr::Var)));
    }

    #[test]
    fn powers() {
        assert_eq!(
            apply(2, Expr::Var.pow(3)),
            Some(Expr::from(3) * Expr::log(2, Expr::Var)),
        );
        assert_eq!(
            apply(Expr::Var.pow(2), Expr::from(5).pow(2)),
            Some(Expr::log(Expr::Var, 5)),
        );
        assert_eq!(
            apply(Expr::root(2, Expr::Var), 3),
            Some(Expr::from(2) * Expr::log(Expr::Var, 3)),
        );
    }

    #[test]
    fn products() {
        assert_eq!(
            apply(3, Expr::Var * Expr::from(3)),
            Some(Expr::from(1) + Expr::log(3, Expr::Var)),
        );
        assert_eq!(
            apply(3, Expr::from(3) / Expr::Var),
            Some(Expr::from(1) - Expr::log(3, Expr::Var)),
        );
    }

    #[test]
    fn perfect_powers() {
        assert_eq!(apply(4, 64), Some(Expr::from(3) * Expr::log(2, 2)));
        assert_eq!(
            apply(243, 27),
            Some((Expr::from(3) / Expr::from(5)) * Expr::log(3, 3)),
        );
        assert_eq!(apply(3, 16), Some(Expr::from(4) * Expr::log(3, 2)));
        assert_eq!(apply(8, 27), Some(Expr::log(2, 3)));
        assert_eq!(
            apply(4, Expr::Var),
            Some((Expr::from(1) / Expr::from(2)) * Expr::log(2, Expr::Var)),
        );
        assert_eq!(apply(3, 10), None);
    }
}
