//! Simplification rules for subtraction.

use crate::primitive::lcm;
use crate::symbolic::{
    simplify::{
        fraction::{fold_rationals, RationalOp},
        rules::{add::cross_denominator, factor_pairs, term_pairs},
        step::Step,
    },
    step_collector::StepCollector,
};
use exact_parser::parser::ast::Expr;

/// `5 - 3 = 2`
/// `1/2 - 1/3 = 1/6`
fn subtract_rationals(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = fold_rationals(RationalOp::Sub, lhs, rhs)?;
    step_collector.push(Step::Evaluate);
    Some(opt)
}

/// `a - 0 = a`
fn subtract_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_int(0) {
        return None;
    }

    step_collector.push(Step::Identity);
    Some(lhs.clone())
}

/// `a - a = 0`
fn subtract_self(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if lhs != rhs {
        return None;
    }

    step_collector.push(Step::Cancel);
    Some(Expr::from(0))
}

/// `x - (x + y) = -y`
/// `x - (y + x) = -y`
/// `(x - y) - x = -y`
/// `(x + y) - x = y`
/// `(y + x) - x = y`
/// `x - (x - y) = y`
fn cancel_terms(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = if let Some((_, y)) = term_pairs(rhs).find(|(x, _)| *x == lhs) {
        -y.clone()
    } else if let Some((_, y)) = lhs.as_sub().filter(|(x, _)| *x == rhs) {
        -y.clone()
    } else if let Some((_, y)) = term_pairs(lhs).find(|(x, _)| *x == rhs) {
        y.clone()
    } else if let Some((_, y)) = rhs.as_sub().filter(|(x, _)| *x == lhs) {
        y.clone()
    } else {
        return None;
    };

    step_collector.push(Step::Cancel);
    Some(opt)
}

/// `a - (0 - b) = a + b`
fn subtract_negation(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (zero, b) = rhs.as_sub()?;
    if !zero.is_int(0) {
        return None;
    }

    step_collector.push(Step::Negate);
    Some(lhs.clone() + b.clone())
}

/// Collects like terms.
///
/// `a*t - b*t = (a - b)*t`, for every ordering of the factors
/// `t - a*t = (1 - a)*t`
/// `a*t - t = (a - 1)*t`
fn combine_like_terms(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let like_terms = factor_pairs(lhs)
        .find_map(|(a, t1)| {
            factor_pairs(rhs)
                .find(|(_, t2)| t1 == *t2)
                .map(|(b, _)| (a.clone() - b.clone()) * t1.clone())
        });

    let opt = if let Some(expr) = like_terms {
        expr
    } else if let Some((a, _)) = factor_pairs(rhs).find(|(_, t)| *t == lhs) {
        (Expr::from(1) - a.clone()) * lhs.clone()
    } else if let Some((a, _)) = factor_pairs(lhs).find(|(_, t)| *t == rhs) {
        (a.clone() - Expr::from(1)) * rhs.clone()
    } else {
        return None;
    };

    step_collector.push(Step::CollectLikeTerms);
    Some(opt)
}

/// Combines fractions.
///
/// `a/x - b/x = (a - b)/x`
/// `a/x - b/(x*y) = (a*y - b)/(x*y)`
/// `a/(x*y) - b/x = (a - b*y)/(x*y)`
/// `a/m - b/n = (a*(l/m) - b*(l/n))/l`, where `m` and `n` are integers with least common
/// multiple `l`
/// `a - b/x = (a*x - b)/x`, unless `a` is zero
/// `b/x - a = (b - a*x)/x`
fn subtract_fractions(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = match (lhs.as_div(), rhs.as_div()) {
        (Some((a, x1)), Some((b, x2))) if x1 == x2 => (a.clone() - b.clone()) / x1.clone(),
        (Some(left), Some(right)) => {
            if let Some(y) = cross_denominator(left, right) {
                let ((a, x), (b, _)) = (left, right);
                (a.clone() * y.clone() - b.clone()) / (x.clone() * y.clone())
            } else if let Some(y) = cross_denominator(right, left) {
                let ((a, xy), (b, _)) = (left, right);
                (a.clone() - b.clone() * y.clone()) / xy.clone()
            } else {
                let ((a, m), (b, n)) = (left, right);
                let (m, n) = (m.as_number()?, n.as_number()?);
                let l = lcm(m, n).filter(|l| *l != 0)?;
                (a.clone() * Expr::from(l / m) - b.clone() * Expr::from(l / n)) / Expr::from(l)
            }
        },
        (None, Some((b, x))) if !lhs.is_int(0) => (lhs.clone() * x.clone() - b.clone()) / x.clone(),
        (Some((b, x)), None) => (b.clone() - rhs.clone() * x.clone()) / x.clone(),
        _ => return None,
    };

    step_collector.push(Step::Fraction);
    Some(opt)
}

/// `log_b(x) - log_b(y) = log_b(x/y)`
fn subtract_logs(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let ((b1, x), (b2, y)) = (lhs.as_log()?, rhs.as_log()?);
    if b1 != b2 {
        return None;
    }

    step_collector.push(Step::Log);
    Some(Expr::log(b1.clone(), x.clone() / y.clone()))
}

/// Applies all subtraction rules.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    subtract_rationals(lhs, rhs, step_collector)
        .or_else(|| subtract_zero(lhs, rhs, step_collector))
        .or_else(|| subtract_self(lhs, rhs, step_collector))
        .or_else(|| cancel_terms(lhs, rhs, step_collector))
        .or_else(|| subtract_negation(lhs, rhs, step_collector))
        .or_else(|| combine_like_terms(lhs, rhs, step_collector))
        .or_else(|| subtract_fractions(lhs, rhs, step_collector))
        .or_else(|| subtract_logs(lhs, rhs, step_collector))
}
