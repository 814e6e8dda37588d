//! Simplification rules for addition, including combining like terms and fractions.

use crate::primitive::lcm;
use crate::symbolic::{
    simplify::{fraction::{fold_rationals, RationalOp}, rules::factor_pairs, step::Step},
    step_collector::StepCollector,
};
use exact_parser::parser::ast::Expr;

/// `2 + 3 = 5`
/// `1/2 + 1/3 = 5/6`
fn add_rationals(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = fold_rationals(RationalOp::Add, lhs, rhs)?;
    step_collector.push(Step::Evaluate);
    Some(opt)
}

/// `a + 0 = a`
/// `0 + a = a`
fn add_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = if rhs.is_int(0) {
        lhs.clone()
    } else if lhs.is_int(0) {
        rhs.clone()
    } else {
        return None;
    };

    step_collector.push(Step::Identity);
    Some(opt)
}

/// `a + (0 - a) = 0`
/// `(0 - a) + a = 0`
/// `a + (b - a) = b`
/// `(b - a) + a = b`
fn add_difference(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = match (lhs.as_sub(), rhs.as_sub()) {
        (_, Some((b, a))) if a == lhs => b.clone(),
        (Some((b, a)), _) if a == rhs => b.clone(),
        _ => return None,
    };

    step_collector.push(Step::Cancel);
    Some(opt)
}

/// `a + (0 - b) = a - b`
fn add_negation(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (zero, b) = rhs.as_sub()?;
    if !zero.is_int(0) {
        return None;
    }

    step_collector.push(Step::Negate);
    Some(lhs.clone() - b.clone())
}

/// Collects like terms.
///
/// `a*t + b*t = (a + b)*t`, for every ordering of the factors
/// `t + a*t = (a + 1)*t`
/// `a*t + t = (a + 1)*t`
/// `t + t = 2*t`
fn combine_like_terms(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let like_terms = factor_pairs(lhs)
        .find_map(|(a, t1)| {
            factor_pairs(rhs)
                .find(|(_, t2)| t1 == *t2)
                .map(|(b, _)| (a.clone() + b.clone()) * t1.clone())
        });

    let opt = if let Some(expr) = like_terms {
        expr
    } else if let Some((a, _)) = factor_pairs(rhs).find(|(_, t)| *t == lhs) {
        (a.clone() + Expr::from(1)) * lhs.clone()
    } else if let Some((a, _)) = factor_pairs(lhs).find(|(_, t)| *t == rhs) {
        (a.clone() + Expr::from(1)) * rhs.clone()
    } else if lhs == rhs {
        Expr::from(2) * lhs.clone()
    } else {
        return None;
    };

    step_collector.push(Step::CollectLikeTerms);
    Some(opt)
}

/// Combines fractions.
///
/// `a/x + b/x = (a + b)/x`
/// `a/x + b/(x*y) = (a*y + b)/(x*y)`, for every ordering of the terms and factors
/// `a/m + b/n = (a*(l/m) + b*(l/n))/l`, where `m` and `n` are integers with least common
/// multiple `l`
/// `a + b/x = (a*x + b)/x`
/// `b/x + a = (a*x + b)/x`
fn add_fractions(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = match (lhs.as_div(), rhs.as_div()) {
        (Some((a, x1)), Some((b, x2))) if x1 == x2 => (a.clone() + b.clone()) / x1.clone(),
        (Some(small), Some(large)) | (Some(large), Some(small)) if cross_denominator(small, large).is_some() => {
            let ((a, x), (b, _)) = (small, large);
            let y = cross_denominator(small, large)?;
            (a.clone() * y.clone() + b.clone()) / (x.clone() * y.clone())
        },
        (Some((a, m)), Some((b, n))) if m.is_number() && n.is_number() => {
            let (m, n) = (m.as_number()?, n.as_number()?);
            let l = lcm(m, n).filter(|l| *l != 0)?;
            (a.clone() * Expr::from(l / m) + b.clone() * Expr::from(l / n)) / Expr::from(l)
        },
        (None, Some((b, x))) => (lhs.clone() * x.clone() + b.clone()) / x.clone(),
        (Some((b, x)), None) => (rhs.clone() * x.clone() + b.clone()) / x.clone(),
        _ => return None,
    };

    step_collector.push(Step::Fraction);
    Some(opt)
}

/// If the denominator of `large` is the denominator of `small` multiplied by some `y`, returns
/// `y`.
pub(crate) fn cross_denominator<'a>(small: (&Expr, &Expr), large: (&'a Expr, &'a Expr)) -> Option<&'a Expr> {
    let (_, x) = small;
    let (_, xy) = large;
    factor_pairs(xy).find(|(f, _)| *f == x).map(|(_, y)| y)
}

/// `log_b(x) + log_b(y) = log_b(x*y)`
fn add_logs(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let ((b1, x), (b2, y)) = (lhs.as_log()?, rhs.as_log()?);
    if b1 != b2 {
        return None;
    }

    step_collector.push(Step::Log);
    Some(Expr::log(b1.clone(), x.clone() * y.clone()))
}

/// Applies all addition rules.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_rationals(lhs, rhs, step_collector)
        .or_else(|| add_zero(lhs, rhs, step_collector))
        .or_else(|| add_difference(lhs, rhs, step_collector))
        .or_else(|| add_negation(lhs, rhs, step_collector))
        .or_else(|| combine_like_terms(lhs, rhs, step_collector))
        .or_else(|| add_fractions(lhs, rhs, step_collector))
        .or_else(|| add_logs(lhs, rhs, step_collector))
}
