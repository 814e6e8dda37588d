use crate::error::{kind::{RecursionLimit, UnboundVariable}, Error};
use exact_parser::parser::ast::Expr;

/// The maximum depth of an expression tree that [`eval`] descends into.
///
/// Every tree returned by the parser is shallower than this.
pub const MAX_EVAL_DEPTH: usize = 1024;

/// Evaluates the expression to a floating-point value, substituting `x` for the variable.
///
/// Evaluation follows IEEE 754 semantics: undefined operations, such as division by zero or the
/// logarithm of a negative number, produce infinities or NaN rather than errors. The only errors
/// are [`UnboundVariable`], when the expression contains the variable and `x` is [`None`], and
/// [`RecursionLimit`], when the tree is deeper than [`MAX_EVAL_DEPTH`].
///
/// ```
/// use exact_compute::numerical::eval;
/// use exact_parser::parser::parse;
///
/// let expr = parse("log<2>(x) + sqrt(9)").unwrap();
/// assert!((eval(&expr, Some(8.0)).unwrap() - 6.0).abs() < 1e-9);
/// assert!(eval(&expr, None).is_err());
/// ```
pub fn eval(expr: &Expr, x: Option<f64>) -> Result<f64, Error> {
    inner_eval(expr, x, 0)
}

fn inner_eval(expr: &Expr, x: Option<f64>, depth: usize) -> Result<f64, Error> {
    if depth > MAX_EVAL_DEPTH {
        return Err(Error::spanless(RecursionLimit { limit: MAX_EVAL_DEPTH }));
    }

    let eval = |expr: &Expr| inner_eval(expr, x, depth + 1);
    Ok(match expr {
        Expr::Number(n) => *n as f64,
        Expr::Var => x.ok_or_else(|| Error::spanless(UnboundVariable))?,
        Expr::Add(lhs, rhs) => eval(lhs)? + eval(rhs)?,
        Expr::Sub(lhs, rhs) => eval(lhs)? - eval(rhs)?,
        Expr::Mul(lhs, rhs) => eval(lhs)? * eval(rhs)?,
        Expr::Div(lhs, rhs) => eval(lhs)? / eval(rhs)?,
        Expr::Exp(base, exponent) => power(eval(base)?, eval(exponent)?),
        Expr::Log(base, argument) => eval(argument)?.ln() / eval(base)?.ln(),
        Expr::Root(index, radicand) => root(eval(index)?, eval(radicand)?),
    })
}

/// Raises `base` to `exponent`, using repeated multiplication for small integer exponents.
fn power(base: f64, exponent: f64) -> f64 {
    if exponent.fract() == 0.0 && exponent.abs() <= f64::from(i32::MAX) {
        base.powi(exponent as i32)
    } else {
        base.powf(exponent)
    }
}

/// Computes the `index`-th root of `radicand`.
///
/// Odd integer roots of negative numbers are real, and are computed as such.
fn root(index: f64, radicand: f64) -> f64 {
    if index == 2.0 {
        radicand.sqrt()
    } else if index == 3.0 {
        radicand.cbrt()
    } else if radicand < 0.0 && index.fract() == 0.0 && index % 2.0 != 0.0 {
        -(-radicand).powf(index.recip())
    } else {
        radicand.powf(index.recip())
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use crate::error::kind::{RecursionLimit, UnboundVariable};
    use exact_parser::parser::parse;
    use super::*;

    fn eval_str(input: &str, x: Option<f64>) -> f64 {
        eval(&parse(input).unwrap(), x).unwrap()
    }

    #[test]
    fn arithmetic() {
        assert_float_relative_eq!(eval_str("3 + (7^2*(49-21)/(6+1) - (4*(2+5))) - 2*(7*5)^2", None), -2279.0);
        assert_float_relative_eq!(eval_str("5(4) + 320(435)", None), 139220.0);
    }

    #[test]
    fn logarithms() {
        assert_float_relative_eq!(eval_str("log<4>(64)/log<243>(27)", None), 5.0);
        assert_float_relative_eq!(eval_str("log(1000)", None), 3.0);
    }

    #[test]
    fn roots() {
        assert_float_relative_eq!(eval_str("sqrt(16)", None), 4.0);
        assert_float_relative_eq!(eval_str("cbrt(-27)", None), -3.0);
        assert_float_relative_eq!(eval_str("root<5>(-32)", None), -2.0);
        assert!(eval_str("root<4>(-16)", None).is_nan());
    }

    #[test]
    fn variable() {
        assert_float_relative_eq!(eval_str("x^2 - 2x + 1", Some(3.0)), 4.0);
        let err = eval(&parse("2x").unwrap(), None).unwrap_err();
        assert!(err.is::<UnboundVariable>());
    }

    #[test]
    fn depth_limit() {
        let mut expr = Expr::from(1);
        for _ in 0..MAX_EVAL_DEPTH + 1 {
            expr = expr + Expr::from(1);
        }
        let err = eval(&expr, None).unwrap_err();
        assert!(err.is::<RecursionLimit>());

        let expr = parse(&vec!["1"; 500].join(" + ")).unwrap();
        assert_float_relative_eq!(eval(&expr, None).unwrap(), 500.0);
    }

    #[test]
    fn undefined_operations_are_not_errors() {
        assert!(eval_str("1/0", None).is_infinite());
        assert!(eval_str("log<2>(-1)", None).is_nan());
    }
}
