use exact_compute::{numerical::eval, symbolic::{simplify, solve}};
use exact_parser::parser::{
    ast::{Expr, FormatOptionsBuilder, Glyphs},
    parse,
};
use proptest::prelude::*;

mod strategies;

/// Returns true if `a` and `b` agree to within a relative tolerance, scaled so that values near
/// zero are compared absolutely.
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn simplify_is_idempotent(expr in strategies::arb_expr()) {
        let once = simplify(&expr);
        prop_assume!(once.is_ok());
        let once = once.unwrap();
        let twice = simplify(&once);
        prop_assume!(twice.is_ok());
        prop_assert_eq!(twice.unwrap(), once);
    }

    #[test]
    fn simplify_preserves_value(expr in strategies::arb_expr(), x in 0.25f64..3.75) {
        let simplified = simplify(&expr);
        prop_assume!(simplified.is_ok());

        let before = eval(&expr, Some(x)).unwrap();
        let after = eval(&simplified.unwrap(), Some(x)).unwrap();
        prop_assume!(before.is_finite() && after.is_finite());
        prop_assert!(approx_eq(before, after), "{} != {}", before, after);
    }

    #[test]
    fn integer_arithmetic_folds(a in -1000i64..1000, b in -1000i64..1000) {
        let (l, r) = (Expr::from(a), Expr::from(b));
        prop_assert_eq!(simplify(&(l.clone() + r.clone())).unwrap(), Expr::from(a + b));
        prop_assert_eq!(simplify(&(l.clone() - r.clone())).unwrap(), Expr::from(a - b));
        prop_assert_eq!(simplify(&(l * r)).unwrap(), Expr::from(a * b));
    }

    #[test]
    fn division_folds_to_exact_quotient(a in -1000i64..1000, b in 1i64..1000) {
        let quotient = simplify(&(Expr::from(a) / Expr::from(b))).unwrap();
        if a % b == 0 {
            prop_assert_eq!(quotient, Expr::from(a / b));
        } else {
            prop_assert!(!quotient.contains_var());
            let value = eval(&quotient, None).unwrap();
            prop_assert!(approx_eq(value, a as f64 / b as f64), "{} = {}", quotient, value);
        }
    }

    #[test]
    fn ascii_rendering_reparses(expr in strategies::arb_printable_expr()) {
        let options = FormatOptionsBuilder::new().glyphs(Glyphs::Ascii).build();
        let text = expr.display(options).to_string();
        prop_assert_eq!(parse(&text).unwrap(), expr, "{}", text);
    }

    #[test]
    fn linear_solution_substitutes_back(a in 1i64..10, b in -9i64..10, v in -5.0f64..5.0) {
        let f = Expr::from(a) * Expr::Var + Expr::from(b);
        let y = eval(&f, Some(v)).unwrap();

        let solutions = solve(&f).unwrap().unwrap();
        prop_assert_eq!(solutions.len(), 1);
        prop_assert!(approx_eq(eval(&solutions[0], Some(y)).unwrap(), v));
    }

    #[test]
    fn square_solutions_substitute_back(v in 0.5f64..10.0) {
        let f = Expr::Var.pow(2);
        let y = eval(&f, Some(v)).unwrap();

        let solutions = solve(&f).unwrap().unwrap();
        prop_assert_eq!(solutions.len(), 2);
        prop_assert!(approx_eq(eval(&solutions[0], Some(y)).unwrap(), v));
        prop_assert!(approx_eq(eval(&solutions[1], Some(y)).unwrap(), -v));
    }
}
