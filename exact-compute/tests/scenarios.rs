use assert_float_eq::{
    afe_is_relative_eq,
    assert_float_relative_eq,
};
use exact_compute::{
    error::kind::{CannotSolve, DivisionByZero, InvalidLogArgument, UnboundVariable, ZeroToTheZero},
    numerical::eval,
    symbolic::{simplify, solve, solve_with_steps},
};
use exact_parser::parser::{
    ast::{Expr, FormatOptionsBuilder, Glyphs},
    parse,
};
use pretty_assertions::assert_eq;

fn num(n: i64) -> Expr {
    Expr::from(n)
}

fn simplified(input: &str) -> Expr {
    simplify(&parse(input).unwrap()).unwrap()
}

#[test]
fn nested_arithmetic() {
    let expr = parse("3 + (7^2*(49-21)/(6+1) - (4*(2+5))) - 2*(7*5)^2").unwrap();
    assert_float_relative_eq!(eval(&expr, None).unwrap(), -2279.0);
    assert_eq!(simplify(&expr).unwrap(), num(-2279));
}

#[test]
fn quotient_of_logarithms() {
    let expr = parse("log<4>(64)/log<243>(27)").unwrap();
    assert_eq!(expr, Expr::log(4, 64) / Expr::log(243, 27));
    assert_eq!(simplify(&expr).unwrap(), num(5));
    assert_float_relative_eq!(eval(&expr, None).unwrap(), 5.0);
}

#[test]
fn logarithm_of_perfect_power() {
    let expr = parse("2log<3>(16)").unwrap();
    assert_eq!(expr, num(2) * Expr::log(3, 16));

    let simplified = simplify(&expr).unwrap();
    assert_eq!(simplified, num(8) * Expr::log(3, 2));
    assert_eq!(simplified.to_string(), "8log₃(2)");
    assert_float_relative_eq!(eval(&simplified, None).unwrap(), eval(&expr, None).unwrap());
}

#[test]
fn square_has_two_solutions() {
    let solutions = solve(&parse("x^2").unwrap()).unwrap();
    assert_eq!(solutions, Some(vec![
        Expr::root(2, Expr::Var),
        num(0) - Expr::root(2, Expr::Var),
    ]));
}

#[test]
fn implicit_multiplication() {
    let expr = parse("5(4) + 320(435)").unwrap();
    assert_eq!(expr, num(5) * num(4) + num(320) * num(435));
    assert_eq!(simplify(&expr).unwrap(), num(139220));
}

#[test]
fn division_by_zero_is_an_error() {
    let err = simplify(&(num(1) / num(0))).unwrap_err();
    assert!(err.is::<DivisionByZero>());
    assert!(err.spans.is_empty());
}

#[test]
fn domain_errors_propagate_from_operands() {
    let err = simplify(&parse("x + 2 * (0^0)").unwrap()).unwrap_err();
    assert!(err.is::<ZeroToTheZero>());

    let err = simplify(&parse("log<2>(3 - 5) * x").unwrap()).unwrap_err();
    assert!(err.is::<InvalidLogArgument>());
}

#[test]
fn unbound_variable() {
    let err = eval(&parse("2x + 1").unwrap(), None).unwrap_err();
    assert!(err.is::<UnboundVariable>());
    assert_float_relative_eq!(eval(&parse("2x + 1").unwrap(), Some(1.5)).unwrap(), 4.0);
}

#[test]
fn simplified_ascii_reparses() {
    let options = FormatOptionsBuilder::new().glyphs(Glyphs::Ascii).build();
    let inputs = [
        "x + x + 10/4",
        "sqrt(12)",
        "2log<3>(16)",
        "x * x * x",
        "1/2 + 1/3",
        "x - 3x",
        "log<2>(x) + 1",
    ];

    for input in inputs {
        let expr = simplified(input);
        let text = expr.display(options).to_string();
        assert_eq!(simplify(&parse(&text).unwrap()).unwrap(), expr, "{} => {}", input, text);
    }
}

#[test]
fn solutions_substitute_back() {
    // each solution, evaluated at y = f(v), should give back v
    let cases = [("2x + 1", 3.0), ("3 - x/4", 2.5), ("x^3", 1.5), ("log<2>(x)", 8.0), ("2^x", 3.0)];

    for (input, v) in cases {
        let f = parse(input).unwrap();
        let y = eval(&f, Some(v)).unwrap();
        let solutions = solve(&f).unwrap().unwrap();
        assert_float_relative_eq!(eval(&solutions[0], Some(y)).unwrap(), v);
    }
}

#[test]
fn unsolvable_equation() {
    let err = solve(&parse("x^x").unwrap()).unwrap_err();
    assert!(err.is::<CannotSolve>());
}

#[test]
fn solver_steps_render_placeholder() {
    let (solutions, steps) = solve_with_steps(&parse("2x + 1").unwrap()).unwrap();
    assert_eq!(solutions, Some(vec![(Expr::Var - num(1)) / num(2)]));

    let steps = steps.iter().map(ToString::to_string).collect::<Vec<_>>();
    assert_eq!(steps, vec!["2x + 1 = y", "2x = y - 1", "x = (y - 1) / 2"]);
}

#[test]
fn even_root_of_square_keeps_sign() {
    let expr = simplified("sqrt((x - 1)^2)");
    assert_float_relative_eq!(eval(&expr, Some(0.3)).unwrap(), 0.7);
    assert_float_relative_eq!(eval(&simplified("root<3>((x - 1)^3)"), Some(0.3)).unwrap(), -0.7);
}
