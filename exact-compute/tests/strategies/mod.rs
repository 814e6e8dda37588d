use exact_parser::parser::ast::Expr;
use proptest::prelude::*;

/// Small integers and the variable.
fn arb_leaf() -> impl Strategy<Value = Expr> {
    prop_oneof![
        (-9i64..=9).prop_map(Expr::Number),
        Just(Expr::Var),
    ]
}

/// Trees of the arithmetic operations over small integers and the variable. Exponents are kept to
/// small positive integers, so that evaluation stays within the real numbers.
pub fn arb_expr() -> impl Strategy<Value = Expr> {
    arb_leaf().prop_recursive(
        3, // levels deep
        16, // max size
        2, // items per collection
        |inner| prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| l + r),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| l - r),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| l * r),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| l / r),
            (inner, 1i64..=3).prop_map(|(base, n)| base.pow(n)),
        ]
    )
}

/// Trees over non-negative integers, logarithms, and roots, for checking the printer against the
/// parser.
pub fn arb_printable_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        (0i64..=20).prop_map(Expr::Number),
        Just(Expr::Var),
    ];

    leaf.prop_recursive(
        3,
        16,
        2,
        |inner| prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| l + r),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| l - r),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| l * r),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| l / r),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| l.pow(r)),
            (2i64..=10, inner.clone()).prop_map(|(b, a)| Expr::log(b, a)),
            (2i64..=5, inner).prop_map(|(n, a)| Expr::root(n, a)),
        ]
    )
}
