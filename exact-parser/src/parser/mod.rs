pub mod ast;
pub mod error;
pub mod term;
pub mod token;

use ast::Expr;
use error::{kind, Error};
use log::debug;
use std::ops::Range;
use term::{find_closing, is_integer, split_terms, Term};
use token::op::{Associativity, BinOpKind};
use crate::normalizer::normalize;

/// The maximum number of nested groups (parentheses, function arguments, and bases / indices) the
/// parser will descend into.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The maximum depth of the expression tree the parser builds, counting every binary operation
/// between the root and the deepest leaf.
pub const MAX_EXPR_DEPTH: usize = 512;

/// Function names, and an example of their correct usage for error messages.
const FUNCTIONS: [(&str, &str); 4] = [
    ("sqrt", "sqrt(x)"),
    ("cbrt", "cbrt(x)"),
    ("root", "root<3>(x)"),
    ("log", "log<2>(x)"),
];

/// Parses the given input into an expression.
///
/// This is shorthand for [`Parser::new`] followed by [`Parser::try_parse_full`].
pub fn parse(input: &str) -> Result<Expr, Error> {
    Parser::new(input).try_parse_full()
}

/// A parser for algebraic expressions.
///
/// The input is normalized when the parser is created; the spans of any error returned by the
/// parser refer to the normalized text, which is available through [`Parser::source`].
#[derive(Debug, Clone)]
pub struct Parser {
    /// The normalized input.
    source: String,
}

impl Parser {
    /// Create a new parser for the given input.
    pub fn new(input: &str) -> Self {
        let source = normalize(input);
        debug!("normalized `{}` to `{}`", input, source);
        Self { source }
    }

    /// Returns the normalized text that this parser parses.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parses the entire normalized input into a single expression.
    pub fn try_parse_full(&self) -> Result<Expr, Error> {
        self.parse_range(0..self.source.len(), 0)
    }

    /// Parses the expression in the given region of the source.
    fn parse_range(&self, range: Range<usize>, depth: usize) -> Result<Expr, Error> {
        if depth > MAX_NESTING_DEPTH {
            return Err(Error::new(vec![range], kind::NestingTooDeep { limit: MAX_NESTING_DEPTH }));
        }

        let spans = split_terms(&self.source, range.clone())?;
        if spans.is_empty() {
            return Err(Error::new(vec![range], kind::EmptyExpression));
        }

        let terms = spans.into_iter()
            .map(|span| Ok((self.classify(span.clone(), depth)?, span)))
            .collect::<Result<Vec<_>, Error>>()?;

        // terms must alternate between operands and operators, starting and ending with an operand
        let mut operands = Vec::with_capacity(terms.len() / 2 + 1);
        let mut ops = Vec::with_capacity(terms.len() / 2);
        let mut last_span = range.clone();
        for (i, (term, span)) in terms.into_iter().enumerate() {
            match (term, i % 2 == 0) {
                (Term::Operand(expr), true) => operands.push(expr),
                (Term::Op(op), false) => ops.push(op),
                (Term::Op(_), true) => return Err(Error::new(vec![span], kind::MissingOperand)),
                (Term::Operand(_), false) => return Err(Error::new(vec![span], kind::ExpectedOperator)),
            }
            last_span = span;
        }
        if ops.len() == operands.len() {
            return Err(Error::new(vec![last_span], kind::MissingOperand));
        }

        combine(operands, ops, range)
    }

    /// Classifies a single term of the source.
    fn classify(&self, span: Range<usize>, depth: usize) -> Result<Term, Error> {
        let text = &self.source[span.clone()];

        if let Some(op) = BinOpKind::from_symbol(text) {
            return Ok(Term::Op(op));
        }

        if is_integer(text) {
            return text.parse::<i64>()
                .map(|n| Term::Operand(Expr::Number(n)))
                .map_err(|_| Error::new(vec![span], kind::IntegerOverflow));
        }

        if text == "x" {
            return Ok(Term::Operand(Expr::Var));
        }

        if text.starts_with('(') {
            let close = find_closing(&self.source, span.start, span.end, b'(', b')');
            if close == Some(span.end - 1) {
                return self.parse_range(span.start + 1..span.end - 1, depth + 1)
                    .map(Term::Operand);
            }
        }

        if let Some(&(name, usage)) = FUNCTIONS.iter().find(|(name, _)| text.starts_with(name)) {
            return self.parse_function(name, usage, span, depth).map(Term::Operand);
        }

        Err(Error::new(vec![span], kind::UnrecognizedTerm { term: text.to_string() }))
    }

    /// Parses a function call, such as `sqrt(x)` or `log<2>(x)`.
    fn parse_function(
        &self,
        name: &'static str,
        usage: &'static str,
        span: Range<usize>,
        depth: usize,
    ) -> Result<Expr, Error> {
        let malformed = || Error::new(vec![span.clone()], kind::MalformedFunction { name, usage });
        let bytes = self.source.as_bytes();
        let mut cursor = span.start + name.len();

        // the base of a logarithm, or the index of a root
        let mut param = None;
        if bytes.get(cursor) == Some(&b'<') {
            let close = find_closing(&self.source, cursor, span.end, b'<', b'>')
                .ok_or_else(|| Error::new(vec![cursor..cursor + 1], kind::UnclosedAngleBracket))?;
            param = Some(self.parse_range(cursor + 1..close, depth + 1)?);
            cursor = close + 1;
        }

        if bytes.get(cursor) != Some(&b'(')
            || find_closing(&self.source, cursor, span.end, b'(', b')') != Some(span.end - 1)
        {
            return Err(malformed());
        }
        let arg = self.parse_range(cursor + 1..span.end - 1, depth + 1)?;

        match (name, param) {
            ("sqrt", None) => Ok(Expr::root(2, arg)),
            ("cbrt", None) => Ok(Expr::root(3, arg)),
            ("root", Some(index)) => Ok(Expr::root(index, arg)),
            ("log", Some(base)) => Ok(Expr::log(base, arg)),
            ("log", None) => Ok(Expr::log(10, arg)),
            _ => Err(malformed()),
        }
    }
}

/// Pops the top two operands and combines them with the given operator.
///
/// Each operand is paired with the depth of its tree. Returns [`None`] if the new tree would be
/// deeper than [`MAX_EXPR_DEPTH`].
fn reduce(operands: &mut Vec<(Expr, usize)>, op: BinOpKind) -> Option<()> {
    let (rhs, rhs_depth) = operands.pop()?;
    let (lhs, lhs_depth) = operands.pop()?;
    let depth = 1 + lhs_depth.max(rhs_depth);
    if depth > MAX_EXPR_DEPTH {
        return None;
    }
    operands.push((op.apply(lhs, rhs), depth));
    Some(())
}

/// Combines operands and the operators between them into a single expression, respecting
/// precedence and associativity.
///
/// Operators wait on a stack until an operator that binds less tightly arrives, so the whole
/// expression is combined in a single pass.
fn combine(operands: Vec<Expr>, ops: Vec<BinOpKind>, range: Range<usize>) -> Result<Expr, Error> {
    let too_deep = || Error::new(vec![range.clone()], kind::ExpressionTooDeep { limit: MAX_EXPR_DEPTH });
    let empty = || Error::new(vec![range.clone()], kind::EmptyExpression);

    // operands come from groups that were checked already, so their depth is bounded
    let mut operands_iter = operands.into_iter().map(|expr| {
        let depth = expr.depth();
        (expr, depth)
    });
    let mut output = vec![operands_iter.next().ok_or_else(empty)?];
    let mut pending: Vec<BinOpKind> = Vec::with_capacity(ops.len());

    for (op, operand) in ops.into_iter().zip(operands_iter.by_ref()) {
        while let Some(&top) = pending.last() {
            let binds_first = top.precedence() > op.precedence()
                || (top.precedence() == op.precedence() && op.associativity() == Associativity::Left);
            if !binds_first {
                break;
            }
            pending.pop();
            reduce(&mut output, top).ok_or_else(too_deep)?;
        }
        pending.push(op);
        output.push(operand);
    }

    // every operand must have been consumed
    if operands_iter.next().is_some() {
        return Err(empty());
    }

    while let Some(op) = pending.pop() {
        reduce(&mut output, op).ok_or_else(too_deep)?;
    }

    match (output.pop(), output.is_empty()) {
        (Some((expr, _)), true) => Ok(expr),
        _ => Err(empty()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use ast::{FormatOptionsBuilder, Glyphs};

    fn num(n: i64) -> Expr {
        Expr::from(n)
    }

    #[test]
    fn arithmetic_with_groups() {
        let expr = parse("3 + (7^2*(49-21)/(6+1) - (4*(2+5))) - 2*(7*5)^2").unwrap();
        let inner = num(7).pow(2) * (num(49) - num(21)) / (num(6) + num(1))
            - num(4) * (num(2) + num(5));
        assert_eq!(expr, num(3) + inner - num(2) * (num(7) * num(5)).pow(2));
    }

    #[test]
    fn logarithm_quotient() {
        let expr = parse("log<4>(64)/log<243>(27)").unwrap();
        assert_eq!(expr, Expr::log(4, 64) / Expr::log(243, 27));
    }

    #[test]
    fn coefficient_of_logarithm() {
        assert_eq!(parse("2log<3>(16)").unwrap(), num(2) * Expr::log(3, 16));
    }

    #[test]
    fn implicit_multiplication() {
        let expr = parse("5(4) + 320(435)").unwrap();
        assert_eq!(expr, num(5) * num(4) + num(320) * num(435));
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(parse("1 + 2 * 3").unwrap(), num(1) + num(2) * num(3));
        assert_eq!(parse("8 - 4 - 2").unwrap(), (num(8) - num(4)) - num(2));
        assert_eq!(parse("8 / 4 * 2").unwrap(), (num(8) / num(4)) * num(2));
        assert_eq!(parse("2 ^ 3 ^ 2").unwrap(), num(2).pow(num(3).pow(2)));
        assert_eq!(parse("2 * x ^ 2").unwrap(), num(2) * Expr::Var.pow(2));
    }

    #[test]
    fn signs() {
        assert_eq!(parse("-2^2").unwrap(), num(0) - num(2).pow(2));
        assert_eq!(parse("-3x").unwrap(), num(-3) * Expr::Var);
        assert_eq!(parse("2^-x").unwrap(), num(2).pow(num(0) - Expr::Var));
    }

    #[test]
    fn functions() {
        assert_eq!(parse("sqrt(x)").unwrap(), Expr::root(2, Expr::Var));
        assert_eq!(parse("cbrt(27)").unwrap(), Expr::root(3, 27));
        assert_eq!(parse("root(4)(x)").unwrap(), Expr::root(4, Expr::Var));
        assert_eq!(parse("root<x + 1>(8)").unwrap(), Expr::root(Expr::Var + num(1), 8));
        assert_eq!(parse("log(100)").unwrap(), Expr::log(10, 100));
        assert_eq!(parse("log2(x)").unwrap(), Expr::log(2, Expr::Var));
        assert_eq!(parse("log<log<2>(4)>(x)").unwrap(), Expr::log(Expr::log(2, 4), Expr::Var));
    }

    #[test]
    fn single_term() {
        assert_eq!(parse("x").unwrap(), Expr::Var);
        assert_eq!(parse("((42))").unwrap(), num(42));
    }

    #[test]
    fn unclosed_parenthesis() {
        let parser = Parser::new("(1+2");
        let err = parser.try_parse_full().unwrap_err();
        assert!(err.is::<kind::UnclosedParenthesis>());
        assert_eq!(&parser.source()[err.spans[0].clone()], "(");
    }

    #[test]
    fn unexpected_close_parenthesis() {
        let err = parse("1+2)").unwrap_err();
        assert!(err.is::<kind::UnexpectedCloseParenthesis>());
    }

    #[test]
    fn unclosed_angle_bracket() {
        let err = parse("log<2(8)").unwrap_err();
        assert!(err.is::<kind::UnclosedAngleBracket>());
    }

    #[test]
    fn missing_operand() {
        assert!(parse("1+").unwrap_err().is::<kind::MissingOperand>());
        assert!(parse("* 2").unwrap_err().is::<kind::MissingOperand>());
        assert!(parse("1 + * 2").unwrap_err().is::<kind::MissingOperand>());
    }

    #[test]
    fn expected_operator() {
        assert!(parse("2 3").unwrap_err().is::<kind::ExpectedOperator>());
    }

    #[test]
    fn empty_input() {
        assert!(parse("").unwrap_err().is::<kind::EmptyExpression>());
        assert!(parse("()").unwrap_err().is::<kind::EmptyExpression>());
    }

    #[test]
    fn unrecognized_term() {
        let err = parse("2y + 1").unwrap_err();
        let kind = err.downcast_ref::<kind::UnrecognizedTerm>().unwrap();
        assert_eq!(kind.term, "2y");
    }

    #[test]
    fn malformed_function() {
        let err = parse("root(x)").unwrap_err();
        let kind = err.downcast_ref::<kind::MalformedFunction>().unwrap();
        assert_eq!(kind.name, "root");

        assert!(parse("sqrt<3>(x)").unwrap_err().is::<kind::MalformedFunction>());
        assert!(parse("sqrt").unwrap_err().is::<kind::MalformedFunction>());
    }

    #[test]
    fn integer_overflow() {
        assert!(parse("99999999999999999999").unwrap_err().is::<kind::IntegerOverflow>());
    }

    #[test]
    fn nesting_too_deep() {
        let input = format!("{}1{}", "(".repeat(200), ")".repeat(200));
        let err = parse(&input).unwrap_err();
        assert!(err.is::<kind::NestingTooDeep>());

        let input = format!("{}1{}", "(".repeat(100), ")".repeat(100));
        assert_eq!(parse(&input).unwrap(), num(1));
    }

    #[test]
    fn deeply_nested_negation() {
        let input = format!("{}1{}", "2*-(".repeat(3000), ")".repeat(3000));
        let err = parse(&input).unwrap_err();
        assert!(err.is::<kind::NestingTooDeep>());

        let input = format!("{}1{}", "root(".repeat(3000), ")(x)".repeat(3000));
        assert!(parse(&input).is_err());
    }

    #[test]
    fn long_chains() {
        let expr = parse(&vec!["1"; MAX_EXPR_DEPTH].join(" + ")).unwrap();
        assert_eq!(expr.depth(), MAX_EXPR_DEPTH);

        let err = parse(&vec!["1"; 100_000].join("+")).unwrap_err();
        assert!(err.is::<kind::ExpressionTooDeep>());
        let err = parse(&format!("{}x", "2^".repeat(MAX_EXPR_DEPTH + 1))).unwrap_err();
        assert!(err.is::<kind::ExpressionTooDeep>());

        assert_eq!(
            parse("1 - 2 * 3 ^ 2 ^ 1 / 4 + 5").unwrap(),
            num(1) - num(2) * num(3).pow(num(2).pow(1)) / num(4) + num(5),
        );
    }

    #[test]
    fn ascii_rendering_reparses() {
        let options = FormatOptionsBuilder::new().glyphs(Glyphs::Ascii).build();
        let exprs = [
            num(2) * Expr::Var + num(1),
            Expr::log(3, 2) * num(8),
            num(-2) * Expr::root(2, 3),
            num(0) - Expr::Var.pow(2),
            Expr::root(5, Expr::Var - num(1)) / Expr::log(Expr::Var, 7),
            num(2).pow(num(3).pow(Expr::Var)),
        ];

        for expr in exprs {
            let text = expr.display(options).to_string();
            assert_eq!(parse(&text).unwrap(), expr, "{}", text);
        }
    }
}
