//! Splitting normalized text into terms.

use crate::parser::{
    ast::Expr,
    error::{kind, Error},
    token::op::BinOpKind,
};
use std::ops::Range;

/// A single term of normalized text: either a value or the operator between two values.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// A value: an integer, the variable, a parenthesized expression, or a function call.
    Operand(Expr),

    /// A binary operator.
    Op(BinOpKind),
}

/// Splits the given region of `source` into the regions of its top-level terms.
///
/// Terms are separated by spaces that are not inside parentheses or angle brackets.
pub fn split_terms(source: &str, range: Range<usize>) -> Result<Vec<Range<usize>>, Error> {
    let mut terms = Vec::new();
    let mut parens = Vec::new();
    let mut angles = Vec::new();
    let mut term_start = None;

    for (offset, c) in source[range.clone()].char_indices() {
        let i = range.start + offset;
        match c {
            ' ' if parens.is_empty() && angles.is_empty() => {
                if let Some(start) = term_start.take() {
                    terms.push(start..i);
                }
                continue;
            },
            '(' => parens.push(i),
            ')' => {
                if parens.pop().is_none() {
                    return Err(Error::new(vec![i..i + 1], kind::UnexpectedCloseParenthesis));
                }
            },
            '<' => angles.push(i),
            // a stray `>` is left for the term to reject
            '>' => {
                angles.pop();
            },
            _ => (),
        }

        if term_start.is_none() {
            term_start = Some(i);
        }
    }

    if let Some(&open) = parens.last() {
        return Err(Error::new(vec![open..open + 1], kind::UnclosedParenthesis));
    }
    if let Some(&open) = angles.last() {
        return Err(Error::new(vec![open..open + 1], kind::UnclosedAngleBracket));
    }
    if let Some(start) = term_start {
        terms.push(start..range.end);
    }

    Ok(terms)
}

/// Returns the byte index of the bracket that closes the one at `start`, looking no further than
/// `end`.
pub fn find_closing(source: &str, start: usize, end: usize, open: u8, close: u8) -> Option<usize> {
    let mut depth = 0usize;
    for (i, &b) in source.as_bytes()[..end].iter().enumerate().skip(start) {
        if b == open {
            depth += 1;
        } else if b == close {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// Returns true if the text is an integer literal, with an optional sign.
pub fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn split(source: &str) -> Vec<&str> {
        split_terms(source, 0..source.len())
            .unwrap()
            .into_iter()
            .map(|span| &source[span])
            .collect()
    }

    #[test]
    fn splits_on_top_level_spaces() {
        assert_eq!(split("1 + (2 * 3)"), ["1", "+", "(2 * 3)"]);
        assert_eq!(split("log<2 + 1>(x - 1) ^ 2"), ["log<2 + 1>(x - 1)", "^", "2"]);
    }

    #[test]
    fn ignores_repeated_spaces() {
        assert_eq!(split("1 *  / 2"), ["1", "*", "/", "2"]);
    }

    #[test]
    fn unbalanced_parens() {
        let err = split_terms("(1 + 2", 0..6).unwrap_err();
        assert!(err.is::<kind::UnclosedParenthesis>());
        assert_eq!(err.spans, vec![0..1]);

        let err = split_terms("1) + 2", 0..6).unwrap_err();
        assert!(err.is::<kind::UnexpectedCloseParenthesis>());
        assert_eq!(err.spans, vec![1..2]);
    }

    #[test]
    fn integers() {
        assert!(is_integer("42"));
        assert!(is_integer("-42"));
        assert!(!is_integer("-"));
        assert!(!is_integer("4x"));
    }

    #[test]
    fn closing_bracket() {
        assert_eq!(find_closing("log<a<b>>(c)", 3, 12, b'<', b'>'), Some(8));
        assert_eq!(find_closing("(a(b)", 0, 5, b'(', b')'), None);
    }
}
