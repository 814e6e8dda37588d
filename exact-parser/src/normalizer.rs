//! Rewrites raw input into the canonical form consumed by the [`Parser`].
//!
//! The normalized form is a sequence of terms separated by binary operators, where every operator
//! is surrounded by exactly one space and nothing else contains a space outside of parentheses or
//! angle brackets. Normalization makes every implicit part of the input explicit:
//!
//! - `[ ]` and `{ }` become `( )`, and `**` becomes `^`;
//! - `log(x)` becomes `log<10>(x)`, and `log2(x)`, `root3(x)` and `root(3)(x)` become
//!   `log<2>(x)`, `root<3>(x)` and `root<3>(x)`;
//! - empty groups such as `()` are removed;
//! - implicit multiplication is written out: `2x(x + 1)` becomes `2 * x * (x + 1)`;
//! - a unary `+` is dropped, and a unary `-` becomes part of an integer literal (`2 * -3`), a
//!   subtraction from zero at the start of a group (`-x` becomes `0 - x`), or a parenthesized
//!   subtraction from zero after another operator (`2 ^ -x` becomes `2 ^ (0 - x)`).
//!
//! Normalization never fails. Input that cannot be normalized, such as unknown names or unbalanced
//! parentheses, is passed through so that the [`Parser`] can report it.
//!
//! [`Parser`]: crate::parser::Parser

use crate::{
    parser::{token::op::BinOpKind, MAX_NESTING_DEPTH},
    tokenizer::{tokenize_complete, TokenKind},
};

/// The function names recognized by the parser, in the order they are matched against names.
const FUNCTIONS: [&str; 4] = ["sqrt", "cbrt", "root", "log"];

/// A unit of the input, after whitespace has been removed.
#[derive(Debug, Clone, PartialEq)]
enum Item {
    Open,
    Close,
    Less,
    Greater,
    Op(BinOpKind),
    Int(String),
    Var,
    Func(&'static str),

    /// Anything the parser does not know, kept verbatim.
    Other(String),
}

impl Item {
    /// Returns true if this item can end an operand.
    fn ends_operand(&self) -> bool {
        matches!(self, Item::Int(_) | Item::Var | Item::Close)
    }

    /// Returns true if this item can start an operand.
    fn starts_operand(&self) -> bool {
        matches!(self, Item::Int(_) | Item::Var | Item::Open | Item::Func(_))
    }
}

/// Normalizes the given input. See the [module-level documentation](self) for details.
pub fn normalize(input: &str) -> String {
    let items = to_items(input);
    let items = canonicalize_functions(&items, 0);
    let items = remove_empty_groups(items);
    let items = insert_multiplication(items);
    let items = fix_signs(&items, 0);
    render(&items)
}

/// Splits a name into the known function names and variables it is made of. Whatever remains
/// after the first unknown character is kept as a single unknown item.
fn split_name(name: &str, items: &mut Vec<Item>) {
    let mut rest = name;
    while !rest.is_empty() {
        if let Some(func) = FUNCTIONS.iter().find(|func| rest.starts_with(**func)) {
            items.push(Item::Func(*func));
            rest = &rest[func.len()..];
        } else if let Some(after) = rest.strip_prefix('x') {
            items.push(Item::Var);
            rest = after;
        } else {
            items.push(Item::Other(rest.to_string()));
            break;
        }
    }
}

fn to_items(input: &str) -> Vec<Item> {
    let mut items = Vec::new();
    for token in tokenize_complete(input).iter() {
        match token.kind {
            TokenKind::Whitespace => (),
            TokenKind::OpenParen => items.push(Item::Open),
            TokenKind::CloseParen => items.push(Item::Close),
            TokenKind::Less => items.push(Item::Less),
            TokenKind::Greater => items.push(Item::Greater),
            TokenKind::Int => items.push(Item::Int(token.lexeme.to_string())),
            TokenKind::Name => split_name(token.lexeme, &mut items),
            kind => match BinOpKind::from_token(kind) {
                Some(op) => items.push(Item::Op(op)),
                None => items.push(Item::Other(token.lexeme.to_string())),
            },
        }
    }
    items
}

/// Returns the index of the item that closes the group opened at `start`.
fn matching(items: &[Item], start: usize, open: &Item, close: &Item) -> Option<usize> {
    let mut depth = 0usize;
    for (i, item) in items.iter().enumerate().skip(start) {
        if item == open {
            depth += 1;
        } else if item == close {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

fn matching_paren(items: &[Item], start: usize) -> Option<usize> {
    matching(items, start, &Item::Open, &Item::Close)
}

fn matching_angle(items: &[Item], start: usize) -> Option<usize> {
    matching(items, start, &Item::Less, &Item::Greater)
}

/// Rewrites the base of every logarithm and the index of every root into angle brackets.
///
/// Indices nested deeper than [`MAX_NESTING_DEPTH`] are left as they are, for the parser to
/// reject.
fn canonicalize_functions(items: &[Item], depth: usize) -> Vec<Item> {
    let mut out = Vec::with_capacity(items.len());
    let mut i = 0;
    while i < items.len() {
        let item = &items[i];
        out.push(item.clone());
        i += 1;

        let Item::Func(name) = item else {
            continue;
        };

        match (*name, items.get(i), items.get(i + 1)) {
            // log(x) = log<10>(x)
            ("log", Some(Item::Open), _) => {
                out.extend([Item::Less, Item::Int("10".to_string()), Item::Greater]);
            },

            // log2(x) = log<2>(x), root3(x) = root<3>(x)
            ("log" | "root", Some(Item::Int(n)), Some(Item::Open)) => {
                out.extend([Item::Less, Item::Int(n.clone()), Item::Greater]);
                i += 1;
            },

            // root(3)(x) = root<3>(x)
            ("root", Some(Item::Open), _) if depth < MAX_NESTING_DEPTH => {
                if let Some(close) = matching_paren(items, i) {
                    if items.get(close + 1) == Some(&Item::Open) {
                        out.push(Item::Less);
                        out.extend(canonicalize_functions(&items[i + 1..close], depth + 1));
                        out.push(Item::Greater);
                        i = close + 1;
                    }
                }
            },
            _ => (),
        }
    }
    out
}

/// Removes groups that contain nothing, such as `()` and `(())`.
fn remove_empty_groups(mut items: Vec<Item>) -> Vec<Item> {
    while let Some(i) = items.windows(2).position(|pair| pair[0] == Item::Open && pair[1] == Item::Close) {
        items.remove(i);
        items.remove(i);
    }
    items
}

/// Inserts a multiplication operator between every pair of adjacent operands.
fn insert_multiplication(items: Vec<Item>) -> Vec<Item> {
    let mut out: Vec<Item> = Vec::with_capacity(items.len());
    for item in items {
        if let Some(prev) = out.last() {
            // `2 3` stays as it is and is rejected by the parser
            let both_ints = matches!((prev, &item), (Item::Int(_), Item::Int(_)));
            if prev.ends_operand() && item.starts_operand() && !both_ints {
                out.push(Item::Op(BinOpKind::Mul));
            }
        }
        out.push(item);
    }
    out
}

/// Returns the end (exclusive) of the primary expression starting at `start`: an integer, the
/// variable, a parenthesized group, or a function call.
fn primary_end(items: &[Item], start: usize) -> Option<usize> {
    match items.get(start)? {
        Item::Int(_) | Item::Var | Item::Other(_) => Some(start + 1),
        Item::Open => matching_paren(items, start).map(|close| close + 1),
        Item::Func(_) => {
            let mut end = start + 1;
            if items.get(end) == Some(&Item::Less) {
                end = matching_angle(items, end)? + 1;
            }
            if items.get(end) == Some(&Item::Open) {
                end = matching_paren(items, end)? + 1;
            }
            Some(end)
        },
        _ => None,
    }
}

/// Returns the end (exclusive) of the operand of a unary sign starting at `start`, including any
/// chain of exponents applied to it, since exponentiation binds tighter than negation.
fn operand_end(items: &[Item], start: usize) -> Option<usize> {
    let skip_signs = |mut i: usize| {
        while matches!(items.get(i), Some(Item::Op(BinOpKind::Add | BinOpKind::Sub))) {
            i += 1;
        }
        i
    };

    let mut end = primary_end(items, skip_signs(start))?;
    while items.get(end) == Some(&Item::Op(BinOpKind::Exp)) {
        end = primary_end(items, skip_signs(end + 1))?;
    }
    Some(end)
}

/// Rewrites unary signs into binary operations or signed literals.
///
/// Past [`MAX_NESTING_DEPTH`] nested negations, signs are kept verbatim; the parser reports the
/// input as too deeply nested before it reaches them.
fn fix_signs(items: &[Item], depth: usize) -> Vec<Item> {
    let mut out = Vec::with_capacity(items.len());
    let mut i = 0;
    while i < items.len() {
        let item = &items[i];
        let after_operator = matches!(out.last(), Some(Item::Op(_)));
        let operand_position = after_operator
            || matches!(out.last(), None | Some(Item::Open) | Some(Item::Less));

        match item {
            Item::Op(BinOpKind::Add) if operand_position => {
                i += 1;
                continue;
            },
            Item::Op(BinOpKind::Sub) if operand_position => {
                // `-3` is a literal, unless it is raised to a power: `-3 ^ 2 = -(3 ^ 2)`
                if let Some(Item::Int(n)) = items.get(i + 1) {
                    if items.get(i + 2) != Some(&Item::Op(BinOpKind::Exp)) {
                        out.push(Item::Int(format!("-{}", n)));
                        i += 2;
                        continue;
                    }
                }

                if !after_operator {
                    out.extend([Item::Int("0".to_string()), Item::Op(BinOpKind::Sub)]);
                    i += 1;
                    continue;
                }

                let end = operand_end(items, i + 1).filter(|_| depth < MAX_NESTING_DEPTH);
                if let Some(end) = end {
                    out.extend([Item::Open, Item::Int("0".to_string()), Item::Op(BinOpKind::Sub)]);
                    out.extend(fix_signs(&items[i + 1..end], depth + 1));
                    out.push(Item::Close);
                    i = end;
                    continue;
                }

                out.push(item.clone());
            },
            _ => out.push(item.clone()),
        }
        i += 1;
    }
    out
}

fn render(items: &[Item]) -> String {
    let mut out = String::new();
    let mut prev: Option<&Item> = None;
    for item in items {
        match item {
            Item::Op(op) => {
                out.push(' ');
                out.push_str(op.symbol());
                out.push(' ');
            },
            Item::Int(n) => {
                if matches!(prev, Some(Item::Int(_))) {
                    out.push(' ');
                }
                out.push_str(n);
            },
            Item::Open => out.push('('),
            Item::Close => out.push(')'),
            Item::Less => out.push('<'),
            Item::Greater => out.push('>'),
            Item::Var => out.push('x'),
            Item::Func(name) => out.push_str(name),
            Item::Other(raw) => out.push_str(raw),
        }
        prev = Some(item);
    }
    out.trim().to_string()
}
