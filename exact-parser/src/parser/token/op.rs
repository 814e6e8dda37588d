//! Binary operators and their precedence.

use crate::{parser::ast::Expr, tokenizer::TokenKind};

/// The precedence of an operator. Operators with higher precedence are combined first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Addition and subtraction.
    Term,

    /// Multiplication and division.
    Factor,

    /// Exponentiation.
    Exp,
}

/// The associativity of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// Operators are combined from left to right: `a - b - c = (a - b) - c`.
    Left,

    /// Operators are combined from right to left: `a ^ b ^ c = a ^ (b ^ c)`.
    Right,
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    Exp,
    Mul,
    Div,
    Add,
    Sub,
}

impl BinOpKind {
    /// Returns the operator represented by the given token, if any.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Exp => Some(Self::Exp),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            _ => None,
        }
    }

    /// Returns the operator written as the given symbol in normalized text, if any.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "^" => Some(Self::Exp),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            _ => None,
        }
    }

    /// Returns the symbol used for this operator in normalized text.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Exp => "^",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Add => "+",
            Self::Sub => "-",
        }
    }

    /// Returns the precedence of the binary operation.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Exp => Precedence::Exp,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Add | Self::Sub => Precedence::Term,
        }
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(self) -> Associativity {
        match self {
            Self::Exp => Associativity::Right,
            Self::Mul | Self::Div | Self::Add | Self::Sub => Associativity::Left,
        }
    }

    /// Builds the expression node for this operation.
    pub fn apply(self, lhs: Expr, rhs: Expr) -> Expr {
        match self {
            Self::Exp => lhs.pow(rhs),
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_order() {
        assert!(BinOpKind::Exp.precedence() > BinOpKind::Mul.precedence());
        assert!(BinOpKind::Div.precedence() > BinOpKind::Sub.precedence());
        assert_eq!(BinOpKind::Add.precedence(), BinOpKind::Sub.precedence());
    }

    #[test]
    fn symbols_round_trip() {
        for op in [BinOpKind::Exp, BinOpKind::Mul, BinOpKind::Div, BinOpKind::Add, BinOpKind::Sub] {
            assert_eq!(BinOpKind::from_symbol(op.symbol()), Some(op));
        }
    }
}
