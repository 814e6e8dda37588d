use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An algebraic expression in the single variable `x`.
///
/// Expressions are immutable trees: every node exclusively owns its children, and every
/// transformation builds a new tree. Equality is structural and order-sensitive, so `x + 1` and
/// `1 + x` are different expressions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// `lhs + rhs`
    Add(Box<Expr>, Box<Expr>),

    /// `lhs - rhs`
    Sub(Box<Expr>, Box<Expr>),

    /// `lhs * rhs`
    Mul(Box<Expr>, Box<Expr>),

    /// `lhs / rhs`
    Div(Box<Expr>, Box<Expr>),

    /// `base ^ exponent`
    Exp(Box<Expr>, Box<Expr>),

    /// The logarithm of the second expression, in the base of the first.
    Log(Box<Expr>, Box<Expr>),

    /// The root of the second expression, with the index given by the first.
    Root(Box<Expr>, Box<Expr>),

    /// An exact integer.
    Number(i64),

    /// The variable `x`.
    Var,
}

/// Generates accessors that return the operands of a binary node of the given variant.
macro_rules! operand_accessors {
    ($($(#[$meta:meta])* $name:ident => $variant:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(&self) -> Option<(&Expr, &Expr)> {
                match self {
                    Self::$variant(lhs, rhs) => Some((&**lhs, &**rhs)),
                    _ => None,
                }
            }
        )*
    };
}

impl Expr {
    /// Creates `base ^ exponent`.
    pub fn pow(self, exponent: impl Into<Expr>) -> Self {
        Self::Exp(Box::new(self), Box::new(exponent.into()))
    }

    /// Creates the logarithm of `argument` in the given `base`.
    pub fn log(base: impl Into<Expr>, argument: impl Into<Expr>) -> Self {
        Self::Log(Box::new(base.into()), Box::new(argument.into()))
    }

    /// Creates the `index`-th root of `radicand`.
    pub fn root(index: impl Into<Expr>, radicand: impl Into<Expr>) -> Self {
        Self::Root(Box::new(index.into()), Box::new(radicand.into()))
    }

    /// Returns the operands of this node, if it is not a terminal node.
    pub fn operands(&self) -> Option<(&Expr, &Expr)> {
        match self {
            Self::Add(lhs, rhs)
                | Self::Sub(lhs, rhs)
                | Self::Mul(lhs, rhs)
                | Self::Div(lhs, rhs)
                | Self::Exp(lhs, rhs)
                | Self::Log(lhs, rhs)
                | Self::Root(lhs, rhs) => Some((&**lhs, &**rhs)),
            Self::Number(_) | Self::Var => None,
        }
    }

    operand_accessors! {
        /// Returns the terms of an addition.
        as_add => Add,

        /// Returns the minuend and subtrahend of a subtraction.
        as_sub => Sub,

        /// Returns the factors of a multiplication.
        as_mul => Mul,

        /// Returns the numerator and denominator of a division.
        as_div => Div,

        /// Returns the base and exponent of a power.
        as_exp => Exp,

        /// Returns the base and argument of a logarithm.
        as_log => Log,

        /// Returns the index and radicand of a root.
        as_root => Root,
    }

    /// Returns the value of this expression if it is a [`Expr::Number`].
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns true if this expression is the given integer.
    pub fn is_int(&self, n: i64) -> bool {
        self.as_number() == Some(n)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Self::Var)
    }

    pub fn is_log(&self) -> bool {
        matches!(self, Self::Log(..))
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root(..))
    }

    /// Returns true if this expression is syntactically negative: a negative integer, or a
    /// subtraction from zero.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Number(n) => *n < 0,
            Self::Sub(lhs, _) => lhs.is_int(0),
            _ => false,
        }
    }

    /// Returns true if the variable appears anywhere in this expression.
    pub fn contains_var(&self) -> bool {
        match self {
            Self::Var => true,
            Self::Number(_) => false,
            _ => self.operands()
                .map_or(false, |(lhs, rhs)| lhs.contains_var() || rhs.contains_var()),
        }
    }

    /// Returns the number of levels in this expression tree.
    pub fn depth(&self) -> usize {
        match self.operands() {
            Some((lhs, rhs)) => 1 + lhs.depth().max(rhs.depth()),
            None => 1,
        }
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        Self::Number(i64::from(n))
    }
}

impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Add(Box::new(self), Box::new(rhs))
    }
}

impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::Sub(Box::new(self), Box::new(rhs))
    }
}

impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::Mul(Box::new(self), Box::new(rhs))
    }
}

impl Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::Div(Box::new(self), Box::new(rhs))
    }
}

/// Negates the expression.
///
/// Integers are negated directly (saturating at the bounds of [`i64`]), `0 - a` becomes `a`, and
/// any other expression `e` becomes `0 - e`.
impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Number(n) => match n.checked_neg() {
                Some(n) => Self::Number(n),
                None => Self::from(0) - Self::Number(n),
            },
            Self::Sub(lhs, rhs) if lhs.is_int(0) => *rhs,
            expr => Self::from(0) - expr,
        }
    }
}
