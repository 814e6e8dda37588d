use crate::error::Error;
use crate::symbolic::simplify::simplify;
use exact_parser::parser::ast::{Expr, FormatOptionsBuilder};
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An equation `lhs = rhs` visited while isolating the variable.
///
/// The right-hand side starts out as the placeholder `y`, standing for the value of the original
/// expression, and is stored as [`Expr::Var`]. It is rendered as `y` to tell it apart from the `x`
/// of the left-hand side.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equation {
    /// The side that contains the variable being isolated.
    pub lhs: Expr,

    /// The side that accumulates the inverse operations, in terms of the placeholder.
    pub rhs: Expr,
}

impl Equation {
    /// Creates the equation `expr = y`.
    pub fn new(expr: Expr) -> Self {
        Self { lhs: expr, rhs: Expr::Var }
    }

    /// Returns true if the variable has been isolated, that is, if the left-hand side is `x`.
    pub fn is_solved(&self) -> bool {
        self.lhs.is_var()
    }

    /// Simplifies both sides of the equation.
    pub fn simplified(&self) -> Result<Self, Error> {
        Ok(Self {
            lhs: simplify(&self.lhs)?,
            rhs: simplify(&self.rhs)?,
        })
    }
}

impl Display for Equation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let placeholder = FormatOptionsBuilder::new().variable('y').build();
        write!(f, "{} = {}", self.lhs, self.rhs.display(placeholder))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn display_placeholder() {
        let equation = Equation {
            lhs: Expr::from(2) * Expr::Var,
            rhs: Expr::Var - Expr::from(1),
        };
        assert_eq!(equation.to_string(), "2x = y - 1");
    }

    #[test]
    fn simplify_both_sides() {
        let equation = Equation {
            lhs: Expr::Var + Expr::from(0),
            rhs: Expr::Var * Expr::from(1),
        };
        assert_eq!(equation.simplified().unwrap(), Equation::new(Expr::Var));
        assert!(equation.simplified().unwrap().is_solved());
    }
}
