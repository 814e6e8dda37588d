//! Canonical string rendering of [`Expr`]s.
//!
//! Every binary node is rendered in parentheses, and the outermost pair of parentheses is
//! stripped from the final string. Numeric coefficients are written next to the expression they
//! multiply (`2x`, `3log₂(5)`), and subtraction from zero is rendered as a negation. The
//! [`Glyphs::Ascii`] rendering writes every operation out in full, so that it parses back into the
//! same tree.

use std::fmt::{Display, Formatter};
use super::expr::Expr;

/// Formatting options for expressions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatOptions {
    /// Which set of glyphs to use for logarithms and roots.
    pub glyphs: Glyphs,

    /// The character used to render the variable.
    ///
    /// The equation solver renders its placeholder as `y`, to distinguish it from the variable
    /// being solved for.
    pub variable: char,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            glyphs: Glyphs::default(),
            variable: 'x',
        }
    }
}

impl FormatOptions {
    /// Wraps the given [`FormatOptions`] into a builder for further customization.
    pub fn into_builder(self) -> FormatOptionsBuilder {
        FormatOptionsBuilder(self)
    }
}

/// The glyphs to use when rendering logarithms and roots.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Glyphs {
    /// Subscript logarithm bases (`log₂(x)`), superscript root indices (`³√x`), and the `√`
    /// symbol.
    ///
    /// This is the default option.
    #[default]
    Unicode,

    /// The function syntax accepted by the parser: `log<2>(x)`, `sqrt(x)`, `cbrt(x)`, and
    /// `root<5>(x)`.
    Ascii,
}

impl Glyphs {
    /// Utility function to create a new [`FormatOptions`] with the same formating options as the
    /// given [`FormatOptions`], but with the glyphs set to this value.
    pub fn inside(self, options: FormatOptions) -> FormatOptions {
        FormatOptions {
            glyphs: self,
            ..options
        }
    }
}

/// Helper struct to build a [`FormatOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FormatOptionsBuilder(FormatOptions);

impl FormatOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the glyphs. See [`Glyphs`] for more information.
    pub fn glyphs(mut self, glyphs: Glyphs) -> Self {
        self.0.glyphs = glyphs;
        self
    }

    /// Sets the character used to render the variable.
    pub fn variable(mut self, variable: char) -> Self {
        self.0.variable = variable;
        self
    }

    /// Builds the [`FormatOptions`] struct.
    pub fn build(self) -> FormatOptions {
        self.0
    }
}

/// Formatter for an [`Expr`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExprFormatter<'a> {
    /// The expression to format.
    pub expr: &'a Expr,

    /// The options to use when formatting.
    pub options: FormatOptions,
}

impl Display for ExprFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rendered = describe(self.expr, self.options);
        write!(f, "{}", strip_outer_parens(&rendered))
    }
}

impl Expr {
    /// Returns a [`Display`]able wrapper that renders this expression with the given options.
    pub fn display(&self, options: FormatOptions) -> ExprFormatter<'_> {
        ExprFormatter { expr: self, options }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.display(FormatOptions::default()).fmt(f)
    }
}

/// Removes one pair of parentheses surrounding the whole string, if there is one.
pub fn strip_outer_parens(s: &str) -> &str {
    if !s.starts_with('(') || !s.ends_with(')') {
        return s;
    }

    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    // the first parenthesis must close at the very end
                    return if i == s.len() - 1 { &s[1..i] } else { s };
                }
            },
            _ => (),
        }
    }

    s
}

/// Maps each character of `s` through the given glyph table.
fn map_glyphs(s: &str, table: fn(char) -> Option<char>) -> Option<String> {
    s.chars().map(table).collect()
}

fn subscript(c: char) -> Option<char> {
    Some(match c {
        '0' => '₀', '1' => '₁', '2' => '₂', '3' => '₃', '4' => '₄',
        '5' => '₅', '6' => '₆', '7' => '₇', '8' => '₈', '9' => '₉',
        '-' => '₋',
        _ => return None,
    })
}

fn superscript(c: char) -> Option<char> {
    Some(match c {
        '0' => '⁰', '1' => '¹', '2' => '²', '3' => '³', '4' => '⁴',
        '5' => '⁵', '6' => '⁶', '7' => '⁷', '8' => '⁸', '9' => '⁹',
        '-' => '⁻', 'x' => 'ˣ', 'y' => 'ʸ', 'n' => 'ⁿ',
        _ => return None,
    })
}

/// Returns true if a numeric coefficient can be written directly before the given expression.
fn accepts_coefficient(expr: &Expr, rendered: &str) -> bool {
    match expr {
        Expr::Var | Expr::Log(..) | Expr::Root(..) => true,
        Expr::Number(_) => false,
        _ => rendered.starts_with('('),
    }
}

/// Renders the expression, wrapping every binary node in parentheses.
fn describe(expr: &Expr, options: FormatOptions) -> String {
    let ascii = options.glyphs == Glyphs::Ascii;
    match expr {
        Expr::Number(n) => n.to_string(),
        Expr::Var => options.variable.to_string(),
        Expr::Add(a, b) => format!("({} + {})", describe(a, options), describe(b, options)),
        Expr::Sub(a, b) if a.is_int(0) && !ascii => {
            if b.is_root() {
                format!("(- {})", describe(b, options))
            } else {
                format!("(-{})", describe(b, options))
            }
        },
        Expr::Sub(a, b) => format!("({} - {})", describe(a, options), describe(b, options)),
        Expr::Mul(a, b) => {
            let (lhs, rhs) = (describe(a, options), describe(b, options));
            if ascii {
                return format!("({} * {})", lhs, rhs);
            }
            match (a.as_number(), b.as_number()) {
                (Some(n), _) if accepts_coefficient(b, &rhs) => format!("{}{}", n, rhs),
                (None, Some(n)) if matches!(**a, Expr::Var | Expr::Log(..) | Expr::Root(..)) => {
                    format!("{}{}", n, lhs)
                },
                _ => format!("({} * {})", lhs, rhs),
            }
        },
        Expr::Div(a, b) => format!("({} / {})", describe(a, options), describe(b, options)),
        Expr::Exp(a, b) => {
            // a negative base would otherwise read as the negation of the power
            let base = match a.as_number() {
                Some(n) if n < 0 => format!("({})", n),
                _ => describe(a, options),
            };
            format!("({} ^ {})", base, describe(b, options))
        },
        Expr::Log(base, arg) => describe_log(base, arg, options),
        Expr::Root(index, radicand) => describe_root(index, radicand, options),
    }
}

/// Renders the argument of a function in the compact Unicode style: integers are wrapped in
/// parentheses, other expressions keep their own.
fn describe_argument(arg: &Expr, options: FormatOptions) -> String {
    match arg {
        Expr::Number(n) => format!("({})", n),
        _ => describe(arg, options),
    }
}

fn describe_log(base: &Expr, arg: &Expr, options: FormatOptions) -> String {
    if options.glyphs == Glyphs::Ascii {
        let (base, arg) = (describe(base, options), describe(arg, options));
        return format!("log<{}>({})", strip_outer_parens(&base), strip_outer_parens(&arg));
    }

    let arg = describe_argument(arg, options);
    match base.as_number().and_then(|n| map_glyphs(&n.to_string(), subscript)) {
        Some(sub) => format!("log{}{}", sub, arg),
        None => {
            let base = describe(base, options);
            format!("log<{}>{}", strip_outer_parens(&base), arg)
        },
    }
}

fn describe_root(index: &Expr, radicand: &Expr, options: FormatOptions) -> String {
    if options.glyphs == Glyphs::Ascii {
        let radicand = describe(radicand, options);
        let radicand = strip_outer_parens(&radicand);
        return match index.as_number() {
            Some(2) => format!("sqrt({})", radicand),
            Some(3) => format!("cbrt({})", radicand),
            _ => {
                let index = describe(index, options);
                format!("root<{}>({})", strip_outer_parens(&index), radicand)
            },
        };
    }

    if index.is_int(2) {
        let radicand = describe(radicand, options);
        return format!("√({})", strip_outer_parens(&radicand));
    }

    let radicand = describe_argument(radicand, options);
    let index_glyphs = match index {
        Expr::Number(n) => map_glyphs(&n.to_string(), superscript),
        Expr::Var => map_glyphs(&options.variable.to_string(), superscript),
        _ => None,
    };
    match index_glyphs {
        Some(sup) => format!("{}√{}", sup, radicand),
        None => {
            let index = describe(index, options);
            format!("root<{}>{}", strip_outer_parens(&index), radicand)
        },
    }
}
