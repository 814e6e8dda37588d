#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rewrite applied by the simplifier.
///
/// Each variant names a family of rules; the rules themselves are documented in
/// [`rules`](super::rules).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// An identity element was removed.
    ///
    /// `a + 0 = a`, `a * 1 = a`, `a / 1 = a`, `a ^ 1 = a`, `root(1, a) = a`
    Identity,

    /// An absorbing element swallowed the whole expression.
    ///
    /// `a * 0 = 0`, `0 / a = 0`, `a ^ 0 = 1`, `0 ^ a = 0`, `log_b(1) = 0`, `root(n, 1) = 1`
    Absorb,

    /// An expression cancelled with itself or its inverse.
    ///
    /// `a - a = 0`, `a + (0 - a) = 0`, `a / a = 1`, `(a * b) / a = b`, `log_a(a) = 1`
    Cancel,

    /// A negation was introduced, moved, or removed.
    ///
    /// `-1 * a = -a`, `a / -1 = -a`, `0 - (0 - a) = a`, `a - (0 - b) = a + b`
    Negate,

    /// Terms with a common factor were collected.
    ///
    /// `a*t + b*t = (a + b)*t`, `t - a*t = (1 - a)*t`
    CollectLikeTerms,

    /// Fractions were combined, split, or multiplied.
    ///
    /// `a/x + b/x = (a + b)/x`, `a * (x/y) = (a*x)/y`, `(a/b)/c = a/(b*c)`
    Fraction,

    /// Powers of a common base were combined.
    ///
    /// `x * x = x^2`, `x^a * x^b = x^(a + b)`, `x^a / x^b = x^(a - b)`
    CombinePowers,

    /// A power of a power, or a negative exponent, was rewritten.
    ///
    /// `(a^b)^c = a^(b*c)`, `a^-b = 1/a^b`, `(x/y)^-e = (y/x)^e`
    Power,

    /// A root was introduced, cancelled, or reduced.
    ///
    /// `a^(1/n) = root(n, a)`, `root(n, a)^n = a`, `root(2, 12) = 2*root(2, 3)`
    Root,

    /// A law of logarithms was applied.
    ///
    /// `log_b(x) + log_b(y) = log_b(x*y)`, `log_b(x^y) = y*log_b(x)`, `b^log_b(x) = x`
    Log,

    /// The base of a logarithm was changed.
    ///
    /// `log_a(b) / log_a(c) = log_c(b)`, `log_a(b) * log_b(c) = log_a(c)`
    ChangeOfBase,

    /// An integer was replaced by its smallest base raised to a power.
    ///
    /// `8^y = 2^(3y)`, `log_4(x) = log_2(x)/2`, `log_3(16) = 4*log_3(2)`
    PerfectPower,

    /// An operation between rational numbers was evaluated exactly.
    ///
    /// `2 + 3 = 5`, `10 / 4 = 5/2`, `2 ^ -2 = 1/4`
    Evaluate,
}
