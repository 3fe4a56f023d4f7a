//! Canonical math markup for monomials and polynomials.
//!
//! Output is LaTeX-flavoured (`3x^{2}-x+4`) and fully deterministic:
//! terms are emitted in the order given, zero terms vanish, a coefficient
//! of ±1 is implied unless the term is a constant, and the leading `+`
//! is stripped.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One `coefficient·x^exponent` term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    pub coefficient: i64,
    pub exponent: u32,
}

impl Term {
    #[must_use]
    pub const fn new(coefficient: i64, exponent: u32) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }
}

/// Terms of a polynomial, highest exponent first by convention.
pub type Terms = SmallVec<[Term; 4]>;

/// Build `[a x^2, b x, c]`.
#[must_use]
pub fn trinomial(a: i64, b: i64, c: i64) -> Terms {
    shifted_trinomial(a, b, c, 0)
}

/// Build `[a x^(2+shift), b x^(1+shift), c x^shift]`.
#[must_use]
pub fn shifted_trinomial(a: i64, b: i64, c: i64, shift: u32) -> Terms {
    smallvec::smallvec![
        Term::new(a, 2 + shift),
        Term::new(b, 1 + shift),
        Term::new(c, shift),
    ]
}

/// Variable part: `""`, `x` or `x^{n}`.
#[must_use]
pub fn variable(exponent: u32) -> String {
    match exponent {
        0 => String::new(),
        1 => "x".to_string(),
        n => format!("x^{{{n}}}"),
    }
}

/// Format a single term with its sign.
///
/// Returns `""` for a zero coefficient. Positive terms carry a leading
/// `+`; negative terms carry the numeral's own `-`.
#[must_use]
pub fn format_term(coefficient: i64, exponent: u32) -> String {
    if coefficient == 0 {
        return String::new();
    }
    let sign = if coefficient > 0 { "+" } else { "" };
    if exponent == 0 {
        return format!("{sign}{coefficient}");
    }
    let var = variable(exponent);
    match coefficient {
        1 => format!("{sign}{var}"),
        -1 => format!("-{var}"),
        c => format!("{sign}{c}{var}"),
    }
}

/// Concatenate terms in order, strip a leading `+`, and render an empty
/// result as `"0"`.
#[must_use]
pub fn format_polynomial(terms: &[Term]) -> String {
    let markup: String = terms
        .iter()
        .map(|t| format_term(t.coefficient, t.exponent))
        .collect();
    match markup.strip_prefix('+') {
        Some(rest) => rest.to_string(),
        None if markup.is_empty() => "0".to_string(),
        None => markup,
    }
}

/// A single monomial, `"0"` when the coefficient is zero.
#[must_use]
pub fn format_monomial(coefficient: i64, exponent: u32) -> String {
    format_polynomial(&[Term::new(coefficient, exponent)])
}

/// Linear factor `ax` with the coefficient omitted when it is 1.
#[must_use]
pub fn linear_factor(a: i64) -> String {
    format_monomial(a, 1)
}
