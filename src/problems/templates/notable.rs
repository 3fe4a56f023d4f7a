//! Notable products and factoring (levels 9-10).

use serde::{Deserialize, Serialize};

use super::ProblemTemplate;
use crate::core::MathRng;
use crate::problems::format::{format_monomial, format_polynomial, linear_factor, trinomial, Term};

/// Level 9: expand `(a·x ± b)²`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinomialSquare {
    pub a: i64,
    pub b: i64,
    pub negative: bool,
}

impl BinomialSquare {
    pub fn draw(rng: &mut MathRng) -> Self {
        let a = rng.range(1, 5);
        let b = rng.range(1, 6);
        let negative = rng.coin();
        Self { a, b, negative }
    }

    /// Middle coefficient `±2ab`, signed like the binomial.
    #[must_use]
    pub fn middle(&self) -> i64 {
        let m = 2 * self.a * self.b;
        if self.negative {
            -m
        } else {
            m
        }
    }
}

impl ProblemTemplate for BinomialSquare {
    fn expression(&self) -> String {
        let sign = if self.negative { "-" } else { "+" };
        format!("({} {sign} {})^{{2}}", linear_factor(self.a), self.b)
    }

    fn answer_markup(&self) -> String {
        format_polynomial(&trinomial(self.a * self.a, self.middle(), self.b * self.b))
    }

    fn distractors(&self, _rng: &mut MathRng) -> Option<[String; 3]> {
        let a2 = self.a * self.a;
        let b2 = self.b * self.b;
        let ab2 = self.middle();
        Some([
            // dropped the cross term
            format_polynomial(&[Term::new(a2, 2), Term::new(b2, 0)]),
            format_polynomial(&trinomial(a2, 2 * ab2, b2)),
            format_polynomial(&trinomial(a2, -ab2, -b2)),
        ])
    }
}

/// Level 10: factor `a²x² - b²`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifferenceOfSquares {
    pub a: i64,
    pub b: i64,
}

impl DifferenceOfSquares {
    pub fn draw(rng: &mut MathRng) -> Self {
        let a = rng.range(1, 6);
        let b = rng.range(1, 6);
        Self { a, b }
    }

    fn factors(&self, b: i64) -> String {
        let ax = linear_factor(self.a);
        format!("({ax}+{b})({ax}-{b})")
    }
}

impl ProblemTemplate for DifferenceOfSquares {
    fn prompt(&self) -> Option<&'static str> {
        Some("Factor:")
    }

    fn expression(&self) -> String {
        format!("{} - {}", format_monomial(self.a * self.a, 2), self.b * self.b)
    }

    fn answer_markup(&self) -> String {
        self.factors(self.b)
    }

    fn distractors(&self, _rng: &mut MathRng) -> Option<[String; 3]> {
        let ax = linear_factor(self.a);
        let b = self.b;
        Some([
            format!("({ax}+{b})^{{2}}"),
            format!("({ax}-{b})^{{2}}"),
            self.factors(2 * b),
        ])
    }
}
