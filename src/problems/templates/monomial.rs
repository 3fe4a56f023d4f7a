//! Monomial templates (levels 3-5).

use serde::{Deserialize, Serialize};

use super::ProblemTemplate;
use crate::core::MathRng;
use crate::problems::format::{format_monomial, variable};

/// Level 3: `c1·x^e ± c2·x^e`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonomialAddSub {
    pub c1: i64,
    pub c2: i64,
    pub exponent: u32,
    pub subtract: bool,
}

impl MonomialAddSub {
    pub fn draw(rng: &mut MathRng) -> Self {
        let exponent = rng.range(1, 4) as u32;
        let c1 = rng.range(2, 9);
        let c2 = rng.range(2, 9);
        let subtract = rng.coin();
        Self {
            c1,
            c2,
            exponent,
            subtract,
        }
    }

    #[must_use]
    pub fn result(&self) -> i64 {
        if self.subtract {
            self.c1 - self.c2
        } else {
            self.c1 + self.c2
        }
    }
}

impl ProblemTemplate for MonomialAddSub {
    fn expression(&self) -> String {
        let var = variable(self.exponent);
        let op = if self.subtract { "-" } else { "+" };
        format!("{}{var} {op} {}{var}", self.c1, self.c2)
    }

    fn answer_markup(&self) -> String {
        format_monomial(self.result(), self.exponent)
    }

    fn distractors(&self, rng: &mut MathRng) -> Option<[String; 3]> {
        let e = self.exponent;
        Some([
            // added regardless of the operator, plus noise
            format_monomial(self.c1 + self.c2 + rng.range(1, 3), e),
            // right coefficient, bumped exponent; literal coefficient, so a
            // zero result renders as "0x^{n}"
            format!("{}{}", self.result(), variable(e + 1)),
            // multiplied coefficients
            format_monomial(self.c1 * self.c2, e),
        ])
    }
}

/// Level 4: `(c1·x^e1)(c2·x^e2)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonomialMultiply {
    pub c1: i64,
    pub c2: i64,
    pub e1: u32,
    pub e2: u32,
}

impl MonomialMultiply {
    pub fn draw(rng: &mut MathRng) -> Self {
        let c1 = rng.range(2, 6);
        let c2 = rng.range(2, 6);
        let e1 = rng.range(1, 3) as u32;
        let e2 = rng.range(1, 3) as u32;
        Self { c1, c2, e1, e2 }
    }
}

impl ProblemTemplate for MonomialMultiply {
    fn expression(&self) -> String {
        format!(
            "({}{})({}{})",
            self.c1,
            variable(self.e1),
            self.c2,
            variable(self.e2)
        )
    }

    fn answer_markup(&self) -> String {
        format_monomial(self.c1 * self.c2, self.e1 + self.e2)
    }

    fn distractors(&self, rng: &mut MathRng) -> Option<[String; 3]> {
        let product = self.c1 * self.c2;
        let exponent = self.e1 + self.e2;
        Some([
            format_monomial(self.c1 + self.c2, exponent),
            format_monomial(product, self.e1 * self.e2),
            format_monomial(product + rng.range(1, 5), exponent),
        ])
    }
}

/// Level 5: `(c1·x^e1) / (c2·x^e2)`, exact by construction.
///
/// The divisor and quotient are drawn first; the dividend is derived as
/// `c1 = c2·quotient`, `e1 = e2 + quotient_exponent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonomialDivide {
    pub divisor: i64,
    pub quotient: i64,
    pub divisor_exponent: u32,
    pub quotient_exponent: u32,
}

impl MonomialDivide {
    pub fn draw(rng: &mut MathRng) -> Self {
        let divisor = rng.range(2, 5);
        let quotient = rng.range(2, 6);
        let divisor_exponent = rng.range(1, 3) as u32;
        let quotient_exponent = rng.range(1, 3) as u32;
        Self {
            divisor,
            quotient,
            divisor_exponent,
            quotient_exponent,
        }
    }

    /// `(coefficient, exponent)` of the numerator.
    #[must_use]
    pub fn dividend(&self) -> (i64, u32) {
        (
            self.divisor * self.quotient,
            self.divisor_exponent + self.quotient_exponent,
        )
    }
}

impl ProblemTemplate for MonomialDivide {
    fn expression(&self) -> String {
        let (c1, e1) = self.dividend();
        format!(
            "\\frac{{{c1}{}}}{{{}{}}}",
            variable(e1),
            self.divisor,
            variable(self.divisor_exponent)
        )
    }

    fn answer_markup(&self) -> String {
        format_monomial(self.quotient, self.quotient_exponent)
    }

    fn distractors(&self, _rng: &mut MathRng) -> Option<[String; 3]> {
        let (c1, e1) = self.dividend();
        Some([
            // subtracted coefficients
            format_monomial(c1 - self.divisor, self.quotient_exponent),
            format_monomial(self.quotient, e1 - self.divisor_exponent + 1),
            format_monomial(c1 / self.divisor + 1, self.quotient_exponent),
        ])
    }
}
