//! Polynomial templates (levels 6-8).

use serde::{Deserialize, Serialize};

use super::ProblemTemplate;
use crate::core::MathRng;
use crate::problems::format::{format_polynomial, shifted_trinomial, trinomial, variable};

/// `a·x² + b·x + c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trinomial {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl Trinomial {
    #[must_use]
    pub const fn new(a: i64, b: i64, c: i64) -> Self {
        Self { a, b, c }
    }

    /// Draw `a ∈ [a_lo, a_hi]`, then `b, c ∈ [-5, 5]`.
    fn draw(rng: &mut MathRng, a_lo: i64, a_hi: i64) -> Self {
        let a = rng.range(a_lo, a_hi);
        let b = rng.range(-5, 5);
        let c = rng.range(-5, 5);
        Self { a, b, c }
    }

    #[must_use]
    pub fn markup(&self) -> String {
        format_polynomial(&trinomial(self.a, self.b, self.c))
    }

    fn zip_with(&self, other: &Self, f: impl Fn(i64, i64) -> i64) -> Self {
        Self::new(f(self.a, other.a), f(self.b, other.b), f(self.c, other.c))
    }
}

/// Level 6: `(p) + (q)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolynomialAdd {
    pub p: Trinomial,
    pub q: Trinomial,
}

impl PolynomialAdd {
    pub fn draw(rng: &mut MathRng) -> Self {
        let p = Trinomial::draw(rng, 1, 5);
        let q = Trinomial::draw(rng, 1, 5);
        Self { p, q }
    }

    #[must_use]
    pub fn sum(&self) -> Trinomial {
        self.p.zip_with(&self.q, |x, y| x + y)
    }
}

impl ProblemTemplate for PolynomialAdd {
    fn expression(&self) -> String {
        format!("({}) + ({})", self.p.markup(), self.q.markup())
    }

    fn answer_markup(&self) -> String {
        self.sum().markup()
    }

    fn distractors(&self, rng: &mut MathRng) -> Option<[String; 3]> {
        let r = self.sum();
        Some([
            Trinomial::new(r.a + rng.range(1, 3), r.b, r.c).markup(),
            Trinomial::new(r.a, r.b - rng.range(1, 4), r.c).markup(),
            self.p.zip_with(&self.q, |x, y| x * y).markup(),
        ])
    }
}

/// Level 7: `(p) - (q)` with `p.a ∈ [2, 7]`, `q.a ∈ [1, 4]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolynomialSubtract {
    pub p: Trinomial,
    pub q: Trinomial,
}

impl PolynomialSubtract {
    pub fn draw(rng: &mut MathRng) -> Self {
        let p = Trinomial::draw(rng, 2, 7);
        let q = Trinomial::draw(rng, 1, 4);
        Self { p, q }
    }

    #[must_use]
    pub fn difference(&self) -> Trinomial {
        self.p.zip_with(&self.q, |x, y| x - y)
    }
}

impl ProblemTemplate for PolynomialSubtract {
    fn expression(&self) -> String {
        format!("({}) - ({})", self.p.markup(), self.q.markup())
    }

    fn answer_markup(&self) -> String {
        self.difference().markup()
    }

    fn distractors(&self, rng: &mut MathRng) -> Option<[String; 3]> {
        let r = self.difference();
        Some([
            // forgot to distribute the minus
            self.p.zip_with(&self.q, |x, y| x + y).markup(),
            Trinomial::new(r.a, r.b + rng.range(2, 5), r.c).markup(),
            Trinomial::new(r.a - 1, r.b, r.c + 2).markup(),
        ])
    }
}

/// Level 8: `m·x^me · (a·x² + b·x + c)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolynomialTimesMonomial {
    pub m: i64,
    pub me: u32,
    pub poly: Trinomial,
}

impl PolynomialTimesMonomial {
    pub fn draw(rng: &mut MathRng) -> Self {
        let m = rng.range(2, 4);
        let me = rng.range(1, 2) as u32;
        let a = rng.range(1, 5);
        let b = rng.range(-5, 5);
        let c = rng.range(-4, 4);
        Self {
            m,
            me,
            poly: Trinomial::new(a, b, c),
        }
    }

    /// Coefficients of the product; exponents are the trinomial's shifted by `me`.
    #[must_use]
    pub fn product(&self) -> Trinomial {
        Trinomial::new(self.m * self.poly.a, self.m * self.poly.b, self.m * self.poly.c)
    }
}

impl ProblemTemplate for PolynomialTimesMonomial {
    fn expression(&self) -> String {
        format!("{}{}({})", self.m, variable(self.me), self.poly.markup())
    }

    fn answer_markup(&self) -> String {
        let r = self.product();
        format_polynomial(&shifted_trinomial(r.a, r.b, r.c, self.me))
    }

    fn distractors(&self, _rng: &mut MathRng) -> Option<[String; 3]> {
        let r = self.product();
        let Trinomial { a, b, c } = self.poly;
        let m = self.m;
        Some([
            // exponents not shifted
            r.markup(),
            // added instead of multiplied
            format_polynomial(&shifted_trinomial(m + a, m + b, m + c, self.me)),
            format_polynomial(&shifted_trinomial(r.a + 2, r.b, r.c - 1, self.me)),
        ])
    }
}
