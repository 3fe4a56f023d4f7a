//! Numeric-answer templates: warm-up arithmetic and linear equations.

use serde::{Deserialize, Serialize};

use super::ProblemTemplate;
use crate::core::MathRng;
use crate::problems::format::linear_factor;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::Add, Operator::Subtract, Operator::Multiply];

    #[must_use]
    pub fn apply(self, a: i64, b: i64) -> i64 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
        }
    }

    #[must_use]
    pub fn markup(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "\\times",
        }
    }
}

/// Level 1: `a op b` with `a, b ∈ [1, 20]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arithmetic {
    pub a: i64,
    pub b: i64,
    pub op: Operator,
}

impl Arithmetic {
    pub fn draw(rng: &mut MathRng) -> Self {
        let a = rng.range(1, 20);
        let b = rng.range(1, 20);
        let op = rng.pick(&Operator::ALL);
        Self { a, b, op }
    }

    #[must_use]
    pub fn result(&self) -> i64 {
        self.op.apply(self.a, self.b)
    }
}

impl ProblemTemplate for Arithmetic {
    fn expression(&self) -> String {
        format!("{} {} {}", self.a, self.op.markup(), self.b)
    }

    fn answer_markup(&self) -> String {
        self.result().to_string()
    }
}

/// Level 2: solve `ax + b = c` for `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearEquation {
    pub x: i64,
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl LinearEquation {
    const SLOPES: [i64; 6] = [2, 3, 4, 5, -2, -3];

    pub fn draw(rng: &mut MathRng) -> Self {
        let x = rng.range(-5, 8);
        let a = rng.pick(&Self::SLOPES);
        let b = rng.range(-10, 10);
        Self {
            x,
            a,
            b,
            c: a * x + b,
        }
    }
}

impl ProblemTemplate for LinearEquation {
    fn prompt(&self) -> Option<&'static str> {
        Some("Solve for x:")
    }

    fn expression(&self) -> String {
        let lhs = linear_factor(self.a);
        if self.b < 0 {
            format!("{lhs} - {} = {}", -self.b, self.c)
        } else {
            format!("{lhs} + {} = {}", self.b, self.c)
        }
    }

    fn answer(&self) -> String {
        self.x.to_string()
    }

    fn answer_markup(&self) -> String {
        format!("x = {}", self.x)
    }
}
