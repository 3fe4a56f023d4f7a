//! The ten parametrized templates.
//!
//! Each template is a plain parameter struct with a `draw` constructor and
//! a `ProblemTemplate` impl that derives the question, answer and
//! distractors from those parameters alone. Only `draw` and
//! `distractors` consume randomness.

mod arithmetic;
mod monomial;
mod notable;
mod polynomial;

pub use arithmetic::{Arithmetic, LinearEquation, Operator};
pub use monomial::{MonomialAddSub, MonomialDivide, MonomialMultiply};
pub use notable::{BinomialSquare, DifferenceOfSquares};
pub use polynomial::{PolynomialAdd, PolynomialSubtract, PolynomialTimesMonomial, Trinomial};

use crate::core::MathRng;

/// Question/answer derivation shared by every template.
pub trait ProblemTemplate {
    /// Instruction shown above the expression, if any.
    fn prompt(&self) -> Option<&'static str> {
        None
    }

    /// Question markup. Never empty.
    fn expression(&self) -> String;

    /// Typeset answer.
    fn answer_markup(&self) -> String;

    /// Machine-comparable answer. Defaults to the markup.
    fn answer(&self) -> String {
        self.answer_markup()
    }

    /// Three deliberately wrong answers, or `None` for numeric templates.
    ///
    /// Not deduplicated: a distractor may coincide with the answer or with
    /// another distractor for some parameter draws.
    fn distractors(&self, _rng: &mut MathRng) -> Option<[String; 3]> {
        None
    }
}
