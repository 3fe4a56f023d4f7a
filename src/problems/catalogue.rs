//! Difficulty ↔ template mapping.
//!
//! `TemplateKind` is the closed set of templates; `TemplateParams` holds
//! one drawn parameter set for any of them. Both are exhaustively
//! matchable, so adding a template forces every dispatch site to handle it.

use serde::{Deserialize, Serialize};

use super::problem::InputType;
use super::templates::{
    Arithmetic, BinomialSquare, DifferenceOfSquares, LinearEquation, MonomialAddSub,
    MonomialDivide, MonomialMultiply, PolynomialAdd, PolynomialSubtract, PolynomialTimesMonomial,
    ProblemTemplate,
};
use crate::core::MathRng;

/// One of the ten problem templates, in difficulty order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TemplateKind {
    Arithmetic,
    LinearEquation,
    MonomialAddSub,
    MonomialMultiply,
    MonomialDivide,
    PolynomialAdd,
    PolynomialSubtract,
    PolynomialTimesMonomial,
    BinomialSquare,
    DifferenceOfSquares,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 10] = [
        TemplateKind::Arithmetic,
        TemplateKind::LinearEquation,
        TemplateKind::MonomialAddSub,
        TemplateKind::MonomialMultiply,
        TemplateKind::MonomialDivide,
        TemplateKind::PolynomialAdd,
        TemplateKind::PolynomialSubtract,
        TemplateKind::PolynomialTimesMonomial,
        TemplateKind::BinomialSquare,
        TemplateKind::DifferenceOfSquares,
    ];

    /// Look up the template for a difficulty in `1..=10`.
    #[must_use]
    pub fn from_difficulty(difficulty: u8) -> Option<Self> {
        let kind = match difficulty {
            1 => TemplateKind::Arithmetic,
            2 => TemplateKind::LinearEquation,
            3 => TemplateKind::MonomialAddSub,
            4 => TemplateKind::MonomialMultiply,
            5 => TemplateKind::MonomialDivide,
            6 => TemplateKind::PolynomialAdd,
            7 => TemplateKind::PolynomialSubtract,
            8 => TemplateKind::PolynomialTimesMonomial,
            9 => TemplateKind::BinomialSquare,
            10 => TemplateKind::DifferenceOfSquares,
            _ => return None,
        };
        Some(kind)
    }

    #[must_use]
    pub fn difficulty(self) -> u8 {
        match self {
            TemplateKind::Arithmetic => 1,
            TemplateKind::LinearEquation => 2,
            TemplateKind::MonomialAddSub => 3,
            TemplateKind::MonomialMultiply => 4,
            TemplateKind::MonomialDivide => 5,
            TemplateKind::PolynomialAdd => 6,
            TemplateKind::PolynomialSubtract => 7,
            TemplateKind::PolynomialTimesMonomial => 8,
            TemplateKind::BinomialSquare => 9,
            TemplateKind::DifferenceOfSquares => 10,
        }
    }

    /// Category shown with each problem.
    #[must_use]
    pub fn category(self) -> &'static str {
        match self {
            TemplateKind::Arithmetic => "Arithmetic",
            TemplateKind::LinearEquation => "Linear Equation",
            TemplateKind::MonomialAddSub => "Monomials",
            TemplateKind::MonomialMultiply => "Monomial Multiplication",
            TemplateKind::MonomialDivide => "Monomial Division",
            TemplateKind::PolynomialAdd => "Polynomial Addition",
            TemplateKind::PolynomialSubtract => "Polynomial Subtraction",
            TemplateKind::PolynomialTimesMonomial => "Polynomial × Monomial",
            TemplateKind::BinomialSquare => "Notable Products",
            TemplateKind::DifferenceOfSquares => "Factoring",
        }
    }

    /// Label for a difficulty selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TemplateKind::Arithmetic => "Basic Arithmetic",
            TemplateKind::LinearEquation => "Linear Equations",
            TemplateKind::MonomialAddSub => "Monomial Addition/Subtraction",
            TemplateKind::MonomialMultiply => "Monomial Multiplication",
            TemplateKind::MonomialDivide => "Monomial Division",
            TemplateKind::PolynomialAdd => "Polynomial Addition",
            TemplateKind::PolynomialSubtract => "Polynomial Subtraction",
            TemplateKind::PolynomialTimesMonomial => "Polynomial × Monomial",
            TemplateKind::BinomialSquare => "Notable Products",
            TemplateKind::DifferenceOfSquares => "Factoring",
        }
    }

    #[must_use]
    pub fn input_type(self) -> InputType {
        match self {
            TemplateKind::Arithmetic | TemplateKind::LinearEquation => InputType::Numeric,
            _ => InputType::MultipleChoice,
        }
    }

    /// Draw a fresh parameter set for this template.
    pub fn draw(self, rng: &mut MathRng) -> TemplateParams {
        match self {
            TemplateKind::Arithmetic => TemplateParams::Arithmetic(Arithmetic::draw(rng)),
            TemplateKind::LinearEquation => TemplateParams::LinearEquation(LinearEquation::draw(rng)),
            TemplateKind::MonomialAddSub => TemplateParams::MonomialAddSub(MonomialAddSub::draw(rng)),
            TemplateKind::MonomialMultiply => {
                TemplateParams::MonomialMultiply(MonomialMultiply::draw(rng))
            }
            TemplateKind::MonomialDivide => TemplateParams::MonomialDivide(MonomialDivide::draw(rng)),
            TemplateKind::PolynomialAdd => TemplateParams::PolynomialAdd(PolynomialAdd::draw(rng)),
            TemplateKind::PolynomialSubtract => {
                TemplateParams::PolynomialSubtract(PolynomialSubtract::draw(rng))
            }
            TemplateKind::PolynomialTimesMonomial => {
                TemplateParams::PolynomialTimesMonomial(PolynomialTimesMonomial::draw(rng))
            }
            TemplateKind::BinomialSquare => TemplateParams::BinomialSquare(BinomialSquare::draw(rng)),
            TemplateKind::DifferenceOfSquares => {
                TemplateParams::DifferenceOfSquares(DifferenceOfSquares::draw(rng))
            }
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.category(), self.difficulty())
    }
}

/// Number of templates; the highest valid difficulty.
pub const MAX_DIFFICULTY: u8 = TemplateKind::ALL.len() as u8;

/// Selector label for a difficulty, if it is in range.
#[must_use]
pub fn difficulty_label(difficulty: u8) -> Option<&'static str> {
    TemplateKind::from_difficulty(difficulty).map(TemplateKind::label)
}

/// A drawn parameter set for one template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateParams {
    Arithmetic(Arithmetic),
    LinearEquation(LinearEquation),
    MonomialAddSub(MonomialAddSub),
    MonomialMultiply(MonomialMultiply),
    MonomialDivide(MonomialDivide),
    PolynomialAdd(PolynomialAdd),
    PolynomialSubtract(PolynomialSubtract),
    PolynomialTimesMonomial(PolynomialTimesMonomial),
    BinomialSquare(BinomialSquare),
    DifferenceOfSquares(DifferenceOfSquares),
}

impl TemplateParams {
    #[must_use]
    pub fn kind(&self) -> TemplateKind {
        match self {
            TemplateParams::Arithmetic(_) => TemplateKind::Arithmetic,
            TemplateParams::LinearEquation(_) => TemplateKind::LinearEquation,
            TemplateParams::MonomialAddSub(_) => TemplateKind::MonomialAddSub,
            TemplateParams::MonomialMultiply(_) => TemplateKind::MonomialMultiply,
            TemplateParams::MonomialDivide(_) => TemplateKind::MonomialDivide,
            TemplateParams::PolynomialAdd(_) => TemplateKind::PolynomialAdd,
            TemplateParams::PolynomialSubtract(_) => TemplateKind::PolynomialSubtract,
            TemplateParams::PolynomialTimesMonomial(_) => TemplateKind::PolynomialTimesMonomial,
            TemplateParams::BinomialSquare(_) => TemplateKind::BinomialSquare,
            TemplateParams::DifferenceOfSquares(_) => TemplateKind::DifferenceOfSquares,
        }
    }

    /// The template behaviour for these parameters.
    #[must_use]
    pub fn template(&self) -> &dyn ProblemTemplate {
        match self {
            TemplateParams::Arithmetic(p) => p,
            TemplateParams::LinearEquation(p) => p,
            TemplateParams::MonomialAddSub(p) => p,
            TemplateParams::MonomialMultiply(p) => p,
            TemplateParams::MonomialDivide(p) => p,
            TemplateParams::PolynomialAdd(p) => p,
            TemplateParams::PolynomialSubtract(p) => p,
            TemplateParams::PolynomialTimesMonomial(p) => p,
            TemplateParams::BinomialSquare(p) => p,
            TemplateParams::DifferenceOfSquares(p) => p,
        }
    }
}
