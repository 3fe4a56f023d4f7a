//! The `Problem` value object handed to the presentation layer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// How the host must capture the answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputType {
    /// Free-form numeral, compared as a trimmed string.
    Numeric,
    /// Pick one of four choices.
    MultipleChoice,
}

/// A multiple-choice option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub markup: String,
    pub correct: bool,
}

impl Choice {
    pub fn correct(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            correct: true,
        }
    }

    pub fn wrong(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            correct: false,
        }
    }
}

/// Four choices of one problem.
pub type Choices = SmallVec<[Choice; 4]>;

/// One generated exercise. Immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub category: String,
    pub prompt: Option<String>,
    pub expression: String,
    pub input_type: InputType,
    /// Machine-comparable answer.
    pub answer: String,
    /// Typeset answer for feedback.
    pub answer_markup: String,
    pub difficulty: u8,
    /// Present only for `MultipleChoice`.
    pub choices: Option<Choices>,
}

impl Problem {
    #[must_use]
    pub fn is_multiple_choice(&self) -> bool {
        self.input_type == InputType::MultipleChoice
    }

    /// Position of the correct choice, if this is a choice problem.
    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        self.choices.as_ref()?.iter().position(|c| c.correct)
    }

    /// Literal numeric check: trimmed input must equal `answer` exactly.
    /// `"+5"` or `"05"` do not match `"5"`.
    #[must_use]
    pub fn check_numeric(&self, input: &str) -> bool {
        input.trim() == self.answer
    }

    /// Check a choice by index. `None` when the index is out of range or
    /// the problem has no choices.
    #[must_use]
    pub fn check_choice(&self, index: usize) -> Option<bool> {
        self.choices.as_ref()?.get(index).map(|c| c.correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(answer: &str) -> Problem {
        Problem {
            category: "Arithmetic".into(),
            prompt: None,
            expression: "2 + 3".into(),
            input_type: InputType::Numeric,
            answer: answer.into(),
            answer_markup: answer.into(),
            difficulty: 1,
            choices: None,
        }
    }

    /// Numeric answers compare as trimmed strings.
    #[test]
    fn test_numeric_check_is_literal() {
        let problem = numeric("5");
        assert!(problem.check_numeric("5"));
        assert!(problem.check_numeric("  5 \n"));
        assert!(!problem.check_numeric("+5"));
        assert!(!problem.check_numeric("05"));
        assert!(!problem.check_numeric("5.0"));
    }

    /// Choice checks follow the flag; bad indices give `None`.
    #[test]
    fn test_choice_check() {
        let mut problem = numeric("3x");
        problem.input_type = InputType::MultipleChoice;
        problem.choices = Some(smallvec::smallvec![
            Choice::wrong("4x"),
            Choice::correct("3x"),
            Choice::wrong("3x^{2}"),
            Choice::wrong("9x"),
        ]);

        assert!(problem.is_multiple_choice());
        assert_eq!(problem.correct_index(), Some(1));
        assert_eq!(problem.check_choice(1), Some(true));
        assert_eq!(problem.check_choice(0), Some(false));
        assert_eq!(problem.check_choice(4), None);
    }

    /// Problems serialize with camelCase keys.
    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(numeric("5")).unwrap();
        assert_eq!(json["inputType"], "numeric");
        assert_eq!(json["answerMarkup"], "5");
    }
}
