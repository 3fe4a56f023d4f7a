//! Problem factory: template selection, assembly and choice shuffling.

use tracing::{debug, warn};

use super::catalogue::{TemplateKind, TemplateParams, MAX_DIFFICULTY};
use super::problem::{Choice, Choices, InputType, Problem};
use crate::core::{MathRng, MathRngState};

/// Highest selectable difficulty (the template count).
#[must_use]
pub const fn max_difficulty() -> u8 {
    MAX_DIFFICULTY
}

/// Pick the template for a requested difficulty.
///
/// `None` or an out-of-range value falls back to a uniform draw over all
/// templates; this is never an error.
pub fn select_template(rng: &mut MathRng, difficulty: Option<u8>) -> TemplateKind {
    if let Some(kind) = difficulty.and_then(TemplateKind::from_difficulty) {
        return kind;
    }
    if let Some(d) = difficulty {
        warn!(difficulty = d, "difficulty out of range, choosing a random template");
    }
    rng.pick(&TemplateKind::ALL)
}

/// Assemble a complete problem from drawn parameters.
///
/// Choice templates get their three distractors plus the correct answer,
/// shuffled uniformly.
pub fn build_problem(params: &TemplateParams, rng: &mut MathRng) -> Problem {
    let kind = params.kind();
    let template = params.template();
    let answer_markup = template.answer_markup();

    let choices = template.distractors(rng).map(|wrong| {
        let mut choices: Choices = Choices::new();
        choices.push(Choice::correct(answer_markup.clone()));
        choices.extend(wrong.into_iter().map(Choice::wrong));
        rng.shuffle(&mut choices);
        choices
    });
    let input_type = if choices.is_some() {
        InputType::MultipleChoice
    } else {
        InputType::Numeric
    };

    Problem {
        category: kind.category().to_string(),
        prompt: template.prompt().map(str::to_string),
        expression: template.expression(),
        input_type,
        answer: template.answer(),
        answer_markup,
        difficulty: kind.difficulty(),
        choices,
    }
}

/// Generate one problem at `difficulty` (or a random one).
pub fn generate_problem(rng: &mut MathRng, difficulty: Option<u8>) -> Problem {
    let kind = select_template(rng, difficulty);
    let params = kind.draw(rng);
    let problem = build_problem(&params, rng);
    debug!(
        template = %kind,
        expression = %problem.expression,
        "generated problem"
    );
    problem
}

/// Where a match gets its problems from.
///
/// `ProblemFactory` is the production source; tests can script one.
pub trait ProblemSource {
    fn next_problem(&mut self, difficulty: Option<u8>) -> Problem;
}

/// Seeded problem source owning its RNG.
#[derive(Clone, Debug)]
pub struct ProblemFactory {
    rng: MathRng,
}

impl ProblemFactory {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: MathRng::new(seed),
        }
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: MathRng::from_entropy(),
        }
    }

    /// Seeded when `seed` is given, entropy otherwise.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    #[must_use]
    pub fn with_rng(rng: MathRng) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, difficulty: Option<u8>) -> Problem {
        generate_problem(&mut self.rng, difficulty)
    }

    /// Checkpoint the RNG so generation can resume exactly.
    #[must_use]
    pub fn rng_state(&self) -> MathRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn from_rng_state(state: &MathRngState) -> Self {
        Self {
            rng: MathRng::from_state(state),
        }
    }
}

impl ProblemSource for ProblemFactory {
    fn next_problem(&mut self, difficulty: Option<u8>) -> Problem {
        self.generate(difficulty)
    }
}
