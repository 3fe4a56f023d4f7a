//! Problem generation.
//!
//! - `format`: canonical markup for terms and polynomials
//! - `templates`: the ten parametrized templates and their distractor rules
//! - `catalogue`: difficulty ↔ template mapping
//! - `factory`: selection, assembly, shuffling
//!
//! ```
//! use tug_of_math::core::MathRng;
//! use tug_of_math::problems::{generate_problem, InputType};
//!
//! let mut rng = MathRng::new(7);
//! let problem = generate_problem(&mut rng, Some(9));
//! assert_eq!(problem.category, "Notable Products");
//! assert_eq!(problem.input_type, InputType::MultipleChoice);
//! assert_eq!(problem.choices.as_ref().map(|c| c.len()), Some(4));
//! ```

pub mod catalogue;
pub mod factory;
pub mod format;
pub mod problem;
pub mod templates;

pub use catalogue::{difficulty_label, TemplateKind, TemplateParams, MAX_DIFFICULTY};
pub use factory::{
    build_problem, generate_problem, max_difficulty, select_template, ProblemFactory,
    ProblemSource,
};
pub use format::{format_monomial, format_polynomial, format_term, Term, Terms};
pub use problem::{Choice, Choices, InputType, Problem};
pub use templates::ProblemTemplate;
