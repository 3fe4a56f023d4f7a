//! Integration tests for the problem generator.
//!
//! These exercise the public generation API end to end: template lookup,
//! algebraic identities read back from the rendered markup, and the
//! statistical behaviour of selection and shuffling.

use tug_of_math::core::MathRng;
use tug_of_math::problems::{
    format_polynomial, generate_problem, max_difficulty, InputType, Problem, TemplateKind, Term,
};

fn choices(problem: &Problem) -> &[tug_of_math::Choice] {
    problem.choices.as_deref().expect("choice problem without choices")
}

/// Leading (optionally signed) integer of `s`.
fn leading_int(s: &str) -> i64 {
    let end = s
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && *c == '-')))
        .map_or(s.len(), |(i, _)| i);
    s[..end].parse().expect("no leading integer")
}

// =============================================================================
// Catalogue
// =============================================================================

/// Each difficulty produces its own template's problems.
#[test]
fn test_each_difficulty_uses_its_template() {
    let mut rng = MathRng::new(1);
    for d in 1..=max_difficulty() {
        let kind = TemplateKind::from_difficulty(d).unwrap();
        for _ in 0..50 {
            let problem = generate_problem(&mut rng, Some(d));
            assert_eq!(problem.difficulty, d);
            assert_eq!(problem.category, kind.category());
            assert_eq!(problem.input_type, kind.input_type());
            assert!(!problem.expression.is_empty());
            assert!(!problem.answer_markup.is_empty());
        }
    }
}

/// Only the linear equation and factoring levels carry a prompt.
#[test]
fn test_prompts() {
    let mut rng = MathRng::new(2);
    assert_eq!(generate_problem(&mut rng, Some(2)).prompt.as_deref(), Some("Solve for x:"));
    assert_eq!(generate_problem(&mut rng, Some(10)).prompt.as_deref(), Some("Factor:"));
    assert_eq!(generate_problem(&mut rng, Some(1)).prompt, None);
    assert_eq!(generate_problem(&mut rng, Some(6)).prompt, None);
}

/// The maximum difficulty never changes.
#[test]
fn test_max_difficulty_is_constant() {
    for _ in 0..3 {
        assert_eq!(max_difficulty(), 10);
    }
    assert_eq!(usize::from(max_difficulty()), TemplateKind::ALL.len());
}

// =============================================================================
// Choices
// =============================================================================

/// Choice problems have four choices with exactly one correct.
#[test]
fn test_choice_problems_have_four_choices_one_correct() {
    let mut rng = MathRng::new(3);
    for d in 3..=10 {
        for _ in 0..200 {
            let problem = generate_problem(&mut rng, Some(d));
            let choices = choices(&problem);
            assert_eq!(choices.len(), 4);
            assert_eq!(choices.iter().filter(|c| c.correct).count(), 1);
            assert_eq!(problem.correct_index().map(|i| &choices[i].markup), Some(&problem.answer_markup));
        }
    }
}

/// Level 4 repeats the answer among the wrong choices when `e1 = e2 = 2`
/// (`e1·e2 = e1+e2`) or `c1 = c2 = 2` (`c1·c2 = c1+c2`); the flag still
/// singles out one choice.
#[test]
fn test_duplicate_markups_are_tolerated() {
    let mut rng = MathRng::new(4);
    let mut saw_duplicate = false;
    for _ in 0..2000 {
        let problem = generate_problem(&mut rng, Some(4));
        let choices = choices(&problem);
        let duplicates = choices
            .iter()
            .filter(|c| c.markup == problem.answer_markup)
            .count();
        if duplicates > 1 {
            saw_duplicate = true;
            let squares = problem.expression.matches("x^{2}").count() == 2;
            let twos = problem.expression.starts_with("(2x") && problem.expression.contains(")(2x");
            assert!(squares || twos, "{}", problem.expression);
        }
        assert_eq!(choices.iter().filter(|c| c.correct).count(), 1);
    }
    assert!(saw_duplicate);
}

/// A zero level 3 result never shares its markup with a wrong choice.
#[test]
fn test_zero_monomial_answer_is_unambiguous() {
    let mut rng = MathRng::new(14);
    let mut zeros = 0;
    for _ in 0..3000 {
        let problem = generate_problem(&mut rng, Some(3));
        if problem.answer_markup != "0" {
            continue;
        }
        zeros += 1;
        let choices = choices(&problem);
        assert_eq!(choices.iter().filter(|c| c.markup == "0").count(), 1);
        assert!(choices.iter().any(|c| c.markup.starts_with("0x")));
    }
    assert!(zeros > 0);
}

/// The correct choice lands in each slot about a quarter of the time.
#[test]
fn test_shuffle_is_uniform() {
    let mut rng = MathRng::new(5);
    let n = 10_000;
    let mut slots = [0u32; 4];
    for _ in 0..n {
        let problem = generate_problem(&mut rng, Some(4));
        slots[problem.correct_index().unwrap()] += 1;
    }
    for count in slots {
        let freq = f64::from(count) / f64::from(n);
        assert!((freq - 0.25).abs() < 0.03, "slot frequency {freq}");
    }
}

// =============================================================================
// Selection
// =============================================================================

/// Random selection spreads evenly over the ten templates.
#[test]
fn test_random_difficulty_is_uniform() {
    let mut rng = MathRng::new(6);
    let n = 10_000;
    let mut counts = [0u32; 10];
    for _ in 0..n {
        let problem = generate_problem(&mut rng, None);
        counts[usize::from(problem.difficulty) - 1] += 1;
    }
    for count in counts {
        let freq = f64::from(count) / f64::from(n);
        assert!((freq - 0.1).abs() < 0.02, "template frequency {freq}");
    }
}

/// Out-of-range difficulties fall back to random templates.
#[test]
fn test_out_of_range_difficulty_is_random_not_error() {
    let mut rng = MathRng::new(7);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..300 {
        seen.insert(generate_problem(&mut rng, Some(0)).difficulty);
        seen.insert(generate_problem(&mut rng, Some(11)).difficulty);
    }
    assert_eq!(seen.len(), 10);
}

// =============================================================================
// Identities read back from markup
// =============================================================================

/// Arithmetic answers evaluate the shown expression.
#[test]
fn test_arithmetic_answer_matches_expression() {
    let mut rng = MathRng::new(8);
    for _ in 0..500 {
        let problem = generate_problem(&mut rng, Some(1));
        let parts: Vec<&str> = problem.expression.split(' ').collect();
        assert_eq!(parts.len(), 3);
        let a: i64 = parts[0].parse().unwrap();
        let b: i64 = parts[2].parse().unwrap();
        let expected = match parts[1] {
            "+" => a + b,
            "-" => a - b,
            "\\times" => a * b,
            op => panic!("unexpected operator {op}"),
        };
        assert_eq!(problem.answer, expected.to_string());
        assert_eq!(problem.answer_markup, problem.answer);
    }
}

/// Linear answers satisfy `a·x + b = c`.
#[test]
fn test_linear_equation_answer_satisfies_equation() {
    let mut rng = MathRng::new(9);
    for _ in 0..1000 {
        let problem = generate_problem(&mut rng, Some(2));
        let (lhs, rhs) = problem.expression.split_once(" = ").unwrap();
        let c: i64 = rhs.parse().unwrap();

        let (ax, b_part) = lhs.split_once(' ').unwrap();
        let a = leading_int(ax);
        let b: i64 = match b_part.split_once(' ').unwrap() {
            ("+", b) => b.parse().unwrap(),
            ("-", b) => -b.parse::<i64>().unwrap(),
            other => panic!("unexpected sign {other:?}"),
        };

        let x: i64 = problem.answer.parse().unwrap();
        assert_eq!(a * x + b, c, "{}", problem.expression);
        assert_eq!(problem.answer_markup, format!("x = {x}"));
    }
}

/// Division problems divide exactly, read back from the markup.
#[test]
fn test_monomial_division_is_exact() {
    let mut rng = MathRng::new(10);
    for _ in 0..1000 {
        let problem = generate_problem(&mut rng, Some(5));
        let body = problem.expression.strip_prefix("\\frac{").unwrap();
        let (numerator, denominator) = body.split_once("}{").unwrap();

        let c1 = leading_int(numerator);
        let c2 = leading_int(denominator);
        assert_eq!(c1 % c2, 0, "{}", problem.expression);

        let quotient = leading_int(&problem.answer_markup);
        assert_eq!(c1 / c2, quotient);
    }
}

/// Product exponents are the sum of the factor exponents.
#[test]
fn test_monomial_multiply_adds_exponents() {
    let mut rng = MathRng::new(11);
    for _ in 0..300 {
        let problem = generate_problem(&mut rng, Some(4));
        // "(c1x^{e1})(c2x^{e2})" with "x" meaning exponent 1
        let exponent = |factor: &str| -> u32 {
            factor
                .split_once("x^{")
                .map_or(1, |(_, e)| e.trim_end_matches('}').parse().unwrap())
        };
        let inner = problem.expression.trim_start_matches('(').trim_end_matches(')');
        let (f1, f2) = inner.split_once(")(").unwrap();
        let total = exponent(f1) + exponent(f2);
        assert!(problem.answer_markup.ends_with(&format!("x^{{{total}}}")));
        assert_eq!(leading_int(&problem.answer_markup), leading_int(f1) * leading_int(f2));
    }
}

/// The constant of a factoring problem is a perfect square.
#[test]
fn test_difference_of_squares_factors() {
    let mut rng = MathRng::new(12);
    for _ in 0..300 {
        let problem = generate_problem(&mut rng, Some(10));
        let (_, b2) = problem.expression.split_once(" - ").unwrap();
        let b2: i64 = b2.parse().unwrap();
        let b = (b2 as f64).sqrt() as i64;
        assert_eq!(b * b, b2);
        assert!(problem.answer_markup.ends_with(&format!("-{b})")));
    }
}

// =============================================================================
// Formatter
// =============================================================================

/// Zero terms vanish from formatted polynomials.
#[test]
fn test_formatter_drops_zero_terms() {
    let terms = [Term::new(0, 2), Term::new(3, 1), Term::new(0, 0)];
    assert_eq!(format_polynomial(&terms), "3x");
    assert_eq!(format_polynomial(&[Term::new(0, 0)]), "0");
}

/// Typed-answer problems have integer answers.
#[test]
fn test_numeric_problems_have_numeric_answers() {
    let mut rng = MathRng::new(13);
    for d in [1, 2] {
        for _ in 0..100 {
            let problem = generate_problem(&mut rng, Some(d));
            assert_eq!(problem.input_type, InputType::Numeric);
            assert!(problem.answer.parse::<i64>().is_ok());
        }
    }
}
