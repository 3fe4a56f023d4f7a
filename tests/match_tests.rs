//! Integration tests for the tug-of-war match state machine.

use tug_of_math::core::{MatchConfig, PlayerId, PlayerSetup};
use tug_of_math::game::{FinishReason, MatchEvent, Phase, RoundPhase, TugMatch};
use tug_of_math::problems::{InputType, Problem, ProblemFactory, ProblemSource};

fn setups() -> [PlayerSetup; 2] {
    [PlayerSetup::new("Ana", "violet"), PlayerSetup::new("Ben", "pink")]
}

/// Answer the pending problem correctly or not, whatever its input type.
fn answer(game: &mut TugMatch<impl ProblemSource>, correct: bool) -> tug_of_math::Update {
    let problem: Problem = game.state().problem.clone().expect("no pending problem");
    match problem.input_type {
        InputType::Numeric if correct => game.submit_numeric(&problem.answer),
        InputType::Numeric => game.submit_numeric(&format!("{}9", problem.answer)),
        InputType::MultipleChoice => {
            let idx = problem
                .choices
                .as_ref()
                .unwrap()
                .iter()
                .position(|c| c.correct == correct)
                .unwrap();
            game.submit_choice(idx)
        }
    }
}

fn seeded(difficulty: Option<u8>) -> TugMatch {
    let config = MatchConfig::default().with_difficulty(difficulty).with_seed(42);
    let mut game = TugMatch::from_config(config);
    game.start(setups());
    game
}

// =============================================================================
// Win condition
// =============================================================================

/// Five steps toward player 0 end the match in their favour.
#[test]
fn test_player_zero_pulls_rope_to_end() {
    let mut game = seeded(Some(3));

    // Player 0 answers right, player 1 answers wrong: every round pulls
    // toward player 0.
    let mut last = None;
    for round in 1..=5 {
        let correct = game.state().turn == PlayerId::ZERO;
        let update = answer(&mut game, correct);
        assert_eq!(update.snapshot.rope_position, -(round as i32));
        if round < 5 {
            assert!(update.finished().is_none());
            game.advance_round();
        }
        last = Some(update);
    }

    let update = last.unwrap();
    assert_eq!(update.snapshot.rope_position, -5);
    assert_eq!(update.snapshot.winner, Some(PlayerId::ZERO));
    assert_eq!(update.snapshot.phase, Phase::Finished);

    let summary = update.finished().unwrap();
    assert_eq!(summary.reason, FinishReason::RopeEnd);
    assert_eq!(summary.players[PlayerId::ZERO].score, 3);
    assert_eq!(summary.stats[PlayerId::ONE].wrong, 2);

    // no further rounds
    assert!(game.advance_round().is_noop());
    assert!(answer_if_pending(&mut game));
}

fn answer_if_pending(game: &mut TugMatch) -> bool {
    game.submit_choice(0).is_noop() && game.submit_numeric("1").is_noop()
}

/// Alternating misses keep the rope near the centre.
#[test]
fn test_alternating_misses_never_finish() {
    let mut game = seeded(Some(1));
    for _ in 0..5 {
        let update = answer(&mut game, false);
        if update.finished().is_some() {
            break;
        }
        game.advance_round();
    }
    // p0 wrong: +1, p1 wrong: 0, ... never reaches an end
    assert_eq!(game.state().phase, Phase::Playing);
    assert!(game.state().rope_position.abs() <= 1);
}

/// A miss after a long streak moves one step and resets the streak.
#[test]
fn test_incorrect_answer_moves_one_step_and_resets_streak() {
    let mut game = seeded(None);
    for _ in 0..4 {
        answer(&mut game, true);
        game.advance_round();
    }
    assert_eq!(game.state().streak, 4);
    assert_eq!(game.state().rope_position, 0);

    let mover = game.state().turn;
    let before = game.state().rope_position;
    let update = answer(&mut game, false);
    assert_eq!(update.snapshot.rope_position - before, mover.opponent().pull());
    assert_eq!(update.snapshot.streak, 0);
}

// =============================================================================
// Rounds and problems
// =============================================================================

/// Every round draws a new problem at the configured level.
#[test]
fn test_new_problem_each_round_at_configured_difficulty() {
    let mut game = seeded(Some(8));
    for round in 1..=6 {
        let state = game.state();
        assert_eq!(state.round, round);
        assert_eq!(state.problem.as_ref().unwrap().difficulty, 8);
        answer(&mut game, true);
        game.advance_round();
    }
    assert_eq!(game.state().history.len(), 6);
}

/// A match without a difficulty mixes templates.
#[test]
fn test_random_difficulty_match() {
    let mut game = seeded(None);
    let mut difficulties = std::collections::HashSet::new();
    for _ in 0..60 {
        difficulties.insert(game.state().problem.as_ref().unwrap().difficulty);
        answer(&mut game, true);
        game.advance_round();
    }
    assert!(difficulties.len() > 5);
}

/// A leading zero makes a numeric answer wrong.
#[test]
fn test_numeric_answer_is_string_compared() {
    struct Five;
    impl ProblemSource for Five {
        fn next_problem(&mut self, _difficulty: Option<u8>) -> Problem {
            let mut factory = ProblemFactory::new(0);
            let mut problem = factory.generate(Some(1));
            problem.answer = "5".into();
            problem
        }
    }

    let mut game = TugMatch::new(MatchConfig::default(), Five);
    game.start(setups());
    let update = game.submit_numeric("05");
    assert_eq!(update.snapshot.feedback.as_ref().map(|f| f.correct), Some(false));
}

// =============================================================================
// Clocks
// =============================================================================

/// Match-clock expiry crowns the rope leader.
#[test]
fn test_match_clock_decides_by_rope() {
    let config = MatchConfig::default()
        .with_seed(1)
        .with_round_seconds(None)
        .with_match_seconds(Some(10));
    let mut game = TugMatch::from_config(config);
    game.start(setups());

    answer(&mut game, false); // player 0 misses: rope +1
    let update = game.tick(10);
    let summary = update.finished().unwrap();
    assert_eq!(summary.winner, PlayerId::ONE);
    assert_eq!(summary.reason, FinishReason::MatchClock);
}

/// The match clock keeps running while feedback is shown.
#[test]
fn test_match_clock_runs_during_feedback() {
    let config = MatchConfig::default()
        .with_seed(2)
        .with_match_seconds(Some(3));
    let mut game = TugMatch::from_config(config);
    game.start(setups());
    answer(&mut game, true);
    assert_eq!(game.state().round_phase, RoundPhase::Feedback);

    game.tick(2);
    let update = game.tick(1);
    assert_eq!(update.snapshot.winner, Some(PlayerId::ZERO));
}

/// Round-clock expiry resolves the round as a timed-out miss.
#[test]
fn test_round_clock_timeout_events() {
    let config = MatchConfig::default().with_seed(3).with_round_seconds(Some(30));
    let mut game = TugMatch::from_config(config);
    game.start(setups());

    let update = game.tick(30);
    match &update.events[0] {
        MatchEvent::AnswerResolved {
            player,
            correct,
            timed_out,
            rope_position,
            ..
        } => {
            assert_eq!(*player, PlayerId::ZERO);
            assert!(!correct);
            assert!(*timed_out);
            assert_eq!(*rope_position, 1);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

// =============================================================================
// Lifecycle
// =============================================================================

/// A finished match can be started again from scratch.
#[test]
fn test_restart_after_finish() {
    let mut game = seeded(Some(2));
    game.force_match_end();
    assert_eq!(game.state().phase, Phase::Finished);

    let update = game.start(setups());
    assert_eq!(update.snapshot.phase, Phase::Playing);
    assert_eq!(update.snapshot.winner, None);
    assert_eq!(update.snapshot.players[PlayerId::ZERO].score, 0);
    assert!(update.snapshot.history.is_empty());
}

/// Snapshots serialize to JSON for the host.
#[test]
fn test_snapshot_serializes() {
    let mut game = seeded(Some(6));
    let update = answer(&mut game, true);
    let json = serde_json::to_value(&update.snapshot).unwrap();
    assert_eq!(json["rope_position"], -1);
    assert_eq!(json["phase"], "Playing");
    assert_eq!(json["problem"]["inputType"], "multipleChoice");
}
