//! Headless self-play.
//!
//! Plays complete matches between two simulated players with fixed
//! accuracy, for balancing difficulty settings and soak-testing the state
//! machine without a UI.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{MatchConfig, MathRng, PlayerId, PlayerSetup};
use crate::game::{FinishReason, MatchSummary, TugMatch};
use crate::problems::{InputType, ProblemFactory};

/// Answer policy of a simulated player.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulatedPlayer {
    /// Probability of answering correctly when answering at all.
    pub accuracy: f64,
    /// Probability of letting the round clock run out.
    pub timeout_rate: f64,
}

impl SimulatedPlayer {
    #[must_use]
    pub fn new(accuracy: f64) -> Self {
        Self {
            accuracy,
            timeout_rate: 0.0,
        }
    }

    #[must_use]
    pub fn with_timeout_rate(mut self, rate: f64) -> Self {
        self.timeout_rate = rate;
        self
    }
}

impl Default for SimulatedPlayer {
    fn default() -> Self {
        Self::new(0.7)
    }
}

/// Configuration for a batch of simulated matches.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    pub matches: usize,
    pub players: [SimulatedPlayer; 2],
    /// Seconds each answer takes, delivered through `tick`.
    pub seconds_per_answer: u32,
    /// Rounds after which a match is ended as if its clock ran out.
    pub max_rounds: u32,
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            matches: 100,
            players: [SimulatedPlayer::default(), SimulatedPlayer::default()],
            seconds_per_answer: 5,
            max_rounds: 200,
            seed: 0,
        }
    }
}

impl SimConfig {
    pub fn with_matches(mut self, matches: usize) -> Self {
        self.matches = matches;
        self
    }

    pub fn with_players(mut self, players: [SimulatedPlayer; 2]) -> Self {
        self.players = players;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }
}

/// Correct/answered counts for one category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub answered: u32,
    pub correct: u32,
}

impl Tally {
    #[must_use]
    pub fn rate(&self) -> f64 {
        if self.answered == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.answered)
        }
    }
}

/// Aggregate outcome of a batch.
#[derive(Clone, Debug, Default)]
pub struct SimReport {
    pub matches: usize,
    pub wins: [u32; 2],
    pub total_rounds: u64,
    pub clock_finishes: u32,
    pub by_category: FxHashMap<String, Tally>,
}

impl SimReport {
    #[must_use]
    pub fn mean_rounds(&self) -> f64 {
        if self.matches == 0 {
            0.0
        } else {
            self.total_rounds as f64 / self.matches as f64
        }
    }

    fn record(&mut self, summary: &MatchSummary) {
        self.matches += 1;
        self.wins[summary.winner.index()] += 1;
        self.total_rounds += u64::from(summary.rounds);
        if summary.reason == FinishReason::MatchClock {
            self.clock_finishes += 1;
        }
    }
}

/// Runs simulated matches.
pub struct Simulator {
    match_config: MatchConfig,
    config: SimConfig,
    problems: MathRng,
    answers: MathRng,
}

impl Simulator {
    #[must_use]
    pub fn new(match_config: MatchConfig, config: SimConfig) -> Self {
        let root = MathRng::new(config.seed);
        Self {
            match_config,
            problems: root.for_context("problems"),
            answers: root.for_context("answers"),
            config,
        }
    }

    /// Play `config.matches` matches.
    pub fn run(&mut self) -> SimReport {
        let mut report = SimReport::default();
        for index in 0..self.config.matches {
            let summary = self.play_one(&mut report);
            debug!(index, winner = %summary.winner, rounds = summary.rounds, "simulated match");
            report.record(&summary);
        }
        info!(
            matches = report.matches,
            wins0 = report.wins[0],
            wins1 = report.wins[1],
            mean_rounds = report.mean_rounds(),
            "simulation finished"
        );
        report
    }

    fn play_one(&mut self, report: &mut SimReport) -> MatchSummary {
        let rng = self.problems.fork();
        debug!(seed = rng.seed(), "simulated match seed");
        let factory = ProblemFactory::with_rng(rng);
        let mut game = TugMatch::new(self.match_config.clone(), factory);
        let mut update = game.start([
            PlayerSetup::default_for(PlayerId::ZERO),
            PlayerSetup::default_for(PlayerId::ONE),
        ]);

        loop {
            if let Some(summary) = update.finished() {
                return summary.clone();
            }
            let state = &update.snapshot;
            if state.round > self.config.max_rounds {
                update = game.force_match_end();
                continue;
            }
            if state.feedback.is_some() {
                update = game.advance_round();
                continue;
            }

            let clock = game.tick(self.config.seconds_per_answer);
            if !clock.is_noop() {
                update = clock;
                continue;
            }

            let Some(problem) = game.state().problem.clone() else {
                update = game.force_match_end();
                continue;
            };
            let policy = self.config.players[game.state().turn.index()];
            if self.answers.gen_bool(policy.timeout_rate) {
                update = game.force_timeout();
                continue;
            }

            let correct = self.answers.gen_bool(policy.accuracy);
            update = match problem.input_type {
                InputType::Numeric if correct => game.submit_numeric(&problem.answer),
                InputType::Numeric => game.submit_numeric(&format!("{}1", problem.answer)),
                InputType::MultipleChoice => {
                    let choices = problem.choices.as_deref().unwrap_or_default();
                    let wanted: Vec<usize> = choices
                        .iter()
                        .enumerate()
                        .filter(|(_, c)| c.correct == correct)
                        .map(|(i, _)| i)
                        .collect();
                    let index = if wanted.is_empty() {
                        0
                    } else {
                        wanted[self.answers.index(wanted.len())]
                    };
                    game.submit_choice(index)
                }
            };

            if let Some(record) = update.snapshot.history.back() {
                let tally = report.by_category.entry(record.category.clone()).or_default();
                tally.answered += 1;
                tally.correct += u32::from(record.correct);
            }
        }
    }
}
