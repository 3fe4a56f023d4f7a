//! The tug-of-war state machine.
//!
//! ```text
//! menu ──start──▶ playing ──rope end / match clock──▶ finished
//!                  │  ▲
//!         answer / │  │ advance_round
//!         timeout  ▼  │
//!                 feedback
//! ```
//!
//! Calls that do not apply in the current state are ignored and return an
//! update with no events.

use tracing::{debug, info};

use super::clock::Countdown;
use super::event::{Events, MatchEvent, MatchSummary, Update};
use super::state::{Feedback, FinishReason, MatchState, Phase, RoundPhase, RoundRecord};
use crate::core::{MatchConfig, Player, PlayerId, PlayerMap, PlayerSetup};
use crate::problems::{InputType, ProblemFactory, ProblemSource};

/// A player's response to the current problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Answer {
    /// Raw text for a numeric problem.
    Numeric(String),
    /// Index into the problem's choices.
    Choice(usize),
}

impl Answer {
    pub fn numeric(text: impl Into<String>) -> Self {
        Answer::Numeric(text.into())
    }
}

/// Match driver owning the state and a problem source.
pub struct TugMatch<S = ProblemFactory> {
    config: MatchConfig,
    source: S,
    state: MatchState,
}

impl TugMatch<ProblemFactory> {
    /// Match backed by a factory seeded from `config.seed`.
    #[must_use]
    pub fn from_config(config: MatchConfig) -> Self {
        let factory = ProblemFactory::from_seed(config.seed);
        Self::new(config, factory)
    }
}

impl<S: ProblemSource> TugMatch<S> {
    #[must_use]
    pub fn new(config: MatchConfig, source: S) -> Self {
        let state = MatchState::menu(config.max_rope.max(1));
        Self {
            config,
            source,
            state,
        }
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    fn update(&self, events: Events) -> Update {
        Update {
            snapshot: self.state.clone(),
            events,
        }
    }

    /// Start with the configured difficulty and rope length.
    pub fn start(&mut self, players: [PlayerSetup; 2]) -> Update {
        let difficulty = self.config.difficulty;
        let max_rope = self.config.max_rope;
        self.start_match(players, difficulty, max_rope)
    }

    /// `menu → playing` (also restarts from any other phase).
    ///
    /// Scores, rope, round and streak are reset and the first problem is
    /// drawn at `difficulty`. `max_rope` below 1 is raised to 1.
    pub fn start_match(
        &mut self,
        players: [PlayerSetup; 2],
        difficulty: Option<u8>,
        max_rope: i32,
    ) -> Update {
        let max_rope = max_rope.max(1);
        let [first, second] = players;

        let mut state = MatchState::menu(max_rope);
        state.players = PlayerMap::from_array([
            Player::from_setup(PlayerId::ZERO, &first),
            Player::from_setup(PlayerId::ONE, &second),
        ]);
        state.phase = Phase::Playing;
        state.difficulty = difficulty;
        state.problem = Some(self.source.next_problem(difficulty));
        state.round_clock = self.config.round_seconds.map(Countdown::new);
        state.match_clock = self.config.match_seconds.map(Countdown::new);
        self.state = state;

        info!(
            difficulty = ?difficulty,
            max_rope,
            player0 = %self.state.players[PlayerId::ZERO].name,
            player1 = %self.state.players[PlayerId::ONE].name,
            "match started"
        );

        let mut events = Events::new();
        events.push(MatchEvent::MatchStarted {
            difficulty,
            max_rope,
        });
        events.push(self.round_started());
        self.update(events)
    }

    /// Evaluate an answer for the pending problem.
    ///
    /// Ignored when no answer is awaited, when numeric text is blank, when
    /// a choice index is out of range, or when the answer kind does not
    /// match the problem's input type.
    pub fn submit_answer(&mut self, answer: Answer) -> Update {
        if !self.state.is_awaiting_answer() {
            return self.update(Events::new());
        }
        let Some(problem) = self.state.problem.as_ref() else {
            return self.update(Events::new());
        };

        let correct = match (&answer, problem.input_type) {
            (Answer::Numeric(text), InputType::Numeric) if !text.trim().is_empty() => {
                Some(problem.check_numeric(text))
            }
            (Answer::Choice(index), InputType::MultipleChoice) => problem.check_choice(*index),
            _ => None,
        };

        match correct {
            Some(correct) => self.resolve(correct, false),
            None => {
                debug!(?answer, "ignored answer");
                self.update(Events::new())
            }
        }
    }

    pub fn submit_numeric(&mut self, text: &str) -> Update {
        self.submit_answer(Answer::numeric(text))
    }

    pub fn submit_choice(&mut self, index: usize) -> Update {
        self.submit_answer(Answer::Choice(index))
    }

    /// The per-round countdown expired: same as a wrong answer.
    pub fn force_timeout(&mut self) -> Update {
        if !self.state.is_awaiting_answer() {
            return self.update(Events::new());
        }
        self.resolve(false, true)
    }

    /// The match-wide countdown expired.
    ///
    /// Winner is the side the rope favours; a centred rope goes to the
    /// higher score, and equal scores go to player 0.
    pub fn force_match_end(&mut self) -> Update {
        if self.state.phase != Phase::Playing {
            return self.update(Events::new());
        }
        let winner = self.state.leader().unwrap_or_else(|| {
            let players = &self.state.players;
            if players[PlayerId::ZERO].score >= players[PlayerId::ONE].score {
                PlayerId::ZERO
            } else {
                PlayerId::ONE
            }
        });

        let mut events = Events::new();
        events.push(self.finish(winner, FinishReason::MatchClock));
        self.update(events)
    }

    /// `feedback → next round`. Called by the host after its delay.
    pub fn advance_round(&mut self) -> Update {
        if self.state.phase != Phase::Playing || self.state.round_phase != RoundPhase::Feedback {
            return self.update(Events::new());
        }

        let difficulty = self.state.difficulty;
        let state = &mut self.state;
        state.turn = state.turn.opponent();
        state.round += 1;
        state.feedback = None;
        state.round_phase = RoundPhase::AwaitingAnswer;
        if let Some(clock) = state.round_clock.as_mut() {
            clock.restart();
        }
        state.problem = Some(self.source.next_problem(difficulty));

        let mut events = Events::new();
        events.push(self.round_started());
        self.update(events)
    }

    /// Deliver `seconds` of elapsed time to both countdowns.
    ///
    /// The match clock runs for the whole `playing` phase; the round clock
    /// only while an answer is awaited.
    pub fn tick(&mut self, seconds: u32) -> Update {
        if self.state.phase != Phase::Playing {
            return self.update(Events::new());
        }

        let match_expired = self
            .state
            .match_clock
            .as_mut()
            .map_or(false, |clock| clock.tick(seconds));
        if match_expired {
            return self.force_match_end();
        }

        if self.state.round_phase == RoundPhase::AwaitingAnswer {
            let round_expired = self
                .state
                .round_clock
                .as_mut()
                .map_or(false, |clock| clock.tick(seconds));
            if round_expired {
                debug!(round = self.state.round, "round clock expired");
                return self.force_timeout();
            }
        }

        self.update(Events::new())
    }

    /// Back to the menu with default players.
    pub fn reset_match(&mut self) -> Update {
        self.state = MatchState::menu(self.config.max_rope.max(1));
        info!("match reset");
        let mut events = Events::new();
        events.push(MatchEvent::Reset);
        self.update(events)
    }

    fn round_started(&self) -> MatchEvent {
        MatchEvent::RoundStarted {
            round: self.state.round,
            player: self.state.turn,
            difficulty: self.state.problem.as_ref().map_or(0, |p| p.difficulty),
        }
    }

    fn resolve(&mut self, correct: bool, timed_out: bool) -> Update {
        let milestone = self.config.streak_milestone;
        let state = &mut self.state;
        let player = state.turn;

        let puller = if correct {
            state.players[player].score += 1;
            state.stats[player].record_correct();
            state.streak += 1;
            player
        } else {
            state.stats[player].record_wrong();
            state.streak = 0;
            player.opponent()
        };
        state.rope_position =
            (state.rope_position + puller.pull()).clamp(-state.max_rope, state.max_rope);

        let (difficulty, category, answer_markup) = state
            .problem
            .as_ref()
            .map(|p| (p.difficulty, p.category.clone(), p.answer_markup.clone()))
            .unwrap_or_default();

        state.history.push_back(RoundRecord {
            round: state.round,
            player,
            difficulty,
            category,
            correct,
            timed_out,
            rope_after: state.rope_position,
        });
        state.feedback = Some(Feedback {
            correct,
            timed_out,
            answer_markup,
            puller,
        });
        state.round_phase = RoundPhase::Feedback;

        debug!(
            round = state.round,
            %player,
            correct,
            timed_out,
            rope = state.rope_position,
            streak = state.streak,
            "answer resolved"
        );

        let mut events = Events::new();
        events.push(MatchEvent::AnswerResolved {
            round: state.round,
            player,
            correct,
            timed_out,
            rope_position: state.rope_position,
            streak: state.streak,
            streak_milestone: correct && state.streak >= milestone,
        });

        if state.rope_position <= -state.max_rope {
            events.push(self.finish(PlayerId::ZERO, FinishReason::RopeEnd));
        } else if state.rope_position >= state.max_rope {
            events.push(self.finish(PlayerId::ONE, FinishReason::RopeEnd));
        }

        self.update(events)
    }

    fn finish(&mut self, winner: PlayerId, reason: FinishReason) -> MatchEvent {
        let state = &mut self.state;
        state.phase = Phase::Finished;
        state.winner = Some(winner);
        state.finish_reason = Some(reason);

        info!(
            %winner,
            ?reason,
            rounds = state.round,
            rope = state.rope_position,
            "match finished"
        );

        MatchEvent::Finished(MatchSummary {
            winner,
            reason,
            rounds: state.round,
            rope_position: state.rope_position,
            players: state.players.clone(),
            stats: state.stats.clone(),
        })
    }
}

impl<S> std::fmt::Debug for TugMatch<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TugMatch")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
