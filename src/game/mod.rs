//! Tug-of-war match state machine.
//!
//! Consumes problems from a `ProblemSource`, alternates turns, moves the
//! rope and detects the end of the match. Timing and presentation belong
//! to the host: it reports elapsed time with `tick` and calls
//! `advance_round` when it has finished showing feedback.

pub mod clock;
pub mod engine;
pub mod event;
pub mod state;

pub use clock::Countdown;
pub use engine::{Answer, TugMatch};
pub use event::{Events, MatchEvent, MatchSummary, Update};
pub use state::{Feedback, FinishReason, MatchState, Phase, RoundPhase, RoundRecord};
