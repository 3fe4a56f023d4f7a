//! Headless match simulator.
//!
//! Environment:
//! - `TUG_CONFIG_PATH`: TOML match config (defaults when unset)
//! - `TUG_SIM_MATCHES`: number of matches (default 100)
//! - `TUG_SIM_ACCURACY`: accuracy of both simulated players (default 0.7)
//! - `LOG_LEVEL`: tracing filter (default "info")
//! - `LOG_FORMAT`: "json" for structured logs, pretty otherwise

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tug_of_math::core::MatchConfig;
use tug_of_math::problems::difficulty_label;
use tug_of_math::sim::{SimConfig, SimulatedPlayer, Simulator};

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(key, %raw, "unparseable value, using default");
            default
        }),
        Err(_) => default,
    }
}

fn main() {
    init_tracing();

    let match_config = MatchConfig::load_from_env();
    let matches: usize = env_or("TUG_SIM_MATCHES", 100);
    let accuracy: f64 = env_or("TUG_SIM_ACCURACY", 0.7);
    let seed = match_config.seed.unwrap_or(0);

    info!(
        difficulty = ?match_config.difficulty,
        label = match_config.difficulty.and_then(difficulty_label).unwrap_or("Random"),
        matches,
        accuracy,
        feedback_delay_ms = match_config.feedback_delay_ms,
        "starting simulation"
    );

    let sim_config = SimConfig::default()
        .with_matches(matches)
        .with_players([SimulatedPlayer::new(accuracy), SimulatedPlayer::new(accuracy)])
        .with_seed(seed);
    let report = Simulator::new(match_config, sim_config).run();

    let mut categories: Vec<_> = report.by_category.iter().collect();
    categories.sort_by(|a, b| a.0.cmp(b.0));
    for (category, tally) in categories {
        info!(%category, answered = tally.answered, rate = tally.rate(), "category accuracy");
    }
    info!(
        player0_wins = report.wins[0],
        player1_wins = report.wins[1],
        clock_finishes = report.clock_finishes,
        mean_rounds = report.mean_rounds(),
        "report"
    );
}
