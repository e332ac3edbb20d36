//! Larvae Race Engine
//!
//! Analytic odds for a race of identical larvae along a fixed track. Each
//! turn a larva advances 1 to `walk_max` positions with equal probability;
//! the track end is absorbing. The crate evolves the exact single-larva
//! position distribution turn by turn, derives the cumulative finish
//! probability from it, and aggregates across the independent field to get
//! the probability that the first larva is the first to finish.

pub mod config;
pub mod constants;
pub mod engine;
pub mod numbers;
pub mod race;
pub mod sampling;

// Re-export commonly used types
pub use config::{ConfigError, RaceConfig};
pub use engine::DistributionEngine;
pub use numbers::format_sig;
pub use race::{TurnContribution, first_win_probability, turn_contributions};
pub use sampling::FinishSample;

/// Everything one race evaluation produces.
#[derive(Debug, Clone)]
pub struct RaceReport {
    pub config: RaceConfig,
    /// Aggregate first-win probability over turns `1..=length`.
    pub probability: f64,
    /// Per-turn terms behind `probability`.
    pub contributions: Vec<TurnContribution>,
}

/// Validate `cfg` and run the full evaluation.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the configuration is degenerate; the
/// computation itself has no failure modes.
pub fn run_race(cfg: &RaceConfig) -> Result<RaceReport, ConfigError> {
    cfg.validate()?;
    let mut engine = DistributionEngine::new(cfg);
    let contributions = turn_contributions(&mut engine, cfg);
    let probability = contributions.iter().map(|c| c.contribution).sum();
    Ok(RaceReport {
        config: *cfg,
        probability,
        contributions,
    })
}
