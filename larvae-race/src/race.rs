//! Race aggregation across independent larvae.

use crate::config::RaceConfig;
use crate::engine::DistributionEngine;

/// One turn's share of the first larva's overall win probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnContribution {
    /// Turn index, `1..=length`.
    pub turn: usize,
    /// Cumulative probability that one larva has finished by this turn.
    pub finished_by_turn: f64,
    /// This turn's term: `finished_by_turn * (1 - win(turn-1))^players`.
    pub contribution: f64,
}

/// Per-turn breakdown of the aggregation over `1..=length`.
///
/// The term at turn `t` multiplies the *cumulative* finish probability at
/// `t` by the probability that none of the `players` larvae had finished by
/// `t - 1`. Using the cumulative value (rather than the increment
/// `win(t) - win(t-1)`) means runs where the first larva finished strictly
/// before `t` contribute to several terms; this matches the reference model
/// and is kept deliberately for output parity.
pub fn turn_contributions(
    engine: &mut DistributionEngine,
    cfg: &RaceConfig,
) -> Vec<TurnContribution> {
    let players = i32::try_from(cfg.players).unwrap_or(i32::MAX);
    (1..=cfg.length)
        .map(|turn| {
            let finished_by_turn = engine.win_at_turn(turn);
            let nobody_before = 1.0 - engine.win_at_turn(turn - 1);
            let contribution = finished_by_turn * nobody_before.powi(players);
            log::debug!(
                "turn {turn}: finished_by={finished_by_turn:.6} contribution={contribution:.6}"
            );
            TurnContribution {
                turn,
                finished_by_turn,
                contribution,
            }
        })
        .collect()
}

/// Probability that the first larva is the first of the field to finish,
/// summed over turns `1..=length`.
pub fn first_win_probability(engine: &mut DistributionEngine, cfg: &RaceConfig) -> f64 {
    turn_contributions(engine, cfg)
        .iter()
        .map(|c| c.contribution)
        .sum()
}
