//! Single-larva position distribution over discrete turns.
//!
//! The engine evolves the probability mass function of one larva's position
//! along the track. Interior positions are `0..length`; one extra slot at
//! index `length` holds the mass absorbed at the end of the track. The
//! recurrence is filled bottom-up and cached per turn, so asking for turn
//! `t` costs `O(length * walk_max)` once and nothing afterwards.

use crate::config::RaceConfig;
use crate::numbers::usize_to_f64;

/// Memoized forward recurrence for one larva's position distribution.
///
/// Distributions are cached per turn and never recomputed; slices handed out
/// for the same turn are bit-identical across calls.
#[derive(Debug, Clone)]
pub struct DistributionEngine {
    walk_max: usize,
    length: usize,
    /// `cache[t]` is the distribution at turn `t`, length `length + 1`.
    cache: Vec<Vec<f64>>,
}

impl DistributionEngine {
    /// Build an engine for the given (validated) configuration and seed the
    /// turn-0 distribution: all mass at interior position 0.
    #[must_use]
    pub fn new(cfg: &RaceConfig) -> Self {
        let mut start = vec![0.0; cfg.length + 1];
        start[0] = 1.0;
        Self {
            walk_max: cfg.walk_max,
            length: cfg.length,
            cache: vec![start],
        }
    }

    /// Position distribution at `turn`, as a slice of `length + 1` values.
    ///
    /// Index `x < length` is the probability of occupying interior position
    /// `x`; the final index is the probability of having already finished.
    /// Every returned slice sums to 1.
    pub fn pos_at_turn(&mut self, turn: usize) -> &[f64] {
        self.fill_to(turn);
        &self.cache[turn]
    }

    /// Probability that the larva has reached the end by `turn`.
    ///
    /// Non-decreasing in `turn` (the end is absorbing); 0.0 at turn 0.
    pub fn win_at_turn(&mut self, turn: usize) -> f64 {
        self.fill_to(turn);
        self.cache[turn][self.length]
    }

    /// Number of turns currently cached (turn 0 included).
    #[must_use]
    pub fn cached_turns(&self) -> usize {
        self.cache.len()
    }

    /// Extend the cache bottom-up through `turn`. Each missing turn is
    /// derived from its predecessor exactly once.
    fn fill_to(&mut self, turn: usize) {
        while self.cache.len() <= turn {
            let prev = &self.cache[self.cache.len() - 1];
            let mut curr = vec![0.0; self.length + 1];
            let step_weight = 1.0 / usize_to_f64(self.walk_max);
            for x in 0..self.length {
                // P(x) = sum of P(y) over the walk_max positions behind x,
                // clipped at the start of the track.
                let from = x.saturating_sub(self.walk_max);
                curr[x] = prev[from..x].iter().sum::<f64>() * step_weight;
            }
            // The complement folds in both the mass absorbed on earlier
            // turns and the mass that overshot the track on this one.
            let interior: f64 = curr[..self.length].iter().sum();
            curr[self.length] = 1.0 - interior;
            log::trace!(
                "turn {}: absorbed mass {:.6}",
                self.cache.len(),
                curr[self.length]
            );
            self.cache.push(curr);
        }
    }
}
