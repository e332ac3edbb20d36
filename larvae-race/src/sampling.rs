//! Monte Carlo cross-check for the analytic engine.
//!
//! Samples single-larva runs with a seeded RNG and builds the empirical
//! finish-turn distribution. The aggregate race formula is a modeling
//! approximation with no corresponding sampled event, so the cross-check
//! targets the one quantity both sides define identically: the probability
//! that a single larva has finished by a given turn.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::RaceConfig;
use crate::numbers::usize_to_f64;

/// Empirical single-larva finish statistics from `samples` independent runs.
#[derive(Debug, Clone)]
pub struct FinishSample {
    /// `finishes_by[t]` = number of runs that finished on or before turn `t`.
    finishes_by: Vec<usize>,
    samples: usize,
}

impl FinishSample {
    /// Run `samples` independent larvae to the end of the track.
    ///
    /// `horizon` caps how many turns are tracked; with `walk_max >= 1` every
    /// run finishes within `length` turns, so `cfg.length` is always enough.
    pub fn collect<R: Rng>(cfg: &RaceConfig, rng: &mut R, samples: usize) -> Self {
        let horizon = cfg.length;
        let mut finishes_at = vec![0usize; horizon + 1];
        for _ in 0..samples {
            let turn = run_one(cfg, rng);
            finishes_at[turn.min(horizon)] += 1;
        }
        // Prefix sums turn the per-turn counts into a CDF.
        let mut finishes_by = finishes_at;
        for t in 1..=horizon {
            finishes_by[t] += finishes_by[t - 1];
        }
        Self {
            finishes_by,
            samples,
        }
    }

    /// Same as [`FinishSample::collect`] with a fixed-seed [`SmallRng`].
    #[must_use]
    pub fn collect_seeded(cfg: &RaceConfig, seed: u64, samples: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::collect(cfg, &mut rng, samples)
    }

    /// Empirical probability that a larva has finished by `turn`.
    #[must_use]
    pub fn win_by_turn(&self, turn: usize) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        let turn = turn.min(self.finishes_by.len() - 1);
        usize_to_f64(self.finishes_by[turn]) / usize_to_f64(self.samples)
    }

    /// Number of runs behind this sample.
    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }
}

/// Advance one larva until it leaves the track; returns the finishing turn.
fn run_one<R: Rng>(cfg: &RaceConfig, rng: &mut R) -> usize {
    let mut position = 0usize;
    let mut turn = 0usize;
    while position < cfg.length {
        position += rng.gen_range(1..=cfg.walk_max);
        turn += 1;
    }
    turn
}
