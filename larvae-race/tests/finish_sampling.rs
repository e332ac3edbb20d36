//! Statistical acceptance: the sampled finish-turn CDF must track the
//! analytic engine within a loose tolerance at a fixed sample size.

use larvae_race::config::RaceConfig;
use larvae_race::engine::DistributionEngine;
use larvae_race::sampling::FinishSample;

const SAMPLE_SIZE: usize = 5000;
const TOLERANCE: f64 = 0.025;

#[test]
fn empirical_cdf_tracks_the_engine() {
    let cfg = RaceConfig::default();
    let mut engine = DistributionEngine::new(&cfg);
    let sample = FinishSample::collect_seeded(&cfg, 1337, SAMPLE_SIZE);
    for turn in 0..=cfg.length {
        let analytic = engine.win_at_turn(turn);
        let observed = sample.win_by_turn(turn);
        assert!(
            (observed - analytic).abs() <= TOLERANCE,
            "turn {turn}: observed {observed:.4} vs analytic {analytic:.4}"
        );
    }
}

#[test]
fn sampler_respects_alternate_tunings() {
    let cfg = RaceConfig {
        walk_max: 2,
        length: 8,
        players: 3,
    };
    let mut engine = DistributionEngine::new(&cfg);
    let sample = FinishSample::collect_seeded(&cfg, 42, SAMPLE_SIZE);
    for turn in 0..=cfg.length {
        let analytic = engine.win_at_turn(turn);
        let observed = sample.win_by_turn(turn);
        assert!(
            (observed - analytic).abs() <= TOLERANCE,
            "turn {turn}: observed {observed:.4} vs analytic {analytic:.4}"
        );
    }
}
