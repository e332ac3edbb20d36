//! Known-value regression against an independent reimplementation of the
//! whole pipeline, so the engine and aggregator cannot drift together.

use larvae_race::numbers::format_sig;
use larvae_race::{RaceConfig, run_race};

/// Straight-line reimplementation: no cache, no engine types, just the
/// recurrence and the summation written out directly.
fn reference_probability(walk_max: usize, length: usize, players: u32) -> f64 {
    let mut distributions: Vec<Vec<f64>> = Vec::with_capacity(length + 1);
    let mut start = vec![0.0; length + 1];
    start[0] = 1.0;
    distributions.push(start);
    for _ in 1..=length {
        let prev = &distributions[distributions.len() - 1];
        let mut curr = vec![0.0; length + 1];
        for x in 0..length {
            let mut acc = 0.0;
            for y in x.saturating_sub(walk_max)..x {
                acc += prev[y];
            }
            curr[x] = acc / walk_max as f64;
        }
        curr[length] = 1.0 - curr[..length].iter().sum::<f64>();
        distributions.push(curr);
    }
    let win = |t: usize| distributions[t][length];
    (1..=length)
        .map(|t| win(t) * (1.0 - win(t - 1)).powi(players as i32))
        .sum()
}

#[test]
fn reference_constants_reproduce_the_expected_odds() {
    let cfg = RaceConfig::default();
    let report = run_race(&cfg).unwrap();
    let expected = reference_probability(cfg.walk_max, cfg.length, cfg.players);
    assert!(
        (report.probability - expected).abs() < 1e-12,
        "engine {} vs reference {}",
        report.probability,
        expected
    );
    assert_eq!(format_sig(report.probability, 2), format_sig(expected, 2));
}

#[test]
fn parity_holds_across_other_tunings() {
    for (walk_max, length, players) in [(2, 10, 3), (3, 15, 1), (4, 20, 6), (1, 5, 2)] {
        let cfg = RaceConfig {
            walk_max,
            length,
            players,
        };
        let report = run_race(&cfg).unwrap();
        let expected = reference_probability(walk_max, length, players);
        assert!(
            (report.probability - expected).abs() < 1e-12,
            "mismatch for walk_max={walk_max} length={length} players={players}"
        );
    }
}

#[test]
fn printed_line_matches_the_reference_format() {
    let cfg = RaceConfig::default();
    let report = run_race(&cfg).unwrap();
    let line = format!(
        "Probability that the first larva wins: {}",
        format_sig(report.probability, 2)
    );
    let expected = format!(
        "Probability that the first larva wins: {}",
        format_sig(
            reference_probability(cfg.walk_max, cfg.length, cfg.players),
            2
        )
    );
    assert_eq!(line, expected);
}
