use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use larvae_race::constants::OUTPUT_SIG_DIGITS;
use larvae_race::{DistributionEngine, FinishSample, RaceConfig, format_sig, run_race};

#[derive(Debug, Parser)]
#[command(name = "larvae-race", version)]
#[command(about = "Probability that the first larva wins a fixed-length track race")]
struct Args {
    /// Optional JSON config file; the flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Track length (number of interior positions)
    #[arg(long)]
    length: Option<usize>,

    /// Number of larvae in the race
    #[arg(long)]
    players: Option<u32>,

    /// Maximum advance per turn
    #[arg(long)]
    walk_max: Option<usize>,

    /// Cross-check the engine against this many Monte Carlo runs
    #[arg(long)]
    samples: Option<usize>,

    /// RNG seed for the cross-check
    #[arg(long, default_value_t = 1337)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cfg = resolve_config(&args)?;
    let report = run_race(&cfg).context("invalid race configuration")?;
    log::debug!(
        "evaluated {} turns for {} players",
        report.contributions.len(),
        cfg.players
    );

    println!(
        "Probability that the first larva wins: {}",
        format_sig(report.probability, OUTPUT_SIG_DIGITS)
    );

    if let Some(samples) = args.samples {
        cross_check(&cfg, args.seed, samples);
    }
    Ok(())
}

fn resolve_config(args: &Args) -> Result<RaceConfig> {
    let mut cfg = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&raw).context("parsing race config")?
        }
        None => RaceConfig::default(),
    };
    if let Some(length) = args.length {
        cfg.length = length;
    }
    if let Some(players) = args.players {
        cfg.players = players;
    }
    if let Some(walk_max) = args.walk_max {
        cfg.walk_max = walk_max;
    }
    Ok(cfg)
}

/// Compare the sampled single-larva finish CDF against the analytic engine
/// and report the worst gap across turns.
fn cross_check(cfg: &RaceConfig, seed: u64, samples: usize) {
    let sample = FinishSample::collect_seeded(cfg, seed, samples);
    let mut engine = DistributionEngine::new(cfg);
    let worst_gap = (0..=cfg.length)
        .map(|turn| (sample.win_by_turn(turn) - engine.win_at_turn(turn)).abs())
        .fold(0.0_f64, f64::max);
    let verdict = if worst_gap <= 0.03 {
        "ok".green()
    } else {
        "drift".red()
    };
    println!(
        "Monte Carlo cross-check ({} runs, seed {seed}): max CDF gap {} [{verdict}]",
        sample.samples(),
        format_sig(worst_gap, OUTPUT_SIG_DIGITS)
    );
}
