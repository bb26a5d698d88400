//! Tournament CLI
//!
//! Play the computer opponent against itself to compare difficulty levels.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use opponent::{Difficulty, Opponent};
use tournament::{MatchConfig, MatchResult, MatchRunner, TournamentResults};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tournament", about = "Self-play runner for the computer opponent")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play one match between two difficulty levels
    Match {
        player1: Difficulty,
        player2: Difficulty,
        #[command(flatten)]
        opts: MatchOpts,
    },
    /// Play every difficulty against every other one
    Ladder {
        #[command(flatten)]
        opts: MatchOpts,
    },
}

#[derive(Args)]
struct MatchOpts {
    /// Games per match
    #[arg(short, long, default_value_t = 10)]
    games: u32,
    /// Plies before a game is abandoned
    #[arg(long, default_value_t = 400)]
    max_moves: u32,
    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
    /// Write results as JSON
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Log every game
    #[arg(short, long)]
    verbose: bool,
}

impl MatchOpts {
    fn config(&self) -> MatchConfig {
        MatchConfig {
            num_games: self.games,
            max_moves: self.max_moves,
            verbose: self.verbose,
            ..Default::default()
        }
    }

    fn player(&self, difficulty: Difficulty, salt: u64) -> Opponent {
        match self.seed {
            Some(seed) => Opponent::seeded(difficulty, seed.wrapping_add(salt)),
            None => Opponent::new(difficulty),
        }
    }
}

fn run_match(
    results: &mut TournamentResults,
    opts: &MatchOpts,
    player1: Difficulty,
    player2: Difficulty,
) -> MatchResult {
    let mut p1 = opts.player(player1, 1);
    let mut p2 = opts.player(player2, 2);

    println!("--- {player1} vs {player2} ---");
    let result = MatchRunner::new(opts.config()).run_match(&mut p1, &mut p2);
    println!(
        "Result: {}-{}-{} (Score: {:.1}%, {} plies)",
        result.wins,
        result.losses,
        result.unfinished,
        result.score() * 100.0,
        result.plies
    );

    results.add_match(&player1.to_string(), &player2.to_string(), result.clone());
    result
}

fn finish(results: &TournamentResults, out: Option<&PathBuf>) -> anyhow::Result<()> {
    println!();
    println!("{}", results.generate_report());
    if let Some(path) = out {
        results
            .save(path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        println!("Results written to {}", path.display());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Match {
            player1,
            player2,
            opts,
        } => {
            let mut results =
                TournamentResults::new(&format!("{player1} vs {player2}"), opts.config());
            run_match(&mut results, &opts, player1, player2);
            finish(&results, opts.out.as_ref())
        }
        Command::Ladder { opts } => {
            let mut results = TournamentResults::new("Difficulty ladder", opts.config());
            for (i, &p1) in Difficulty::ALL.iter().enumerate() {
                for &p2 in &Difficulty::ALL[i + 1..] {
                    run_match(&mut results, &opts, p1, p2);
                }
            }
            finish(&results, opts.out.as_ref())
        }
    }
}
