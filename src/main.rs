use std::io;

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use salvo::{format_stats, init_logging, run_interactive, sweep, GameEngine};

#[derive(Parser)]
#[command(author, version, about = "Single-player Battleship in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively against a randomly placed fleet.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Start with the remaining ships revealed (test mode)")]
        reveal: bool,
    },
    /// Fire at every cell in order and report how many shots it took.
    Sweep {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print the final statistics as JSON")]
        json: bool,
    },
}

fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            log::info!("using fixed seed {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, reveal } => {
            let mut engine = GameEngine::new(seeded_rng(seed))?;
            if reveal {
                engine.toggle_reveal();
            }
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_interactive(&mut engine, stdin.lock(), &mut stdout)?;
        }
        Commands::Sweep { seed, json } => {
            let mut engine = GameEngine::new(seeded_rng(seed))?;
            let stats = sweep(&mut engine)?;
            if json {
                println!("{}", serde_json::to_string(&stats)?);
            } else {
                println!("{}", format_stats(&stats));
            }
        }
    }
    Ok(())
}
