//! Bingo simulation CLI.
//!
//! Runs a single ad-hoc simulation by default, or a full parameter-grid
//! sweep with `--sweep`. Sweep results are persisted to a sled store and
//! can be reviewed afterwards with `--history`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use bingo_core::GameConfig;
use bingo_sim::{report, run_game, run_sweep, SimulationStore, SweepGrid};

/// Bingo board simulation - deterministic win-rate sweeps
#[derive(Parser, Debug)]
#[command(name = "bingo-sim")]
#[command(about = "Simulate Bingo boards against random winning draws", long_about = None)]
struct Args {
    /// Master seed for determinism
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Board edge length
    #[arg(short, long, default_value = "6")]
    board_size: usize,

    /// Numbers are drawn from 1..=pool_size
    #[arg(short, long, default_value = "200")]
    pool_size: u32,

    /// Boards to generate per run
    #[arg(short, long, default_value = "250")]
    num_boards: u32,

    /// Winning numbers drawn per run
    #[arg(short, long, default_value = "60")]
    winning_size: u32,

    /// Repetitions of the sweep grid
    #[arg(short, long, default_value = "20")]
    reps: u32,

    /// Run the full parameter-grid sweep instead of a single simulation
    #[arg(long)]
    sweep: bool,

    /// Path of the result store
    #[arg(long, default_value = "output_data/bingo_simulations.sled")]
    db: PathBuf,

    /// Print the N most recent stored records after running
    #[arg(long, default_value = "0")]
    history: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// JSON output instead of tables
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    // An unknown log level is fatal before anything else runs
    let level: Level = args.log_level.parse().unwrap_or_else(|_| {
        eprintln!("Error: unknown log level '{}'", args.log_level);
        eprintln!("Available levels: trace, debug, info, warn, error");
        process::exit(1);
    });
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    if args.sweep {
        run_sweep_mode(&args, &mut rng);
    } else {
        run_single_mode(&args, &mut rng);
    }

    if args.history > 0 {
        let store = open_store(&args.db);
        match store.query(args.history) {
            Ok(records) => print!("{}", report::render_table(&records)),
            Err(e) => {
                error!("Failed to read history: {}", e);
                process::exit(1);
            }
        }
    }
}

fn run_sweep_mode(args: &Args, rng: &mut ChaCha8Rng) {
    let store = open_store(&args.db);
    let grid = SweepGrid {
        board_size: args.board_size,
        ..SweepGrid::default()
    };

    info!(seed = args.seed, reps = args.reps, "starting sweep");

    let records = run_sweep(&grid, args.reps, rng, &store).unwrap_or_else(|e| {
        error!("Sweep aborted: {}", e);
        process::exit(1);
    });

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records).unwrap());
    } else {
        print!("{}", report::render_table(&records));
    }
}

fn run_single_mode(args: &Args, rng: &mut ChaCha8Rng) {
    let config = GameConfig {
        board_size: args.board_size,
        number_pool_size: args.pool_size,
        num_boards: args.num_boards,
        winning_number_size: args.winning_size,
    };

    let winning_boards_count = run_game(&config, rng).unwrap_or_else(|e| {
        error!("Simulation failed: {}", e);
        process::exit(1);
    });

    if args.json {
        let summary = serde_json::json!({
            "board_size": config.board_size,
            "number_pool_size": config.number_pool_size,
            "num_boards": config.num_boards,
            "winning_number_size": config.winning_number_size,
            "winning_boards_count": winning_boards_count,
        });
        println!("{}", serde_json::to_string_pretty(&summary).unwrap());
    } else {
        info!(winning_boards_count, "done");
    }
}

fn open_store(path: &PathBuf) -> SimulationStore {
    SimulationStore::open(path).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    })
}
