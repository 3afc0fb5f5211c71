#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};
#[cfg(feature = "std")]
use seabattle::{init_logging, Board, Coord, ShotResult, BOARD_SIZE};
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Build the sample fleet, fire a few shots and print the board.
    Demo,
    /// Sink a random fleet by firing at every cell in random order.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
const DEMO_FLEET: [((i32, i32), (i32, i32)); 10] = [
    ((0, 0), (0, 0)),
    ((0, 2), (0, 2)),
    ((0, 4), (0, 4)),
    ((0, 6), (0, 6)),
    ((2, 0), (2, 1)),
    ((2, 3), (2, 4)),
    ((2, 6), (2, 7)),
    ((4, 0), (4, 2)),
    ((4, 4), (4, 6)),
    ((6, 0), (6, 3)),
];

#[cfg(feature = "std")]
const DEMO_SHOTS: [(i32, i32); 4] = [(0, 0), (9, 9), (2, 0), (2, 1)];

#[cfg(feature = "std")]
fn demo() -> anyhow::Result<()> {
    let mut board = Board::new(DEMO_FLEET)?;
    for shot in DEMO_SHOTS {
        let result = board.fire(shot);
        println!("fire {}: {}", Coord::from(shot), result);
    }
    print!("{}", board.render());
    Ok(())
}

#[cfg(feature = "std")]
fn sim(seed: Option<u64>) -> anyhow::Result<()> {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::random(&mut rng)?;
    log::info!("simulating with seed {}", seed);

    let n = BOARD_SIZE as i32;
    let mut targets: Vec<Coord> = (0..n)
        .flat_map(|row| (0..n).map(move |col| Coord::new(row, col)))
        .collect();
    targets.shuffle(&mut rng);

    let (mut shots, mut hits, mut sunk) = (0usize, 0usize, 0usize);
    for target in targets {
        if board.all_sunk() {
            break;
        }
        shots += 1;
        match board.fire(target) {
            ShotResult::Miss => {}
            ShotResult::Hit => hits += 1,
            ShotResult::Sunk => {
                hits += 1;
                sunk += 1;
            }
        }
    }

    let summary = json!({
        "seed": seed,
        "shots": shots,
        "hits": hits,
        "misses": shots - hits,
        "sunk": sunk,
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => demo(),
        Commands::Sim { seed } => sim(seed),
    }
}
