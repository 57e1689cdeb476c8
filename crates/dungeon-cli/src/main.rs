//! Prints a BSP dungeon as ASCII.
//!
//! Stdout carries the map and nothing else; logs and statistics go to stderr.

use std::io::{self, Write};
use std::process::ExitCode;

use bsp_dungeon::{
    Dungeon, DungeonConfig, DungeonError, RatioMode, DEFAULT_FLOOR_CHAR, DEFAULT_HEIGHT,
    DEFAULT_MIN_ROOM_SIZE, DEFAULT_WALL_CHAR, DEFAULT_WIDTH,
};
use clap::{ArgAction, Parser};
use log::{error, LevelFilter};

/// Generate a dungeon by binary space partitioning and print it
#[derive(Parser, Debug)]
#[command(name = "bsp-dungeon")]
#[command(version, about, long_about = None)]
struct Args {
    /// Grid columns
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Grid rows
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Minimum leaf and room dimension
    #[arg(short, long, default_value_t = DEFAULT_MIN_ROOM_SIZE)]
    min_room_size: usize,

    /// Symbol for unexcavated cells
    #[arg(long, default_value_t = DEFAULT_WALL_CHAR)]
    wall: char,

    /// Symbol for excavated cells
    #[arg(long, default_value_t = DEFAULT_FLOOR_CHAR)]
    floor: char,

    /// Seed for reproducible output (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Measure aspect ratios with real division instead of truncating
    #[arg(long)]
    exact_ratio: bool,

    /// Print generation statistics to stderr
    #[arg(long)]
    stats: bool,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> DungeonConfig {
        let mut config = DungeonConfig::default()
            .with_size(self.width, self.height)
            .with_min_room_size(self.min_room_size)
            .with_glyphs(self.wall, self.floor);
        config.seed = self.seed;
        if self.exact_ratio {
            config = config.with_ratio_mode(RatioMode::Exact);
        }
        config
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG, when set, takes precedence over -v.
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let dungeon = match Dungeon::generate(&args.config()) {
        Ok(dungeon) => dungeon,
        Err(DungeonError::Config(err)) => {
            error!("{err}");
            return ExitCode::from(2);
        }
    };

    let mut out = io::stdout().lock();
    if let Err(err) = write!(out, "{}", dungeon.ascii()).and_then(|()| out.flush()) {
        error!("failed to write map: {err}");
        return ExitCode::FAILURE;
    }

    if args.stats {
        eprintln!("{}", dungeon.stats());
    }

    ExitCode::SUCCESS
}
