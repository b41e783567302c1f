use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use conway_life::config::GameConfig;
use conway_life::game::random_grid;
use conway_life::ui::{instructions, Session};

/// Play Conway's Game of Life in the terminal.
///
/// The auto help short flag is disabled so `-h` can mean height, matching
/// the flags the banner documents; help stays available as `--help`.
#[derive(Parser)]
#[command(
    name = "conway-life",
    about = "Interactive Conway's Game of Life",
    disable_help_flag = true
)]
struct Cli {
    /// Board width in cells (minimum 4)
    #[arg(short = 'w', long)]
    width: Option<usize>,

    /// Board height in cells (minimum 4)
    #[arg(short = 'h', long)]
    height: Option<usize>,

    /// Seed for the random board setup (repeat a seed to replay a board)
    #[arg(short = 's', long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "life.toml")]
    config: PathBuf,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration and apply CLI overrides before validating, so bad
    // flag values are rejected before the board is built.
    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    writeln!(output, "{}", instructions())?;
    write!(output, "Hit return to start the game")?;
    output.flush()?;
    let mut pause = String::new();
    input.read_line(&mut pause)?;

    let grid = random_grid(config.width, config.height, seed as u64, config.spawn_rate)
        .context("setting up the board")?;

    writeln!(output, "Game setup with seed {seed}")?;
    writeln!(output)?;

    Session::new(grid, input, output).run()?;
    Ok(())
}
