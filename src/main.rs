use clap::Parser;
use env_logger::{Target, TimestampPrecision};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io;

use picture_slider::config::Cli;
use picture_slider::terminal::{run_interactive, run_plain};
use picture_slider::{AppError, Puzzle, RandomDirections, Session};

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let puzzle = Puzzle::new(usize::from(cli.side))?;
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(
        "{0}x{0} board, {1} scramble attempts, seed {2:?}",
        cli.side, cli.scramble_moves, cli.seed
    );

    let mut session = Session::new(puzzle, cli.scramble_moves, RandomDirections::new(rng));

    if cli.plain {
        run_plain(&mut session, io::stdin().lock(), io::stdout().lock())?;
    } else {
        run_interactive(&mut session, cli.fps)?;
    }
    Ok(())
}

fn init_logging(cli: &Cli) -> Result<(), AppError> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(cli.log_level())
        .format_timestamp(Some(TimestampPrecision::Millis));

    if let Some(path) = &cli.log_file {
        let file = File::create(path).map_err(|source| AppError::LogFile {
            path: path.clone(),
            source,
        })?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}
