use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use crate::scramble::DEFAULT_SCRAMBLE_MOVES;

pub const DEFAULT_SIDE: u16 = 4;
pub const DEFAULT_FPS: u32 = 60;

#[derive(Debug, Parser)]
#[command(name = "picture-slider", version, about = "Sliding tile puzzle in the terminal")]
pub struct Cli {
    /// Number of tiles along each side of the board
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_SIDE,
        value_parser = clap::value_parser!(u16).range(2..=16)
    )]
    pub side: u16,

    /// Random moves the computer player attempts before you start
    #[arg(short, long = "scramble", default_value_t = DEFAULT_SCRAMBLE_MOVES)]
    pub scramble_moves: usize,

    /// Seed for a reproducible scramble
    #[arg(long)]
    pub seed: Option<u64>,

    /// Frames per second of the scramble animation
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Read moves from stdin line by line instead of taking over the terminal
    #[arg(long)]
    pub plain: bool,

    /// Write log records to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
