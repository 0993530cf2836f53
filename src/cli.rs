//! Command-line interface for noughts.

use clap::{Parser, ValueEnum};
use noughts::Mode;

/// Noughts - terminal tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Opponent mode
    #[arg(long, value_enum, default_value_t = ModeArg::VsComputer)]
    pub mode: ModeArg,

    /// Seed for the computer's move selection (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Game mode as selected on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ModeArg {
    /// Two humans at one keyboard
    TwoPlayers,
    /// Human (X) vs random-move computer (O)
    VsComputer,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::TwoPlayers => Mode::TwoPlayers,
            ModeArg::VsComputer => Mode::VsComputer,
        }
    }
}
