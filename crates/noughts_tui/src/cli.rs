//! Command-line interface for noughts.

use clap::{Args, Parser, Subcommand};
use noughts::{Difficulty, GameMode};
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against a friend or a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play(PlayArgs),

    /// Play computer against computer without a UI and print the score
    Selfplay {
        /// Number of rounds to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Strategy playing X (random | optimal)
        #[arg(long, default_value = "optimal")]
        x: Difficulty,

        /// Strategy playing O (random | optimal)
        #[arg(long, default_value = "optimal")]
        o: Difficulty,

        /// Seed for the random strategy
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Overrides for the interactive game. Unset flags fall back to the config file.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayArgs {
    /// Game mode (pvp | pvai)
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// Opponent strength in pvai mode (random | optimal, or easy | hard)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Milliseconds the computer waits before moving
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the random strategy
    #[arg(long)]
    pub seed: Option<u64>,

    /// File receiving log output while the UI is running
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_play() {
        let cli = Cli::try_parse_from(["noughts"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("noughts.toml"));
    }

    #[test]
    fn test_play_flags() {
        let cli = Cli::try_parse_from([
            "noughts", "play", "--mode", "pvai", "--difficulty", "hard", "--delay-ms", "0",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Play(args)) => {
                assert_eq!(args.mode, Some(GameMode::PvAI));
                assert_eq!(args.difficulty, Some(Difficulty::Optimal));
                assert_eq!(args.delay_ms, Some(0));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_selfplay_defaults() {
        let cli = Cli::try_parse_from(["noughts", "selfplay", "--x", "random"]).unwrap();
        match cli.command {
            Some(Command::Selfplay { games, x, o, seed }) => {
                assert_eq!(games, 100);
                assert_eq!(x, Difficulty::Random);
                assert_eq!(o, Difficulty::Optimal);
                assert_eq!(seed, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_bad_mode_rejected() {
        assert!(Cli::try_parse_from(["noughts", "play", "--mode", "online"]).is_err());
    }
}
