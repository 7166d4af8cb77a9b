//! Headless 2048 runner (default binary).
//!
//! Replays a scripted list of moves against a fresh board and prints the
//! final grid. Every intermediate board is logged at `info`, so
//! `RUST_LOG=trace` also shows each merged line and spawn.
//! This is a driver for reproducing seeded games, not an interactive front end.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use twenty48::core::Board;
use twenty48::types::{Direction, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

#[derive(Debug, Parser)]
#[command(author, version, about = "Replay scripted 2048 moves on a fresh board")]
struct Cli {
    /// Number of rows
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT, value_name = "N")]
    height: usize,

    /// Number of columns
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH, value_name = "N")]
    width: usize,

    /// Seed for reproducible spawns (OS entropy when omitted)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Moves to replay: compact letters ("udlr") or names ("up,left down")
    #[arg(long, default_value = "", value_name = "MOVES")]
    moves: String,

    /// Print the final board as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let moves = parse_moves(&cli.moves)?;

    let mut board = match cli.seed {
        Some(seed) => Board::with_seed(cli.height, cli.width, seed),
        None => Board::new(cli.height, cli.width),
    }
    .context("cannot create board")?;
    info!("start\n{}", board);

    for (turn, &direction) in moves.iter().enumerate() {
        let changed = board.move_tiles(direction);
        info!(
            "move {} {} ({})\n{}",
            turn + 1,
            direction.as_str(),
            if changed { "changed" } else { "no change" },
            board
        );
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&board.snapshot())?);
    } else {
        print!("{}", board);
    }
    Ok(())
}

/// Split a move script on commas/whitespace; tokens that are not a direction
/// name are read letter by letter.
fn parse_moves(script: &str) -> Result<Vec<Direction>> {
    let mut moves = Vec::new();

    for token in script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        if let Some(direction) = Direction::from_str(token) {
            moves.push(direction);
            continue;
        }

        for ch in token.chars() {
            let direction = Direction::from_str(&ch.to_string())
                .ok_or_else(|| anyhow!("unknown move {:?} in {:?}", ch, token))?;
            moves.push(direction);
        }
    }

    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_compact_letters() {
        let moves = parse_moves("udLR").unwrap();
        assert_eq!(
            moves,
            vec![Direction::Up, Direction::Down, Direction::Left, Direction::Right]
        );
    }

    #[test]
    fn parse_names_and_separators() {
        let moves = parse_moves("up, left  down,right").unwrap();
        assert_eq!(
            moves,
            vec![Direction::Up, Direction::Left, Direction::Down, Direction::Right]
        );
    }

    #[test]
    fn parse_empty_script() {
        assert!(parse_moves("").unwrap().is_empty());
        assert!(parse_moves(" , ").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_unknown_letter() {
        let err = parse_moves("ux").unwrap_err();
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["twenty48"]);
        assert_eq!(cli.height, DEFAULT_GRID_HEIGHT);
        assert_eq!(cli.width, DEFAULT_GRID_WIDTH);
        assert_eq!(cli.seed, None);
        assert!(!cli.json);
    }
}
