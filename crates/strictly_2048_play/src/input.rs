//! Translates typed lines into game commands.

use strictly_2048::{Direction, ParseDirectionError};

/// A command typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Slide tiles.
    Move(Direction),
    /// Start a new game, keeping the best score.
    Restart,
    /// Leave the session.
    Quit,
}

/// Parses one input line.
///
/// Accepts the WASD keys, `r`/`restart`, `q`/`quit`, and direction names in
/// any case.
pub fn parse_command(line: &str) -> Result<Command, ParseDirectionError> {
    let line = line.trim();
    let command = match line.to_ascii_lowercase().as_str() {
        "w" => Command::Move(Direction::Up),
        "a" => Command::Move(Direction::Left),
        "s" => Command::Move(Direction::Down),
        "d" => Command::Move(Direction::Right),
        "r" | "restart" => Command::Restart,
        "q" | "quit" => Command::Quit,
        _ => Command::Move(line.parse()?),
    };
    Ok(command)
}

/// Parses a move list separated by commas and/or whitespace.
pub fn parse_moves(text: &str) -> Result<Vec<Direction>, ParseDirectionError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}
