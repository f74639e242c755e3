//! Line-oriented play loop.

use crate::input::{Command, parse_command};
use std::io::{BufRead, Write};
use strictly_2048::{BestScoreStore, Game, GameState, GameStatus, RandomSource};
use tracing::{debug, info, instrument};

/// Drives a game from `input` until quit or end of input, rendering to `output`.
///
/// Returns the state the session ended on.
#[instrument(skip_all)]
pub fn run<R, S, I, O>(game: &mut Game<R, S>, input: I, mut output: O) -> std::io::Result<GameState>
where
    R: RandomSource,
    S: BestScoreStore,
    I: BufRead,
    O: Write,
{
    let mut state = game.new_game();
    render(&mut output, &state)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}. Use w/a/s/d, r or q.", e)?;
                continue;
            }
        };
        debug!(?command, "Command received");

        match command {
            Command::Quit => break,
            Command::Restart => {
                info!(score = state.score(), "Restarting");
                state = game.restart(state);
                render(&mut output, &state)?;
            }
            Command::Move(direction) => {
                let finished = state.status().is_terminal();
                let (next, changed) = game.apply_move(state, direction).into_parts();
                state = next;

                if finished {
                    writeln!(output, "Game finished. Press r to restart or q to quit.")?;
                    continue;
                }
                if !changed {
                    writeln!(output, "Nothing moved.")?;
                    continue;
                }

                render(&mut output, &state)?;
                match state.status() {
                    GameStatus::Won => announce(&mut output, "You reached 2048!", &state)?,
                    GameStatus::Over => announce(&mut output, "No moves left.", &state)?,
                    GameStatus::Playing => {}
                }
            }
        }
    }

    output.flush()?;
    Ok(state)
}

fn render<O: Write>(output: &mut O, state: &GameState) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", state.board().display())?;
    writeln!(output, "Score: {}  Best: {}", state.score(), state.best())
}

fn announce<O: Write>(output: &mut O, headline: &str, state: &GameState) -> std::io::Result<()> {
    let summary = state.summary();
    writeln!(output, "{}", headline)?;
    writeln!(
        output,
        "Final score {} with highest tile {} after {} moves. Press r to play again.",
        summary.score(),
        summary.highest_tile(),
        summary.moves()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use strictly_2048::{FixedSequence, MemoryStore};

    fn play(script: &str) -> (GameState, String) {
        // Starting tiles: a 4 at (0,0) and a 2 at (0,1).
        let mut game = Game::new(FixedSequence::new([0.0, 0.95, 0.0, 0.0]), MemoryStore::new());
        let mut out = Vec::new();
        let state = run(&mut game, Cursor::new(script), &mut out).unwrap();
        (state, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_blocked_move_is_reported() {
        let (state, out) = play("a\nq\n");
        assert!(out.contains("Nothing moved."));
        assert_eq!(state.moves(), 0);
    }

    #[test]
    fn test_accepted_move_rerenders() {
        let (state, out) = play("d\n");
        assert_eq!(state.moves(), 1);
        assert_eq!(out.matches("Score:").count(), 2);
    }

    #[test]
    fn test_bad_input_keeps_going() {
        let (state, out) = play("jump\n\nright\n");
        assert!(out.contains("Use w/a/s/d"));
        assert_eq!(state.moves(), 1);
    }

    #[test]
    fn test_quit_stops_reading() {
        let (state, _) = play("q\nd\n");
        assert_eq!(state.moves(), 0);
    }

    #[test]
    fn test_restart_renders_fresh_board() {
        let (state, out) = play("d\nr\n");
        assert_eq!(state.moves(), 0);
        assert_eq!(state.score(), 0);
        assert_eq!(out.matches("Score:").count(), 3);
    }
}
