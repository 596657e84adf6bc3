//! Interactive game loop: the human types moves, the engine answers.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use chess_core::{format_move, game_status, parse_move, Board, Color, Engine, GameStatus};

use crate::render::render_board;

/// What the human asked for at the prompt.
enum Prompt {
    Play,
    Quit,
}

/// Plays until checkmate, stalemate, `quit` or end of input.
///
/// `human` moves are read from `input`; the other side is played by `engine`.
/// Returns the status of the final position (`Ongoing` when the human left).
pub fn run_game<E, R, W>(
    board: &mut Board,
    engine: &mut E,
    human: Color,
    mut input: R,
    output: &mut W,
) -> Result<GameStatus>
where
    E: Engine + ?Sized,
    R: BufRead,
    W: Write,
{
    engine.new_game();
    loop {
        write!(output, "{}", render_board(board))?;

        let status = game_status(board);
        if status.is_over() {
            announce(board, status, output)?;
            return Ok(status);
        }

        if board.side_to_move == human {
            if let Prompt::Quit = human_turn(board, &mut input, output)? {
                writeln!(output, "Goodbye.")?;
                return Ok(GameStatus::Ongoing);
            }
        } else {
            let mv = engine
                .select_move(board)
                .context("engine found no move in a position with legal moves")?;
            board.apply_move(&mv);
            writeln!(output, "Engine plays {}", format_move(mv.from, mv.to))?;
            debug!(engine = engine.name(), mv = %mv, "engine move");
        }
    }
}

/// Prompts until the human enters a legal move (which is played) or leaves.
fn human_turn<R: BufRead, W: Write>(board: &mut Board, input: &mut R, output: &mut W) -> Result<Prompt> {
    let mut line = String::new();
    loop {
        write!(output, "Your move: ")?;
        output.flush()?;

        line.clear();
        let read = input.read_line(&mut line).context("failed to read move")?;
        if read == 0 {
            writeln!(output)?;
            return Ok(Prompt::Quit);
        }
        let text = line.trim();
        if text.eq_ignore_ascii_case("quit") {
            return Ok(Prompt::Quit);
        }

        let (from, to) = match parse_move(text) {
            Ok(squares) => squares,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };
        match board.play_move(from, to) {
            Ok(_) => return Ok(Prompt::Play),
            Err(err) => writeln!(output, "Illegal move: {err}")?,
        }
    }
}

fn announce<W: Write>(board: &Board, status: GameStatus, output: &mut W) -> Result<()> {
    match status {
        GameStatus::Checkmate => {
            let winner = match board.side_to_move.other() {
                Color::White => "White",
                Color::Black => "Black",
            };
            writeln!(output, "Checkmate! {winner} wins.")?;
        }
        GameStatus::Stalemate => writeln!(output, "Stalemate. The game is drawn.")?,
        GameStatus::Ongoing => {}
    }
    Ok(())
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
