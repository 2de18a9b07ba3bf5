use std::io::{BufRead, Write};

use tracing::{debug, info};
use yukon::{visualize_board, GameSession};

use crate::recording::Recorder;

/// How the board is printed after every command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoardFormat {
    #[default]
    Table,
    /// One JSON snapshot per line.
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplExit {
    Won,
    Quit,
}

/// Reads commands line by line until the game is won, the player quits or
/// the input ends.
///
/// Returns an error only on IO failure, not when a command is rejected.
pub fn run_repl<R: BufRead, W: Write>(
    session: &mut GameSession,
    mut input: R,
    output: &mut W,
    recorder: &mut Option<Recorder>,
    format: BoardFormat,
) -> anyhow::Result<ReplExit> {
    print_board(session, output, format)?;
    let mut buf = String::new();
    while !session.is_won() {
        write!(output, "Enter command:")?;
        output.flush()?;

        buf.clear(); // because read_line() appends to the buffer
        let num_bytes_read = input.read_line(&mut buf)?;
        if num_bytes_read == 0 {
            info!("End of input");
            writeln!(output)?;
            return Ok(ReplExit::Quit);
        }
        let command = buf.trim();
        if command.is_empty() {
            continue;
        }
        if command.eq_ignore_ascii_case("q") || command.eq_ignore_ascii_case("quit") {
            return Ok(ReplExit::Quit);
        }

        let result = session.submit(command);
        if let Some(recorder) = recorder {
            recorder.store_command(command, &result);
        }
        match &result {
            Ok(outcome) => {
                debug!(command, card = %outcome.card, num_cards = outcome.num_cards, "Applied");
                if let Some(card) = outcome.turned_face_up {
                    writeln!(output, "{} is turned face up", card)?;
                }
            }
            Err(err) => {
                let mut err_dyn = err as &dyn std::error::Error;
                writeln!(output, "{}", err_dyn)?;
                while let Some(src_err) = err_dyn.source() {
                    writeln!(output, "  {}", src_err)?;
                    err_dyn = src_err;
                }
            }
        }
        print_board(session, output, format)?;
    }

    writeln!(output, "\nYou have won.")?;
    Ok(ReplExit::Won)
}

fn print_board<W: Write>(session: &GameSession, output: &mut W, format: BoardFormat) -> anyhow::Result<()> {
    let snapshot = session.snapshot();
    match format {
        BoardFormat::Table => write!(output, "{}", visualize_board(&snapshot))?,
        BoardFormat::Json => {
            serde_json::to_writer(&mut *output, &snapshot)?;
            writeln!(output)?;
        }
    }
    Ok(())
}
