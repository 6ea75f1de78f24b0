//! Line-oriented frontend for gomoku.

use std::io::{self, BufRead, Write};

use crate::games::gomoku::{GameStatus, GomokuGame, MoveOutcome};

/// Drive a game over stdin/stdout until it ends or input closes.
pub fn run(game: &mut GomokuGame) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    writeln!(out, "Welcome to Gomoku!")?;
    writeln!(out, "Players take turns placing X and O on the board.")?;
    writeln!(
        out,
        "First to get 5 in a row (horizontally, vertically, or diagonally) wins!"
    )?;

    while !game.is_over() {
        writeln!(out, "\n{}", game.board().render())?;
        writeln!(out, "Player {}'s turn", game.to_move())?;

        let Some(row) = prompt_number(&mut input, &mut out, "Enter row number: ")? else {
            return Ok(());
        };
        let Some(col) = prompt_number(&mut input, &mut out, "Enter column number: ")? else {
            return Ok(());
        };

        match game.submit_move(row, col) {
            Ok(MoveOutcome::Moved) => {}
            Ok(MoveOutcome::Won(stone)) => writeln!(out, "Player {stone} wins!")?,
            Ok(MoveOutcome::Draw) => writeln!(out, "The board is full - it's a draw!")?,
            Err(err) => writeln!(out, "{err}")?,
        }
    }

    writeln!(out, "\n{}", game.board().render())?;
    match game.status() {
        GameStatus::Won(stone) => writeln!(out, "Congratulations! Player {stone} wins!")?,
        GameStatus::Draw => writeln!(out, "Nobody wins this one.")?,
        GameStatus::InProgress => {}
    }

    Ok(())
}

/// Prompt until a line parses as a number. `None` on end of input.
fn prompt_number(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<usize>> {
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse() {
            Ok(number) => return Ok(Some(number)),
            Err(_) => writeln!(out, "Please enter a valid number")?,
        }
    }
}
