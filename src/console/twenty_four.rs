//! Line-oriented frontend for twenty-four.

use std::io::{self, BufRead, Write};

use crate::core::GameRng;
use crate::games::twenty_four::{CheckOutcome, TwentyFourGame};

/// Run rounds over stdin/stdout until the player quits or input closes.
pub fn run(rng: &mut GameRng) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    writeln!(out, "Welcome to the 24 Points Game!")?;
    writeln!(
        out,
        "Make 24 using these four numbers and basic operations (+, -, *, /)"
    )?;
    writeln!(out, "Parentheses are allowed, e.g. (8 - 4) * 4 + 8")?;

    let mut game = TwentyFourGame::new(rng);
    print_numbers(&mut out, &game)?;

    loop {
        write!(out, "\nEnter your solution (or 'q' to quit): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            writeln!(out, "Thanks for playing!")?;
            return Ok(());
        }

        match game.check_solution(line) {
            Ok(CheckOutcome::Correct) => {
                writeln!(out, "Correct! The expression equals 24!")?;

                write!(out, "\nPlay again? (y/n): ")?;
                out.flush()?;
                let mut answer = String::new();
                if input.read_line(&mut answer)? == 0
                    || !answer.trim().eq_ignore_ascii_case("y")
                {
                    writeln!(out, "Thanks for playing!")?;
                    return Ok(());
                }

                game = TwentyFourGame::new(rng);
                print_numbers(&mut out, &game)?;
            }
            Ok(CheckOutcome::WrongValue(value)) => {
                writeln!(out, "Expression equals {value}, not 24")?;
            }
            Err(err) => writeln!(out, "{err}")?,
        }
    }
}

fn print_numbers(out: &mut impl Write, game: &TwentyFourGame) -> io::Result<()> {
    let numbers = game
        .numbers()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "\nYour numbers are: {numbers}")
}
