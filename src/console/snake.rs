//! Raw-mode terminal frontend for snake.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};

use crate::games::snake::{Direction, SnakeGame};

/// Drive a game at a fixed tick cadence until it ends or the player quits.
///
/// Keys are polled between ticks: WASD or the arrow keys steer, `q` or
/// Escape quits. The terminal is restored before returning, including on
/// error.
pub fn run(game: &mut SnakeGame, tick: Duration) -> io::Result<()> {
    let mut out = io::stdout();

    terminal::enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, cursor::Hide)?;

    let result = play(game, tick, &mut out);

    execute!(out, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    result
}

fn play(game: &mut SnakeGame, tick: Duration, out: &mut impl Write) -> io::Result<()> {
    while !game.is_over() {
        draw(game, out)?;

        // Drain key events until the next tick is due.
        let deadline = Instant::now() + tick;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                match key.code {
                    KeyCode::Char('w') | KeyCode::Up => game.set_direction(Direction::Up),
                    KeyCode::Char('s') | KeyCode::Down => game.set_direction(Direction::Down),
                    KeyCode::Char('a') | KeyCode::Left => game.set_direction(Direction::Left),
                    KeyCode::Char('d') | KeyCode::Right => game.set_direction(Direction::Right),
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    _ => {}
                }
            }
        }

        game.tick();
    }

    // Show the final position briefly before the screen is restored.
    draw(game, out)?;
    std::thread::sleep(Duration::from_millis(600));
    Ok(())
}

fn draw(game: &SnakeGame, out: &mut impl Write) -> io::Result<()> {
    execute!(
        out,
        cursor::MoveTo(0, 0),
        terminal::Clear(terminal::ClearType::All)
    )?;

    // Raw mode needs explicit carriage returns.
    for line in game.render().lines() {
        write!(out, "{line}\r\n")?;
    }
    write!(out, "Score: {}\r\n", game.score())?;
    write!(out, "WASD or arrow keys to steer, q to quit\r\n")?;
    out.flush()
}
