use std::time::Duration;

use clap::Parser;

use rust_minigames::console;
use rust_minigames::core::GameRng;
use rust_minigames::games::snake::{SnakeGame, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Parser, Debug)]
#[command(name = "snake", about = "Snake on the console")]
struct Args {
    /// Grid width
    #[arg(long, default_value_t = DEFAULT_WIDTH as u16, value_parser = clap::value_parser!(u16).range(2..=80))]
    width: u16,

    /// Grid height
    #[arg(long, default_value_t = DEFAULT_HEIGHT as u16, value_parser = clap::value_parser!(u16).range(2..=50))]
    height: u16,

    /// Milliseconds between ticks
    #[arg(long, default_value_t = 200)]
    tick_ms: u64,

    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let seed = rng.seed();

    let mut game = SnakeGame::new(args.width as usize, args.height as usize, rng);
    console::snake::run(&mut game, Duration::from_millis(args.tick_ms))?;

    println!("Game Over!");
    println!("Final Score: {} (seed {seed})", game.score());
    Ok(())
}
