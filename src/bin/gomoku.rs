use clap::Parser;

use rust_minigames::console;
use rust_minigames::games::gomoku::GomokuGame;

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Five-in-a-row on the console")]
struct Args {
    /// Board side length
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u16).range(5..=99))]
    size: u16,
}

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut game = GomokuGame::with_size(args.size as usize);
    console::gomoku::run(&mut game)
}
