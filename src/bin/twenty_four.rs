use clap::Parser;

use rust_minigames::console;
use rust_minigames::core::GameRng;

#[derive(Parser, Debug)]
#[command(name = "twenty_four", about = "The 24 points game on the console")]
struct Args {
    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    console::twenty_four::run(&mut rng)
}
