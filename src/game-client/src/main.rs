use clap::Parser;
use common::utility::shutdown_signal;
use game_client::{
    config::GameConfig,
    error::Result,
    layout::Layout,
    runner::GameLoop,
    terminal::{TerminalGuard, TerminalInput, TerminalSink},
};
use agent::MatchSession;
use tracing::{info, Level};

#[derive(Debug, Parser)]
#[command(name = "rps", about = "Rock, paper & scissors against an opponent that reads your last round")]
struct Args {
    /// Percent chance the opponent ignores history and plays a random hand
    #[arg(long, default_value_t = 5)]
    randomness: u32,

    /// Loop ticks per second
    #[arg(long, default_value_t = 10)]
    fps: u32,

    /// Seed the opponent's random draws
    #[arg(long)]
    seed: Option<u64>,

    /// Log at debug level (logs go to stderr)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let config = GameConfig::new(args.randomness, args.fps, args.seed)?;
    let mut session = MatchSession::new(config.randomness, config.random_source());

    let summary = {
        let _terminal = TerminalGuard::enter()?;
        let (width, height) = TerminalGuard::size()?;
        let layout = Layout::for_surface(width, height)?;
        let mut game = GameLoop::new(
            TerminalInput::new(),
            TerminalSink::new(std::io::stdout()),
            layout,
            config.tick(),
        );
        game.run(&mut session, shutdown_signal()).await?
    };
    info!(?summary, "Exited game loop");

    let stats = session.stats();
    println!(
        "Wins: {}  Ties: {}  Losses: {}",
        stats.wins, stats.ties, stats.losses
    );
    Ok(())
}
