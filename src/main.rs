#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use tictactoe::{init_logging, CliPlayer, Session};

/// Two-player Tic-Tac-Toe on the console. Enter moves as `a1`..`c3`.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Log level (error, warn, info, debug, trace); overrides TICTACTOE_LOG")]
    log_level: Option<LevelFilter>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let x = CliPlayer::stdin();
    let o = CliPlayer::stdin();
    let mut session = Session::new(x, o);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    session.run(&mut out)?;
    Ok(())
}
