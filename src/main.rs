#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use reversi::{init_logging, run_session, GameConfig, GameEngine, Glyphs, SessionEnd};

/// Two-player Reversi in the terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Draw pieces as X (Black) and O (White) instead of circles")]
    ascii: bool,
    #[arg(long, help = "Mark legal moves for the side to move with *")]
    hints: bool,
}

#[cfg(feature = "std")]
impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            glyphs: if self.ascii { Glyphs::ASCII } else { Glyphs::UNICODE },
            show_hints: self.hints,
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = cli.config();
    let mut engine = GameEngine::new();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    match run_session(&mut engine, &config, stdin.lock(), &mut stdout)? {
        SessionEnd::Finished(_) => {}
        SessionEnd::Quit | SessionEnd::InputClosed => println!("Game abandoned."),
    }
    Ok(())
}
