use std::panic;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;

use serpent::config::{
    GridSize, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH, POLL_INTERVAL_MS, STATUS_LINES,
};
use serpent::error::Error;
use serpent::game::{tick_interval_for_score, GameState};
use serpent::input::{self, Command};
use serpent::renderer;
use serpent::terminal_runtime::{restore_terminal, TerminalSession};

#[derive(Debug, Parser)]
#[command(version, about = "Classic snake in the terminal")]
struct Cli {
    /// Seed for food placement, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    install_panic_hook();

    match run(&cli) {
        Ok(()) => {
            println!("Thanks for playing!");
            ExitCode::SUCCESS
        }
        Err(error @ Error::TerminalTooSmall { .. }) => {
            // Graceful rejection of an unusable terminal, not a failure.
            println!("{error}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let bounds = grid_bounds()?;

    let mut session = TerminalSession::enter()?;
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(bounds, seed),
        None => GameState::new(bounds),
    };
    let mut last_tick = Instant::now();

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state.view()))?;

        // At most one command per iteration; Quit never reaches the engine.
        if let Some(command) = input::poll_command()? {
            if command == Command::Quit {
                break;
            }
            state.handle_command(command);
        }

        if last_tick.elapsed() >= tick_interval_for_score(state.score) {
            state.tick();
            last_tick = Instant::now();
        }

        thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
    }

    Ok(())
}

/// Derives the fixed grid bounds from the terminal size, leaving room for
/// the status lines. Fails before raw mode when the terminal is too small.
fn grid_bounds() -> Result<GridSize, Error> {
    let (width, height) = crossterm::terminal::size()?;
    if width < MIN_TERMINAL_WIDTH || height < MIN_TERMINAL_HEIGHT {
        return Err(Error::TerminalTooSmall {
            width,
            height,
            min_width: MIN_TERMINAL_WIDTH,
            min_height: MIN_TERMINAL_HEIGHT,
        });
    }

    Ok(GridSize {
        width,
        height: height - STATUS_LINES,
    })
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}
