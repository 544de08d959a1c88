use std::io;
use std::io::Write;
use std::time::Instant;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::terminal;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use bounded_life::app::App;
use bounded_life::config::LifeConfig;
use bounded_life::config::USAGE;
use bounded_life::events::convert_event;

/// Puts the terminal in raw mode on the alternate screen, and restores it when dropped.
///
/// Dropping also happens while unwinding, so a panic inside the loop leaves a usable terminal.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(stdout: &mut impl Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        // from here on, an early return drops the guard and undoes raw mode
        let guard = TerminalGuard;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide
        )?;

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen) {
            warn!("Failed to leave the alternate screen: {e}");
        }

        if let Err(e) = terminal::disable_raw_mode() {
            warn!("Failed to disable raw mode: {e}");
        }
    }
}

fn run(app: &mut App, stdout: &mut impl Write) -> anyhow::Result<()> {
    let frametime = app.frametime();

    loop {
        let t = Instant::now();

        app.draw(stdout).context("Failed to draw frame")?;

        // Handle input for as long as the tick lasts
        while let Some(left) = frametime.checked_sub(t.elapsed()) {
            if !event::poll(left)? {
                break;
            }

            if let Some(event) = convert_event(event::read()?) {
                if !app.handle(event) {
                    return Ok(());
                }

                app.draw(stdout).context("Failed to draw frame")?;
            }
        }

        app.tick();
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match LifeConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let mut stdout = io::stdout();
    let (cols, rows) = terminal::size().context("Failed to read terminal size")?;
    let mut app = App::new(config, cols, rows);

    let _guard = TerminalGuard::enter(&mut stdout).context("Failed to set up the terminal")?;

    run(&mut app, &mut stdout)
}
