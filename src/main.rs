use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use connect_four::config::AppConfig;
use connect_four::console::Console;
use connect_four::error::InputError;
use connect_four::ui::App;

/// Play Connect Four against another person at the same keyboard.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Use the full-screen terminal UI instead of the line-based console
    #[arg(long)]
    tui: bool,

    /// Log engine events to stderr
    #[arg(long, short)]
    verbose: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the flag when set.
    let level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if cli.tui {
        run_tui(&config).context("running terminal UI")
    } else {
        run_console(&config)
    }
}

fn run_console(config: &AppConfig) -> Result<()> {
    let mut session = config.new_session();
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), config.display.empty_marker);

    match console.play(&mut session) {
        Ok(status) => {
            tracing::debug!(?status, "game finished");
            Ok(())
        }
        Err(InputError::Closed) => {
            tracing::info!("input closed, leaving unfinished game");
            Ok(())
        }
        Err(err) => Err(err).context("reading column choice"),
    }
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.new_session());
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
