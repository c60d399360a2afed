use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four_oracle::config::AppConfig;
use connect_four_oracle::oracle::{HttpOracle, MoveOracle, RandomOracle};
use connect_four_oracle::ui::{App, TerminalRenderer};

#[derive(Debug, Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a move oracle")]
struct Args {
    /// Path to the TOML config file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Oracle endpoint, overriding the config file
    #[arg(long)]
    oracle_url: Option<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = AppConfig::load_or_default(&args.config)?;
    if let Some(url) = args.oracle_url {
        config.oracle.url = Some(url);
        config.validate()?;
    }

    let oracle: Arc<dyn MoveOracle> = match &config.oracle.url {
        Some(url) => Arc::new(HttpOracle::new(url.clone())),
        None => Arc::new(RandomOracle::new()),
    };
    tracing::info!(oracle = oracle.name(), "starting");

    let runtime = tokio::runtime::Runtime::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    let mut renderer = TerminalRenderer::new(terminal);

    let mut app = App::new(config.session_config(), oracle, runtime.handle().clone());
    let res = app.run(&mut renderer);

    // Restore terminal — always runs, even on error
    let mut terminal = renderer.into_terminal();
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res?;
    Ok(())
}
