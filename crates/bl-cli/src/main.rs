use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::{Context, Result};
use bl_cli::commands::View;
use bl_cli::{Cli, Config, Session};
use bl_core::{SystemClock, Tracker};
use clap::Parser;
use tokio::io::BufReader;
use tokio::runtime::Handle;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so they never interleave with session output
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref())
        .context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let view = View {
        format: config
            .timestamp_format()
            .context("invalid timestamp format in configuration")?,
        history_limit: config.history_limit,
    };
    let tracker = Tracker::with_clock(
        Handle::current(),
        Arc::new(SystemClock),
        config.tick_interval(),
    );

    let interactive = std::io::stdin().is_terminal();
    let mut session = Session::new(tracker, view).with_prompt(interactive);
    if interactive {
        println!("Baby routine log. Type `help` for commands, `quit` to leave.");
    }

    let input = BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();
    session.run(input, &mut output).await
}
