use std::io;

use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod menu;
mod output;
mod ui;

fn main() {
    if let Err(error) = run() {
        eprintln!("tick error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let config = bootstrap::load_config(&flags)?;
    let service = bootstrap::open_service(&config)?;
    let prefs = ui::UiPrefs::detect(&flags);

    let console = menu::Console::new(io::stdin().lock(), io::stdout().lock());
    menu::Session::new(service, console, flags.format, prefs.table_options()).run()
}

/// Logs go to stderr so they never interleave with the menu.
fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TICK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
