use clap::Parser;

pub mod global;

pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `tick` binary.
#[derive(Debug, Parser)]
#[command(name = "tick", version, about = "Ticklist - a small interactive to-do list")]
pub struct Cli {
    /// Task file (overrides storage.path)
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,

    /// Task file format: auto, text, json
    #[arg(long, value_name = "FORMAT")]
    pub storage: Option<String>,

    /// Display order: priority, pending-first
    #[arg(long, value_name = "ORDER")]
    pub order: Option<String>,

    /// List rendering: table, json, raw
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            file: self.file.clone(),
            storage: self.storage.clone(),
            order: self.order.clone(),
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
