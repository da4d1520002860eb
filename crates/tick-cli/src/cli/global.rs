use clap::ValueEnum;

/// How the task list is rendered by menu option 1.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Raw,
}

/// Process-wide flags, extracted from `Cli` for bootstrap and the menu.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub file: Option<String>,
    pub storage: Option<String>,
    pub order: Option<String>,
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
}
