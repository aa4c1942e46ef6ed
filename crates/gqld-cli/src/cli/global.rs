use clap::ValueEnum;

/// How the diff is printed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Sectioned, optionally coloured report.
    #[default]
    Text,
    /// The diff as pretty-printed JSON.
    Json,
}

/// When to emit ANSI colour codes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}
