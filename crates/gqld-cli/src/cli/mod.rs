use clap::Parser;
use gqld_config::ReportConfig;

pub mod global;

pub use global::{ColorMode, OutputFormat};

/// Top-level CLI parser for the `gqldiff` binary.
///
/// Each `--x/--no-x` pair overrides the corresponding `[report]` setting
/// from configuration; when neither is given the configured value is used.
#[derive(Debug, Parser)]
#[command(
    name = "gqldiff",
    version,
    about = "Compare two GraphQL schemas and report additions, deletions and changes"
)]
pub struct Cli {
    /// New schema: endpoint URL or introspection JSON file
    #[arg(value_name = "SCHEMA_NEW")]
    pub schema_new: String,

    /// Old schema: endpoint URL or introspection JSON file
    #[arg(value_name = "SCHEMA_OLD")]
    pub schema_old: String,

    /// Report keys only present in the new schema
    #[arg(long, overrides_with = "no_additions")]
    pub additions: bool,
    /// Do not report additions
    #[arg(long, overrides_with = "additions")]
    pub no_additions: bool,

    /// Report keys only present in the old schema
    #[arg(long, overrides_with = "no_deletions")]
    pub deletions: bool,
    /// Do not report deletions
    #[arg(long, overrides_with = "deletions")]
    pub no_deletions: bool,

    /// Report keys whose value changed
    #[arg(long, overrides_with = "no_changes")]
    pub changes: bool,
    /// Do not report changes
    #[arg(long, overrides_with = "changes")]
    pub no_changes: bool,

    /// Include 'minor' changes, eg: text
    #[arg(long, overrides_with = "no_minor")]
    pub minor: bool,
    /// Ignore minor changes
    #[arg(long, overrides_with = "minor")]
    pub no_minor: bool,

    /// Exit with an error if changes were detected
    #[arg(long, overrides_with = "no_fail")]
    pub fail: bool,
    /// Exit successfully even if changes were detected
    #[arg(long, overrides_with = "fail")]
    pub no_fail: bool,

    /// Output format: text, json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Colour output: auto, always, never
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// HTTP timeout in seconds for remote schemas
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line toggles on top of the configured report settings.
    #[must_use]
    pub const fn report(&self, configured: ReportConfig) -> ReportConfig {
        ReportConfig {
            additions: toggle(self.additions, self.no_additions, configured.additions),
            deletions: toggle(self.deletions, self.no_deletions, configured.deletions),
            changes: toggle(self.changes, self.no_changes, configured.changes),
            minor: toggle(self.minor, self.no_minor, configured.minor),
            fail: toggle(self.fail, self.no_fail, configured.fail),
        }
    }
}

const fn toggle(on: bool, off: bool, configured: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        configured
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, ColorMode, OutputFormat};
    use gqld_config::ReportConfig;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_sources_and_defaults() {
        let cli = Cli::try_parse_from(["gqldiff", "new.json", "https://api.example.com/graphql"])
            .expect("cli should parse");

        assert_eq!(cli.schema_new, "new.json");
        assert_eq!(cli.schema_old, "https://api.example.com/graphql");
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.color, ColorMode::Auto);
        assert_eq!(cli.report(ReportConfig::default()), ReportConfig::default());
    }

    #[test]
    fn toggles_override_configuration() {
        let cli = Cli::try_parse_from([
            "gqldiff",
            "a.json",
            "b.json",
            "--additions",
            "--no-deletions",
            "--minor",
            "--no-fail",
        ])
        .expect("cli should parse");

        let report = cli.report(ReportConfig::default());
        assert!(report.additions);
        assert!(!report.deletions);
        assert!(report.changes);
        assert!(report.minor);
        assert!(!report.fail);
    }

    #[test]
    fn last_toggle_wins() {
        let cli = Cli::try_parse_from(["gqldiff", "a.json", "b.json", "--no-changes", "--changes"])
            .expect("cli should parse");
        assert!(cli.report(ReportConfig::default()).changes);

        let cli = Cli::try_parse_from(["gqldiff", "a.json", "b.json", "--fail", "--no-fail"])
            .expect("cli should parse");
        assert!(!cli.report(ReportConfig::default()).fail);
    }

    #[test]
    fn unset_toggles_keep_configured_values() {
        let configured = ReportConfig {
            additions: true,
            deletions: false,
            changes: false,
            minor: true,
            fail: false,
        };
        let cli = Cli::try_parse_from(["gqldiff", "a.json", "b.json"]).expect("cli should parse");
        assert_eq!(cli.report(configured), configured);
    }

    #[test]
    fn missing_old_schema_is_rejected() {
        assert!(Cli::try_parse_from(["gqldiff", "a.json"]).is_err());
    }

    #[test]
    fn timeout_must_be_positive() {
        assert!(Cli::try_parse_from(["gqldiff", "a", "b", "--timeout", "0"]).is_err());

        let cli = Cli::try_parse_from(["gqldiff", "a", "b", "--timeout", "5"])
            .expect("cli should parse");
        assert_eq!(cli.timeout, Some(5));
    }

    #[test]
    fn format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["gqldiff", "a", "b", "--format", "xml"]).is_err());
    }
}
