use std::time::Duration;

use anyhow::Context;
use gqld_config::{GqlDiffConfig, ReportConfig};
use gqld_core::{MinorPolicy, SchemaDiff, SectionSelection, compute_diff, flatten};
use gqld_source::{SchemaResolver, SchemaSource};

use crate::cli::Cli;

/// Resolve both schemas and diff them according to the effective report settings.
pub async fn compare(
    cli: &Cli,
    config: &GqlDiffConfig,
    report: ReportConfig,
) -> anyhow::Result<SchemaDiff> {
    let timeout = Duration::from_secs(cli.timeout.unwrap_or(config.http.timeout_secs));
    let resolver = SchemaResolver::new(timeout, &config.http.user_agent)
        .context("failed to build HTTP client")?;

    let new_source = SchemaSource::parse(&cli.schema_new);
    let old_source = SchemaSource::parse(&cli.schema_old);

    let (new_schema, old_schema) = tokio::try_join!(
        async {
            resolver
                .resolve(&new_source, Some(config.auth.new_env.as_str()))
                .await
                .with_context(|| format!("invalid value for 'SCHEMA_NEW' ({new_source})"))
        },
        async {
            resolver
                .resolve(&old_source, Some(config.auth.old_env.as_str()))
                .await
                .with_context(|| format!("invalid value for 'SCHEMA_OLD' ({old_source})"))
        },
    )?;

    let flat_new = flatten(&new_schema).context("failed to flatten new schema")?;
    let flat_old = flatten(&old_schema).context("failed to flatten old schema")?;
    tracing::debug!(
        new_keys = flat_new.len(),
        old_keys = flat_old.len(),
        "flattened both schemas"
    );

    let selection = SectionSelection {
        additions: report.additions,
        deletions: report.deletions,
        changes: report.changes,
    };
    let filter = MinorPolicy::from_include(report.minor).filter();

    Ok(compute_diff(&flat_new, &flat_old, selection, filter))
}
