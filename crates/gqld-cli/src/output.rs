//! Diff presentation.
//!
//! The text report lists each requested section under an 80-column banner.
//! Every entry shows its key in the section colour, then each side's value
//! as indented JSON, one line per row. Rows that do not appear in the other
//! side's rendering are bold so the actual difference stands out.

use std::fmt::Write as _;

use gqld_core::{Marker, SchemaDiff, SchemaNode, Section};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::cli::OutputFormat;

const BANNER_WIDTH: usize = 80;

const GREEN: &str = "32";
const RED: &str = "31";
const YELLOW: &str = "33";
const WHITE: &str = "37";

/// Render a diff in the requested format.
pub fn render(diff: &SchemaDiff, format: OutputFormat, color: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => render_text(diff, color),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(diff)?)),
    }
}

fn render_text(diff: &SchemaDiff, color: bool) -> anyhow::Result<String> {
    let mut out = String::new();

    for (section, entries) in diff.sections() {
        let title = format!(" {} ", section.name().to_uppercase());
        writeln!(out, "{title:=^width$}", width = BANNER_WIDTH)?;
        writeln!(out)?;

        for (key, entry) in entries {
            let bold = entry.values().any(SchemaNode::is_object);
            let heading = format!("{} {key}", section.symbol());
            writeln!(out, "{}", paint(&heading, section_color(section), bold, color))?;

            let renderings = entry
                .iter()
                .map(|(marker, value)| Ok((*marker, json_lines(value)?)))
                .collect::<anyhow::Result<Vec<(Marker, Vec<String>)>>>()?;

            for (marker, lines) in &renderings {
                for line in lines {
                    let bold = renderings
                        .iter()
                        .any(|(_, other)| !other.contains(line));
                    let row = format!("{} {line}", marker.symbol());
                    writeln!(out, "{}", paint(&row, WHITE, bold, color))?;
                }
            }
            writeln!(out)?;
        }
        writeln!(out)?;
    }

    Ok(out)
}

const fn section_color(section: Section) -> &'static str {
    match section {
        Section::Additions => GREEN,
        Section::Changes => YELLOW,
        Section::Deletions => RED,
    }
}

/// Pretty JSON with sorted keys and a four-space indent, split into lines.
fn json_lines(value: &SchemaNode) -> anyhow::Result<Vec<String>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    let text = String::from_utf8(buf)?;
    Ok(text.lines().map(str::to_string).collect())
}

fn paint(text: &str, code: &str, bold: bool, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    if bold {
        format!("\u{1b}[1;{code}m{text}\u{1b}[0m")
    } else {
        format!("\u{1b}[{code}m{text}\u{1b}[0m")
    }
}
