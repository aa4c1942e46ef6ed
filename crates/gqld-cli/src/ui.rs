use std::io::IsTerminal;

use crate::cli::{ColorMode, OutputFormat};

/// Decide whether the report should carry ANSI colour codes.
pub fn color_enabled(mode: ColorMode, format: OutputFormat) -> bool {
    if format == OutputFormat::Json {
        return false;
    }
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
    }
}
