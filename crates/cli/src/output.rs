//! Rendering of the bundler environment.

use crate::args::EnvFormat;
use std::collections::BTreeMap;

/// Renders `env` in the requested format, one variable per line.
pub fn render_env(env: &BTreeMap<String, String>, format: EnvFormat) -> serde_json::Result<String> {
    let rendered = match format {
        EnvFormat::Dotenv => env
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("\n"),
        EnvFormat::Shell => env
            .iter()
            .map(|(name, value)| format!("export {name}={}", shell_quote(value)))
            .collect::<Vec<_>>()
            .join("\n"),
        EnvFormat::Json => serde_json::to_string_pretty(env)?,
    };
    Ok(rendered)
}

/// Single-quotes `value` for POSIX shells.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
