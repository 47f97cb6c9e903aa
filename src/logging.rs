//! Log setup.
//!
//! While the TUI owns the terminal, logs go to a file. Command-line modes
//! log to stderr.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides every other log filter.
pub const LOG_ENV: &str = "COURSEBOOK_LOG";

/// Where log output should go.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

/// Build the filter: `COURSEBOOK_LOG`, then the CLI override, then config.
pub fn filter(cli_level: Option<&str>, config_level: &str) -> EnvFilter {
    let env = std::env::var(LOG_ENV).ok();
    filter_from(env.as_deref(), cli_level, config_level)
}

/// The first directive that parses wins; `info` if none does.
fn filter_from(env: Option<&str>, cli_level: Option<&str>, config_level: &str) -> EnvFilter {
    [env, cli_level, Some(config_level)]
        .into_iter()
        .flatten()
        .filter(|directive| !directive.trim().is_empty())
        .find_map(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Install the global subscriber.
pub fn init(filter: EnvFilter, target: LogTarget<'_>) -> std::io::Result<()> {
    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_level_overrides_config() {
        assert_eq!(filter_from(None, Some("debug"), "info").to_string(), "debug");
        assert_eq!(filter_from(None, None, "warn").to_string(), "warn");
    }

    #[test]
    fn test_env_overrides_cli_and_config() {
        let filter = filter_from(Some("coursebook=trace"), Some("debug"), "info");
        assert_eq!(filter.to_string(), "coursebook=trace");
        // Empty variable counts as unset
        assert_eq!(filter_from(Some(""), None, "warn").to_string(), "warn");
    }

    #[test]
    fn test_invalid_directive_falls_through() {
        assert_eq!(filter_from(Some("coursebook=loud"), Some("debug"), "info").to_string(), "debug");
        assert_eq!(filter_from(None, Some("coursebook=loud"), "warn").to_string(), "warn");
        assert_eq!(filter_from(None, Some("coursebook=loud"), "bogus=x").to_string(), "info");
    }
}
