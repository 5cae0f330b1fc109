use std::io;

use clap::ValueEnum;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Level used when neither `-v` nor a filter directive says otherwise.
pub const DEFAULT_LEVEL: &str = "warn";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Pick the filter: `-v` flags first, then explicit directives, then
/// `RUST_LOG`, then [`DEFAULT_LEVEL`].
pub fn filter(verbosity: u8, directives: Option<&str>) -> EnvFilter {
    let level = match verbosity {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    };
    if let Some(level) = level {
        return EnvFilter::new(level);
    }
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the global subscriber. Events go to stderr so stdout carries only
/// command output.
pub fn init(
    verbosity: u8,
    directives: Option<&str>,
    format: LogFormat,
) -> anyhow::Result<()> {
    let json = format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(filter(verbosity, directives))
        .with(json.then(|| fmt::layer().json().with_writer(io::stderr)))
        .with((!json).then(|| fmt::layer().with_writer(io::stderr)))
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_overrides_directives() {
        assert_eq!(filter(2, Some("error")).to_string(), "debug");
        assert_eq!(filter(5, None).to_string(), "trace");
    }

    #[test]
    fn directives_are_used_without_verbosity() {
        assert_eq!(
            filter(0, Some("shamir_core=trace")).to_string(),
            "shamir_core=trace"
        );
    }
}
