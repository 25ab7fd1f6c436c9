use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: Level,
    pub include_targets: bool,
    /// Overrides `level` when set; `RUST_LOG` syntax.
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            include_targets: false,
            filter: None,
        }
    }
}

impl LoggingConfig {
    /// `-q` wins over any number of `-v`.
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        let level = match (quiet, verbose) {
            (true, _) => Level::ERROR,
            (false, 0) => Level::WARN,
            (false, 1) => Level::INFO,
            (false, 2) => Level::DEBUG,
            (false, _) => Level::TRACE,
        };
        Self {
            level,
            include_targets: verbose > 1,
            filter: std::env::var("RUST_LOG").ok().filter(|f| !f.is_empty()),
        }
    }

    fn env_filter(&self) -> anyhow::Result<EnvFilter> {
        Ok(match &self.filter {
            Some(filter) => EnvFilter::try_new(filter)?,
            None => EnvFilter::new(format!("gwr={}", self.level.as_str().to_lowercase())),
        })
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for the report and JSON output.
pub fn setup_logging(config: LoggingConfig) -> anyhow::Result<()> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.include_targets)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(config.env_filter()?)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(LoggingConfig::from_verbosity(0, false).level, Level::WARN);
        assert_eq!(LoggingConfig::from_verbosity(1, false).level, Level::INFO);
        assert_eq!(LoggingConfig::from_verbosity(2, false).level, Level::DEBUG);
        assert_eq!(LoggingConfig::from_verbosity(3, true).level, Level::ERROR);
    }

    #[test]
    fn explicit_filter_is_validated() {
        let config = LoggingConfig {
            filter: Some("gwr=debug".to_string()),
            ..Default::default()
        };
        assert!(config.env_filter().is_ok());
    }
}
