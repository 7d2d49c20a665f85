//! Tracing subscriber setup.

use tracing_subscriber::{
    filter::ParseError, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::config::{LogFormat, DEFAULT_LOG_FILTER, STARTUP_LOG_TARGET};

/// Pick the log filter with priority: CLI > env > default.
pub fn resolve_filter(cli: Option<String>, env: Option<String>) -> String {
    cli.or(env)
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Build the filter from `filter`, with the startup target pinned at info.
pub fn build_filter(filter: &str) -> Result<EnvFilter, ParseError> {
    let startup = format!("{STARTUP_LOG_TARGET}=info").parse()?;
    Ok(EnvFilter::new(filter).add_directive(startup))
}

/// Install the global subscriber. Events go to standard output.
pub fn init(filter: &str, format: LogFormat) -> Result<(), ParseError> {
    let registry = tracing_subscriber::registry().with(build_filter(filter)?);

    match format {
        LogFormat::Text => registry.with(fmt::layer()).init(),
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn enabled_under(filter: &str, target_is_startup: bool) -> bool {
        let subscriber = tracing_subscriber::registry().with(build_filter(filter).unwrap());
        tracing::subscriber::with_default(subscriber, || {
            if target_is_startup {
                tracing::enabled!(target: "backend_ping::startup", Level::INFO)
            } else {
                tracing::enabled!(target: "backend_ping::http", Level::INFO)
            }
        })
    }

    #[test]
    fn cli_wins_over_env() {
        let filter = resolve_filter(Some("debug".into()), Some("warn".into()));
        assert_eq!(filter, "debug");
    }

    #[test]
    fn env_used_without_cli() {
        assert_eq!(resolve_filter(None, Some("warn".into())), "warn");
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(resolve_filter(None, None), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn startup_target_survives_warn_filter() {
        assert!(enabled_under("warn", true));
        assert!(!enabled_under("warn", false));
    }

    #[test]
    fn startup_target_survives_off() {
        assert!(enabled_under("off", true));
    }

    #[test]
    fn default_filter_enables_crate_info() {
        assert!(enabled_under(DEFAULT_LOG_FILTER, true));
        assert!(enabled_under(DEFAULT_LOG_FILTER, false));
    }
}
