use crate::bail_invalid;
use crate::config::LoggingConfig;
use crate::error::{GraphError, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable consulted after `RUST_LOG`
pub const LOG_ENV: &str = "PATHGRAPH_LOG";

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", path_len = path.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Turn a bare level or a filter directive into a filter string.
/// Bare levels are scoped to this crate.
pub fn filter_directive(level: &str) -> Result<String> {
    let level = level.trim();
    if level.is_empty() {
        bail_invalid!("log level", "<empty>");
    }

    let directive = if level.contains('=') {
        level.to_string()
    } else {
        format!("pathgraph={}", level)
    };

    EnvFilter::try_new(&directive).map_err(|e| GraphError::invalid_value("log level", e))?;
    Ok(directive)
}

/// Initialize structured logging for the embedding process
pub fn init_tracing(verbose: bool, log_level: Option<&str>, log_json: bool) -> Result<()> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => filter_directive(level)?,
        (true, None) => "pathgraph=debug".to_string(),
        (false, None) => "pathgraph=warn".to_string(),
    };

    init_with_directive(&level, log_json)
}

/// Initialize structured logging from the `[logging]` config section
pub fn init_from_config(config: &LoggingConfig) -> Result<()> {
    init_tracing(config.verbose, config.level.as_deref(), config.json)
}

fn init_with_directive(directive: &str, log_json: bool) -> Result<()> {
    // RUST_LOG wins, then PATHGRAPH_LOG, then the configured directive
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(directive));

    let registry = tracing_subscriber::registry().with(filter);

    let installed = if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()
    };

    installed.map_err(|e| GraphError::failed_operation("install tracing subscriber", e))
}
