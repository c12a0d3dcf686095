use crate::errors::{AppError, AppResult};
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static LOGGER_INIT: OnceLock<()> = OnceLock::new();

/// Directives used when neither `RUST_LOG` nor the config level parse.
const FALLBACK_DIRECTIVES: &str = "warn";

/// Install the stderr diagnostics subscriber once per process.
///
/// `RUST_LOG` wins over `level` (the `log_level` config key); `verbose`
/// raises this crate to `debug`.
pub fn init_logging(level: &str, verbose: bool) -> AppResult<()> {
    if LOGGER_INIT.get().is_some() {
        return Ok(());
    }

    let directives = if verbose {
        format!("{level},rtimeclock=debug")
    } else {
        level.to_string()
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&directives))
        .or_else(|_| EnvFilter::try_new(FALLBACK_DIRECTIVES))
        .map_err(|err| AppError::Config(format!("invalid log level '{level}': {err}")))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .without_time(),
        )
        .try_init()
        .map_err(|err| AppError::Other(format!("logger already installed: {err}")))?;

    let _ = LOGGER_INIT.set(());
    Ok(())
}
