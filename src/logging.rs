use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;
use crate::error::HeartlinkError;

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Supported formats
/// are `json`, `pretty` and `compact`; anything else falls back to the
/// default formatter.
pub fn init(settings: &LoggingSettings) -> Result<(), HeartlinkError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level)
            .map_err(|e| HeartlinkError::Logging(format!("invalid log level '{}': {}", settings.level, e)))?,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true);

    let result = match settings.format.as_str() {
        "json" => subscriber.json().try_init(),
        "pretty" => subscriber.pretty().try_init(),
        "compact" => subscriber.compact().try_init(),
        _ => subscriber.try_init(),
    };

    result.map_err(|e| HeartlinkError::Logging(e.to_string()))
}
