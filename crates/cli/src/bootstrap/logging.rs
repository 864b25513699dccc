use homepage_editor_domain::config::LoggingConfig;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to the
/// whole binary with HTTP request spans kept at `info`.
pub fn init_logging(logging: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=info", logging.level)));

    let builder = fmt().with_env_filter(env_filter).with_target(false);

    let _ = if logging.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}
